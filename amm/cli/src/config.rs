use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    /// Fractional digits shown when summarizing amounts.
    pub display_decimals: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            display_decimals: 6,
        }
    }
}

// ----------------------------------- tests -----------------------------------
