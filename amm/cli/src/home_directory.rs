use {
    anyhow::anyhow,
    std::path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".amm";

/// Where the CLI keeps its config file and the persisted state.
pub struct HomeDirectory {
    home: PathBuf,
}

impl HomeDirectory {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Use the given directory, or `~/.amm` if none is given.
    pub fn new_or_default(home: Option<PathBuf>) -> anyhow::Result<Self> {
        if let Some(home) = home {
            return Ok(Self::new(home));
        }

        let user_home = home::home_dir().ok_or_else(|| anyhow!("failed to find home directory"))?;

        Ok(Self::new(user_home.join(DEFAULT_DIR_NAME)))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn data_dir(&self) -> PathBuf {
        self.home.join("data")
    }

    /// Borsh snapshot of the committed state.
    pub fn state_file(&self) -> PathBuf {
        self.data_dir().join("state.borsh")
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("app.toml")
    }
}
