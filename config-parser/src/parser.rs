use {
    crate::error::Error,
    config::{Config, Environment, File},
    std::path::PathBuf,
};

pub struct ConfigParser {}

impl ConfigParser {
    /// Load a TOML file, then let environment variables override its values.
    ///
    /// Nested keys are joined with `__`: `DISPLAY__DECIMALS=6` overrides
    /// `decimals` under the `[display]` table.
    pub fn parse<D>(path: PathBuf) -> Result<D, Error>
    where
        D: serde::de::DeserializeOwned,
    {
        let env_override = Environment::default().separator("__");

        let config = Config::builder()
            .add_source(File::from(path))
            .add_source(env_override)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::fs};

    #[derive(Debug, serde::Deserialize)]
    struct TestSettings {
        log_level: String,
        parser_test: ParserTest,
    }

    #[derive(Debug, serde::Deserialize)]
    struct ParserTest {
        display_decimals: u32,
        symbol: String,
    }

    #[test]
    fn test_parse_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");

        fs::write(
            &path,
            r#"
log_level = "info"

[parser_test]
display_decimals = 18
symbol           = "TKN"
"#,
        )
        .unwrap();

        std::env::set_var("PARSER_TEST__SYMBOL", "ABC");

        let config: TestSettings = ConfigParser::parse(path).expect("Failed to parse file");

        assert_eq!(config.log_level, "info");
        assert_eq!(config.parser_test.display_decimals, 18);
        assert_eq!(config.parser_test.symbol, "ABC");
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();

        assert!(ConfigParser::parse::<TestSettings>(dir.path().join("nope.toml")).is_err());
    }
}
