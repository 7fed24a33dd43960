use {
    crate::{home_directory::HomeDirectory, state::save_app},
    amm_app::App,
    amm_types::{GenesisState, JsonDeExt},
    anyhow::{bail, Context},
    clap::Parser,
    colored::Colorize,
    std::{fs, path::PathBuf},
};

#[derive(Parser)]
pub struct InitCmd {
    /// Path to the genesis file, in JSON
    #[arg(long)]
    genesis: PathBuf,

    /// Overwrite existing state
    #[arg(long, default_value_t = false)]
    force: bool,
}

impl InitCmd {
    pub fn run(self, dir: HomeDirectory) -> anyhow::Result<()> {
        let state_file = dir.state_file();

        if state_file.exists() && !self.force {
            bail!("state already exists at {state_file:?}; pass --force to overwrite it");
        }

        let genesis: GenesisState = fs::read(&self.genesis)
            .with_context(|| format!("failed to read genesis file {:?}", self.genesis))?
            .deserialize_json()?;

        let mut app = App::new();
        app.do_init(genesis)?;

        save_app(&dir, &app)?;

        println!(
            "{} {state_file:?}",
            "Initialized state at".green().bold()
        );

        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, crate::state::load_app};

    const GENESIS: &str = r#"{
        "config": {
            "pool": "0x0000000000000000000000000000000000000001",
            "router": "0x0000000000000000000000000000000000000002",
            "token": { "name": "Token", "symbol": "TKN" }
        },
        "balances": {
            "0x000000000000000000000000000000000000000a": {
                "native": "1000000000000000000000",
                "token": "1000000000000000000000"
            }
        }
    }"#;

    fn init(dir: &tempfile::TempDir, force: bool) -> anyhow::Result<()> {
        let genesis = dir.path().join("genesis.json");
        fs::write(&genesis, GENESIS).unwrap();

        InitCmd { genesis, force }.run(HomeDirectory::new(dir.path().to_path_buf()))
    }

    #[test]
    fn init_writes_state() {
        let dir = tempfile::tempdir().unwrap();

        init(&dir, false).unwrap();

        let app = load_app(&HomeDirectory::new(dir.path().to_path_buf())).unwrap();
        assert!(app.is_initialized());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();

        init(&dir, false).unwrap();

        let err = init(&dir, false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        init(&dir, true).unwrap();
    }
}
