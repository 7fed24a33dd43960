use {
    crate::home_directory::HomeDirectory,
    amm_app::App,
    anyhow::{bail, Context},
    std::fs,
};

/// Load the persisted state. Fails if `amm init` hasn't been run.
pub fn load_app(dir: &HomeDirectory) -> anyhow::Result<App> {
    let path = dir.state_file();

    if !path.exists() {
        bail!(
            "no state found at {path:?}; run `amm init` first (home: {:?})",
            dir.home()
        );
    }

    let bytes = fs::read(&path).with_context(|| format!("failed to read {path:?}"))?;

    Ok(App::from_snapshot(&bytes)?)
}

/// Persist the committed state, replacing whatever was there.
pub fn save_app(dir: &HomeDirectory, app: &App) -> anyhow::Result<()> {
    let path = dir.state_file();
    let bytes = app.snapshot()?;

    fs::create_dir_all(dir.data_dir())?;

    // Write to a sibling file first, so an interrupted write never leaves a
    // truncated snapshot behind.
    let tmp = path.with_extension("borsh.tmp");
    fs::write(&tmp, bytes).with_context(|| format!("failed to write {tmp:?}"))?;
    fs::rename(&tmp, &path)?;

    tracing::debug!(path = ?path, "Saved state");

    Ok(())
}

// ----------------------------------- tests -----------------------------------
