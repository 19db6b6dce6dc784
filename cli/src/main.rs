mod logger;
mod terminal;

use anyhow::{Context, Result};
use log::warn;
use std::io;
use std::path::PathBuf;
use terminal::Terminal;
use txtview_core::host::FsStorage;
use txtview_core::{AppConfig, Session};

/// Directory holding config.toml. Defaults to the working directory.
const CONFIG_DIR_ENV: &str = "TXTVIEW_CONFIG_DIR";

fn main() -> Result<()> {
    let config_dir = std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let config_path = AppConfig::path(&config_dir);

    let loaded = AppConfig::load(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    let problems = loaded.validate();
    let config = loaded.with_defaults_for_invalid();

    logger::init(config.general.log_level).context("failed to install logger")?;
    for problem in problems {
        warn!("{}: {problem}, using default", config_path.display());
    }

    let mut terminal = Terminal::new(
        io::stdin().lock(),
        io::stdout().lock(),
        config.shortcuts.clone(),
    );
    let mut session = Session::new(FsStorage, &config);
    session.run(&mut terminal);

    Ok(())
}
