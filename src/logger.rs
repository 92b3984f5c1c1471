use anyhow::{Context, Result};
use chrono::Local;

use crate::config::LoggingConfig;

/// Install the global `log` dispatcher described by `config`.
///
/// Lines go to stdout and, when `config.file` is set, are appended to that
/// file as well. Disabled logging installs nothing.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let mut dispatch = build_dispatch(config)?.chain(std::io::stdout());

    if let Some(path) = &config.file {
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Logger already initialized")?;
    Ok(())
}

/// Formatting and level filtering shared by every output
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // SQL statements are logged by sqlx at info; keep them out unless asked for
        .level_for("sqlx", log::LevelFilter::Warn)
        .level_for("sea_orm", log::LevelFilter::Warn))
}
