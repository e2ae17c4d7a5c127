pub mod init;
pub mod list;
pub mod serve;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use examdesk_core::config::{load_config_from, ExamdeskConfig};

/// Load the config file and apply command-line overrides.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    exams_dir: Option<PathBuf>,
    bind: Option<String>,
) -> Result<ExamdeskConfig> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(dir) = exams_dir {
        config.exams_dir = dir;
    }
    if let Some(bind) = bind {
        config.bind = bind;
    }
    Ok(config)
}
