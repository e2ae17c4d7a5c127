//! The `examdesk serve` command.

use std::path::PathBuf;

use anyhow::Result;

use super::resolve_config;

pub async fn execute(
    config_path: Option<PathBuf>,
    exams_dir: Option<PathBuf>,
    bind: Option<String>,
) -> Result<()> {
    let config = resolve_config(config_path, exams_dir, bind)?;

    if !config.exams_dir.is_dir() {
        tracing::warn!(
            "exam directory {} does not exist; the index will be empty",
            config.exams_dir.display()
        );
    }
    tracing::debug!(?config, "starting server");

    examdesk_server::serve(config).await
}
