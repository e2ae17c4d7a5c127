//! The `examdesk validate` command.

use std::path::PathBuf;

use anyhow::Result;

use examdesk_core::catalog::{list_exams, validate_catalog};

use super::resolve_config;

pub fn execute(config_path: Option<PathBuf>, exams_dir: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(config_path, exams_dir, None)?;

    let exams = list_exams(&config.exams_dir, &config.exam_extension)?;
    println!(
        "Exam directory: {} ({} exams)",
        config.exams_dir.display(),
        exams.len()
    );

    let warnings = validate_catalog(&config.exams_dir, &config.exam_extension)?;
    for w in &warnings {
        let prefix = w
            .exam_file
            .as_ref()
            .map(|file| format!("  [{file}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All exams valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
