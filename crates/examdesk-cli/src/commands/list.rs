//! The `examdesk list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use examdesk_core::catalog::list_exams;

use super::resolve_config;

pub fn execute(
    config_path: Option<PathBuf>,
    exams_dir: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let config = resolve_config(config_path, exams_dir, None)?;
    let exams = list_exams(&config.exams_dir, &config.exam_extension)?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&exams)?);
        }
        "table" => {
            if exams.is_empty() {
                println!("No exams found in {}", config.exams_dir.display());
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Name", "File"]);
            for exam in &exams {
                table.add_row(vec![exam.name.as_str(), exam.file.as_str()]);
            }
            println!("{table}");
            println!("{} exam(s) in {}", exams.len(), config.exams_dir.display());
        }
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    Ok(())
}
