//! Exam catalog reader.
//!
//! Lists exam documents in a directory, derives display names from their
//! file names, and resolves an exam identifier to a readable file.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::ExamError;
use crate::model::ExamDescriptor;

/// Default suffix of an exam document.
pub const EXAM_EXTENSION: &str = ".html";

/// Derive a display name from an exam file name.
///
/// Strips the extension, turns underscores into spaces, and title-cases the
/// result: the first letter of every run of letters is upper-cased and the
/// rest lower-cased, so `cpr_level2b.html` becomes `Cpr Level2B`.
pub fn display_name(file: &str, extension: &str) -> String {
    let stem = file.strip_suffix(extension).unwrap_or(file);
    title_case(&stem.replace('_', " "))
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// List the exam documents in `dir`, in directory order.
///
/// A missing directory is an empty catalog, not an error.
pub fn list_exams(dir: &Path, extension: &str) -> Result<Vec<ExamDescriptor>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("exam directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to read exam directory: {}", dir.display()))
        }
    };

    let mut exams = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let Some(file) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::warn!("skipping non-UTF-8 file name in {}", dir.display());
            continue;
        };
        if !file.ends_with(extension) || !entry.path().is_file() {
            continue;
        }

        let name = display_name(&file, extension);
        exams.push(ExamDescriptor { file, name });
    }

    Ok(exams)
}

/// Whether an identifier could only name a file directly inside the exam
/// directory.
fn is_plain_file_name(exam_file: &str) -> bool {
    !exam_file.is_empty()
        && !exam_file.starts_with('.')
        && !exam_file.contains(['/', '\\', '\0'])
}

/// Map an exam identifier to its path, if it names an existing file.
pub fn resolve_exam(dir: &Path, exam_file: &str) -> Result<PathBuf, ExamError> {
    if !is_plain_file_name(exam_file) {
        return Err(ExamError::NotFound(exam_file.to_string()));
    }

    let path = dir.join(exam_file);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ExamError::NotFound(exam_file.to_string()))
    }
}

/// Read an exam document as UTF-8 text.
pub fn read_exam(dir: &Path, exam_file: &str) -> Result<String, ExamError> {
    let path = resolve_exam(dir, exam_file)?;
    std::fs::read_to_string(&path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExamError::NotFound(exam_file.to_string()),
        _ => ExamError::Io { path, source },
    })
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct CatalogWarning {
    /// The exam file (if applicable).
    pub exam_file: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check the exam directory for documents that would misbehave when served.
pub fn validate_catalog(dir: &Path, extension: &str) -> Result<Vec<CatalogWarning>> {
    let mut warnings = Vec::new();

    if !dir.is_dir() {
        warnings.push(CatalogWarning {
            exam_file: None,
            message: format!("exam directory {} does not exist", dir.display()),
        });
        return Ok(warnings);
    }

    let exams = list_exams(dir, extension)?;
    if exams.is_empty() {
        warnings.push(CatalogWarning {
            exam_file: None,
            message: format!("no {extension} files found"),
        });
    }

    // Duplicate display names make entries indistinguishable on the index
    let mut by_name: HashMap<&str, Vec<&str>> = HashMap::new();
    for exam in &exams {
        by_name.entry(&exam.name).or_default().push(&exam.file);
    }
    for exam in &exams {
        let files = &by_name[exam.name.as_str()];
        if files.len() > 1 {
            warnings.push(CatalogWarning {
                exam_file: Some(exam.file.clone()),
                message: format!("display name \"{}\" is shared by {} files", exam.name, files.len()),
            });
        }
    }

    for exam in &exams {
        let content = match read_exam(dir, &exam.file) {
            Ok(content) => content,
            Err(e) => {
                warnings.push(CatalogWarning {
                    exam_file: Some(exam.file.clone()),
                    message: format!("unreadable: {e}"),
                });
                continue;
            }
        };

        if content.trim().is_empty() {
            warnings.push(CatalogWarning {
                exam_file: Some(exam.file.clone()),
                message: "document is empty".into(),
            });
        } else if count_named_fields(&content) == 0 {
            warnings.push(CatalogWarning {
                exam_file: Some(exam.file.clone()),
                message: "no named input, select or textarea fields; submissions will be empty"
                    .into(),
            });
        }
    }

    Ok(warnings)
}

/// Count form fields with a `name` attribute.
///
/// A tag scan, not an HTML parser: good enough to tell an exam with answer
/// fields from one without.
pub fn count_named_fields(html: &str) -> usize {
    let lower = html.to_ascii_lowercase();
    let mut count = 0;
    let mut rest = lower.as_str();

    while let Some(start) = rest.find('<') {
        rest = &rest[start + 1..];
        let end = rest.find('>').unwrap_or(rest.len());
        let tag = &rest[..end];
        let is_field = ["input", "select", "textarea"].iter().any(|name| {
            tag.strip_prefix(name)
                .is_some_and(|after| after.starts_with(|c: char| c.is_whitespace()))
        });
        if is_field && has_name_attribute(tag) {
            count += 1;
        }
        rest = &rest[end..];
    }

    count
}

fn has_name_attribute(tag: &str) -> bool {
    tag.match_indices("name")
        .any(|(i, _)| {
            let before_ok = tag[..i].ends_with(|c: char| c.is_whitespace());
            let after = tag[i + 4..].trim_start();
            before_ok && after.starts_with('=')
        })
}
