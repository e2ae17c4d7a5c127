//! Process configuration.
//!
//! Built once at startup and treated as immutable afterwards. Every field has
//! a default, so an empty (or absent) config file yields a working setup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Minimum length of the cookie signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Longest accepted session lifetime: 400 days, the cap browsers put on
/// cookie expiry.
pub const MAX_SESSION_LIFETIME_SECS: u64 = 400 * 24 * 60 * 60;

/// Top-level examdesk configuration.
///
/// Note: Custom Debug impl masks the signing secret to keep it out of logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct ExamdeskConfig {
    /// Directory holding the exam documents.
    #[serde(default = "default_exams_dir")]
    pub exams_dir: PathBuf,
    /// File name suffix that marks an exam document.
    #[serde(default = "default_extension")]
    pub exam_extension: String,
    /// Exam duration shown by the client-side countdown.
    #[serde(default = "default_duration")]
    pub duration_secs: u64,
    /// Session cookie lifetime, counted from the last write.
    #[serde(default = "default_session_lifetime")]
    pub session_lifetime_secs: u64,
    /// Name of the session cookie.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Secret the session cookie is signed with.
    #[serde(default = "default_secret")]
    pub secret_key: String,
    /// Institution label attached to every grading result.
    #[serde(default = "default_institution")]
    pub institution: String,
    /// Minimum score (percent) that counts as a pass.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,
    /// Address the server listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl std::fmt::Debug for ExamdeskConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExamdeskConfig")
            .field("exams_dir", &self.exams_dir)
            .field("exam_extension", &self.exam_extension)
            .field("duration_secs", &self.duration_secs)
            .field("session_lifetime_secs", &self.session_lifetime_secs)
            .field("session_cookie", &self.session_cookie)
            .field("secret_key", &"***")
            .field("institution", &self.institution)
            .field("pass_threshold", &self.pass_threshold)
            .field("bind", &self.bind)
            .finish()
    }
}

fn default_exams_dir() -> PathBuf {
    PathBuf::from("exams")
}
fn default_extension() -> String {
    ".html".to_string()
}
fn default_duration() -> u64 {
    1800
}
fn default_session_lifetime() -> u64 {
    2 * 60 * 60
}
fn default_session_cookie() -> String {
    "examdesk_session".to_string()
}
fn default_secret() -> String {
    "examdesk-development-secret-change-me-before-deploying".to_string()
}
fn default_institution() -> String {
    "Twins Medcare Training Institute".to_string()
}
fn default_pass_threshold() -> f64 {
    crate::grader::PASS_THRESHOLD
}
fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for ExamdeskConfig {
    fn default() -> Self {
        Self {
            exams_dir: default_exams_dir(),
            exam_extension: default_extension(),
            duration_secs: default_duration(),
            session_lifetime_secs: default_session_lifetime(),
            session_cookie: default_session_cookie(),
            secret_key: default_secret(),
            institution: default_institution(),
            pass_threshold: default_pass_threshold(),
            bind: default_bind(),
        }
    }
}

impl ExamdeskConfig {
    /// Check the values a config file could have gotten wrong.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.secret_key.len() >= MIN_SECRET_LEN,
            "secret_key must be at least {MIN_SECRET_LEN} bytes"
        );
        anyhow::ensure!(self.duration_secs > 0, "duration_secs must be positive");
        anyhow::ensure!(
            self.session_lifetime_secs > 0,
            "session_lifetime_secs must be positive"
        );
        anyhow::ensure!(
            self.session_lifetime_secs <= MAX_SESSION_LIFETIME_SECS,
            "session_lifetime_secs must be at most {MAX_SESSION_LIFETIME_SECS}"
        );
        anyhow::ensure!(
            !self.exam_extension.is_empty(),
            "exam_extension must not be empty"
        );
        anyhow::ensure!(
            !self.session_cookie.is_empty(),
            "session_cookie must not be empty"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.pass_threshold),
            "pass_threshold must be between 0 and 100"
        );
        Ok(())
    }
}

/// Load config from an explicit path, or fall back to the default location.
///
/// Without a path, `examdesk.toml` in the current directory is used when
/// present, otherwise the built-in defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<ExamdeskConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("examdesk.toml");
            local.exists().then_some(local)
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<ExamdeskConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => ExamdeskConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ExamdeskConfig::default();
        assert_eq!(config.exams_dir, PathBuf::from("exams"));
        assert_eq!(config.duration_secs, 1800);
        assert_eq!(config.session_lifetime_secs, 7200);
        assert_eq!(config.pass_threshold, 70.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: ExamdeskConfig = toml::from_str(
            r#"
exams_dir = "/srv/exams"
duration_secs = 600
"#,
        )
        .unwrap();
        assert_eq!(config.exams_dir, PathBuf::from("/srv/exams"));
        assert_eq!(config.duration_secs, 600);
        assert_eq!(config.exam_extension, ".html");
        assert_eq!(config.session_cookie, "examdesk_session");
    }

    #[test]
    fn short_secret_is_rejected() {
        let config = ExamdeskConfig {
            secret_key: "too-short".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("secret_key"));
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let config = ExamdeskConfig {
            pass_threshold: 120.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_session_lifetime_is_rejected() {
        let config = ExamdeskConfig {
            session_lifetime_secs: u64::MAX,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("session_lifetime_secs"));

        let config = ExamdeskConfig {
            session_lifetime_secs: MAX_SESSION_LIFETIME_SECS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn debug_masks_secret() {
        let config = ExamdeskConfig::default();
        let debug = format!("{config:?}");
        assert!(debug.contains("***"));
        assert!(!debug.contains(&config.secret_key));
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("examdesk.toml");
        std::fs::write(&path, "institution = \"Harbor Nursing School\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.institution, "Harbor Nursing School");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/examdesk.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "secret_key = \"short\"\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
