//! Exam error types.
//!
//! These are the conditions a client can run into while taking an exam.
//! The server maps each variant to its own response shape, so callers match
//! on the variant rather than on the message.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while serving or grading an exam.
#[derive(Debug, Error)]
pub enum ExamError {
    /// The requested exam document does not exist in the exam directory.
    #[error("exam not found: {0}")]
    NotFound(String),

    /// The session has already been graded once.
    #[error("Exam already submitted")]
    AlreadySubmitted,

    /// No exam was started in this session.
    #[error("No exam session found")]
    NoActiveSession,

    /// The exam document exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExamError {
    /// Returns `true` for conditions the client recovers from by navigating
    /// again, as opposed to server faults.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ExamError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_errors_use_client_facing_messages() {
        assert_eq!(
            ExamError::AlreadySubmitted.to_string(),
            "Exam already submitted"
        );
        assert_eq!(
            ExamError::NoActiveSession.to_string(),
            "No exam session found"
        );
    }

    #[test]
    fn io_is_a_server_fault() {
        let err = ExamError::Io {
            path: PathBuf::from("exams/a.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("exams/a.html"));
        assert!(ExamError::NotFound("x.html".into()).is_client_error());
    }
}
