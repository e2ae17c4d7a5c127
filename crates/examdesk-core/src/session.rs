//! Per-browser exam session state.
//!
//! A session moves `NoSession -> InProgress` when an exam is started and
//! `InProgress -> Submitted` when it is graded. Starting an exam is allowed
//! from any state and discards whatever was there before; grading is only
//! allowed from `InProgress`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ExamError;
use crate::grader;
use crate::model::{AnswerSet, GradingResult, ResultSummary};

/// The state carried in a browser's session cookie.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ExamSession {
    #[default]
    NoSession,
    InProgress {
        exam_file: String,
        /// Epoch seconds.
        started_at: f64,
        attempt_id: Uuid,
    },
    Submitted {
        exam_file: String,
        started_at: f64,
        submitted_at: f64,
        attempt_id: Uuid,
        summary: ResultSummary,
    },
}

/// Settings the grading transition needs.
#[derive(Debug, Clone)]
pub struct GradingPolicy {
    pub institution: String,
    pub pass_threshold: f64,
}

impl ExamSession {
    /// Begin a new exam attempt, replacing any previous state.
    pub fn start(exam_file: impl Into<String>, now: f64) -> Self {
        ExamSession::InProgress {
            exam_file: exam_file.into(),
            started_at: now,
            attempt_id: Uuid::new_v4(),
        }
    }

    /// Grade the in-progress exam and move to `Submitted`.
    ///
    /// On error the session is left untouched.
    pub fn submit(
        &mut self,
        answers: &AnswerSet,
        now: f64,
        policy: &GradingPolicy,
    ) -> Result<GradingResult, ExamError> {
        let (exam_file, started_at, attempt_id) = match self {
            ExamSession::NoSession => return Err(ExamError::NoActiveSession),
            ExamSession::Submitted { .. } => return Err(ExamError::AlreadySubmitted),
            ExamSession::InProgress {
                exam_file,
                started_at,
                attempt_id,
            } => (exam_file.clone(), *started_at, *attempt_id),
        };

        let elapsed = (now - started_at).max(0.0);
        let result = grader::grade_with_threshold(
            &exam_file,
            answers,
            elapsed,
            &policy.institution,
            policy.pass_threshold,
        );

        *self = ExamSession::Submitted {
            exam_file,
            started_at,
            submitted_at: now,
            attempt_id,
            summary: result.summary(),
        };

        Ok(result)
    }

    pub fn exam_file(&self) -> Option<&str> {
        match self {
            ExamSession::NoSession => None,
            ExamSession::InProgress { exam_file, .. } | ExamSession::Submitted { exam_file, .. } => {
                Some(exam_file)
            }
        }
    }

    pub fn attempt_id(&self) -> Option<Uuid> {
        match self {
            ExamSession::NoSession => None,
            ExamSession::InProgress { attempt_id, .. }
            | ExamSession::Submitted { attempt_id, .. } => Some(*attempt_id),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, ExamSession::Submitted { .. })
    }

    /// The stored result summary, once the exam has been graded.
    pub fn summary(&self) -> Option<&ResultSummary> {
        match self {
            ExamSession::Submitted { summary, .. } => Some(summary),
            _ => None,
        }
    }
}
