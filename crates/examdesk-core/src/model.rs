//! Core data model types for examdesk.
//!
//! These are the types exchanged between the catalog, the grader, and the
//! HTTP layer. None of them are persisted server-side.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An exam document found in the exam directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamDescriptor {
    /// File name inside the exam directory (e.g. "first_aid_basics.html").
    pub file: String,
    /// Human-readable name derived from the file name.
    pub name: String,
}

/// Submitted answers keyed by question identifier, in submission order.
///
/// Values are kept as raw JSON: text inputs arrive as strings, checkbox
/// groups as arrays.
pub type AnswerSet = Map<String, Value>;

/// Body of a `POST /submit-exam` request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub answers: AnswerSet,
}

/// Grading outcome for a single submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub answer: Value,
    pub correct: bool,
}

/// The full result of grading one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    /// Percentage of correct answers, 0-100, rounded to 2 decimals.
    pub score: f64,
    /// Number of answers counted as correct.
    pub correct: usize,
    /// Number of answers submitted.
    pub total: usize,
    /// Seconds between exam start and submission, rounded to 2 decimals.
    pub time_taken: f64,
    /// Whether the score reached the pass threshold.
    pub passed: bool,
    /// Per-question breakdown, in submission order.
    pub detailed_results: Vec<QuestionResult>,
    /// Institution label shown alongside the result.
    pub institution: String,
}

/// Headline numbers of a [`GradingResult`], small enough to keep in the
/// session cookie for the results page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub score: f64,
    pub correct: usize,
    pub total: usize,
    pub time_taken: f64,
    pub passed: bool,
}

impl GradingResult {
    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            score: self.score,
            correct: self.correct,
            total: self.total,
            time_taken: self.time_taken,
            passed: self.passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_without_answers_key_is_empty() {
        let submission: Submission = serde_json::from_str("{}").unwrap();
        assert!(submission.answers.is_empty());
    }

    #[test]
    fn submission_keeps_question_order() {
        let submission: Submission =
            serde_json::from_str(r#"{"answers": {"q3": "c", "q1": "a", "q2": "b"}}"#).unwrap();
        let ids: Vec<&str> = submission.answers.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["q3", "q1", "q2"]);
    }

    #[test]
    fn grading_result_wire_names() {
        let result = GradingResult {
            score: 50.0,
            correct: 1,
            total: 2,
            time_taken: 12.5,
            passed: false,
            detailed_results: vec![QuestionResult {
                question_id: "q1".into(),
                answer: Value::String("a".into()),
                correct: true,
            }],
            institution: "Test Institute".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 50.0);
        assert_eq!(json["time_taken"], 12.5);
        assert_eq!(json["detailed_results"][0]["question_id"], "q1");
        assert_eq!(json["institution"], "Test Institute");
        assert_eq!(result.summary().correct, 1);
    }
}
