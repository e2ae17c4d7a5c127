//! Placeholder grading.
//!
//! Exam documents carry no answer key, so an answer counts as correct when
//! it is non-empty. This catches blank answers but not wrong ones.

use serde_json::Value;

use crate::model::{AnswerSet, GradingResult, QuestionResult};

/// Default minimum score (percent) that counts as a pass.
pub const PASS_THRESHOLD: f64 = 70.0;

/// Whether a submitted answer value is non-empty.
///
/// `null`, `false`, `0`, `""`, `[]` and `{}` are empty; everything else is
/// an answer.
pub fn is_answered(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Round to two decimal places, sending exact halves to the even digit.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Grade a submission against the default pass threshold.
pub fn grade(
    exam_file: &str,
    answers: &AnswerSet,
    elapsed_secs: f64,
    institution: &str,
) -> GradingResult {
    grade_with_threshold(exam_file, answers, elapsed_secs, institution, PASS_THRESHOLD)
}

/// Grade a submission.
///
/// `total` is the number of answers submitted, not the number of questions
/// in the exam document.
pub fn grade_with_threshold(
    exam_file: &str,
    answers: &AnswerSet,
    elapsed_secs: f64,
    institution: &str,
    pass_threshold: f64,
) -> GradingResult {
    let detailed_results: Vec<QuestionResult> = answers
        .iter()
        .map(|(question_id, answer)| QuestionResult {
            question_id: question_id.clone(),
            answer: answer.clone(),
            correct: is_answered(answer),
        })
        .collect();

    let total = detailed_results.len();
    let correct = detailed_results.iter().filter(|r| r.correct).count();

    let score = if total > 0 {
        correct as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    tracing::debug!(exam_file, correct, total, "graded submission");

    GradingResult {
        score: round2(score),
        correct,
        total,
        time_taken: round2(elapsed_secs.max(0.0)),
        passed: score >= pass_threshold,
        detailed_results,
        institution: institution.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers(value: Value) -> AnswerSet {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn empty_submission_scores_zero() {
        let result = grade("exam.html", &AnswerSet::new(), 3.0, "Inst");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.correct, 0);
        assert_eq!(result.total, 0);
        assert!(!result.passed);
        assert!(result.detailed_results.is_empty());
    }

    #[test]
    fn blank_answer_is_incorrect() {
        let result = grade(
            "exam.html",
            &answers(json!({"q1": "answer", "q2": ""})),
            10.0,
            "Inst",
        );
        assert_eq!(result.correct, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.score, 50.0);
        assert!(!result.passed);
        assert!(result.detailed_results[0].correct);
        assert!(!result.detailed_results[1].correct);
        assert_eq!(result.detailed_results[1].question_id, "q2");
    }

    #[test]
    fn all_answered_passes() {
        let result = grade(
            "exam.html",
            &answers(json!({"q1": "a", "q2": "b", "q3": "c"})),
            10.0,
            "Inst",
        );
        assert_eq!(result.score, 100.0);
        assert!(result.passed);
    }

    #[test]
    fn score_is_rounded_to_two_decimals() {
        let result = grade(
            "exam.html",
            &answers(json!({"q1": "a", "q2": "", "q3": ""})),
            1.23456,
            "Inst",
        );
        assert_eq!(result.score, 33.33);
        assert_eq!(result.time_taken, 1.23);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(round2(10.125), 10.12);
        assert_eq!(round2(10.375), 10.38);
        assert_eq!(round2(3.125), 3.12);

        let result = grade("exam.html", &AnswerSet::new(), 10.125, "Inst");
        assert_eq!(result.time_taken, 10.12);
    }

    #[test]
    fn pass_threshold_is_inclusive() {
        let mut set = AnswerSet::new();
        for i in 0..10 {
            let value = if i < 7 { "x" } else { "" };
            set.insert(format!("q{i}"), json!(value));
        }
        let result = grade("exam.html", &set, 0.0, "Inst");
        assert_eq!(result.score, 70.0);
        assert!(result.passed);

        let strict = grade_with_threshold("exam.html", &set, 0.0, "Inst", 80.0);
        assert!(!strict.passed);
    }

    #[test]
    fn non_string_answers_use_truthiness() {
        assert!(!is_answered(&json!(null)));
        assert!(!is_answered(&json!(false)));
        assert!(!is_answered(&json!(0)));
        assert!(!is_answered(&json!([])));
        assert!(!is_answered(&json!({})));
        assert!(is_answered(&json!(true)));
        assert!(is_answered(&json!(3)));
        assert!(is_answered(&json!(["a", "c"])));
    }

    #[test]
    fn negative_elapsed_is_clamped() {
        let result = grade("exam.html", &AnswerSet::new(), -5.0, "Inst");
        assert_eq!(result.time_taken, 0.0);
    }

    #[test]
    fn institution_is_echoed() {
        let result = grade("exam.html", &AnswerSet::new(), 0.0, "Harbor Nursing School");
        assert_eq!(result.institution, "Harbor Nursing School");
    }
}
