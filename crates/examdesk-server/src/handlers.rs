//! Route handlers.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use axum_extra::extract::cookie::SignedCookieJar;
use chrono::{DateTime, Utc};

use examdesk_core::catalog;
use examdesk_core::error::ExamError;
use examdesk_core::model::{GradingResult, Submission};
use examdesk_core::session::ExamSession;
use examdesk_report::html::ResultsPage;

use crate::error::ServerError;
use crate::session;
use crate::state::AppState;

/// `GET /`: the exam selection page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let config = &state.config;
    let exams = catalog::list_exams(&config.exams_dir, &config.exam_extension)?;
    Ok(Html(examdesk_report::render_index(&exams, &config.institution)))
}

/// `GET /start-exam/{exam_file}`: begin an attempt and serve the wrapper.
///
/// The session cookie is only rewritten once the document has been read, so
/// a missing exam leaves any current attempt alone. An identifier that does
/// not decode to UTF-8 cannot name a file in the catalog and is a 404 too.
pub async fn start_exam(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    exam_file: Result<Path<String>, PathRejection>,
) -> Result<(SignedCookieJar, Html<String>), ServerError> {
    let config = &state.config;

    let Path(exam_file) = exam_file.map_err(|rejection| {
        tracing::warn!("cannot start exam: {rejection}");
        ExamError::NotFound(rejection.body_text())
    })?;

    let content = catalog::read_exam(&config.exams_dir, &exam_file).inspect_err(|e| {
        tracing::warn!(exam_file = %exam_file, "cannot start exam: {e}");
    })?;

    let previous = session::load(&jar, &state);
    if let ExamSession::InProgress {
        exam_file: abandoned,
        ..
    } = &previous
    {
        tracing::info!(abandoned = %abandoned, "discarding unsubmitted attempt");
    }

    let current = ExamSession::start(exam_file.as_str(), state.clock.now());
    tracing::info!(
        exam_file = %exam_file,
        attempt_id = ?current.attempt_id(),
        "exam started"
    );
    let jar = session::store(jar, &state, &current)?;

    let name = catalog::display_name(&exam_file, &config.exam_extension);
    let page = examdesk_report::render_exam(
        &exam_file,
        &name,
        &content,
        config.duration_secs,
        &config.institution,
    );

    Ok((jar, Html(page)))
}

/// `POST /submit-exam`: grade the in-progress attempt.
pub async fn submit_exam(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(submission): Json<Submission>,
) -> Result<(SignedCookieJar, Json<GradingResult>), ServerError> {
    let mut current = session::load(&jar, &state);

    let result = current
        .submit(
            &submission.answers,
            state.clock.now(),
            &state.grading_policy(),
        )
        .inspect_err(|e| {
            tracing::warn!(exam_file = ?current.exam_file(), "submission rejected: {e}");
        })?;

    tracing::info!(
        exam_file = ?current.exam_file(),
        attempt_id = ?current.attempt_id(),
        score = result.score,
        correct = result.correct,
        total = result.total,
        time_taken = result.time_taken,
        passed = result.passed,
        "exam submitted"
    );

    let jar = session::store(jar, &state, &current)?;
    Ok((jar, Json(result)))
}

/// `GET /results`: the results page, for graded sessions only.
pub async fn show_results(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let config = &state.config;

    let ExamSession::Submitted {
        exam_file,
        submitted_at,
        attempt_id,
        summary,
        ..
    } = session::load(&jar, &state)
    else {
        return Redirect::to("/").into_response();
    };

    let submitted_at = DateTime::<Utc>::from_timestamp_millis((submitted_at * 1000.0) as i64)
        .unwrap_or_else(Utc::now);
    let exam_name = catalog::display_name(&exam_file, &config.exam_extension);
    let page = ResultsPage {
        exam_name: &exam_name,
        summary: &summary,
        submitted_at,
        attempt_id,
        institution: &config.institution,
    };

    Html(examdesk_report::render_results(&page)).into_response()
}
