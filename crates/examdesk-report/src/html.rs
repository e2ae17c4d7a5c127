//! Index and results pages, plus the page shell they share.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use examdesk_core::model::{ExamDescriptor, ResultSummary};

/// Key under which the exam wrapper stores the submission response in
/// `sessionStorage` for the results page.
pub const RESULT_STORAGE_KEY: &str = "examdesk.result";

/// Escape a string for safe HTML insertion.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Open a page: doctype, head with inlined CSS, and the site header.
pub(crate) fn page_start(title: &str, institution: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("<header class=\"site\">\n");
    html.push_str(&format!(
        "<a class=\"brand\" href=\"/\">{}</a>\n",
        html_escape(institution)
    ));
    html.push_str("</header>\n<main>\n");
    html
}

pub(crate) fn page_end(html: &mut String) {
    html.push_str("</main>\n</body>\n</html>");
}

/// Render the exam selection page.
pub fn render_index(exams: &[ExamDescriptor], institution: &str) -> String {
    let mut html = page_start("Available Exams", institution);

    html.push_str("<h1>Available Exams</h1>\n");

    if exams.is_empty() {
        html.push_str(
            "<p class=\"empty\">No exams are available right now. Please check back later.</p>\n",
        );
    } else {
        html.push_str("<ul class=\"exam-list\">\n");
        for exam in exams {
            html.push_str(&format!(
                "<li><a href=\"/start-exam/{}\">{}</a></li>\n",
                urlencoding::encode(&exam.file),
                html_escape(&exam.name)
            ));
        }
        html.push_str("</ul>\n");
    }

    page_end(&mut html);
    html
}

/// What the results page shows from the session.
#[derive(Debug, Clone)]
pub struct ResultsPage<'a> {
    pub exam_name: &'a str,
    pub summary: &'a ResultSummary,
    pub submitted_at: DateTime<Utc>,
    pub attempt_id: Uuid,
    pub institution: &'a str,
}

/// Render the results page.
///
/// The headline numbers come from the session; the per-question table is
/// filled in by script from the stored submission response, when present.
pub fn render_results(page: &ResultsPage<'_>) -> String {
    let mut html = page_start("Exam Results", page.institution);
    let summary = page.summary;

    let (verdict_class, verdict) = if summary.passed {
        ("pass", "PASSED")
    } else {
        ("fail", "NOT PASSED")
    };

    html.push_str("<h1>Exam Results</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} | submitted {} | attempt {}</p>\n",
        html_escape(page.exam_name),
        page.submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
        page.attempt_id
    ));

    html.push_str(&format!(
        "<section class=\"verdict {verdict_class}\">\n<p class=\"score\">{:.2}%</p>\n<p>{verdict}</p>\n</section>\n",
        summary.score
    ));

    html.push_str("<table class=\"summary\">\n<tbody>\n");
    html.push_str(&format!(
        "<tr><th>Correct answers</th><td>{} / {}</td></tr>\n",
        summary.correct, summary.total
    ));
    html.push_str(&format!(
        "<tr><th>Time taken</th><td>{}</td></tr>\n",
        format_duration(summary.time_taken)
    ));
    html.push_str("</tbody></table>\n");

    html.push_str("<section class=\"details\">\n<h2>Answers</h2>\n");
    html.push_str("<table class=\"results-table\" id=\"details\">\n");
    html.push_str("<thead><tr><th>Question</th><th>Your answer</th><th>Result</th></tr></thead>\n");
    html.push_str("<tbody></tbody></table>\n");
    html.push_str(
        "<p class=\"empty\" id=\"details-missing\" hidden>Answer details are only available in the browser tab the exam was taken in.</p>\n",
    );
    html.push_str("</section>\n");
    html.push_str("<p><a class=\"button\" href=\"/\">Back to exams</a></p>\n");

    html.push_str("<script>\n");
    html.push_str(&format!(
        "const RESULT_KEY = {};\n",
        serde_json::Value::String(RESULT_STORAGE_KEY.to_string())
    ));
    html.push_str(RESULTS_JS);
    html.push_str("</script>\n");

    page_end(&mut html);
    html
}

/// Format seconds as `Mm Ss`.
pub fn format_duration(secs: f64) -> String {
    let whole = secs.max(0.0).round() as u64;
    format!("{}m {:02}s", whole / 60, whole % 60)
}

pub(crate) const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --accent: #0f766e; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --accent: #5eead4; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; background: var(--bg); color: var(--fg); }
header.site { padding: 1rem 2rem; border-bottom: 1px solid var(--border); display: flex; justify-content: space-between; align-items: center; }
header.site .brand { font-weight: bold; color: var(--accent); text-decoration: none; }
main { padding: 2rem; max-width: 960px; margin: 0 auto; }
.meta, .empty { color: #6b7280; }
.exam-list { list-style: none; padding: 0; }
.exam-list li { border: 1px solid var(--border); border-radius: 8px; margin: 0.5rem 0; }
.exam-list a { display: block; padding: 1rem; color: inherit; text-decoration: none; }
.exam-list a:hover { background: var(--border); }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
.verdict { border-radius: 8px; padding: 1rem 2rem; text-align: center; }
.verdict .score { font-size: 2.5rem; font-weight: bold; margin: 0; }
.timer { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 1.25rem; }
.timer.low { color: #dc2626; }
.button, button { background: var(--accent); color: var(--bg); border: 0; border-radius: 6px; padding: 0.6rem 1.2rem; font-size: 1rem; cursor: pointer; text-decoration: none; }
.error { color: #dc2626; }
"#;

const RESULTS_JS: &str = r#"
(function () {
  const tbody = document.querySelector('#details tbody');
  let data = null;
  try { data = JSON.parse(sessionStorage.getItem(RESULT_KEY)); } catch (e) { data = null; }
  if (!data || !Array.isArray(data.detailed_results)) {
    document.getElementById('details').hidden = true;
    document.getElementById('details-missing').hidden = false;
    return;
  }
  data.detailed_results.forEach(function (r) {
    const row = document.createElement('tr');
    row.className = r.correct ? 'pass' : 'fail';
    const answer = Array.isArray(r.answer) ? r.answer.join(', ') : (r.answer === null ? '' : String(r.answer));
    [r.question_id, answer, r.correct ? 'Answered' : 'Blank'].forEach(function (text) {
      const cell = document.createElement('td');
      cell.textContent = text;
      row.appendChild(cell);
    });
    tbody.appendChild(row);
  });
})();
"#;
