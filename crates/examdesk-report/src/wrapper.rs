//! The timed exam wrapper page.
//!
//! The exam document is inlined verbatim. A small script drives the
//! countdown, collects answers from named form fields, posts them to
//! `/submit-exam`, and hands the response to the results page through
//! `sessionStorage`.

use serde_json::json;

use crate::html::{html_escape, page_end, page_start, RESULT_STORAGE_KEY};

/// Serialize a value for embedding inside a `<script>` element.
fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Render the wrapper page around a raw exam document.
pub fn render_exam(
    exam_file: &str,
    exam_name: &str,
    exam_content: &str,
    duration_secs: u64,
    institution: &str,
) -> String {
    let mut html = page_start(exam_name, institution);

    html.push_str("<div class=\"exam-bar\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(exam_name)));
    html.push_str(&format!(
        "<p>Time remaining: <span class=\"timer\" id=\"timer\">{}</span></p>\n",
        format_clock(duration_secs)
    ));
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div id=\"exam-content\" data-exam-file=\"{}\">\n",
        html_escape(exam_file)
    ));
    html.push_str(exam_content);
    html.push_str("\n</div>\n");

    html.push_str("<p class=\"error\" id=\"submit-error\" hidden></p>\n");
    html.push_str("<p><button type=\"button\" id=\"submit-exam\">Submit exam</button></p>\n");

    let settings = json!({
        "examFile": exam_file,
        "duration": duration_secs,
        "resultKey": RESULT_STORAGE_KEY,
    });
    html.push_str("<script>\n");
    html.push_str(&format!("const EXAM = {};\n", script_json(&settings)));
    html.push_str(EXAM_JS);
    html.push_str("</script>\n");

    page_end(&mut html);
    html
}

/// Format seconds as `MM:SS`, the way the countdown shows them.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

const EXAM_JS: &str = r#"
(function () {
  const root = document.getElementById('exam-content');
  const timer = document.getElementById('timer');
  const button = document.getElementById('submit-exam');
  const errorBox = document.getElementById('submit-error');
  const deadline = Date.now() + EXAM.duration * 1000;
  let submitting = false;

  function pad(n) { return String(n).padStart(2, '0'); }

  function collectAnswers() {
    const answers = {};
    root.querySelectorAll('input[name], select[name], textarea[name]').forEach(function (el) {
      const name = el.name;
      if (el.type === 'submit' || el.type === 'button' || el.type === 'reset') {
        return;
      }
      if (el.type === 'radio') {
        if (!(name in answers)) { answers[name] = ''; }
        if (el.checked) { answers[name] = el.value; }
      } else if (el.type === 'checkbox') {
        if (!Array.isArray(answers[name])) { answers[name] = []; }
        if (el.checked) { answers[name].push(el.value); }
      } else if (el.tagName === 'SELECT' && el.multiple) {
        answers[name] = Array.from(el.selectedOptions).map(function (o) { return o.value; });
      } else {
        answers[name] = el.value;
      }
    });
    return answers;
  }

  function showError(message) {
    errorBox.textContent = message;
    errorBox.hidden = false;
  }

  async function submitExam() {
    if (submitting) { return; }
    submitting = true;
    button.disabled = true;
    try {
      const response = await fetch('/submit-exam', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ answers: collectAnswers() })
      });
      const data = await response.json();
      if (data.error) {
        showError(data.error);
        return;
      }
      sessionStorage.setItem(EXAM.resultKey, JSON.stringify(data));
      window.location.href = '/results';
    } catch (e) {
      submitting = false;
      button.disabled = false;
      showError('Submission failed, please try again.');
    }
  }

  root.querySelectorAll('form').forEach(function (form) {
    form.addEventListener('submit', function (event) { event.preventDefault(); });
  });

  button.addEventListener('click', function () {
    if (window.confirm('Submit your answers now?')) { submitExam(); }
  });

  const tick = setInterval(function () {
    const left = Math.max(0, Math.round((deadline - Date.now()) / 1000));
    timer.textContent = pad(Math.floor(left / 60)) + ':' + pad(left % 60);
    if (left <= 60) { timer.classList.add('low'); }
    if (left === 0) {
      clearInterval(tick);
      submitExam();
    }
  }, 1000);
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const EXAM: &str = "<form><input type=\"text\" name=\"q1\"></form>";

    #[test]
    fn wrapper_inlines_exam_verbatim() {
        let html = render_exam("bls.html", "Bls", EXAM, 1800, "Test Institute");
        assert!(html.contains(EXAM));
        assert!(html.contains("data-exam-file=\"bls.html\""));
        assert!(html.contains("id=\"timer\">30:00</span>"));
        assert!(html.contains("\"duration\":1800"));
        assert!(html.contains("\"examFile\":\"bls.html\""));
        assert!(html.contains("fetch('/submit-exam'"));
    }

    #[test]
    fn script_settings_cannot_close_the_script() {
        let html = render_exam("x</script>.html", "X", EXAM, 60, "Test Institute");
        assert!(html.contains("x<\\/script>.html"));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(1800), "30:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
    }
}
