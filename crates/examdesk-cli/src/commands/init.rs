//! The `examdesk init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create examdesk.toml
    if std::path::Path::new("examdesk.toml").exists() {
        println!("examdesk.toml already exists, skipping.");
    } else {
        std::fs::write("examdesk.toml", SAMPLE_CONFIG)?;
        println!("Created examdesk.toml");
    }

    // Create sample exam
    std::fs::create_dir_all("exams")?;
    let example_path = std::path::Path::new("exams/sample_exam.html");
    if example_path.exists() {
        println!("exams/sample_exam.html already exists, skipping.");
    } else {
        std::fs::write(example_path, SAMPLE_EXAM)?;
        println!("Created exams/sample_exam.html");
    }

    println!("\nNext steps:");
    println!("  1. Set a private secret_key in examdesk.toml");
    println!("  2. Run: examdesk validate");
    println!("  3. Run: examdesk serve");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examdesk configuration

exams_dir = "exams"
exam_extension = ".html"
bind = "127.0.0.1:5000"

# Exam length shown by the countdown, in seconds
duration_secs = 1800

# Sessions expire this long after the last request that wrote them
session_lifetime_secs = 7200
session_cookie = "examdesk_session"

# Signs the session cookie; at least 32 bytes. Changing it ends all sessions.
secret_key = "replace-this-with-a-long-random-string-0123456789"

institution = "Twins Medcare Training Institute"
pass_threshold = 70.0
"#;

const SAMPLE_EXAM: &str = r#"<h2>Sample Exam: Basic Life Support</h2>
<p>Answer every question, then press <em>Submit exam</em>.</p>
<form>
  <fieldset>
    <legend>1. What is the compression to breath ratio for adult CPR?</legend>
    <label><input type="radio" name="q1" value="15:2"> 15:2</label>
    <label><input type="radio" name="q1" value="30:2"> 30:2</label>
    <label><input type="radio" name="q1" value="5:1"> 5:1</label>
  </fieldset>
  <fieldset>
    <legend>2. Which are signs of a stroke? (select all that apply)</legend>
    <label><input type="checkbox" name="q2" value="face"> Facial drooping</label>
    <label><input type="checkbox" name="q2" value="arm"> Arm weakness</label>
    <label><input type="checkbox" name="q2" value="fever"> Fever</label>
  </fieldset>
  <fieldset>
    <legend>3. Describe the recovery position.</legend>
    <textarea name="q3" rows="4" cols="60"></textarea>
  </fieldset>
</form>
"#;
