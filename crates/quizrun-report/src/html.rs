//! HTML result report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined: the score
//! header followed by a review of every answer.

use std::path::Path;

use anyhow::{Context, Result};

use quizrun_core::scoring::{ExplanationPolicy, QuestionResult, ResultReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page for a scored session.
pub fn generate_html(report: &ResultReport, policy: ExplanationPolicy) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Quiz results: {}%</title>\n",
        report.percentage
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Score header
    html.push_str("<header>\n");
    html.push_str("<h1>Quiz results</h1>\n");
    html.push_str(&format!(
        "<p class=\"score\"><span class=\"percentage\">{}%</span> {} of {} correct</p>\n",
        report.percentage, report.correct_count, report.total_count
    ));
    html.push_str(&score_bar(report.percentage));
    html.push_str(&format!(
        "<p class=\"meta\">Completed {} | run {}</p>\n",
        report.completed_at.format("%Y-%m-%d %H:%M:%S UTC"),
        report.id
    ));
    html.push_str("</header>\n");

    // Answer review
    html.push_str("<section class=\"results\" id=\"results\">\n");
    html.push_str("<h2>Review your answers</h2>\n");
    html.push_str(
        "<label><input type=\"checkbox\" onchange=\"toggleCorrect(this.checked)\"> Show incorrect only</label>\n",
    );
    for (index, result) in report.per_question.iter().enumerate() {
        html.push_str(&result_item(index, result, policy));
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(&policy_filtered(report, policy)).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Copy of `report` carrying only the explanations `policy` shows.
fn policy_filtered(report: &ResultReport, policy: ExplanationPolicy) -> ResultReport {
    let mut filtered = report.clone();
    for result in &mut filtered.per_question {
        let shown = policy.explanation_for(result).map(String::from);
        result.explanation = shown;
    }
    filtered
}

fn result_item(index: usize, result: &QuestionResult, policy: ExplanationPolicy) -> String {
    let class = if result.is_correct {
        "correct"
    } else {
        "incorrect"
    };

    let mut item = format!("<div class=\"result-item {class}\">\n");
    item.push_str(&format!(
        "<div class=\"result-question\">{}. {}</div>\n",
        index + 1,
        html_escape(&result.prompt)
    ));
    item.push_str(&format!(
        "<div class=\"result-answer\"><strong>Your answer:</strong> {}</div>\n",
        html_escape(&result.user_answer_text())
    ));
    item.push_str(&format!(
        "<div class=\"result-answer\"><strong>Correct answer:</strong> {}</div>\n",
        html_escape(&result.correct_answer_text())
    ));
    if let Some(explanation) = policy.explanation_for(result) {
        item.push_str(&format!(
            "<div class=\"result-explanation\"><strong>Explanation:</strong> {}</div>\n",
            html_escape(explanation)
        ));
    }
    item.push_str("</div>\n");
    item
}

fn score_bar(percentage: u32) -> String {
    let max_width = 400;
    let bar_height = 24;
    let width = percentage.min(100) as usize * max_width / 100;

    let color = if percentage >= 80 {
        "#22c55e"
    } else if percentage >= 50 {
        "#eab308"
    } else {
        "#ef4444"
    };

    format!(
        "<svg width=\"{max_width}\" height=\"{bar_height}\" xmlns=\"http://www.w3.org/2000/svg\">\n  \
         <rect x=\"0\" y=\"0\" width=\"{max_width}\" height=\"{bar_height}\" fill=\"var(--border)\" rx=\"4\"/>\n  \
         <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{bar_height}\" fill=\"{color}\" rx=\"4\"/>\n\
         </svg>\n"
    )
}

/// Write an HTML report to a file.
pub fn write_html_report(
    report: &ResultReport,
    policy: ExplanationPolicy,
    path: &Path,
) -> Result<()> {
    let html = generate_html(report, policy);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.score { font-size: 1.25rem; }
.percentage { font-size: 2.5rem; font-weight: bold; margin-right: 0.5rem; }
.result-item { border: 1px solid var(--border); border-radius: 8px; padding: 1rem; margin: 1rem 0; }
.result-item.correct { background: var(--pass); }
.result-item.incorrect { background: var(--fail); }
.result-question { font-weight: bold; margin-bottom: 0.5rem; }
.result-explanation { margin-top: 0.5rem; font-style: italic; }
.hide-correct .result-item.correct { display: none; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function toggleCorrect(incorrectOnly) {
  document.getElementById('results').classList.toggle('hide-correct', incorrectOnly);
}
"#;
