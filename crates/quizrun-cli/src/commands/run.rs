//! The `quizrun run` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use quizrun_core::app::{Command, DisplaySurface, QuizApp, Snapshot};
use quizrun_core::scoring::{ExplanationPolicy, ResultReport};
use quizrun_core::session::{Direction, QuestionView, SessionState};
use quizrun_report::html::write_html_report;

use super::{load_banks, sets_table, EMPTY_STATE};

/// Renders snapshots as plain text on stdout.
struct TerminalSurface {
    policy: ExplanationPolicy,
}

impl DisplaySurface for TerminalSurface {
    fn render(&mut self, snapshot: &Snapshot) {
        match snapshot {
            Snapshot::Sets(sets) if sets.is_empty() => println!("{EMPTY_STATE}"),
            Snapshot::Sets(sets) => {
                for set in sets {
                    println!("  [{}] {} ({})", set.index, set.name, set.question_count);
                }
            }
            Snapshot::Selection(summary) => println!("{}", summary.label()),
            Snapshot::Question(view) => print_question(view),
            Snapshot::Results(report) => print_results(report, self.policy),
        }
    }
}

fn print_question(view: &QuestionView) {
    const BAR_WIDTH: usize = 20;
    let filled = (view.progress * BAR_WIDTH as f64).round() as usize;

    println!();
    println!(
        "{}  [{}{}]",
        view.counter(),
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
    );
    println!("{}", view.prompt);
    for choice in &view.choices {
        let marker = if choice.selected { "*" } else { " " };
        println!(" {marker} {}) {}", choice.letter, choice.text);
    }

    let prev = if view.prev_enabled { "[p] Prev  " } else { "" };
    println!("{prev}[n] {}  [s] Submit  [q] Quit", view.next_label);
}

fn print_results(report: &ResultReport, policy: ExplanationPolicy) {
    use comfy_table::{Cell, Table};

    println!();
    println!(
        "Score: {}% ({} of {} correct)",
        report.percentage, report.correct_count, report.total_count
    );

    let mut table = Table::new();
    table.set_header(vec!["#", "Result", "Your answer", "Correct answer"]);
    for (i, result) in report.per_question.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(if result.is_correct { "correct" } else { "incorrect" }),
            Cell::new(result.user_answer_text()),
            Cell::new(result.correct_answer_text()),
        ]);
    }
    println!("{table}");

    for (i, result) in report.per_question.iter().enumerate() {
        if let Some(explanation) = policy.explanation_for(result) {
            println!("{}. {}", i + 1, result.prompt);
            println!("   Explanation: {explanation}");
        }
    }
}

/// One line of user input, interpreted against the question on screen.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Dispatch(Command),
    Quit,
    Invalid(String),
}

fn parse_input(line: &str, view: &QuestionView) -> Input {
    match line {
        "n" | "next" => Input::Dispatch(Command::Navigate(Direction::Forward)),
        "p" | "prev" => Input::Dispatch(Command::Navigate(Direction::Back)),
        "s" | "submit" => Input::Dispatch(Command::Submit),
        "q" | "quit" => Input::Quit,
        other => match view
            .choices
            .iter()
            .find(|c| c.letter.eq_ignore_ascii_case(other))
        {
            Some(choice) => Input::Dispatch(Command::SelectAnswer {
                question_id: view.question_id.clone(),
                letter: choice.letter.clone(),
            }),
            None => Input::Invalid(format!("'{other}' is not a choice for this question")),
        },
    }
}

/// Bank indices from `--select`, in the order given.
fn parse_selection(select: &str) -> Result<Vec<usize>> {
    select
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| anyhow::anyhow!("invalid bank index: '{s}'"))
        })
        .collect()
}

pub async fn execute(
    sources: Vec<String>,
    select: Option<String>,
    report_path: Option<PathBuf>,
    html_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, store) = load_banks(sources, config_path).await?;

    if store.is_empty() {
        println!("{EMPTY_STATE}");
        return Ok(());
    }
    println!("{}", sets_table(&store));

    let indices = match &select {
        Some(s) => parse_selection(s)?,
        None => (0..store.len()).collect(),
    };

    let mut app = QuizApp::new(store);
    let mut surface = TerminalSurface {
        policy: config.explanations,
    };

    for index in indices {
        app.dispatch_to(
            Command::ToggleSet {
                index,
                selected: true,
            },
            &mut surface,
        )?;
    }
    app.dispatch_to(Command::StartQuiz, &mut surface)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let SessionState::InProgress { .. } = app.session_state() {
        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(view) = app.session().current_view() else {
            break;
        };

        match parse_input(line, &view) {
            Input::Dispatch(command) => {
                if let Err(e) = app.dispatch_to(command, &mut surface) {
                    println!("{e}");
                }
            }
            Input::Quit => break,
            Input::Invalid(message) => println!("{message}"),
        }
    }

    let Some(report) = app.report() else {
        println!("Quiz not submitted; no score recorded.");
        return Ok(());
    };

    if let Some(path) = &report_path {
        report.save_json(path)?;
        eprintln!("Results saved to: {}", path.display());
    }
    if let Some(path) = &html_path {
        write_html_report(report, config.explanations, path)?;
        eprintln!("HTML report: {}", path.display());
    }

    Ok(())
}
