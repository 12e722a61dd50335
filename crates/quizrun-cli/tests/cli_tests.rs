//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const READING: &str = "../../question_banks/reading.json";
const MATH: &str = "../../question_banks/math.json";

/// A `quizrun` command isolated from any user config.
fn quizrun(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizrun").unwrap();
    cmd.env("HOME", home.path()).env_remove("QUIZRUN_SOURCES");
    cmd
}

#[test]
fn validate_bank_files() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .arg("validate")
        .arg("--source")
        .arg(READING)
        .arg("--source")
        .arg(MATH)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading and Writing (2 questions)"))
        .stdout(predicate::str::contains("Math (1 question)"))
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn validate_directory() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .arg("validate")
        .arg("--source")
        .arg("../../question_banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading and Writing"))
        .stdout(predicate::str::contains("Math"));
}

#[test]
fn validate_reports_warnings() {
    let home = TempDir::new().unwrap();
    let bank = home.path().join("odd.json");
    std::fs::write(
        &bank,
        r#"{"set_name": "Odd", "questions": [
            {"id": 1, "question": "Pick", "choices": {"A": "x", "B": "y"}, "correct_answer": "E"}
        ]}"#,
    )
    .unwrap();

    quizrun(&home)
        .arg("validate")
        .arg("--source")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] WARNING"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .arg("validate")
        .arg("--source")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn list_shows_loaded_banks() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .arg("list")
        .arg("--source")
        .arg(format!("{READING},{MATH}"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading and Writing"))
        .stdout(predicate::str::contains("2 bank(s), 3 question(s) in total."));
}

#[test]
fn list_skips_failing_source() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .arg("list")
        .arg("--source")
        .arg(format!("{READING},missing.json,{MATH}"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 bank(s)"))
        .stderr(predicate::str::contains("skipping source").count(1));
}

#[test]
fn list_with_no_banks_shows_empty_state() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .current_dir(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No question banks found"));
}

#[test]
fn list_reads_sources_from_env() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .env("QUIZRUN_SOURCES", MATH)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 bank(s), 1 question(s) in total."));
}

#[test]
fn run_scores_answers_from_stdin() {
    let home = TempDir::new().unwrap();
    let report = home.path().join("out/report.json");
    let html = home.path().join("out/report.html");

    quizrun(&home)
        .arg("run")
        .arg("--source")
        .arg(format!("{READING},{MATH}"))
        .arg("--report")
        .arg(&report)
        .arg("--html")
        .arg(&html)
        .write_stdin("B\nn\nC\nn\nb\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 questions selected"))
        .stdout(predicate::str::contains("Question 1 of 3"))
        .stdout(predicate::str::contains("Score: 67% (2 of 3 correct)"))
        .stdout(predicate::str::contains("Explanation: An approach"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["correct_count"], 2);
    assert_eq!(json["total_count"], 3);
    assert_eq!(json["per_question"][1]["is_correct"], false);

    let page = std::fs::read_to_string(&html).unwrap();
    assert!(page.contains("67%"));
}

#[test]
fn run_honors_selection_order() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .arg("run")
        .arg("--source")
        .arg(format!("{READING},{MATH}"))
        .arg("--select")
        .arg("1")
        .write_stdin("B\ns\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 question selected"))
        .stdout(predicate::str::contains("slope"))
        .stdout(predicate::str::contains("Score: 100%"));
}

#[test]
fn run_answers_lowercase_choice_keys() {
    let home = TempDir::new().unwrap();
    let bank = home.path().join("lower.json");
    std::fs::write(
        &bank,
        r#"{"set_name": "Lower", "questions": [
            {"id": 1, "question": "Pick", "choices": {"a": "x", "b": "y"}, "correct_answer": "b"}
        ]}"#,
    )
    .unwrap();

    quizrun(&home)
        .arg("run")
        .arg("--source")
        .arg(&bank)
        .write_stdin("B
s
")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 100%"));
}

#[test]
fn run_rejects_letters_outside_choices() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .arg("run")
        .arg("--source")
        .arg(MATH)
        .write_stdin("E\ns\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'E' is not a choice"))
        .stdout(predicate::str::contains("Score: 0%"))
        .stdout(predicate::str::contains("No answer"));
}

#[test]
fn run_quit_records_no_score() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .arg("run")
        .arg("--source")
        .arg(READING)
        .write_stdin("A\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no score recorded"))
        .stdout(predicate::str::contains("Score:").not());
}

#[test]
fn run_with_invalid_selection_fails() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .arg("run")
        .arg("--source")
        .arg(MATH)
        .arg("--select")
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn import_writes_bank() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dump.txt");
    let output = dir.path().join("banks/imported.json");
    std::fs::write(
        &input,
        "Question ID 1a2b\nID: 1a2b\nWhat is 2 + 2?\nA. 3\nB. 4\nC. 5\nD. 6\n\
         ID: 1a2b Answer\nCorrect Answer: B\nRationale\nTwo plus two is four.\n\
         Question Difficulty: Easy\n",
    )
    .unwrap();

    quizrun(&dir)
        .arg("import")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--set-name")
        .arg("Arithmetic")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 question(s)"));

    quizrun(&dir)
        .arg("validate")
        .arg("--source")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Arithmetic (1 question)"))
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn import_without_questions_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dump.txt");
    std::fs::write(&input, "nothing here").unwrap();

    quizrun(&dir)
        .arg("import")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no questions found"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizrun(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizrun.toml"))
        .stdout(predicate::str::contains("Created question_banks/sample.json"));

    assert!(dir.path().join("quizrun.toml").exists());

    quizrun(&dir)
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample Questions"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizrun(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizrun(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    quizrun(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple-choice quiz runner"));
}
