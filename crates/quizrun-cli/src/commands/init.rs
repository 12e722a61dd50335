//! The `quizrun init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizrun.toml
    if std::path::Path::new("quizrun.toml").exists() {
        println!("quizrun.toml already exists, skipping.");
    } else {
        std::fs::write("quizrun.toml", SAMPLE_CONFIG)?;
        println!("Created quizrun.toml");
    }

    // Create sample bank
    std::fs::create_dir_all("question_banks")?;
    let sample_path = std::path::Path::new("question_banks/sample.json");
    if sample_path.exists() {
        println!("question_banks/sample.json already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_BANK)?;
        println!("Created question_banks/sample.json");
    }

    println!("\nNext steps:");
    println!("  1. Add question banks to question_banks/ and list them in quizrun.toml");
    println!("  2. Run: quizrun validate --source question_banks");
    println!("  3. Run: quizrun run");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizrun configuration

# Question banks to load: local paths or http(s) URLs.
# ${VAR} references are read from the environment.
sources = ["question_banks/sample.json"]

http_timeout_secs = 30

# When to show explanations in results: incorrect, always, never
explanations = "incorrect"
"#;

const SAMPLE_BANK: &str = r#"{
  "set_name": "Sample Questions",
  "questions": [
    {
      "id": 1,
      "question": "Which choice completes the text with the most logical transition? The committee reviewed the proposal for weeks. ______, it approved the plan without changes.",
      "choices": {
        "A": "Nevertheless",
        "B": "Ultimately",
        "C": "For example",
        "D": "Similarly"
      },
      "correct_answer": "B",
      "explanation": "\"Ultimately\" signals the outcome of the long review."
    },
    {
      "id": 2,
      "question": "If 3x + 5 = 20, what is the value of x?",
      "choices": {
        "A": "3",
        "B": "5",
        "C": "15",
        "D": "25"
      },
      "correct_answer": "B",
      "explanation": "Subtract 5 from both sides to get 3x = 15, so x = 5."
    },
    {
      "id": 3,
      "question": "Which choice best describes the function of the underlined sentence in the passage as a whole?",
      "choices": {
        "A": "It introduces a claim the passage later disputes.",
        "B": "It summarizes the findings described earlier.",
        "C": "It offers a personal anecdote.",
        "D": "It defines a key term."
      },
      "correct_answer": "B"
    }
  ]
}
"#;
