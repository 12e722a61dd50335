//! The `quizrun import` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizrun_core::import::parse_question_dump;

pub fn execute(input: PathBuf, output: Option<PathBuf>, set_name: String) -> Result<()> {
    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let set = parse_question_dump(&text, &set_name)?;
    anyhow::ensure!(
        !set.is_empty(),
        "no questions found in {}",
        input.display()
    );

    let json = serde_json::to_string_pretty(&set).context("failed to serialize bank")?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "Imported {} question(s) into {}",
                set.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
