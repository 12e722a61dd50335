//! The `quizrun validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizrun_core::parser::{find_bank_files, parse_question_set, validate_question_set};

pub fn execute(sources: Vec<PathBuf>) -> Result<()> {
    let mut files = Vec::new();
    for source in &sources {
        if source.is_dir() {
            files.extend(find_bank_files(source)?);
        } else {
            files.push(source.clone());
        }
    }
    anyhow::ensure!(!files.is_empty(), "no question bank files found");

    let mut total_warnings = 0;

    for file in &files {
        let set = parse_question_set(file)?;
        let plural = if set.len() == 1 { "" } else { "s" };
        println!("Bank: {} ({} question{plural})", set.name, set.len());

        let warnings = validate_question_set(&set);
        for w in &warnings {
            let prefix = w
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
