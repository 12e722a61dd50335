//! The `quizrun list` command.

use std::path::PathBuf;

use anyhow::Result;

use super::{load_banks, sets_table, EMPTY_STATE};

pub async fn execute(sources: Vec<String>, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = load_banks(sources, config_path).await?;

    if store.is_empty() {
        println!("{EMPTY_STATE}");
        return Ok(());
    }

    println!("{}", sets_table(&store));
    println!(
        "{} bank(s), {} question(s) in total.",
        store.len(),
        store.total_questions()
    );

    Ok(())
}
