pub mod import;
pub mod init;
pub mod list;
pub mod run;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use quizrun_core::store::BankStore;
use quizrun_providers::{create_provider, load_config_from, QuizrunConfig};

pub(crate) const EMPTY_STATE: &str =
    "No question banks found. Add JSON banks to question_banks/ or run `quizrun init`.";

/// Load the config and every bank it (or `--source`) points at.
///
/// Sources that fail are logged by the store and left out of it.
pub(crate) async fn load_banks(
    sources: Vec<String>,
    config_path: Option<PathBuf>,
) -> Result<(QuizrunConfig, BankStore)> {
    let mut config = load_config_from(config_path.as_deref())?;
    if !sources.is_empty() {
        config.sources = sources;
    }

    let provider = create_provider(&config)?;
    let store = BankStore::load(provider.as_ref(), &config.sources).await;

    Ok((config, store))
}

pub(crate) fn sets_table(store: &BankStore) -> comfy_table::Table {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Question bank", "Questions"]);
    for summary in store.summaries() {
        table.add_row(vec![
            Cell::new(summary.index),
            Cell::new(&summary.name),
            Cell::new(summary.question_count),
        ]);
    }
    table
}
