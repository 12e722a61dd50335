//! Configuration loading and provider factory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizrun_core::scoring::ExplanationPolicy;
use quizrun_core::traits::BankProvider;

use crate::file::FileProvider;
use crate::http::{HttpProvider, DEFAULT_TIMEOUT_SECS};
use crate::router::SourceRouter;

/// Top-level quizrun configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizrunConfig {
    /// Bank locators (file paths or HTTP URLs), in display order.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Timeout for HTTP sources.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
    /// When result views show explanations.
    #[serde(default)]
    pub explanations: ExplanationPolicy,
}

fn default_http_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for QuizrunConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            http_timeout_secs: default_http_timeout(),
            explanations: ExplanationPolicy::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizrun.toml` in the current directory
/// 2. `~/.config/quizrun/config.toml`
///
/// `QUIZRUN_SOURCES` (comma-separated) replaces the configured sources.
pub fn load_config() -> Result<QuizrunConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizrunConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizrun.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            toml::from_str::<QuizrunConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizrunConfig::default(),
    };

    if let Ok(sources) = std::env::var("QUIZRUN_SOURCES") {
        config.sources = split_sources(&sources);
    }

    config.sources = config
        .sources
        .iter()
        .map(|s| resolve_env_vars(s))
        .collect();

    Ok(config)
}

/// Split a comma-separated source list, dropping empty entries.
pub fn split_sources(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizrun"))
}

/// Create the provider used to fetch configured sources.
pub fn create_provider(config: &QuizrunConfig) -> Result<Box<dyn BankProvider>> {
    let http = HttpProvider::new(Duration::from_secs(config.http_timeout_secs))?;
    Ok(Box::new(SourceRouter::new(FileProvider::new(), http)))
}
