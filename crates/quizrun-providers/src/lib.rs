//! quizrun-providers — Question bank providers.
//!
//! Implements the `BankProvider` trait for local files and HTTP URLs, plus
//! a router that picks between them by locator, and loads the quizrun
//! configuration.

pub mod config;
pub mod file;
pub mod http;
pub mod mock;
pub mod router;

pub use config::{create_provider, load_config, load_config_from, QuizrunConfig};
pub use file::FileProvider;
pub use http::HttpProvider;
pub use router::SourceRouter;
