//! quizrun-core — Question banks, selection, quiz sessions, and scoring.
//!
//! This crate holds the state-bearing part of quizrun: the bank store,
//! the selection tracker, the quiz session state machine, and the scorer.
//! Rendering and fetching are left to collaborators behind the
//! [`traits::BankProvider`] and [`app::DisplaySurface`] traits.

pub mod app;
pub mod error;
pub mod import;
pub mod model;
pub mod parser;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod store;
pub mod traits;
