// folio library.
// Timed cache, guarded fetch, GitHub client, and the TUI built on them.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod github;
pub mod monitor;
pub mod projects;
pub mod session;
pub mod state;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{FolioError, Result};
