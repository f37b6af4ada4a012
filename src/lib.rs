//! TUI Memory (workspace facade crate).
//!
//! Re-exports the member crates under `tui_memory::{core,input,store,term,types}`
//! and holds the pieces only the binary needs: environment configuration and
//! the screen flow.

pub mod app;
pub mod config;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_store as store;
pub use tui_memory_term as term;
pub use tui_memory_types as types;

pub use app::{App, Screen};
pub use config::AppConfig;
