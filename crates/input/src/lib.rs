//! Terminal input module.
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into [`crate::types::GameAction`] for the game screen, tracks the
//! board cursor, and edits the login form.

pub mod cursor;
pub mod form;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::BoardCursor;
pub use form::{FormEvent, FormField, LoginForm, MAX_FIELD_CHARS};
pub use map::{handle_key_event, is_interrupt, should_quit};
