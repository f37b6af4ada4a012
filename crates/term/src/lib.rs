//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It avoids widget toolkits
//! and renders each screen into a plain framebuffer that is then diffed and
//! flushed to the terminal.
//!
//! Views are pure: they take a snapshot (or the login form, or the result)
//! and a viewport, and fill a [`FrameBuffer`]. Only [`TerminalRenderer`]
//! touches the terminal.

pub mod fb;
pub mod game_view;
pub mod login_view;
pub mod render_throttle;
pub mod renderer;
pub mod result_view;
pub mod theme;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use login_view::LoginView;
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, terminal_size, TerminalRenderer};
pub use result_view::ResultScreen;
