//! Interactive TUI interface
//!
//! A terminal form for entering constraints, with a results panel whose words
//! can be copied to the clipboard.

mod app;
mod rendering;

pub use app::{App, Field, FormInputs, Message, MessageStyle, TOAST_DURATION, Toast, run_tui};
pub use rendering::{AppLayout, layout, result_index_at, ui, visible_offset};
