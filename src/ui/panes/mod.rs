//! TUI pane rendering modules
//!
//! Stateless render functions for each visible pane, one module per pane:
//!
//! - [`input_bar`]: the input string under edit or currently loaded
//! - [`step`]: current phase label, step counter, and explanation
//! - [`string`]: the input string as character cells with window highlight
//!   and pointer markers
//! - [`window`]: the current window substring and its character set
//! - [`answer`]: the best duplicate-free substring found so far
//! - [`status`]: status bar with keybindings and playback indicators
//!
//! Every pane takes the current [`Snapshot`](crate::snapshot::Snapshot) (or
//! `None` when idle) and draws from it alone; panes never mutate algorithm
//! or timeline state.

pub mod answer;
pub mod input_bar;
pub mod status;
pub mod step;
pub mod string;
pub mod window;

// Re-export render functions for convenience
pub use answer::render_answer_pane;
pub use input_bar::render_input_bar;
pub use status::render_status_bar;
pub use step::render_step_pane;
pub use string::render_string_pane;
pub use window::render_window_pane;
