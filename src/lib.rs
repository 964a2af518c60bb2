//! # Introduction
//!
//! Slidetty runs the classic sliding-window scan for the longest substring
//! without repeating characters, capturing a snapshot of the full algorithm
//! state at every step. The snapshot history is then navigated forward and
//! backward, or auto-played at an adjustable speed, through a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input string → Engine → Trace (snapshots) → Timeline → TUI
//! ```
//!
//! 1. [`input`] — validates demo strings and supplies presets and random
//!    inputs.
//! 2. [`engine`] — runs the scan once, deterministically, emitting a
//!    [`snapshot::Snapshot`] at each step.
//! 3. [`snapshot`] — the immutable step records and the [`snapshot::Trace`]
//!    history they form; window contents and the best substring are derived
//!    from the stored pointers, never stored twice.
//! 4. [`timeline`] — cursor navigation and cooperative auto-play over one
//!    trace.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Step cycle
//!
//! `Initialize` opens every trace; then `MoveRight`, `DetectDuplicate`,
//! `MoveLeft`, and `UpdateBest` recur as the window scans rightward, with
//! the duplicate pair and the best update skipped whenever they do not
//! apply.

pub mod engine;
pub mod input;
pub mod snapshot;
pub mod timeline;
pub mod ui;
