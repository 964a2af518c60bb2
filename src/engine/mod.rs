//! Trace generation for the sliding-window scan
//!
//! The engine runs the longest-substring-without-repeating-characters
//! algorithm once over the input and records every intermediate state as a
//! [`Snapshot`]. The resulting [`Trace`] is the complete history; nothing
//! is streamed and nothing is random, so the same input always yields the
//! same trace.
//!
//! # Snapshot cadence
//!
//! One `Initialize` snapshot opens every trace. Then, for each right-pointer
//! position in scan order:
//!
//! 1. `MoveRight` — the window extended to include the new character.
//! 2. `DetectDuplicate` + `MoveLeft` — only when the new character already
//!    occurs inside the window; the left pointer jumps past its previous
//!    occurrence.
//! 3. `UpdateBest` — only when the resolved window strictly exceeds the
//!    best length seen so far (ties keep the earlier window).

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::snapshot::{Phase, Snapshot, Trace};

/// Run the sliding-window scan over `input` and capture every step.
///
/// Total over any string: the empty string yields a trace holding a single
/// `Initialize` snapshot. Characters are Unicode scalar values treated
/// atomically; no normalization is performed.
pub fn generate_trace(input: &str) -> Trace {
    let mut scan = Scan::new(input);
    scan.emit(Phase::Initialize);

    let chars: Vec<char> = input.chars().collect();

    // Most recent index of each character. Entries left of the window are
    // stale rather than deleted; the `>= left` check filters them out.
    let mut last_seen: FxHashMap<char, usize> = FxHashMap::default();

    for (right, &ch) in chars.iter().enumerate() {
        scan.right = Some(right);
        scan.emit(Phase::MoveRight);

        if let Some(&prev) = last_seen.get(&ch) {
            if prev >= scan.left {
                scan.emit(Phase::DetectDuplicate { duplicate: ch });
                scan.left = prev + 1;
                scan.emit(Phase::MoveLeft);
            }
        }

        let window_len = right - scan.left + 1;
        if window_len > scan.best_len {
            scan.best_start = scan.left;
            scan.best_len = window_len;
            scan.emit(Phase::UpdateBest);
        }

        last_seen.insert(ch, right);
    }

    scan.trace
}

/// Running scan state; every `emit` freezes it into one snapshot.
struct Scan {
    input: Arc<str>,
    trace: Trace,
    left: usize,
    right: Option<usize>,
    best_start: usize,
    best_len: usize,
}

impl Scan {
    fn new(input: &str) -> Self {
        let input: Arc<str> = Arc::from(input);
        Scan {
            trace: Trace::with_input(input.clone()),
            input,
            left: 0,
            right: None,
            best_start: 0,
            best_len: 0,
        }
    }

    fn emit(&mut self, phase: Phase) {
        self.trace.push(Snapshot::new(
            self.input.clone(),
            self.left,
            self.right,
            self.best_start,
            self.best_len,
            phase,
        ));
    }
}
