// Snapshot types for replayable algorithm traces

use std::sync::Arc;

use rustc_hash::FxHashSet;

/// Which step of the sliding-window cycle a snapshot was captured at.
///
/// `Initialize` appears exactly once, at the head of every trace. The other
/// four recur as the window scans rightward; `DetectDuplicate`/`MoveLeft`
/// only appear when the newly included character is already in the window,
/// and `UpdateBest` only when the window grows past the best known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pointers parked before the first character, window empty
    Initialize,
    /// Right pointer advanced, window extended by one character
    MoveRight,
    /// The character just included already occurs inside the window
    DetectDuplicate { duplicate: char },
    /// Left pointer advanced to one past the duplicate's previous position
    MoveLeft,
    /// Window length exceeded the best known length
    UpdateBest,
}

impl Phase {
    /// Short label for status displays
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Initialize => "Initialize window",
            Phase::MoveRight => "Move right pointer",
            Phase::DetectDuplicate { .. } => "Duplicate detected",
            Phase::MoveLeft => "Move left pointer",
            Phase::UpdateBest => "Update best substring",
        }
    }

    /// One-sentence explanation of what happens during this step
    pub fn explanation(&self) -> &'static str {
        match self {
            Phase::Initialize => {
                "Set up the window: both pointers start at the beginning of the string."
            }
            Phase::MoveRight => {
                "The right pointer moves one position, extending the window by one character."
            }
            Phase::DetectDuplicate { .. } => {
                "The new character already exists in the window, so the left pointer must move."
            }
            Phase::MoveLeft => {
                "The left pointer jumps to one past the duplicate's previous position, restoring a duplicate-free window."
            }
            Phase::UpdateBest => {
                "The current window is longer than any seen before; record it as the best."
            }
        }
    }
}

/// One immutable record of algorithm state at a single step.
///
/// The window substring, its character set, and the best substring are
/// derived from the stored pointers on access, so they cannot drift from
/// the pointer state they describe. All indices are character indices, not
/// byte offsets; each Unicode scalar value counts as one character.
#[derive(Debug, Clone)]
pub struct Snapshot {
    input: Arc<str>,
    left: usize,
    /// `None` until the scan has included the first character
    right: Option<usize>,
    best_start: usize,
    best_len: usize,
    phase: Phase,
}

impl Snapshot {
    pub(crate) fn new(
        input: Arc<str>,
        left: usize,
        right: Option<usize>,
        best_start: usize,
        best_len: usize,
        phase: Phase,
    ) -> Self {
        Snapshot {
            input,
            left,
            right,
            best_start,
            best_len,
            phase,
        }
    }

    /// The full input string this snapshot was captured from
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Left window bound as a character index
    pub fn left(&self) -> usize {
        self.left
    }

    /// Right window bound as a character index, `None` before the scan starts
    pub fn right(&self) -> Option<usize> {
        self.right
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The duplicated character, when this snapshot is a duplicate detection
    pub fn duplicate_char(&self) -> Option<char> {
        match self.phase {
            Phase::DetectDuplicate { duplicate } => Some(duplicate),
            _ => None,
        }
    }

    /// Whether the character at `index` lies inside the current window
    pub fn in_window(&self, index: usize) -> bool {
        match self.right {
            Some(right) => index >= self.left && index <= right,
            None => false,
        }
    }

    /// Number of characters in the current window
    pub fn window_len(&self) -> usize {
        match self.right {
            Some(right) => right - self.left + 1,
            None => 0,
        }
    }

    /// The current window substring
    pub fn window(&self) -> &str {
        match self.right {
            Some(right) => char_slice(&self.input, self.left, right + 1),
            None => "",
        }
    }

    /// Set of unique characters in the current window
    pub fn window_chars(&self) -> FxHashSet<char> {
        self.window().chars().collect()
    }

    /// Length of the best duplicate-free substring found so far
    pub fn best_len(&self) -> usize {
        self.best_len
    }

    /// The best duplicate-free substring found so far
    pub fn best_substring(&self) -> &str {
        char_slice(&self.input, self.best_start, self.best_start + self.best_len)
    }
}

/// The complete ordered snapshot history for one input string.
///
/// Produced once by [`generate_trace`](crate::engine::generate_trace) and
/// never mutated afterwards; navigation happens through the
/// [`Timeline`](crate::timeline::Timeline), which replaces the whole trace
/// when the input changes.
#[derive(Debug, Clone)]
pub struct Trace {
    input: Arc<str>,
    snapshots: Vec<Snapshot>,
}

impl Trace {
    pub(crate) fn with_input(input: Arc<str>) -> Self {
        Trace {
            input,
            snapshots: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// The input string this trace was generated from
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The final snapshot, holding the completed result
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Iterate over all snapshots in order
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }
}

impl Default for Trace {
    fn default() -> Self {
        Trace::with_input(Arc::from(""))
    }
}

/// Slice a string by character indices (`start..end`, end exclusive).
///
/// Indices past the end of the string clamp to the end, so an empty range
/// anywhere yields the empty string.
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let from = byte_offset(s, start);
    let to = byte_offset(s, end);
    &s[from..to]
}

fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}
