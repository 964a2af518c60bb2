//! Input string validation, preset examples, and random generation
//!
//! The engine itself is total over any string; these rules exist so the UI
//! rejects unhelpful demo inputs before a run starts.

use std::fmt;

use rand::Rng;

/// Longest accepted input
pub const MAX_LEN: usize = 50;

/// Preset demo strings, selectable from the UI
pub const EXAMPLES: &[&str] = &[
    "abcabcbb",
    "bbbbb",
    "pwwkew",
    "abcdefgh",
    "aab",
    "abcdefghijk",
    "zyxwvutsrqp",
];

/// Why an input string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    Empty,
    TooLong { len: usize },
    InvalidChar { ch: char },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Input must not be empty"),
            InputError::TooLong { len } => {
                write!(f, "Input is {} characters, maximum is {}", len, MAX_LEN)
            }
            InputError::InvalidChar { ch } => {
                write!(f, "Input must be lowercase letters only, found '{}'", ch)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Check that `input` is 1 to 50 lowercase ASCII letters.
pub fn validate(input: &str) -> Result<(), InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    let len = input.chars().count();
    if len > MAX_LEN {
        return Err(InputError::TooLong { len });
    }
    if let Some(ch) = input.chars().find(|c| !c.is_ascii_lowercase()) {
        return Err(InputError::InvalidChar { ch });
    }
    Ok(())
}

/// Generate a random lowercase demo string, 3 to 50 characters.
///
/// After the first couple of characters there is a 30% chance of repeating
/// one already emitted, so the duplicate-handling steps actually show up.
pub fn random_string(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(3..=MAX_LEN);
    let mut s = String::with_capacity(len);

    for i in 0..len {
        if i > 2 && rng.gen_bool(0.3) {
            let repeat = s.as_bytes()[rng.gen_range(0..s.len())];
            s.push(repeat as char);
        } else {
            s.push((b'a' + rng.gen_range(0..26u8)) as char);
        }
    }

    s
}
