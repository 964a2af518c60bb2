// Integration tests for the trace engine

use slidetty::engine::generate_trace;
use slidetty::snapshot::{Phase, Snapshot, Trace};

/// Recompute the window from the stored pointers the long way and compare
/// against the derived accessors.
fn assert_derived_fields(input: &str, trace: &Trace) {
    let chars: Vec<char> = input.chars().collect();

    for snapshot in trace.iter() {
        let expected_window: String = match snapshot.right() {
            Some(right) => chars[snapshot.left()..=right].iter().collect(),
            None => String::new(),
        };
        assert_eq!(
            snapshot.window(),
            expected_window,
            "window mismatch for {:?} in {:?}",
            snapshot.phase(),
            input
        );
        assert_eq!(snapshot.window_len(), expected_window.chars().count());

        let expected_chars: std::collections::HashSet<char> = expected_window.chars().collect();
        let derived: std::collections::HashSet<char> =
            snapshot.window_chars().into_iter().collect();
        assert_eq!(derived, expected_chars);

        assert_eq!(snapshot.best_len(), snapshot.best_substring().chars().count());
        assert!(
            input.contains(snapshot.best_substring()),
            "best substring {:?} not found in input {:?}",
            snapshot.best_substring(),
            input
        );
    }
}

fn phases(trace: &Trace) -> Vec<Phase> {
    trace.iter().map(Snapshot::phase).collect()
}

#[test]
fn every_trace_opens_with_initialize() {
    for input in ["", "a", "abcabcbb", "bbbbb", "pwwkew", "dvdf", "zyxwvutsrqp"] {
        let trace = generate_trace(input);
        assert!(!trace.is_empty());
        let first = trace.get(0).unwrap();
        assert_eq!(first.phase(), Phase::Initialize);
        assert_eq!(first.window(), "");
        assert!(first.right().is_none());
    }
}

#[test]
fn empty_input_yields_a_single_snapshot() {
    let trace = generate_trace("");
    assert_eq!(trace.len(), 1);
    let snapshot = trace.get(0).unwrap();
    assert_eq!(snapshot.best_len(), 0);
    assert_eq!(snapshot.best_substring(), "");
}

#[test]
fn single_character_cadence() {
    let trace = generate_trace("a");
    assert_eq!(
        phases(&trace),
        vec![Phase::Initialize, Phase::MoveRight, Phase::UpdateBest]
    );
    let last = trace.last().unwrap();
    assert_eq!(last.best_substring(), "a");
    assert_eq!(last.best_len(), 1);
}

#[test]
fn derived_fields_always_match_pointers() {
    for input in ["", "a", "aa", "abcabcbb", "bbbbb", "pwwkew", "dvdf", "aab", "abba"] {
        let trace = generate_trace(input);
        assert_derived_fields(input, &trace);
    }
}

#[test]
fn best_length_is_non_decreasing() {
    for input in ["abcabcbb", "bbbbb", "pwwkew", "dvdf", "abba", "tmmzuxt"] {
        let trace = generate_trace(input);
        let mut previous = 0;
        for snapshot in trace.iter() {
            assert!(
                snapshot.best_len() >= previous,
                "best length shrank in {:?}",
                input
            );
            previous = snapshot.best_len();
        }
    }
}

#[test]
fn classic_example_abcabcbb() {
    let trace = generate_trace("abcabcbb");
    let last = trace.last().unwrap();
    assert_eq!(last.best_len(), 3);
    assert_eq!(last.best_substring(), "abc");
}

#[test]
fn all_identical_characters() {
    let trace = generate_trace("bbbbb");

    let last = trace.last().unwrap();
    assert_eq!(last.best_len(), 1);
    assert_eq!(last.best_substring(), "b");

    // First character: Initialize, MoveRight, UpdateBest. Every extension
    // after that triggers the DetectDuplicate/MoveLeft pair and nothing else.
    let mut expected = vec![Phase::Initialize, Phase::MoveRight, Phase::UpdateBest];
    for _ in 1..5 {
        expected.push(Phase::MoveRight);
        expected.push(Phase::DetectDuplicate { duplicate: 'b' });
        expected.push(Phase::MoveLeft);
    }
    assert_eq!(phases(&trace), expected);
}

#[test]
fn classic_example_pwwkew() {
    let trace = generate_trace("pwwkew");
    let last = trace.last().unwrap();
    assert_eq!(last.best_len(), 3);
    assert_eq!(last.best_substring(), "wke");
}

#[test]
fn left_pointer_jumps_past_duplicate() {
    // In "dvdf" the second 'd' sends the left pointer from 0 to 1 in one move
    let trace = generate_trace("dvdf");
    let last = trace.last().unwrap();
    assert_eq!(last.best_substring(), "vdf");

    let move_left = trace
        .iter()
        .find(|s| s.phase() == Phase::MoveLeft)
        .expect("no MoveLeft snapshot");
    assert_eq!(move_left.left(), 1);
    assert_eq!(move_left.window(), "vd");
}

#[test]
fn extension_snapshot_precedes_duplicate_detection() {
    // The window-extension snapshot is emitted first and still contains the
    // duplicate, then the detection snapshot carries the offending character
    let trace = generate_trace("aab");
    let all = phases(&trace);
    assert_eq!(
        all,
        vec![
            Phase::Initialize,
            Phase::MoveRight,
            Phase::UpdateBest,
            Phase::MoveRight,
            Phase::DetectDuplicate { duplicate: 'a' },
            Phase::MoveLeft,
            Phase::MoveRight,
            Phase::UpdateBest,
        ]
    );

    // The MoveRight before the detection shows the doubled window with a
    // deduplicated character set
    let doubled = trace.get(3).unwrap();
    assert_eq!(doubled.window(), "aa");
    assert_eq!(doubled.window_chars().len(), 1);
    assert_eq!(doubled.duplicate_char(), None);

    let detected = trace.get(4).unwrap();
    assert_eq!(detected.duplicate_char(), Some('a'));
    assert_eq!(detected.window(), "aa");

    let last = trace.last().unwrap();
    assert_eq!(last.best_substring(), "ab");
}

#[test]
fn first_window_wins_ties() {
    // "abab" has three windows of length 2; the earliest one is kept
    let trace = generate_trace("abab");
    let last = trace.last().unwrap();
    assert_eq!(last.best_substring(), "ab");
    assert_eq!(last.best_len(), 2);

    let updates = trace
        .iter()
        .filter(|s| s.phase() == Phase::UpdateBest)
        .count();
    assert_eq!(updates, 2, "only the first length-1 and length-2 windows update");
}

#[test]
fn non_ascii_input_uses_character_indices() {
    let trace = generate_trace("héllo");
    assert_derived_fields("héllo", &trace);

    let last = trace.last().unwrap();
    assert_eq!(last.best_substring(), "hél");
    assert_eq!(last.best_len(), 3);

    let detected = trace
        .iter()
        .find(|s| s.duplicate_char().is_some())
        .expect("no duplicate detected");
    assert_eq!(detected.duplicate_char(), Some('l'));
}

#[test]
fn traces_are_deterministic() {
    let a = generate_trace("pwwkew");
    let b = generate_trace("pwwkew");
    assert_eq!(a.len(), b.len());
    for (left, right) in a.iter().zip(b.iter()) {
        assert_eq!(left.phase(), right.phase());
        assert_eq!(left.left(), right.left());
        assert_eq!(left.right(), right.right());
        assert_eq!(left.best_substring(), right.best_substring());
    }
}
