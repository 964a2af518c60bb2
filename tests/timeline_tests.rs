// Integration tests for timeline navigation and auto-play
//
// Auto-play takes the current time as a parameter, so these tests drive a
// simulated clock by offsetting one base Instant; nothing here sleeps.

use std::time::{Duration, Instant};

use slidetty::snapshot::Phase;
use slidetty::timeline::{Timeline, TimelineEvent, TimelineState, BASE_TICK};

#[test]
fn new_timeline_is_idle() {
    let mut timeline = Timeline::new();
    assert_eq!(timeline.state(), TimelineState::Idle);
    assert!(timeline.current_snapshot().is_none());
    assert!(timeline.cursor().is_none());
    assert!(!timeline.can_step_back());
    assert!(!timeline.can_step_forward());
    assert!(!timeline.is_at_end());
    assert!(!timeline.step_forward());
    assert!(!timeline.step_backward());
}

#[test]
fn start_rewinds_to_the_first_snapshot() {
    let mut timeline = Timeline::new();
    timeline.start("abcabcbb");

    assert_eq!(timeline.state(), TimelineState::Ready);
    assert_eq!(timeline.cursor(), Some(0));
    assert!(!timeline.is_playing());
    assert_eq!(
        timeline.current_snapshot().unwrap().phase(),
        Phase::Initialize
    );
    assert!(!timeline.can_step_back());
    assert!(timeline.can_step_forward());
}

#[test]
fn start_replaces_any_previous_run() {
    let mut timeline = Timeline::new();
    timeline.start("pwwkew");
    while timeline.step_forward() {}
    assert!(timeline.is_at_end());

    timeline.start("aab");
    assert_eq!(timeline.cursor(), Some(0));
    assert_eq!(timeline.trace().input(), "aab");
    assert_eq!(timeline.state(), TimelineState::Ready);
}

#[test]
fn stepping_stops_at_both_ends() {
    let mut timeline = Timeline::new();
    timeline.start("aab");
    let total = timeline.trace().len();

    for expected in 1..total {
        assert!(timeline.step_forward());
        assert_eq!(timeline.cursor(), Some(expected));
    }
    assert!(timeline.is_at_end());

    // One more forward step fails and moves nothing
    assert!(!timeline.step_forward());
    assert_eq!(timeline.cursor(), Some(total - 1));

    for _ in 1..total {
        assert!(timeline.step_backward());
    }
    assert_eq!(timeline.cursor(), Some(0));
    assert!(!timeline.step_backward());
    assert_eq!(timeline.cursor(), Some(0));
}

#[test]
fn reset_returns_to_idle() {
    let mut timeline = Timeline::new();
    timeline.start("abcabcbb");
    timeline.step_forward();

    timeline.reset();
    assert_eq!(timeline.state(), TimelineState::Idle);
    assert!(timeline.cursor().is_none());
    assert!(timeline.current_snapshot().is_none());
    assert_eq!(timeline.trace().len(), 0);
}

#[test]
fn play_at_the_end_is_a_no_op() {
    let mut timeline = Timeline::new();
    timeline.start("aab");
    while timeline.step_forward() {}

    timeline.play(Instant::now());
    assert!(!timeline.is_playing());
    assert_eq!(timeline.state(), TimelineState::Ready);
}

#[test]
fn play_when_idle_is_a_no_op() {
    let mut timeline = Timeline::new();
    timeline.play(Instant::now());
    assert!(!timeline.is_playing());
    assert_eq!(timeline.state(), TimelineState::Idle);
}

#[test]
fn playback_advances_one_step_per_period() {
    let mut timeline = Timeline::new();
    timeline.start("aab");
    let total = timeline.trace().len(); // 8 snapshots, 7 steps to the end

    let t0 = Instant::now();
    timeline.play(t0);
    assert_eq!(timeline.state(), TimelineState::Playing);

    // Nothing fires before the first period has elapsed
    assert_eq!(timeline.tick(t0 + BASE_TICK / 2), None);
    assert_eq!(timeline.cursor(), Some(0));

    let mut ended = 0;
    for k in 1..total {
        let event = timeline.tick(t0 + BASE_TICK * k as u32);
        if k < total - 1 {
            assert_eq!(event, Some(TimelineEvent::StateChanged));
        } else {
            assert_eq!(event, Some(TimelineEvent::PlaybackEnded));
            ended += 1;
        }
        assert_eq!(timeline.cursor(), Some(k));
    }

    assert_eq!(ended, 1);
    assert_eq!(timeline.state(), TimelineState::Ready);
    assert!(timeline.is_at_end());

    // Exhausted playback stays quiet
    assert_eq!(timeline.tick(t0 + BASE_TICK * (total as u32 + 1)), None);
}

#[test]
fn late_poll_catches_up_without_extra_steps() {
    let mut timeline = Timeline::new();
    timeline.start("aab");
    let total = timeline.trace().len();

    let t0 = Instant::now();
    timeline.play(t0);

    // A single very late poll performs every elapsed step, ends playback,
    // and reports the end exactly once
    let event = timeline.tick(t0 + BASE_TICK * total as u32);
    assert_eq!(event, Some(TimelineEvent::PlaybackEnded));
    assert!(timeline.is_at_end());
    assert_eq!(timeline.state(), TimelineState::Ready);
}

#[test]
fn partial_catch_up_steps_once_per_elapsed_period() {
    let mut timeline = Timeline::new();
    timeline.start("abcabcbb");

    let t0 = Instant::now();
    timeline.play(t0);

    // Three periods elapsed in one poll: exactly three steps
    assert_eq!(
        timeline.tick(t0 + BASE_TICK * 3),
        Some(TimelineEvent::StateChanged)
    );
    assert_eq!(timeline.cursor(), Some(3));
    assert!(timeline.is_playing());
}

#[test]
fn pause_cancels_the_pending_tick() {
    let mut timeline = Timeline::new();
    timeline.start("abcabcbb");

    let t0 = Instant::now();
    timeline.play(t0);
    timeline.pause();

    assert_eq!(timeline.tick(t0 + BASE_TICK * 10), None);
    assert_eq!(timeline.cursor(), Some(0));
    assert_eq!(timeline.state(), TimelineState::Ready);
}

#[test]
fn manual_stepping_pauses_playback() {
    let mut timeline = Timeline::new();
    timeline.start("abcabcbb");

    let t0 = Instant::now();
    timeline.play(t0);
    assert!(timeline.step_forward());

    assert!(!timeline.is_playing());
    assert_eq!(timeline.tick(t0 + BASE_TICK * 10), None);
    assert_eq!(timeline.cursor(), Some(1));
}

#[test]
fn start_and_reset_cancel_playback() {
    let t0 = Instant::now();

    let mut timeline = Timeline::new();
    timeline.start("abcabcbb");
    timeline.play(t0);
    timeline.start("pwwkew");
    assert!(!timeline.is_playing());
    assert_eq!(timeline.tick(t0 + BASE_TICK * 10), None);
    assert_eq!(timeline.cursor(), Some(0));

    timeline.play(t0);
    timeline.reset();
    assert!(!timeline.is_playing());
    assert_eq!(timeline.tick(t0 + BASE_TICK * 10), None);
    assert_eq!(timeline.state(), TimelineState::Idle);
}

#[test]
fn toggle_play_pause_flips_state() {
    let mut timeline = Timeline::new();
    timeline.start("abcabcbb");

    let t0 = Instant::now();
    timeline.toggle_play_pause(t0);
    assert!(timeline.is_playing());
    timeline.toggle_play_pause(t0);
    assert!(!timeline.is_playing());
}

#[test]
fn speed_change_reschedules_the_tick() {
    let mut timeline = Timeline::new();
    timeline.start("abcdefgh");

    let t0 = Instant::now();
    timeline.play(t0);

    // One step at 1.0x
    assert_eq!(
        timeline.tick(t0 + Duration::from_millis(1000)),
        Some(TimelineEvent::StateChanged)
    );
    assert_eq!(timeline.cursor(), Some(1));

    // Doubling the speed halves the period, measured from the change
    timeline.set_speed(2.0, t0 + Duration::from_millis(1000));
    assert_eq!(timeline.speed(), 2.0);
    assert_eq!(timeline.tick(t0 + Duration::from_millis(1400)), None);
    assert_eq!(
        timeline.tick(t0 + Duration::from_millis(1500)),
        Some(TimelineEvent::StateChanged)
    );
    assert_eq!(timeline.cursor(), Some(2));
    assert_eq!(
        timeline.tick(t0 + Duration::from_millis(2000)),
        Some(TimelineEvent::StateChanged)
    );
    assert_eq!(timeline.cursor(), Some(3));
}

#[test]
fn invalid_speed_values_are_ignored() {
    let mut timeline = Timeline::new();
    timeline.start("abcabcbb");
    let t0 = Instant::now();

    timeline.set_speed(0.0, t0);
    timeline.set_speed(-1.5, t0);
    timeline.set_speed(f64::NAN, t0);
    timeline.set_speed(f64::INFINITY, t0);
    assert_eq!(timeline.speed(), 1.0);

    timeline.set_speed(0.5, t0);
    assert_eq!(timeline.speed(), 0.5);
}

#[test]
fn speed_setting_survives_a_new_run() {
    let mut timeline = Timeline::new();
    let t0 = Instant::now();
    timeline.start("abcabcbb");
    timeline.set_speed(2.0, t0);

    timeline.start("pwwkew");
    assert_eq!(timeline.speed(), 2.0);
}
