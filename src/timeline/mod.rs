//! Navigation and auto-play over one generated trace
//!
//! The [`Timeline`] owns the snapshot history produced by the engine, the
//! cursor into it, and the playback state. All mutation goes through its
//! methods; renderers only read.
//!
//! # Playback model
//!
//! There is no timer thread. Auto-play is cooperative: the embedding event
//! loop calls [`Timeline::tick`] with the current time (the TUI does this
//! from its poll loop), and the timeline steps forward once per elapsed
//! period. At most one ticker is pending at any moment; `pause`, manual
//! stepping, `reset`, and `start` all cancel it, so a tick arriving after
//! cancellation finds no active ticker and does nothing. Changing the speed
//! while playing cancels and reschedules at the new period, otherwise the
//! displayed speed and the actual cadence would disagree.
//!
//! Time is always passed in rather than read from a global clock, which
//! keeps playback deterministic under test.

use std::time::{Duration, Instant};

use crate::engine::generate_trace;
use crate::snapshot::{Snapshot, Trace};

/// Auto-play period at 1x speed
pub const BASE_TICK: Duration = Duration::from_millis(1000);

/// Coarse controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    /// No trace loaded
    Idle,
    /// Trace loaded, not advancing
    Ready,
    /// Trace loaded, auto-advancing
    Playing,
}

/// Notification surfaced to the embedding event loop by [`Timeline::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    /// The cursor moved during auto-play
    StateChanged,
    /// Auto-play reached the final snapshot and stopped
    PlaybackEnded,
}

/// Pending auto-advance schedule; exists only while playing
#[derive(Debug, Clone, Copy)]
struct Ticker {
    period: Duration,
    due: Instant,
}

/// Owns one trace, the cursor into it, and the playback state.
#[derive(Debug)]
pub struct Timeline {
    trace: Trace,
    cursor: Option<usize>,
    playing: bool,
    speed: f64,
    ticker: Option<Ticker>,
}

impl Timeline {
    pub fn new() -> Self {
        Timeline {
            trace: Trace::default(),
            cursor: None,
            playing: false,
            speed: 1.0,
            ticker: None,
        }
    }

    /// Generate a fresh trace for `input` and rewind to its first snapshot.
    ///
    /// Any previous trace, cursor position, and pending tick are discarded
    /// wholesale; the speed setting carries over.
    pub fn start(&mut self, input: &str) {
        self.pause();
        self.trace = generate_trace(input);
        self.cursor = Some(0);
    }

    /// Drop the trace entirely and return to [`TimelineState::Idle`].
    pub fn reset(&mut self) {
        self.pause();
        self.trace = Trace::default();
        self.cursor = None;
    }

    /// Advance the cursor by one. Pauses playback.
    ///
    /// Returns `false` (leaving the cursor unchanged) when already at the
    /// final snapshot or no trace is loaded.
    pub fn step_forward(&mut self) -> bool {
        self.pause();
        self.advance()
    }

    /// Move the cursor back by one. Pauses playback.
    ///
    /// Returns `false` (leaving the cursor unchanged) when already at the
    /// first snapshot or no trace is loaded.
    pub fn step_backward(&mut self) -> bool {
        self.pause();
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                true
            }
            _ => false,
        }
    }

    /// Begin auto-play, scheduling the first tick one period after `now`.
    ///
    /// A no-op when there is nothing left to play: at the end of the trace
    /// (or with no trace loaded) the state stays paused.
    pub fn play(&mut self, now: Instant) {
        if self.playing || !self.can_step_forward() {
            return;
        }
        self.playing = true;
        self.schedule(now);
    }

    /// Stop auto-play and cancel the pending tick.
    pub fn pause(&mut self) {
        self.playing = false;
        self.ticker = None;
    }

    pub fn toggle_play_pause(&mut self, now: Instant) {
        if self.playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Set the playback speed multiplier.
    ///
    /// Non-positive or non-finite values are ignored. While playing, the
    /// pending tick is rescheduled so the new period takes effect
    /// immediately rather than after the stale one fires.
    pub fn set_speed(&mut self, multiplier: f64, now: Instant) {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return;
        }
        self.speed = multiplier;
        if self.playing {
            self.schedule(now);
        }
    }

    /// Drive auto-play from the embedding event loop.
    ///
    /// Performs one forward step per period elapsed since the last due time,
    /// so a late poll catches up without skewing the cadence. Returns
    /// [`TimelineEvent::PlaybackEnded`] exactly once when the final snapshot
    /// is reached (auto-play stops), [`TimelineEvent::StateChanged`] when
    /// the cursor moved, and `None` when nothing was due, including any
    /// tick arriving after cancellation.
    pub fn tick(&mut self, now: Instant) -> Option<TimelineEvent> {
        let (period, mut due) = match self.ticker {
            Some(t) if self.playing => (t.period, t.due),
            _ => return None,
        };

        let mut stepped = false;
        while due <= now {
            due += period;
            if !self.advance() {
                self.pause();
                return None;
            }
            stepped = true;
            if self.is_at_end() {
                self.pause();
                return Some(TimelineEvent::PlaybackEnded);
            }
        }

        if let Some(t) = self.ticker.as_mut() {
            t.due = due;
        }
        stepped.then_some(TimelineEvent::StateChanged)
    }

    pub fn state(&self) -> TimelineState {
        if self.cursor.is_none() {
            TimelineState::Idle
        } else if self.playing {
            TimelineState::Playing
        } else {
            TimelineState::Ready
        }
    }

    /// The snapshot under the cursor, `None` when idle
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|c| self.trace.get(c))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn can_step_back(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_step_forward(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.trace.len())
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 == self.trace.len())
    }

    fn advance(&mut self) -> bool {
        match self.cursor {
            Some(c) if c + 1 < self.trace.len() => {
                self.cursor = Some(c + 1);
                true
            }
            _ => false,
        }
    }

    fn schedule(&mut self, now: Instant) {
        let period = BASE_TICK.div_f64(self.speed);
        self.ticker = Some(Ticker {
            period,
            due: now + period,
        });
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Timeline::new()
    }
}
