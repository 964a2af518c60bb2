//! Main TUI application state and logic

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::input::{self, InputError, EXAMPLES};
use crate::timeline::{Timeline, TimelineEvent};

/// Speed multipliers cycled through with `+`/`-`
const SPEEDS: [f64; 4] = [0.5, 1.0, 1.5, 2.0];

/// The main application state
pub struct App {
    /// Navigation and playback over the current trace
    pub timeline: Timeline,

    /// Edit buffer while the input bar is focused
    pub edit_buffer: String,

    /// Whether the input bar is being edited
    pub is_editing: bool,

    /// Last validation failure, shown inside the input bar
    pub input_error: Option<InputError>,

    /// Index into [`SPEEDS`]
    pub speed_index: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app and immediately run `initial_input`.
    ///
    /// The caller is expected to have validated the input already.
    pub fn new(initial_input: &str) -> Self {
        let mut app = App {
            timeline: Timeline::new(),
            edit_buffer: String::new(),
            is_editing: false,
            input_error: None,
            speed_index: 1, // 1.0x
            should_quit: false,
            status_message: String::from("Ready!"),
        };
        app.run_input(initial_input);
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Drive auto-play; the timeline does nothing unless a tick is due
            match self.timeline.tick(Instant::now()) {
                Some(TimelineEvent::StateChanged) => {
                    self.status_message = "Playing...".to_string();
                }
                Some(TimelineEvent::PlaybackEnded) => {
                    self.status_message = "Playback complete".to_string();
                }
                None => {}
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // input bar
                Constraint::Length(4), // step info
                Constraint::Min(6),    // string cells
                Constraint::Length(4), // window | answer
                Constraint::Length(1), // status bar
            ])
            .split(size);

        let snapshot = self.timeline.current_snapshot();
        let loaded = snapshot.map(|s| s.input().to_string());

        super::panes::render_input_bar(
            frame,
            rows[0],
            loaded.as_deref(),
            self.is_editing.then_some(self.edit_buffer.as_str()),
            self.input_error.as_ref(),
        );

        super::panes::render_step_pane(
            frame,
            rows[1],
            snapshot,
            self.timeline.cursor(),
            self.timeline.trace().len(),
        );

        super::panes::render_string_pane(frame, rows[2], snapshot);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[3]);

        super::panes::render_window_pane(frame, columns[0], snapshot);
        super::panes::render_answer_pane(frame, columns[1], snapshot);

        let progress = self.timeline.cursor().map(|c| (c, self.timeline.trace().len()));
        super::panes::render_status_bar(
            frame,
            rows[4],
            &self.status_message,
            progress,
            self.timeline.is_playing(),
            self.timeline.speed(),
            self.is_editing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.is_editing {
            self.handle_edit_key(key);
        } else {
            self.handle_view_key(key);
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('i') => {
                self.timeline.pause();
                self.edit_buffer = self
                    .timeline
                    .current_snapshot()
                    .map(|s| s.input().to_string())
                    .unwrap_or_default();
                self.input_error = None;
                self.is_editing = true;
                self.status_message = "Editing input".to_string();
            }
            // Number keys load the preset examples directly
            KeyCode::Char(c @ '1'..='7') => {
                let index = c.to_digit(10).unwrap() as usize - 1;
                self.run_input(EXAMPLES[index]);
            }
            KeyCode::Char('r') => {
                let random = input::random_string(&mut rand::thread_rng());
                self.run_input(&random);
            }
            KeyCode::Left => {
                if self.timeline.step_backward() {
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Already at the beginning".to_string();
                }
            }
            KeyCode::Right => {
                if self.timeline.step_forward() {
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Already at the end".to_string();
                }
            }
            KeyCode::Char(' ') => {
                self.timeline.toggle_play_pause(Instant::now());
                self.status_message = if self.timeline.is_playing() {
                    "Playing...".to_string()
                } else if self.timeline.is_at_end() {
                    "Already at the end (⌫ rewinds)".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_speed(1);
            }
            KeyCode::Char('-') => {
                self.change_speed(-1);
            }
            KeyCode::Enter => {
                // Jump to the final snapshot
                while self.timeline.step_forward() {}
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Jump back to the first snapshot
                while self.timeline.step_backward() {}
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Esc => {
                self.timeline.reset();
                self.status_message = "Reset".to_string();
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => match input::validate(&self.edit_buffer) {
                Ok(()) => {
                    self.is_editing = false;
                    self.input_error = None;
                    let buffer = std::mem::take(&mut self.edit_buffer);
                    self.run_input(&buffer);
                }
                Err(e) => {
                    self.input_error = Some(e);
                }
            },
            KeyCode::Esc => {
                self.is_editing = false;
                self.input_error = None;
                self.edit_buffer.clear();
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.edit_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Generate a fresh trace for `input` and rewind to its first snapshot
    fn run_input(&mut self, input: &str) {
        self.timeline.start(input);
        self.status_message = format!(
            "Running \"{}\" ({} steps)",
            input,
            self.timeline.trace().len()
        );
    }

    fn change_speed(&mut self, direction: isize) {
        let last = SPEEDS.len() - 1;
        self.speed_index = match direction {
            d if d > 0 => (self.speed_index + 1).min(last),
            _ => self.speed_index.saturating_sub(1),
        };
        let speed = SPEEDS[self.speed_index];
        self.timeline.set_speed(speed, Instant::now());
        self.status_message = format!("Speed {:.1}x", speed);
    }
}
