//! Main TUI application state and logic

use crate::controller::RunController;
use crate::dataset::Dataset;
use crate::registry::AlgorithmId;
use crate::snapshot::StructureView;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Run lifecycle owner
    pub controller: RunController,

    /// Currently selected registry entry
    pub algorithm: AlgorithmId,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was delivered in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(controller: RunController, algorithm: AlgorithmId) -> Self {
        App {
            controller,
            algorithm,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Deliver paced steps while auto-play is active
            if self.is_playing && self.last_play_time.elapsed() >= self.controller.pace() {
                if self.controller.step_forward().is_none() {
                    self.is_playing = false;
                    self.status_message = "Run complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(25))? {
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

        // Structure pane plus side card, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        let view = match self.controller.snapshot() {
            Some(snapshot) => snapshot.structure.clone(),
            None => self.controller.dataset().view(),
        };

        match &view {
            StructureView::Array(elements) => {
                super::panes::render_array_pane(frame, columns[0], elements);
            }
            StructureView::Tree { root, order } => {
                super::panes::render_tree_pane(frame, columns[0], root, order);
            }
            StructureView::Graph(nodes) => {
                if let Dataset::Graph(graph) = self.controller.dataset() {
                    super::panes::render_graph_pane(
                        frame,
                        columns[0],
                        nodes,
                        &graph.edges,
                        self.algorithm == AlgorithmId::Dijkstra,
                    );
                }
            }
        }

        let metrics = match self.controller.snapshot() {
            Some(snapshot) => snapshot.metrics,
            None => self.controller.metrics(),
        };
        super::panes::render_metrics_pane(frame, columns[1], self.algorithm, &metrics);

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.controller.position(),
            self.controller.total_steps(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.ensure_started();
                if self.controller.step_forward().is_none()
                    && self.controller.total_steps() > 0
                {
                    self.status_message = "End of run".to_string();
                }
            }
            KeyCode::Left => {
                self.is_playing = false;
                if self.controller.step_backward().is_none() {
                    self.status_message = "At the beginning".to_string();
                }
            }
            KeyCode::Tab => {
                self.select_algorithm(1);
            }
            KeyCode::BackTab => {
                self.select_algorithm(AlgorithmId::ALL.len() - 1);
            }
            KeyCode::Char('r') => {
                self.is_playing = false;
                self.controller.abort();
                match self.controller.generate(self.algorithm.family()) {
                    Ok(()) => self.status_message = "Regenerated".to_string(),
                    Err(e) => self.status_message = e.to_string(),
                }
            }
            KeyCode::Char('[') => {
                self.adjust_speed(-10);
            }
            KeyCode::Char(']') => {
                self.adjust_speed(10);
            }
            KeyCode::Char('-') => {
                self.adjust_array_size(-5);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.adjust_array_size(5);
            }
            KeyCode::Enter => {
                // Jump to the end of the run
                self.is_playing = false;
                self.ensure_started();
                while self.controller.step_forward().is_some() {}
                if self.controller.total_steps() > 0 {
                    self.status_message = "Jumped to end".to_string();
                }
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.controller.rewind_to_start();
                self.status_message = "Rewound to start".to_string();
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            self.status_message = "Paused".to_string();
            return;
        }
        self.ensure_started();
        if self.controller.total_steps() > 0 {
            self.is_playing = true;
            self.last_play_time = Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now());
            self.status_message = "Playing...".to_string();
        }
    }

    /// Record a run for the selected algorithm if none is loaded or the
    /// loaded one has been fully delivered.
    fn ensure_started(&mut self) {
        let exhausted = self.controller.total_steps() > 0
            && self.controller.position() >= self.controller.total_steps()
            && !self.controller.is_running();
        if self.controller.total_steps() == 0 || exhausted {
            match self.controller.start(self.algorithm) {
                Ok(()) => {
                    self.status_message =
                        format!("Running {}", self.algorithm.info().name);
                }
                Err(e) => {
                    self.status_message = e.to_string();
                }
            }
        }
    }

    fn select_algorithm(&mut self, offset: usize) {
        self.is_playing = false;
        let index = AlgorithmId::ALL
            .iter()
            .position(|a| *a == self.algorithm)
            .unwrap_or(0);
        self.algorithm = AlgorithmId::ALL[(index + offset) % AlgorithmId::ALL.len()];

        self.controller.abort();
        match self.controller.generate(self.algorithm.family()) {
            Ok(()) => {
                self.status_message = format!("Selected {}", self.algorithm.info().name);
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    fn adjust_speed(&mut self, delta: i16) {
        let speed = (i16::from(self.controller.speed()) + delta).clamp(1, 100) as u8;
        match self.controller.set_speed(speed) {
            Ok(()) => self.status_message = format!("Speed: {}", speed),
            Err(e) => self.status_message = e.to_string(),
        }
    }

    fn adjust_array_size(&mut self, delta: isize) {
        if !matches!(self.controller.dataset(), Dataset::Array(_)) {
            return;
        }
        let size = (self.controller.array_size() as isize + delta).clamp(5, 100) as usize;
        let result = self
            .controller
            .set_array_size(size)
            .and_then(|()| self.controller.generate(self.algorithm.family()));
        match result {
            Ok(()) => self.status_message = format!("Array size: {}", size),
            Err(e) => self.status_message = e.to_string(),
        }
    }
}
