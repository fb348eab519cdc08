//! TUI application state and logic

use crate::core::{Direction, GameState, Move};
use crate::engine::Engine;
use crate::generator::{GeneratedPuzzle, MAX_SEED, generate};
use crate::solver::{SearchConfig, best_first_search};
use crate::words::words_from_highlights;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Node budget for the in-game hint search
const HINT_BUDGET: usize = 20_000;

/// Points deducted from the displayed score per slide used
const MOVE_PENALTY: f64 = 0.5;

/// Application state
pub struct App<'a> {
    pub engine: Engine<'a>,
    pub state: GameState,
    pub base_seed: u64,
    pub offset: u64,
    pub cursor: (usize, usize),
    pub suggestion: Option<Suggestion>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub undo_stack: Vec<GameState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Finished,
}

/// Hint produced by a bounded search from the current position
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub next_move: Move,
    pub line_score: u32,
    pub line_len: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: Engine<'a>, puzzle: GeneratedPuzzle) -> Self {
        Self {
            engine,
            state: puzzle.state,
            base_seed: puzzle.base_seed,
            offset: puzzle.offset,
            cursor: (2, 2),
            suggestion: None,
            messages: vec![
                Message {
                    text: "Welcome! Slide rows and columns to spell words.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Move with h/j/k/l or arrows; slide with H/J/K/L or Shift+arrows."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                games_played: 1,
                best_score: 0,
            },
            should_quit: false,
            input_mode: InputMode::Playing,
            undo_stack: Vec::new(),
        }
    }

    /// Score shown to the player: word points minus half a point per slide
    #[must_use]
    pub fn net_score(&self) -> f64 {
        f64::from(self.state.score()) - self.move_penalty()
    }

    /// Total deduction for the slides played so far
    #[must_use]
    pub fn move_penalty(&self) -> f64 {
        MOVE_PENALTY * f64::from(self.state.moves())
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let (row, col) = self.cursor;
        self.cursor = match direction {
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(4)),
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(4), col),
        };
    }

    /// The move a slide key triggers from the current cursor position
    #[must_use]
    pub fn slide_move(&self, direction: Direction) -> Move {
        let (row, col) = self.cursor;
        let index = if direction.is_horizontal() { row } else { col };
        Move::new(direction, index)
    }

    pub fn try_slide(&mut self, direction: Direction) {
        let mv = self.slide_move(direction);
        match self.engine.apply_move(&self.state, mv) {
            Ok(next) => {
                let gained = next.score().saturating_sub(self.state.score());
                self.undo_stack.push(self.state.clone());
                self.state = next;
                self.suggestion = None;
                self.stats.best_score = self.stats.best_score.max(self.state.score());

                if gained > 0 {
                    let words = words_from_highlights(self.state.grid(), self.state.highlights());
                    self.add_message(
                        &format!("+{gained}! On the board: {}", words.join(", ")),
                        MessageStyle::Success,
                    );
                }

                if self.state.is_exhausted() {
                    self.finish_game();
                }
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::Finished;

        let celebration = match self.state.score() {
            0 => "😅 Queue exhausted with no words. Tough board!",
            1..=5 => "👏 Queue exhausted! A few words found.",
            6..=12 => "🎉 NICE! Solid word-building!",
            13..=20 => "🔥 MAGNIFICENT! The board is packed!",
            _ => "🌟 EXTRAORDINARY! A wall of words!",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn compute_suggestion(&mut self) {
        let config = SearchConfig {
            max_nodes: HINT_BUDGET,
            ..SearchConfig::default()
        };
        let report = best_first_search(&self.engine, self.state.clone(), &config);

        if let Some(&next_move) = report.best_moves.first() {
            self.add_message(
                &format!(
                    "Try {next_move}: reaches {} within {} moves",
                    report.best_score(),
                    report.best_moves.len()
                ),
                MessageStyle::Info,
            );
            self.suggestion = Some(Suggestion {
                next_move,
                line_score: report.best_score(),
                line_len: report.best_moves.len(),
            });
        } else {
            self.suggestion = None;
            self.add_message("No line improves on this position", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        let seed = rand::random_range(1..=MAX_SEED);
        match generate(seed, &self.engine) {
            Ok(puzzle) => {
                self.state = puzzle.state;
                self.base_seed = puzzle.base_seed;
                self.offset = puzzle.offset;
                self.cursor = (2, 2);
                self.suggestion = None;
                self.undo_stack.clear();
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.stats.games_played += 1;
                self.add_message(&format!("New game, seed {seed}"), MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn undo_last(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.state = snapshot;
            self.suggestion = None;
            self.input_mode = InputMode::Playing;
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let shift = key.modifiers.contains(KeyModifiers::SHIFT);
            match app.input_mode {
                InputMode::Finished => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char('u') => {
                        app.undo_last();
                    }
                    _ => {
                        // After the queue runs out, only n/u/q do anything
                    }
                },
                InputMode::Playing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char('u') => {
                        app.undo_last();
                    }
                    KeyCode::Char('s') => {
                        app.compute_suggestion();
                    }
                    KeyCode::Char('H') => app.try_slide(Direction::Left),
                    KeyCode::Char('L') => app.try_slide(Direction::Right),
                    KeyCode::Char('K') => app.try_slide(Direction::Up),
                    KeyCode::Char('J') => app.try_slide(Direction::Down),
                    KeyCode::Left if shift => app.try_slide(Direction::Left),
                    KeyCode::Right if shift => app.try_slide(Direction::Right),
                    KeyCode::Up if shift => app.try_slide(Direction::Up),
                    KeyCode::Down if shift => app.try_slide(Direction::Down),
                    KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Direction::Left),
                    KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Direction::Right),
                    KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
                    KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
