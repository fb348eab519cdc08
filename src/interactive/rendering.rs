//! TUI rendering with ratatui
//!
//! Board, gutters, queue and hint panels for the play mode.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Move;
use crate::output::formatters::{VISIBLE_QUEUE, format_move};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Colors cycled across highlighted words
const WORD_COLORS: [Color; 6] = [
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Blue,
    Color::LightRed,
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Controls
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Controls
    render_controls(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 QUEUEDLE - Sliding Word Puzzle")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for one grid cell: word color, landing marker, cursor
fn cell_style(app: &App, row: usize, col: usize) -> Style {
    let mut style = Style::default();

    if let Some(idx) = app
        .state
        .highlights()
        .iter()
        .position(|h| h.contains_cell(row, col))
    {
        style = style
            .fg(WORD_COLORS[idx % WORD_COLORS.len()])
            .add_modifier(Modifier::BOLD);
    }
    if app.state.last_inserted() == Some((row, col)) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if app.cursor == (row, col) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    style
}

/// Gutter marker for the slide entering at this edge cell
///
/// Locked directions show a dim dot; the cursor's own line is emphasized.
fn gutter_span(app: &App, mv: Move, glyph: char) -> Span<'static> {
    if app.state.restrictions().is_restricted(mv) {
        return Span::styled("·", Style::default().fg(Color::DarkGray));
    }

    let on_cursor_line = if mv.direction().is_horizontal() {
        app.cursor.0 == mv.index()
    } else {
        app.cursor.1 == mv.index()
    };
    let style = if on_cursor_line {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(glyph.to_string(), style)
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(10);

    // Top gutter: letters pushed down enter here
    let mut top = vec![Span::raw("    ")];
    for col in 0..5 {
        top.push(gutter_span(app, Move::down(col), '▾'));
        top.push(Span::raw(" "));
    }
    lines.push(Line::from(top));

    for row in 0..5 {
        let mut spans = vec![
            Span::raw("  "),
            gutter_span(app, Move::right(row), '▸'),
            Span::raw(" "),
        ];
        for col in 0..5 {
            let letter = app.state.grid().get(row, col).to_ascii_uppercase() as char;
            spans.push(Span::styled(letter.to_string(), cell_style(app, row, col)));
            spans.push(Span::raw(" "));
        }
        spans.push(gutter_span(app, Move::left(row), '◂'));
        lines.push(Line::from(spans));
    }

    let mut bottom = vec![Span::raw("    ")];
    for col in 0..5 {
        bottom.push(gutter_span(app, Move::up(col), '▴'));
        bottom.push(Span::raw(" "));
    }
    lines.push(Line::from(bottom));

    lines.push(Line::from(""));
    lines.push(queue_line(app));

    lines
}

fn queue_line(app: &App) -> Line<'static> {
    let queue = app.state.queue();
    if queue.is_empty() {
        return Line::from("  Next: (empty)");
    }

    let mut spans = vec![Span::raw("  Next: ")];
    for (i, &letter) in queue.iter().take(VISIBLE_QUEUE).enumerate() {
        let text = format!("{} ", letter.to_ascii_uppercase() as char);
        let style = if i == 0 {
            // The letter the next slide will insert
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(text, style));
    }

    let hidden = queue.len().saturating_sub(VISIBLE_QUEUE);
    if hidden > 0 {
        spans.push(Span::styled(
            format!("+ {hidden} more"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app)).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hint
            Constraint::Length(3), // Progress gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_suggestion(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_suggestion(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(ref suggestion) = app.suggestion {
        vec![
            Line::from(vec![
                Span::raw("Suggested: "),
                Span::styled(
                    format_move(suggestion.next_move),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Line score: {} ({:+} over current)",
                suggestion.line_score,
                i64::from(suggestion.line_score) - i64::from(app.state.score())
            )),
            Line::from(format!("Line length: {} moves", suggestion.line_len)),
        ]
    } else {
        vec![Line::from("Press 's' to search for a line")]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let played = app.state.moves();
    let total = played + app.state.queue().len() as u32;
    let percent = if total > 0 { played * 100 / total } else { 100 };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent as u16)
        .label(format!(
            "{played}/{total} letters | {} words",
            app.state.highlights().len()
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_controls(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " 🎉 QUEUE EXHAUSTED! 🎉 ",
            format!(
                "Final score: {:.1} ({} - {:.1}) | 'n' new game, 'u' undo, 'q' quit",
                app.net_score(),
                app.state.score(),
                app.move_penalty()
            ),
            Color::Green,
        ),
        InputMode::Playing => (
            " Controls ",
            "h/j/k/l or arrows: move cursor | H/J/K/L or Shift+arrows: slide | s: hint | u: undo | n: new game | q: quit".to_string(),
            Color::Yellow,
        ),
    };

    let controls = Paragraph::new(content)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(controls, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let seed_text = if app.offset > 0 {
        format!("Seed: {} (+{})", app.base_seed, app.offset)
    } else {
        format!("Seed: {}", app.base_seed)
    };
    let seed = Paragraph::new(seed_text).alignment(Alignment::Center);
    f.render_widget(seed, chunks[0]);

    let stats_text = format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_score
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let score_text = format!(
        "Score: {:.1} ({} - {:.1})",
        app.net_score(),
        app.state.score(),
        app.move_penalty()
    );
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Finished => "q: Quit | n: New Game | u: Undo",
        InputMode::Playing => "q: Quit | s: Hint | u: Undo | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
