//! TUI rendering with ratatui
//!
//! Projects the controller's display state and feedback cells onto the terminal.

use super::app::{App, InputMode};
use crate::controller::{Cell, MessageStyle, TurnState};
use crate::core::Feedback;
use crate::output::formatters::MAX_GUESSES;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Width of one feedback cell, borders included
const CELL_WIDTH: u16 = 7;

/// Main UI rendering function
///
/// Returns the screen area of each feedback cell so mouse clicks can be mapped back.
pub fn ui(f: &mut Frame, app: &App) -> Vec<Rect> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    let cell_areas = render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    cell_areas
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🎯 WORDLE HELPER - {}", app.server))
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) -> Vec<Rect> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Suggestion + feedback cells
            Constraint::Length(5), // Letters
            Constraint::Min(3),    // Candidates
        ])
        .split(area);

    let cell_areas = render_guess(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_candidates(f, app, chunks[2]);
    cell_areas
}

fn feedback_color(feedback: Feedback) -> Color {
    let (r, g, b) = feedback.rgb();
    Color::Rgb(r, g, b)
}

fn render_guess(f: &mut Frame, app: &App, area: Rect) -> Vec<Rect> {
    let display = app.game.display();
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Suggestion
            Constraint::Length(1), // Guess number
            Constraint::Length(3), // Cells
            Constraint::Min(0),
        ])
        .split(inner);

    let suggestion = Line::from(vec![
        Span::raw("Suggested: "),
        Span::styled(
            display.suggested_guess.as_deref().unwrap_or("-").to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(suggestion), rows[0]);

    let guess_number = display
        .guess_number
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    f.render_widget(
        Paragraph::new(format!("Guess #:   {guess_number}")),
        rows[1],
    );

    let cells: Vec<Cell> = app.game.editor().cells().collect();
    let cell_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            cells
                .iter()
                .map(|_| Constraint::Length(CELL_WIDTH))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(rows[2]);

    let mut cell_areas = Vec::with_capacity(cells.len());
    for (cell, &cell_area) in cells.iter().zip(cell_row.iter()) {
        render_cell(f, *cell, cell_area);
        cell_areas.push(cell_area);
    }
    cell_areas
}

fn render_cell(f: &mut Frame, cell: Cell, area: Rect) {
    let color = feedback_color(cell.feedback);
    let letter = cell.letter.map(String::from).unwrap_or_default();

    let widget = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(color)),
        );
    f.render_widget(widget, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let display = app.game.display();
    let row = |label: &'static str, value: Option<&str>, color: Color| {
        Line::from(vec![
            Span::raw(label),
            Span::styled(value.unwrap_or("-").to_string(), Style::default().fg(color)),
        ])
    };

    let content = vec![
        row(
            "Known:   ",
            display.known_letters.as_deref(),
            feedback_color(Feedback::Correct),
        ),
        row(
            "Present: ",
            display.present_letters.as_deref(),
            feedback_color(Feedback::Present),
        ),
        row("Absent:  ", display.absent_letters.as_deref(), Color::DarkGray),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let display = app.game.display();

    let count = display
        .possible_words_count
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    let mut content = vec![Line::from(format!("{count} candidates remaining"))];

    if !display.possible_words_sample.is_empty() {
        let sample = display
            .possible_words_sample
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("  ");
        content.push(Line::from(Span::styled(
            sample,
            Style::default().fg(Color::Green),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guess progress gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_guess_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_guess_progress(f: &mut Frame, app: &App, area: Rect) {
    let used = app
        .game
        .display()
        .guess_number
        .map_or(0, |n| n.saturating_sub(1))
        .min(MAX_GUESSES);
    let progress_pct = (used * 100 / MAX_GUESSES) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{used}/{MAX_GUESSES}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .game
        .display()
        .messages()
        .iter()
        .rev()
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode() {
        InputMode::ConfirmReset => (
            " Start a new game? y: Yes | n: No ",
            "",
            Color::Magenta,
        ),
        InputMode::Finished => {
            let title = if app.game.turn_state() == TurnState::Solved {
                " 🎉 SOLVED! 🎉 | Ctrl-N: New game | Esc: Quit "
            } else {
                " GAME OVER | Ctrl-N: New game | Esc: Quit "
            };
            (title, "", Color::Green)
        }
        InputMode::Guess => (
            " Enter Guess | 1-5: Colour cell | Enter: Submit ",
            app.game.editor().text(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
        ])
        .split(area);

    let state_text = match app.game.turn_state() {
        TurnState::Idle | TurnState::Continue => "Ready",
        TurnState::Processing => "Processing",
        TurnState::Solved => "Solved",
        TurnState::GameOver => "Game over",
        TurnState::ErrorDisplayed => "Retry",
    };
    let state = Paragraph::new(format!("State: {state_text}")).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let exclude = if app.game.display().exclude_past_words {
        "[x]"
    } else {
        "[ ]"
    };
    let setting = Paragraph::new(format!("{exclude} Exclude past words"))
        .alignment(Alignment::Center);
    f.render_widget(setting, chunks[1]);

    let info = Paragraph::new(app.game.display().word_list_info.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(info, chunks[2]);

    let help = Paragraph::new("Ctrl-N: New | Ctrl-E: Exclude | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
