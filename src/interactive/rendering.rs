//! TUI rendering with ratatui
//!
//! The search form on the left, results on the right.

use super::app::{App, Field, MessageStyle};
use crate::search::SearchState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Screen regions, shared by drawing and mouse hit-testing
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub fields: [Rect; 4],
    pub messages: Rect,
    pub results: Rect,
    pub status: Rect,
}

/// Split the terminal area into regions
#[must_use]
pub fn layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Form
            Constraint::Percentage(55), // Results
        ])
        .split(rows[1]);

    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3), // Messages
        ])
        .split(main[0]);

    AppLayout {
        header: rows[0],
        fields: [form[0], form[1], form[2], form[3]],
        messages: form[4],
        results: main[1],
        status: rows[2],
    }
}

/// First visible result row so that `selected` stays on screen
#[must_use]
pub const fn visible_offset(selected: usize, count: usize, rows: usize) -> usize {
    if rows == 0 || selected < rows {
        return 0;
    }
    let offset = selected + 1 - rows;
    if offset > count { count } else { offset }
}

/// Map a mouse position to the result under it
#[must_use]
pub fn result_index_at(
    layout: &AppLayout,
    selected: usize,
    count: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let inner = layout.results.inner(Margin::new(1, 1));
    if !inner.contains(Position::new(column, row)) {
        return None;
    }

    let offset = visible_offset(selected, count, inner.height as usize);
    let index = offset + (row - inner.y) as usize;
    (index < count).then_some(index)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let regions = layout(f.area());

    render_header(f, regions.header);
    for (field, area) in Field::INPUTS.into_iter().zip(regions.fields) {
        render_field(f, app, field, area);
    }
    render_messages(f, app, regions.messages);
    render_results(f, app, regions.results);
    render_status(f, app, regions.status);

    if let Some(toast) = &app.toast {
        render_toast(f, &toast.text, regions.results);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORD FINDER")
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

fn render_field(f: &mut Frame, app: &App, field: Field, area: Rect) {
    let focused = app.focus == field;
    let (border, color) = if focused {
        (BorderType::Double, Color::Yellow)
    } else {
        (BorderType::Plain, Color::White)
    };
    let text = app.inputs.get(field);

    let input = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_type(border)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);

    if focused {
        let x = area.x + 1 + text.chars().count() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
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

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Field::Results;
    let block = Block::default()
        .title(Field::Results.label())
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .style(Style::default().fg(if focused { Color::Yellow } else { Color::Green }));

    let placeholder = |text: String, color: Color| {
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(block.clone())
    };

    match app.session.state() {
        SearchState::Success(result) if !result.is_empty() => {
            let rows = area.height.saturating_sub(2) as usize;
            let offset = visible_offset(app.selected, result.len(), rows);

            let items: Vec<ListItem> = result
                .iter()
                .enumerate()
                .skip(offset)
                .take(rows)
                .map(|(i, word)| {
                    let style = if i == app.selected {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:>4} ", i + 1), Style::default().fg(Color::DarkGray)),
                        Span::styled(word.to_string(), style),
                    ]))
                })
                .collect();

            f.render_widget(List::new(items).block(block.clone()), area);
        }
        SearchState::Fetching | SearchState::Validating => {
            f.render_widget(placeholder("Searching...".to_string(), Color::Cyan), area);
        }
        state @ (SearchState::Success(_) | SearchState::Failed(_)) => {
            let color = if matches!(state, SearchState::Failed(_)) {
                Color::Red
            } else {
                Color::Yellow
            };
            let notice = state.notice().unwrap_or_default();
            f.render_widget(placeholder(notice, color), area);
        }
        SearchState::Idle => {
            f.render_widget(
                placeholder("No search yet.".to_string(), Color::DarkGray),
                area,
            );
        }
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let state_text = format!("State: {}", app.session.state().name());
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let count_text = format!("Results: {}", app.result_count());
    let count = Paragraph::new(count_text).alignment(Alignment::Center);
    f.render_widget(count, chunks[1]);

    let help_text = if app.is_fetching() {
        "Searching... | Esc: Quit"
    } else if app.focus == Field::Results {
        "↑↓: Select | Enter/Click: Copy | Tab: Form | Esc: Quit"
    } else {
        "Enter: Search | Tab: Next field | Ctrl-U: Clear | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_toast(f: &mut Frame, text: &str, within: Rect) {
    let width = (text.chars().count() as u16 + 4).min(within.width);
    let area = Rect::new(
        within.x + within.width.saturating_sub(width) / 2,
        (within.y + within.height).saturating_sub(4),
        width,
        3.min(within.height),
    );

    let toast = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(Clear, area);
    f.render_widget(toast, area);
}
