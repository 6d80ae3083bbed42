//! Stateless UI rendering for the display model.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{Player, Position, Square};
use crate::view::{CellView, DisplayModel};

/// Draws the whole screen for the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + move list
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe: Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_info(frame, body[1], app);

    let help = Paragraph::new(
        "Arrows: Move | Enter: Play/Jump | 1-9: Play | Tab: Switch pane | R: Reverse | N: New | Q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn focus_style(app: &App, pane: Focus) -> Style {
    if app.focus() == pane {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(app, Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 29, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let model = app.model();
    for (row, start) in [(0, 0), (2, 3), (4, 6)] {
        draw_row(frame, rows[row], model, app, start);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, model: &DisplayModel, app: &App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for (col, offset) in [(0, 0), (2, 1), (4, 2)] {
        if let Some(pos) = Position::from_index(start + offset) {
            let cursor = app.focus() == Focus::Board && app.cursor() == pos;
            draw_cell(frame, cols[col], model.cell(pos), cursor);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: bool) {
    let symbol = match cell.square() {
        Square::Empty => cell.position().number().to_string(),
        Square::Occupied(player) => player.to_string(),
    };
    let style = cell_style(cell, cursor);

    // Vertically center within the 3-line cell.
    let lines = vec![Line::from(""), Line::from(Span::styled(symbol, style)), Line::from("")];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Winning cells keep their green background under the cursor, which
/// then shows as underline.
fn cell_style(cell: &CellView, cursor: bool) -> Style {
    let base_style = match cell.square() {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    match (cursor, *cell.highlighted()) {
        (true, true) => base_style
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED),
        (true, false) => base_style.bg(Color::White).fg(Color::Black),
        (false, true) => base_style.bg(Color::Green).fg(Color::Black),
        (false, false) => base_style,
    }
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let model = app.model();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Status + notice
            Constraint::Length(1), // Order checkbox
            Constraint::Min(3),    // Move list
        ])
        .split(area);

    let status_color = if model.evaluation().is_over() {
        Color::Green
    } else {
        Color::Yellow
    };
    let mut status_lines = vec![Line::from(Span::styled(
        model.status().clone(),
        Style::default().fg(status_color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(notice) = app.notice() {
        status_lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(status_lines)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[0]);

    let checkbox = if *model.reversed() { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(format!(" {} Reverse moves", checkbox)),
        chunks[1],
    );

    let items: Vec<ListItem> = model
        .moves()
        .iter()
        .map(|entry| {
            let mut style = Style::default();
            if *entry.is_latest() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if *entry.is_current() {
                style = style.fg(Color::Cyan);
            }
            let marker = if *entry.is_current() { "● " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, entry.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Moves")
                .border_style(focus_style(app, Focus::Moves)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if app.focus() == Focus::Moves {
        list_state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, chunks[2], &mut list_state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_moves() {
        let mut app = App::new(false);
        app.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE));
        let text = screen_text(&app);
        assert!(text.contains("Next player: O"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("Go to move #1: (2, 2)"));
        assert!(text.contains("[ ] Reverse moves"));
    }

    #[test]
    fn test_cursor_on_winning_cell_keeps_highlight() {
        let mut app = App::new(false);
        // X: 1, 2, 3 wins the top row; cursor stays on top-right.
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(app.cursor(), Position::TopRight);

        let cell = app.model().cell(Position::TopRight);
        assert!(*cell.highlighted());
        let style = cell_style(cell, true);
        assert_eq!(style.bg, Some(Color::Green));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));

        let plain_cursor = cell_style(app.model().cell(Position::Center), true);
        assert_eq!(plain_cursor.bg, Some(Color::White));
    }

    #[test]
    fn test_renders_reversed_checkbox() {
        let mut app = App::new(true);
        app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
        let text = screen_text(&app);
        assert!(text.contains("[x] Reverse moves"));
    }
}
