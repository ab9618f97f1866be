//! TUI rendering with ratatui
//!
//! The whole screen is redrawn from the session on every frame. Each draw
//! also records where the clickable controls ended up.

use super::app::App;
use super::controls::{Control, HitMap, KEYBOARD_LAYOUT};
use crate::core::{CATEGORIES, MAX_ROWS, Round, WORD_LENGTH};
use crate::game::Status;
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Width of one key or grid cell, gap excluded
const CELL_WIDTH: u16 = 3;
const CELL_GAP: u16 = 1;

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) -> HitMap {
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            // Header
            Constraint::Length(1),
            // Categories
            Constraint::Length(3),
            // Grid
            Constraint::Length(MAX_ROWS as u16 + 2),
            // Keyboard
            Constraint::Length(6),
            // Status
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_categories(f, app, chunks[1], &mut hits);
    render_grid(f, app.session.round(), chunks[2]);
    render_keyboard(f, chunks[3], &mut hits);
    render_status(f, app, chunks[4]);

    hits
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🔤 וורדל לילדים",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "   F1-F4: קטגוריה | Ctrl-N: מילה חדשה | Esc: יציאה",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_categories<S: KeyValueStore>(
    f: &mut Frame,
    app: &App<S>,
    area: Rect,
    hits: &mut HitMap,
) {
    let share = Constraint::Ratio(1, CATEGORIES.len() as u32);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(CATEGORIES.iter().map(|_| share))
        .split(area);

    for (index, (category, &column)) in CATEGORIES.iter().zip(columns.iter()).enumerate() {
        let selected = app.session.category() == category.name;
        let playable = app.session.words().is_playable(category.name);

        let color = match (selected, playable) {
            (true, _) => Color::Yellow,
            (false, true) => Color::White,
            (false, false) => Color::DarkGray,
        };

        let button = Paragraph::new(format!("{} {}", category.icon, category.label))
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .title(format!(" F{} ", index + 1))
                    .borders(Borders::ALL)
                    .border_type(if selected {
                        BorderType::Double
                    } else {
                        BorderType::Rounded
                    })
                    .style(Style::default().fg(color)),
            );

        f.render_widget(button, column);
        hits.push(column, Control::Category(index));
    }
}

/// Letters shown in a grid row, in reading order
fn row_letters(round: &Round, row: usize) -> Vec<char> {
    if let Some(guess) = round.guesses().get(row) {
        guess.chars().collect()
    } else if row == round.row() && !round.is_over() {
        round.letters().to_vec()
    } else {
        Vec::new()
    }
}

fn row_style(round: &Round, row: usize) -> Style {
    match round.guesses().get(row) {
        Some(guess) if guess == round.target().text() => {
            Style::default().fg(Color::Black).bg(Color::Green)
        }
        Some(_) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None if row == round.row() && !round.is_over() => Style::default()
            .fg(Color::Yellow)
            .bg(Color::Rgb(40, 40, 40))
            .add_modifier(Modifier::BOLD),
        None => Style::default().bg(Color::Rgb(25, 25, 25)),
    }
}

/// One grid row, first letter on the right
fn grid_line(letters: &[char], style: Style) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for col in (0..WORD_LENGTH).rev() {
        let ch = letters.get(col).copied().unwrap_or(' ');
        spans.push(Span::styled(format!(" {ch} "), style));
        if col > 0 {
            spans.push(Span::raw(" ".repeat(CELL_GAP as usize)));
        }
    }
    Line::from(spans)
}

fn render_grid(f: &mut Frame, round: Option<&Round>, area: Rect) {
    let lines: Vec<Line> = (0..MAX_ROWS)
        .map(|row| match round {
            Some(round) => grid_line(&row_letters(round, row), row_style(round, row)),
            None => grid_line(&[], Style::default().bg(Color::Rgb(25, 25, 25))),
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" לוח ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

/// Lay out `count` cells centred in `area` on line `y`
fn centred_cells(area: Rect, y: u16, count: usize, width: u16) -> Vec<Rect> {
    let count = count as u16;
    let total = count * width + count.saturating_sub(1) * CELL_GAP;
    let start = area.x + area.width.saturating_sub(total) / 2;

    (0..count)
        .map(|i| Rect::new(start + i * (width + CELL_GAP), y, width, 1).intersection(area))
        .collect()
}

fn render_keyboard(f: &mut Frame, area: Rect, hits: &mut HitMap) {
    let block = Block::default()
        .title(" מקלדת ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let key_style = Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);

    for (offset, keys) in KEYBOARD_LAYOUT.iter().enumerate() {
        let y = inner.y + offset as u16;
        let cells = centred_cells(inner, y, keys.len(), CELL_WIDTH);
        for (rect, &ch) in cells.into_iter().zip(keys.iter()) {
            if rect.is_empty() {
                continue;
            }
            f.render_widget(Paragraph::new(format!(" {ch} ")).style(key_style), rect);
            hits.push(rect, Control::Letter(ch));
        }
    }

    let actions = [
        ("⏎ בדיקה", Control::Submit, Color::Green),
        ("⌫ מחיקה", Control::Erase, Color::Red),
        ("↻ מילה חדשה", Control::NewRound, Color::Magenta),
    ];
    let y = inner.y + KEYBOARD_LAYOUT.len() as u16;
    for (rect, (label, control, color)) in centred_cells(inner, y, actions.len(), 14)
        .into_iter()
        .zip(actions)
    {
        if rect.is_empty() {
            continue;
        }
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Black).bg(color));
        f.render_widget(button, rect);
        hits.push(rect, control);
    }
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let status = app.session.status();
    let message_style = match status {
        Status::Playing => Style::default(),
        Status::Victory => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Status::Revealed(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Status::Unavailable(_) => Style::default().fg(Color::Yellow),
    };

    let content = vec![
        Line::from(Span::styled(status.message(), message_style)),
        Line::from(Span::styled(
            app.session.stats_line(),
            Style::default().fg(Color::Cyan),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Session;
    use crate::storage::MemoryStore;
    use crate::wordlists::loader::from_json;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App<MemoryStore> {
        let words = from_json(r#"{"animals": ["דגים"]}"#).unwrap();
        let mut session = Session::new(words, MemoryStore::default(), StdRng::seed_from_u64(5));
        session.reset_game("animals").unwrap();
        App::new(session, false)
    }

    fn draw(app: &App<MemoryStore>, width: u16, height: u16) -> HitMap {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = ui(f, app)).unwrap();
        hits
    }

    #[test]
    fn every_key_is_clickable() {
        let hits = draw(&app(), 80, 24);
        for &ch in KEYBOARD_LAYOUT.iter().flat_map(|row| row.iter()) {
            let area = hits.area_of(Control::Letter(ch)).unwrap();
            assert_eq!(hits.control_at(area.x + 1, area.y), Some(Control::Letter(ch)));
        }
    }

    #[test]
    fn categories_and_actions_are_clickable() {
        let hits = draw(&app(), 80, 24);
        for index in 0..CATEGORIES.len() {
            assert!(hits.area_of(Control::Category(index)).is_some());
        }
        for control in [Control::Submit, Control::Erase, Control::NewRound] {
            assert!(hits.area_of(control).is_some(), "{control:?} missing");
        }
    }

    #[test]
    fn clicking_drawn_key_types_letter() {
        let mut app = app();
        let hits = draw(&app, 80, 24);
        let area = hits.area_of(Control::Letter('ד')).unwrap();

        app.handle_click(&hits, area.x, area.y);
        assert_eq!(app.session.round().unwrap().letters(), &['ד']);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let hits = draw(&app(), 20, 8);
        assert!(hits.len() < 40);
    }

    #[test]
    fn grid_line_is_right_to_left() {
        let line = grid_line(&['ד', 'ג'], Style::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, format!("{}ג{}ד ", " ".repeat(9), " ".repeat(3)));
    }

    #[test]
    fn current_row_shows_typed_letters() {
        let mut app = app();
        app.session.add_letter('ד');
        let round = app.session.round().unwrap();
        assert_eq!(row_letters(round, 0), vec!['ד']);
        assert!(row_letters(round, 1).is_empty());
    }
}
