//! TUI application state and event loop

use super::controls::{Control, HitMap};
use crate::core::CATEGORIES;
use crate::game::Session;
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S> {
    pub session: Session<S>,
    pub auto_submit: bool,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    #[must_use]
    pub const fn new(session: Session<S>, auto_submit: bool) -> Self {
        Self {
            session,
            auto_submit,
            should_quit: false,
        }
    }

    /// Apply a pressed control to the session
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::Letter(ch) => {
                if self.session.add_letter(ch) && self.auto_submit && self.session.is_row_full() {
                    self.session.submit_guess();
                }
            }
            Control::Erase => {
                self.session.erase_letter();
            }
            Control::Submit => {
                self.session.submit_guess();
            }
            Control::NewRound => {
                if let Err(err) = self.session.new_round() {
                    tracing::warn!("new round refused: {err}");
                }
            }
            Control::Category(index) => {
                if let Some(category) = CATEGORIES.get(index)
                    && let Err(err) = self.session.reset_game(category.name)
                {
                    tracing::warn!("category refused: {err}");
                }
            }
            Control::Quit => self.should_quit = true,
        }
    }

    /// Translate a physical key into a control
    #[must_use]
    pub fn control_for_key(key: KeyEvent) -> Option<Control> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(Control::Quit),
            KeyCode::Char('n') if ctrl => Some(Control::NewRound),
            KeyCode::Esc => Some(Control::Quit),
            KeyCode::Enter => Some(Control::Submit),
            KeyCode::Backspace => Some(Control::Erase),
            KeyCode::F(n) if (1..=CATEGORIES.len()).contains(&usize::from(n)) => {
                Some(Control::Category(usize::from(n) - 1))
            }
            KeyCode::Char(ch) if !ctrl => Some(Control::Letter(ch)),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(control) = Self::control_for_key(key) {
            self.apply(control);
        }
    }

    /// Handle a left click at a terminal cell
    pub fn handle_click(&mut self, hits: &HitMap, column: u16, row: u16) {
        if let Some(control) = hits.control_at(column, row) {
            tracing::debug!(?control, "clicked");
            self.apply(control);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
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

    if let Err(err) = &res {
        tracing::error!("tui stopped: {err}");
    }
    res
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    let mut hits = HitMap::default();

    loop {
        terminal.draw(|f| hits = super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(&hits, mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
