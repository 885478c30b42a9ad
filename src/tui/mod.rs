//! Terminal user interface for the layout viewer.
//!
//! This module contains the viewer state, the main event loop, and the
//! widgets rendering the decoded keyboard.

pub mod keyboard;
pub mod legend;
pub mod status_bar;
pub mod theme;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::models::{KeyboardLayout, PROFILES};

pub use keyboard::KeyboardWidget;
pub use legend::Legend;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Highest layer reachable through the number keys.
const MAX_LAYER_KEY: usize = 8;

/// Viewer state: the loaded layout and the current view position.
pub struct AppState {
    /// Directory the layout files are loaded from
    pub base_dir: PathBuf,
    /// Index into [`PROFILES`] of the active keyboard
    pub profile_idx: usize,
    /// Currently loaded layout
    pub layout: KeyboardLayout,
    /// Layer being displayed
    pub current_layer: usize,
    /// Active color theme
    pub theme: Theme,
    /// Transient message shown instead of the hint line
    pub status_message: Option<String>,
    /// Set when the user asks to exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates viewer state by loading the given profile's layout file.
    pub fn new(base_dir: PathBuf, profile_idx: usize) -> Result<Self> {
        let profile = PROFILES
            .get(profile_idx)
            .with_context(|| format!("No keyboard profile at index {profile_idx}"))?;
        let layout = KeyboardLayout::load(profile, &base_dir)?;

        Ok(Self {
            base_dir,
            profile_idx,
            layout,
            current_layer: 0,
            theme: Theme::detect(),
            status_message: None,
            should_quit: false,
        })
    }

    /// Jumps to a layer, clamping to the valid range.
    pub fn set_layer(&mut self, layer: usize) {
        let max_layer = self.layout.num_layers().saturating_sub(1);
        self.current_layer = layer.min(max_layer);
    }

    /// Steps to the previous layer.
    pub fn prev_layer(&mut self) {
        self.set_layer(self.current_layer.saturating_sub(1));
    }

    /// Steps to the next layer.
    pub fn next_layer(&mut self) {
        self.set_layer(self.current_layer + 1);
    }

    /// Switches to the keyboard at `idx`, keeping the current one when its
    /// layout file fails to load.
    pub fn switch_keyboard(&mut self, idx: usize) {
        let Some(profile) = PROFILES.get(idx) else {
            return;
        };
        if idx == self.profile_idx {
            return;
        }

        match KeyboardLayout::load(profile, &self.base_dir) {
            Ok(layout) => {
                self.layout = layout;
                self.profile_idx = idx;
                self.status_message = None;
                if self.current_layer >= self.layout.num_layers() {
                    self.current_layer = 0;
                }
            }
            Err(err) => {
                self.status_message = Some(format!("{err:#}"));
            }
        }
    }

    /// Switches to the keyboard whose name starts with `initial`.
    pub fn switch_keyboard_by_initial(&mut self, initial: char) {
        let target = PROFILES.iter().position(|p| {
            p.name
                .chars()
                .next()
                .is_some_and(|c| c.eq_ignore_ascii_case(&initial))
        });
        if let Some(idx) = target {
            self.switch_keyboard(idx);
        }
    }

    /// Cycles to the previous keyboard.
    pub fn prev_keyboard(&mut self) {
        let idx = (self.profile_idx + PROFILES.len() - 1) % PROFILES.len();
        self.switch_keyboard(idx);
    }

    /// Cycles to the next keyboard.
    pub fn next_keyboard(&mut self) {
        let idx = (self.profile_idx + 1) % PROFILES.len();
        self.switch_keyboard(idx);
    }
}

/// Set up terminal for TUI rendering.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
pub fn run_viewer(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key_event(state, &key);
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Applies one key press to the viewer state.
fn handle_key_event(state: &mut AppState, key: &KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char(c @ '1'..='9') => {
            let layer = c as usize - '1' as usize;
            if layer < MAX_LAYER_KEY {
                state.set_layer(layer);
            }
        }
        KeyCode::Left => state.prev_layer(),
        KeyCode::Right => state.next_layer(),
        KeyCode::Up => state.prev_keyboard(),
        KeyCode::Down => state.next_keyboard(),
        KeyCode::Char(c) => state.switch_keyboard_by_initial(c),
        _ => {}
    }
}

/// Renders the full frame: status bar, keyboard, legend.
fn render(f: &mut Frame, state: &AppState) {
    let [status_area, keyboard_area, legend_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .areas(f.area());

    StatusBar::render(f, status_area, state);
    KeyboardWidget::render(f, keyboard_area, state);
    Legend::render(f, legend_area, state);
}
