//! Status bar widget: keyboard name, layer position, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Status bar rendered along the top of the screen.
pub struct StatusBar;

impl StatusBar {
    /// Render keyboard/layer position plus either hints or a status message.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let position_line = Line::from(vec![
            Span::styled(
                state.layout.profile.name,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  |  Layer "),
            Span::styled(
                format!("{}", state.current_layer + 1),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("/{}", state.layout.num_layers())),
        ]);

        let second_line = state.status_message.as_ref().map_or_else(
            || Self::hints_line(state),
            |message| {
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(theme.error),
                ))
            },
        );

        let status = Paragraph::new(vec![position_line, second_line])
            .block(Block::default().borders(Borders::ALL))
            .centered();

        f.render_widget(status, area);
    }

    fn hints_line(state: &AppState) -> Line<'static> {
        let theme = &state.theme;
        let hints = [
            ("1-8", "layer"),
            ("\u{2190}\u{2192}", "nav"),
            ("e/c", "keyboard"),
            ("\u{2191}\u{2193}", "cycle"),
            ("q", "quit"),
        ];

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (idx, (key, action)) in hints.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }
}
