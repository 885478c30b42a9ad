//! Legend widget mapping key colors to semantic classes.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::decoder::SemanticClass;

use super::AppState;

/// One-line legend rendered along the bottom of the screen.
pub struct Legend;

impl Legend {
    /// Render a colored label per visible semantic class.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let entries = [
            ("Mod-tap", SemanticClass::ModTap),
            ("Layer-tap", SemanticClass::LayerTap),
            ("Macro", SemanticClass::Macro),
            ("Modifier", SemanticClass::Modifier),
            ("Special", SemanticClass::Special),
            ("Transparent", SemanticClass::Transparent),
        ];

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (idx, (label, class)) in entries.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  |  "));
            }
            spans.push(Span::styled(
                label,
                Style::default().fg(theme.class_color(class)),
            ));
        }

        let legend = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .centered();

        f.render_widget(legend, area);
    }
}
