//! Split keyboard widget for rendering a decoded layer.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::decoder::{decode, Keycode, SemanticClass};

use super::{AppState, Theme};

/// Width of a key cell in characters.
const KEY_WIDTH: u16 = 7;

/// Width of the gap between the two halves.
const GAP_WIDTH: u16 = 4;

/// Renders the split keyboard for the current layer.
pub struct KeyboardWidget;

impl KeyboardWidget {
    /// Render both halves as one table: left rows, a gap column, right rows.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let left = state.layout.left_half(state.current_layer);
        let right = state.layout.right_half(state.current_layer);
        let cols = state.layout.profile.cols_per_row;

        let row_count = left.len().max(right.len());
        let mut rows = Vec::with_capacity(row_count);
        for idx in 0..row_count {
            let mut cells = Vec::with_capacity(cols * 2 + 1);
            Self::push_half_cells(&mut cells, left.get(idx), cols, theme);
            cells.push(Cell::from(""));
            Self::push_half_cells(&mut cells, right.get(idx), cols, theme);
            rows.push(Row::new(cells).height(2).bottom_margin(1));
        }

        let mut constraints = vec![Constraint::Length(KEY_WIDTH); cols];
        constraints.push(Constraint::Length(GAP_WIDTH));
        constraints.extend(vec![Constraint::Length(KEY_WIDTH); cols]);

        let title = format!(
            " {} - Layer {}/{} ",
            state.layout.profile.name,
            state.current_layer + 1,
            state.layout.num_layers()
        );
        let table = Table::new(rows, constraints)
            .block(Block::default().title(title).borders(Borders::ALL))
            .column_spacing(1);

        f.render_widget(table, area);
    }

    /// Cells for one half's row, padding with blanks when the row is short.
    fn push_half_cells(
        cells: &mut Vec<Cell<'static>>,
        row: Option<&Vec<Keycode>>,
        cols: usize,
        theme: &Theme,
    ) {
        for col in 0..cols {
            match row.and_then(|r| r.get(col)) {
                Some(token) => cells.push(Self::key_cell(token, theme)),
                None => cells.push(Cell::from("")),
            }
        }
    }

    /// A single key cell: up to two centered lines, colored by class.
    fn key_cell(token: &Keycode, theme: &Theme) -> Cell<'static> {
        let key = decode(token);
        if key.class == SemanticClass::Empty {
            return Cell::from("");
        }

        let style = Style::default().fg(theme.class_color(key.class));
        let lines: Vec<Line> = key
            .display
            .split('\n')
            .map(|line| Line::styled(format!("{line:^width$}", width = KEY_WIDTH as usize), style))
            .collect();

        Cell::from(Text::from(lines))
    }
}
