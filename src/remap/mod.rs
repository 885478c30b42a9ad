//! One-shot Elora to Corne layout migration.
//!
//! The Elora has more keys than the Corne (number row, extra outer
//! columns), so a static position table maps every Corne position to its
//! Elora equivalent, to the `-1` placeholder, or to `KC_TRNS` where no
//! equivalent exists. Tokens are copied opaquely; nothing here decodes a
//! keycode.
//!
//! Row layout reminder:
//! - Elora rows: 0=numbers, 1=top-alpha, 2=home, 3=bottom, 4=thumb,
//!   5=encoder (left); 6-11 mirror that on the right.
//! - Corne rows: 0=top-alpha, 1=home, 2=bottom, 3=thumb (left); 4-7 right.
//! - Both boards order keys within a row from the index finger outward.

use serde_json::{json, Value};

use crate::decoder::Keycode;
use crate::parser::VialFile;

/// Corne rows per layer.
pub const CORNE_ROWS: usize = 8;

/// Keys per row on both boards.
pub const COLS_PER_ROW: usize = 7;

/// Where a Corne position takes its token from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapTarget {
    /// Copy from this Elora (row, col)
    Source(usize, usize),
    /// Explicit `-1` placeholder
    Empty,
    /// No Elora equivalent: transparent
    Transparent,
}

use MapTarget::{Empty, Source, Transparent};

/// Corne (row, col) to Elora position, indexed `[corne_row][corne_col]`.
const POSITION_MAP: [[MapTarget; COLS_PER_ROW]; CORNE_ROWS] = [
    // Left top alpha row (Corne row 0 <- Elora row 1)
    [
        Source(1, 6), // outer <- capslock position
        Source(1, 5), // Q
        Source(1, 4), // W
        Source(1, 3), // E
        Source(1, 2), // R
        Source(1, 1), // T
        Transparent,  // extra (no equivalent)
    ],
    // Left home row (Corne row 1 <- Elora row 2)
    [
        Source(2, 6), // outer <- grave position
        Source(2, 5), // A
        Source(2, 4), // S
        Source(2, 3), // D
        Source(2, 2), // F
        Source(2, 1), // G
        Transparent,  // extra
    ],
    // Left bottom row (Corne row 2 <- Elora row 3)
    [
        Source(3, 6), // outer <- escape position
        Source(3, 5), // Z
        Source(3, 4), // X
        Source(3, 3), // C
        Source(3, 2), // V
        Source(3, 1), // B
        Empty,
    ],
    // Left thumb row (Corne row 3 <- Elora row 4)
    [
        Empty,
        Empty,
        Empty,
        Source(4, 2), // inner thumb
        Source(4, 1), // middle thumb (backspace on Elora)
        Source(4, 5), // outer thumb
        Empty,
    ],
    // Right top alpha row (Corne row 4 <- Elora row 7)
    [
        Source(7, 6), // outer <- bracket position
        Source(7, 5), // P
        Source(7, 4), // O
        Source(7, 3), // I
        Source(7, 2), // U
        Source(7, 1), // Y
        Transparent,  // extra
    ],
    // Right home row (Corne row 5 <- Elora row 8)
    [
        Source(8, 6),
        Source(8, 5), // ; (quote on Elora)
        Source(8, 4), // L
        Source(8, 3), // K
        Source(8, 2), // J
        Source(8, 1), // H
        Transparent,
    ],
    // Right bottom row (Corne row 6 <- Elora row 9)
    [
        Source(9, 6), // outer <- backslash position
        Source(9, 5), // /
        Source(9, 4), // .
        Source(9, 3), // ,
        Source(9, 2), // M
        Source(9, 1), // N
        Empty,
    ],
    // Right thumb row (Corne row 7 <- Elora row 10)
    [
        Empty,
        Empty,
        Empty,
        Source(10, 2), // inner thumb
        Source(10, 1), // middle thumb (space on Elora)
        Source(10, 5), // outer thumb (enter on Elora)
        Empty,
    ],
];

fn transparent() -> Keycode {
    Keycode::Code("KC_TRNS".to_string())
}

/// Token for a single Corne position, taken from an Elora layer.
fn map_key(elora_layer: &[Vec<Keycode>], row: usize, col: usize) -> Keycode {
    match POSITION_MAP[row][col] {
        Transparent => transparent(),
        Empty => Keycode::Raw(-1),
        Source(src_row, src_col) => elora_layer
            .get(src_row)
            .and_then(|r| r.get(src_col))
            .cloned()
            .unwrap_or_else(transparent),
    }
}

/// Rebuilds one Corne layer from an Elora layer.
fn sync_layer(elora_layer: &[Vec<Keycode>]) -> Vec<Vec<Keycode>> {
    (0..CORNE_ROWS)
        .map(|row| {
            (0..COLS_PER_ROW)
                .map(|col| map_key(elora_layer, row, col))
                .collect()
        })
        .collect()
}

/// Syncs an Elora layout onto a Corne layout, preserving Corne's structure.
///
/// Corne layers with no Elora counterpart are kept as-is. Macros and tap
/// dance entries are truncated or padded to Corne's counts, settings are
/// copied wholesale, and encoder layers are synced with `KC_TRNS` padding.
#[must_use]
pub fn sync_layouts(elora: &VialFile, corne: &VialFile) -> VialFile {
    let mut result = corne.clone();

    result.layout = corne
        .layout
        .iter()
        .enumerate()
        .map(|(idx, corne_layer)| {
            elora
                .layout
                .get(idx)
                .map_or_else(|| corne_layer.clone(), |elora_layer| sync_layer(elora_layer))
        })
        .collect();

    let macro_count = corne.macros.len();
    let mut macros: Vec<Value> = elora.macros.iter().take(macro_count).cloned().collect();
    while macros.len() < macro_count {
        macros.push(json!([]));
    }
    result.macros = macros;

    let tap_dance_count = corne.tap_dance.len();
    let mut tap_dance: Vec<Value> = elora
        .tap_dance
        .iter()
        .take(tap_dance_count)
        .cloned()
        .collect();
    while tap_dance.len() < tap_dance_count {
        tap_dance.push(json!(["KC_NO", "KC_NO", "KC_NO", "KC_NO", 200]));
    }
    result.tap_dance = tap_dance;

    result.settings = elora.settings.clone();

    result.encoder_layout = corne
        .encoder_layout
        .iter()
        .enumerate()
        .map(|(idx, corne_encoders)| {
            elora.encoder_layout.get(idx).map_or_else(
                || corne_encoders.clone(),
                |elora_encoders| {
                    let mut encoders: Vec<Vec<Keycode>> = elora_encoders
                        .iter()
                        .take(corne_encoders.len())
                        .cloned()
                        .collect();
                    while encoders.len() < corne_encoders.len() {
                        encoders.push(vec![transparent(), transparent()]);
                    }
                    encoders
                },
            )
        })
        .collect();

    result
}
