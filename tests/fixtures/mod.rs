//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;

/// Grid rows per Elora layer.
pub const ELORA_ROWS: usize = 12;

/// Grid rows per Corne layer.
pub const CORNE_ROWS: usize = 8;

/// Keys per row on both boards.
pub const COLS: usize = 7;

/// One layer where every cell names its own position (`"{tag}_{row}_{col}"`).
pub fn tagged_layer(rows: usize, tag: &str) -> Value {
    let grid: Vec<Vec<String>> = (0..rows)
        .map(|row| (0..COLS).map(|col| format!("{tag}_{row}_{col}")).collect())
        .collect();
    json!(grid)
}

/// A full Elora `.vil` value with deterministic position-tagged keys.
pub fn elora_vil(layers: usize) -> Value {
    let layout: Vec<Value> = (0..layers).map(|_| tagged_layer(ELORA_ROWS, "E")).collect();
    let encoders: Vec<Value> = (0..layers)
        .map(|_| json!([["KC_VOLD", "KC_VOLU"]]))
        .collect();

    json!({
        "version": 1,
        "uid": 11111,
        "layout": layout,
        "encoder_layout": encoders,
        "macro": [["down", "KC_A"], []],
        "tap_dance": [["KC_A", "KC_B", "KC_NO", "KC_NO", 180]],
        "settings": {"18": 175}
    })
}

/// A full Corne `.vil` value with deterministic position-tagged keys.
pub fn corne_vil(layers: usize) -> Value {
    let layout: Vec<Value> = (0..layers).map(|_| tagged_layer(CORNE_ROWS, "C")).collect();
    let encoders: Vec<Value> = (0..layers)
        .map(|_| json!([["KC_WH_D", "KC_WH_U"], ["KC_WH_D", "KC_WH_U"]]))
        .collect();

    json!({
        "version": 1,
        "uid": 22222,
        "layout": layout,
        "encoder_layout": encoders,
        "macro": [[], [], []],
        "tap_dance": [["KC_C", "KC_D", "KC_NO", "KC_NO", 150], ["KC_E", "KC_NO", "KC_NO", "KC_NO", 200]],
        "settings": {"18": 200}
    })
}

/// A small layout exercising one token of each semantic class.
pub fn sample_vil() -> Value {
    json!({
        "layout": [
            [
                ["KC_A", "LCTL_T(KC_A)", "LT1(KC_SPACE)", "KC_TRNS", "M3", "LSFT(KC_1)", -1],
                ["KC_LSHIFT", "LGUI(KC_SPACE)", "DF(0)", "RM_TOGG", "KC_NO", "KC_F12", "KC_LEFT"]
            ],
            [
                ["KC_1", "KC_2", "KC_3", "KC_4", "KC_5", "KC_6", "KC_7"],
                ["KC_TRNS", "KC_TRNS", "KC_TRNS", "KC_TRNS", "KC_TRNS", "KC_TRNS", "KC_TRNS"]
            ]
        ]
    })
}

/// Writes a `.vil` value into a temp dir and returns the file path.
pub fn write_vil(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}
