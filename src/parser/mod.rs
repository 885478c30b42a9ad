//! Vial layout file parsing and saving.
//!
//! A `.vil` file is JSON exported by Vial. The only part the viewer
//! interprets is `layout`, the per-layer grid of keycode tokens; the
//! remaining sections (`macro`, `tap_dance`, `settings`, `encoder_layout`)
//! are carried as opaque values so they survive a load/save cycle, and any
//! fields this version does not know about are preserved verbatim.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::decoder::Keycode;

/// Parsed contents of a Vial `.vil` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VialFile {
    /// Keycode tokens indexed as `[layer][row][col]`
    pub layout: Vec<Vec<Vec<Keycode>>>,
    /// Encoder assignments indexed as `[layer][encoder][direction]`
    #[serde(default)]
    pub encoder_layout: Vec<Vec<Vec<Keycode>>>,
    /// Macro definitions, kept opaque
    #[serde(default, rename = "macro")]
    pub macros: Vec<Value>,
    /// Tap dance definitions, kept opaque
    #[serde(default)]
    pub tap_dance: Vec<Value>,
    /// Firmware settings blob (timings etc.), kept opaque
    #[serde(default)]
    pub settings: Value,
    /// Fields this version does not interpret, preserved on save
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VialFile {
    /// Number of key layers in the file.
    #[must_use]
    pub fn num_layers(&self) -> usize {
        self.layout.len()
    }
}

/// Parses a `.vil` file from disk.
pub fn parse_vil_file(path: &Path) -> Result<VialFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    parse_vil_str(&content)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}

/// Parses `.vil` content from a string.
pub fn parse_vil_str(content: &str) -> Result<VialFile> {
    let file: VialFile = serde_json::from_str(content).context("Invalid Vial JSON")?;

    if file.layout.is_empty() {
        anyhow::bail!("Layout file contains no layers");
    }

    Ok(file)
}

/// Saves a `.vil` file to disk in Vial's compact JSON form.
pub fn save_vil_file(file: &VialFile, path: &Path) -> Result<()> {
    let json = serde_json::to_string(file).context("Failed to serialize layout")?;

    std::fs::write(path, json)
        .with_context(|| format!("Failed to write layout file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "layout": [[["KC_A", "KC_B"], [-1, "LT1(KC_SPACE)"]]],
        "encoder_layout": [[["KC_VOLD", "KC_VOLU"]]],
        "macro": [[], []],
        "tap_dance": [],
        "settings": {"18": 200},
        "version": 1,
        "uid": 123456789
    }"#;

    #[test]
    fn test_parse_minimal() {
        let file = parse_vil_str(MINIMAL).unwrap();
        assert_eq!(file.num_layers(), 1);
        assert_eq!(file.layout[0][0][0], Keycode::Code("KC_A".to_string()));
        assert_eq!(file.layout[0][1][0], Keycode::Raw(-1));
        assert_eq!(file.macros.len(), 2);
        assert_eq!(file.encoder_layout[0][0].len(), 2);
    }

    #[test]
    fn test_parse_preserves_unknown_fields() {
        let file = parse_vil_str(MINIMAL).unwrap();
        assert_eq!(file.extra.get("version"), Some(&Value::from(1)));
        assert_eq!(file.extra.get("uid"), Some(&Value::from(123_456_789)));
    }

    #[test]
    fn test_unknown_fields_survive_save() {
        let file = parse_vil_str(MINIMAL).unwrap();
        let json = serde_json::to_string(&file).unwrap();
        let reparsed = parse_vil_str(&json).unwrap();
        assert_eq!(file, reparsed);
    }

    #[test]
    fn test_missing_optional_sections() {
        let file = parse_vil_str(r#"{"layout": [[["KC_A"]]]}"#).unwrap();
        assert!(file.macros.is_empty());
        assert!(file.tap_dance.is_empty());
        assert!(file.encoder_layout.is_empty());
    }

    #[test]
    fn test_empty_layout_rejected() {
        assert!(parse_vil_str(r#"{"layout": []}"#).is_err());
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(parse_vil_str("not json").is_err());
    }
}
