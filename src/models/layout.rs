//! A loaded keyboard layout: a parsed `.vil` file plus its profile.

use std::path::Path;

use anyhow::{Context, Result};

use crate::decoder::Keycode;
use crate::models::KeyboardProfile;
use crate::parser::{self, VialFile};

/// A complete keyboard layout loaded from a `.vil` file.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    /// The keyboard this layout belongs to
    pub profile: &'static KeyboardProfile,
    /// The parsed layout file
    pub vial: VialFile,
}

impl KeyboardLayout {
    /// Loads the profile's layout file from a directory.
    pub fn load(profile: &'static KeyboardProfile, base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(profile.file_name);
        let vial = parser::parse_vil_file(&path)
            .with_context(|| format!("Failed to load {} layout", profile.name))?;

        Ok(Self { profile, vial })
    }

    /// Number of layers in the layout.
    #[must_use]
    pub fn num_layers(&self) -> usize {
        self.vial.num_layers()
    }

    /// All rows of a layer. Out-of-range layer numbers clamp to layer 0.
    #[must_use]
    pub fn layer(&self, layer_num: usize) -> &[Vec<Keycode>] {
        self.vial
            .layout
            .get(layer_num)
            .unwrap_or(&self.vial.layout[0])
    }

    /// Left-half rows of a layer, in display order.
    #[must_use]
    pub fn left_half(&self, layer_num: usize) -> Vec<Vec<Keycode>> {
        let layer = self.layer(layer_num);
        self.profile
            .left_rows
            .iter()
            .filter_map(|&i| layer.get(i).cloned())
            .collect()
    }

    /// Right-half rows of a layer, with columns reversed for display.
    ///
    /// Rows are stored finger-order from the index finger outward, so the
    /// right half mirrors onto the screen by reversing each row.
    #[must_use]
    pub fn right_half(&self, layer_num: usize) -> Vec<Vec<Keycode>> {
        let layer = self.layer(layer_num);
        self.profile
            .right_rows
            .iter()
            .filter_map(|&i| layer.get(i).cloned())
            .map(|row| row.into_iter().rev().collect())
            .collect()
    }
}
