//! Theme system for consistent UI colors across dark and light modes.
//!
//! Detects the OS theme via the `dark-light` crate and maps each semantic
//! key class to a display color.

use ratatui::style::Color;

use crate::decoder::SemanticClass;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders and titles
    pub primary: Color,
    /// Accent color for highlights and hint keys
    pub accent: Color,
    /// Success color, used for mod-tap keys
    pub success: Color,
    /// Error color, used for macro keys
    pub error: Color,
    /// Warning color, used for pure modifier keys
    pub warning: Color,
    /// Special-key color (layer switches, lighting, combos)
    pub special: Color,

    /// Primary text content color
    pub text: Color,
    /// Muted text for help hints and transparent keys
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate palette.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Dark palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            special: Color::Magenta,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
        }
    }

    /// Light palette for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(176, 104, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Rgb(200, 0, 0),
            warning: Color::Rgb(176, 104, 0),
            special: Color::Rgb(128, 0, 128),

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
        }
    }

    /// Display color for a semantic key class.
    #[must_use]
    pub const fn class_color(&self, class: SemanticClass) -> Color {
        match class {
            SemanticClass::Alpha => self.text,
            SemanticClass::ModTap => self.success,
            SemanticClass::LayerTap => self.primary,
            SemanticClass::Macro => self.error,
            SemanticClass::Modifier => self.warning,
            SemanticClass::Special => self.special,
            SemanticClass::Transparent | SemanticClass::Empty => self.text_muted,
        }
    }
}
