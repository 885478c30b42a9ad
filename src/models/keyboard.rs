//! Static descriptions of the supported split keyboards.

/// Physical description of a supported keyboard model.
///
/// A `.vil` layer is a flat list of rows covering both halves; the profile
/// records which row indices belong to which half. Rows within a half are
/// stored finger-order from the index finger outward, so the right half is
/// column-reversed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardProfile {
    /// Display name (e.g., "Elora")
    pub name: &'static str,
    /// Layout file name inside the layouts directory
    pub file_name: &'static str,
    /// Row indices that form the left half
    pub left_rows: &'static [usize],
    /// Row indices that form the right half
    pub right_rows: &'static [usize],
    /// Keys per row
    pub cols_per_row: usize,
}

/// Splitkb Elora: number row, 6 rows per half.
pub const ELORA: KeyboardProfile = KeyboardProfile {
    name: "Elora",
    file_name: "elora.vil",
    left_rows: &[0, 1, 2, 3, 4, 5],
    right_rows: &[6, 7, 8, 9, 10, 11],
    cols_per_row: 7,
};

/// Corne v4: 4 rows per half, no number row.
pub const CORNE: KeyboardProfile = KeyboardProfile {
    name: "Corne",
    file_name: "corne-v4.vil",
    left_rows: &[0, 1, 2, 3],
    right_rows: &[4, 5, 6, 7],
    cols_per_row: 7,
};

/// All supported keyboards, in switch order.
pub const PROFILES: &[KeyboardProfile] = &[ELORA, CORNE];

impl KeyboardProfile {
    /// Index into [`PROFILES`] of the keyboard with this name, ignoring case.
    #[must_use]
    pub fn position_by_name(name: &str) -> Option<usize> {
        PROFILES
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Grid rows a layer of this keyboard is expected to carry.
    #[must_use]
    pub const fn rows_per_layer(&self) -> usize {
        self.left_rows.len() + self.right_rows.len()
    }
}
