//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Vial Layout Viewer";

/// The binary name of the application (used in command examples and paths).
pub const APP_BINARY_NAME: &str = "vilview";
