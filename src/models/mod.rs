//! Data structures for keyboard profiles and loaded layouts.

pub mod keyboard;
pub mod layout;

pub use keyboard::{KeyboardProfile, CORNE, ELORA, PROFILES};
pub use layout::KeyboardLayout;
