//! CLI command handlers.
//!
//! These provide headless, scriptable access to the decoder and the
//! layout migration utility for automation and testing.

pub mod decode;
pub mod inspect;
pub mod sync;

pub use decode::DecodeArgs;
pub use inspect::InspectArgs;
pub use sync::SyncArgs;
