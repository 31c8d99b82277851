//! Common types, protocol definitions, and errors shared across `sounds-json` crates.

pub mod error;
pub mod protocol;

pub use error::ServiceError;
pub use protocol::{SoundEntry, SoundMap};
