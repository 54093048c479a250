//! Input crate: terminal key events mapped to movement intents.
//!
//! Input is non-blocking by contract: the frame loop polls with a timeout
//! and an absent or unmapped key is simply "no intent" for that frame.

pub mod map;

pub use map::{handle_key_event, should_quit};
