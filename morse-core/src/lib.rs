#![cfg_attr(not(feature = "std"), no_std)]

//! # Morse Core
//!
//! ASCII to Morse code pulse encoder for embedded signaling devices.
//! Each Morse character is packed into a single self-delimiting byte;
//! the encoder unpacks it and drives an injected signal line with
//! standard Morse timing ratios. Send-only, blocking.

pub mod types;
pub mod table;
pub mod encoder;
pub mod hal;

pub use types::*;
pub use encoder::*;
pub use hal::{EmbeddedHalSignal, Signal, SignalError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timing profile for most amateur radio applications (20 WPM)
pub fn default_timing() -> TimingProfile {
    TimingProfile::default()
}
