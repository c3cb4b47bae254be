//! Playback orchestration around the ES8311 codec driver.
//!
//! Sequences the hardware lifecycle a playback application needs — speaker
//! amplifier on, codec powered and volume set, then the mirror image on the
//! way down — without owning the audio stream itself. Decoding and PCM
//! transport are external collaborators that run while a session is active.
#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod session;

pub use session::{AudioSession, SessionError, SessionState};
