//! ES8311 audio codec driver.
//!
//! Register bring-up/tear-down sequencing for the Everest ES8311 low-power
//! mono codec, controlled over a two-wire register bus with an external
//! MCLK reference.
//!
//! # Architecture
//!
//! ```text
//! Application / playback session (player crate)
//!         ↓
//! Es8311 driver (this crate — lifecycle + register sequences)
//!         ↓
//! Hardware seams: RegisterBus, MasterClock, embedded-hal I2c/DelayNs
//! ```
//!
//! The driver owns its hardware through two seams so it can be exercised on
//! the host: [`RegisterBus`] hands out the two-wire transport for the
//! powered-on window, and [`MasterClock`] is the square-wave generator
//! feeding the codec's MCLK pin. All operations are blocking and
//! sequential; each configuration write is followed by a fixed 10 ms
//! settling delay.
//!
//! # Example
//!
//! ```no_run
//! # fn demo<P, C, D>(port: P, mclk: C, delay: D) -> Result<(), es8311::CodecError>
//! # where P: es8311::RegisterBus, C: es8311::MasterClock, D: embedded_hal::delay::DelayNs {
//! use es8311::{Es8311, Es8311Config};
//!
//! let mut codec = Es8311::new(port, mclk, delay, Es8311Config::default())?;
//! codec.power_on()?;
//! codec.set_volume(70)?;
//! // ... stream audio while powered on ...
//! codec.power_off()?;
//! # Ok(()) }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bus;
pub mod driver;
pub mod error;
pub mod mclk;
pub mod registers;
pub mod types;

pub use bus::{BusConfig, RegisterBus, DEFAULT_BUS_HZ};
pub use driver::{Es8311, Es8311Config, SETTLING_DELAY_MS};
pub use error::CodecError;
pub use mclk::{mclk_frequency, MasterClock, DEFAULT_MCLK_HZ, MCLK_RATIO};
pub use registers::{active_config, safe_config, RegisterWrite, ES8311_I2C_ADDR};
pub use types::{GainRegister, OutOfRangeError, SampleRateHz, VolumePercent};
