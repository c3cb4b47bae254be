//! Codec driver error taxonomy.

use thiserror_no_std::Error;

/// Errors surfaced by the [`Es8311`](crate::Es8311) driver.
///
/// No retries are performed internally; every bus or clock failure aborts
/// the current lifecycle operation and surfaces here. Partial register
/// sequences are not rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecError {
    /// The two-wire bus controller could not be claimed.
    #[error("register bus could not be claimed")]
    BusClaimFailed,
    /// A register transaction failed (no acknowledge, arbitration loss).
    #[error("register bus transaction failed")]
    BusError,
    /// A register access was attempted outside the powered-on window.
    #[error("register bus not ready: codec is powered off")]
    BusNotReady,
    /// A strict volume request was outside 0–100%.
    #[error("volume out of range (0-100%)")]
    InvalidVolume,
    /// The master-clock generator could not be started, retuned or stopped.
    #[error("master clock generator failed")]
    ClockFailed,
}
