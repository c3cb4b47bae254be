//! Master-clock output seam.
//!
//! The ES8311 derives its internal sample-rate clocking from an external
//! MCLK reference of `sample_rate * 256` Hz. The driver owns the generator
//! through this trait so it can retune it during power-on and guarantee it
//! keeps running until the safe-config writes have completed.

use crate::types::SampleRateHz;

/// MCLK-to-sample-rate ratio the register tables are divided for.
pub const MCLK_RATIO: u32 = 256;

/// Constructor-time reference frequency: 44.1 kHz × 256.
///
/// Emitted before the operating sample rate is applied so the codec has a
/// stable reference from the moment the driver exists.
pub const DEFAULT_MCLK_HZ: u32 = 11_289_600;

/// MCLK frequency for an operating sample rate.
#[must_use]
pub fn mclk_frequency(rate: SampleRateHz) -> u32 {
    // 96 kHz * 256 = 24.576 MHz, far below u32::MAX; saturate anyway
    rate.get().saturating_mul(MCLK_RATIO)
}

/// A square-wave clock generator feeding the codec's MCLK pin.
///
/// Implementors own the output pin (typically a PWM or timer channel) and
/// must emit a 50% duty cycle at the requested frequency.
pub trait MasterClock {
    /// Error type.
    type Error: core::fmt::Debug;

    /// Start the output at `freq_hz`, or retune it if already running.
    fn start(&mut self, freq_hz: u32) -> Result<(), Self::Error>;

    /// Stop the output and idle the pin.
    fn stop(&mut self) -> Result<(), Self::Error>;
}
