//! Two-wire register-bus seam.
//!
//! The codec's control bus only exists between power-on and power-off. The
//! driver claims a transport handle from a [`RegisterBus`] port during
//! power-on, holds it as an explicit present-or-absent resource, and hands
//! it back during power-off — every exit path releases it.

/// Control-bus clock rate used for register access: 400 kHz fast mode.
pub const DEFAULT_BUS_HZ: u32 = 400_000;

/// Two-wire bus configuration.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// Bus clock (SCL) pin identifier, as numbered by the port implementation.
    pub scl_pin: u8,
    /// Bus data (SDA) pin identifier.
    pub sda_pin: u8,
    /// Bus clock frequency in Hz.
    pub frequency_hz: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            scl_pin: 4,
            sda_pin: 5,
            frequency_hz: DEFAULT_BUS_HZ,
        }
    }
}

/// Port that hands out the two-wire bus transport on demand.
///
/// Implementors wrap the platform's I2C controller. `claim` configures the
/// controller for the given pins and frequency and transfers ownership of a
/// transport handle to the caller; `release` takes it back so a later claim
/// can reuse the controller.
pub trait RegisterBus {
    /// The claimed transport handle.
    type Bus: embedded_hal::i2c::I2c;
    /// Error type for a failed claim.
    type Error: core::fmt::Debug;

    /// Claim the bus, configured per `config`.
    fn claim(&mut self, config: BusConfig) -> Result<Self::Bus, Self::Error>;

    /// Release a previously claimed bus.
    fn release(&mut self, bus: Self::Bus) {
        let _ = bus;
    }
}
