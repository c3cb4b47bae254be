//! ES8311 lifecycle driver.
//!
//! Sequencing is the whole point of this module. The codec only accepts
//! register writes while its MCLK reference is running, and it must be
//! walked back to the safe configuration *before* that clock or the bus is
//! removed; getting either wrong produces silent audio or an undefined
//! analog output state. All operations are blocking: each register write is
//! followed by a fixed settling delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::bus::{BusConfig, RegisterBus};
use crate::error::CodecError;
use crate::mclk::{mclk_frequency, MasterClock, DEFAULT_MCLK_HZ};
use crate::registers::{
    active_config, safe_config, ES8311_I2C_ADDR, REG32_DAC_VOLUME, REGFD_CHIP_ID1, REGFE_CHIP_ID2,
};
use crate::types::{GainRegister, SampleRateHz, VolumePercent};

/// Post-write settling time required during bring-up and tear-down.
pub const SETTLING_DELAY_MS: u32 = 10;

/// ES8311 driver configuration.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Es8311Config {
    /// Two-wire control bus settings (pins, 400 kHz by default).
    pub bus: BusConfig,
    /// Operating sample rate; MCLK is retuned to `rate * 256` on power-on.
    pub sample_rate: SampleRateHz,
}

/// ES8311 audio codec driver.
///
/// Owns the master-clock generator and the register-bus port for the whole
/// driver lifetime; the claimed bus transport only exists between
/// [`power_on`](Es8311::power_on) and [`power_off`](Es8311::power_off).
///
/// State machine: `Constructed → PoweredOn ⇄ PoweredOff`. Register access
/// is only valid while powered on. Exclusive ownership (`&mut self`
/// everywhere) stands in for locking; the driver itself is single-threaded.
pub struct Es8311<P, C, D>
where
    P: RegisterBus,
    C: MasterClock,
    D: DelayNs,
{
    config: Es8311Config,
    port: P,
    mclk: C,
    delay: D,
    bus: Option<P::Bus>,
}

impl<P, C, D> Es8311<P, C, D>
where
    P: RegisterBus,
    C: MasterClock,
    D: DelayNs,
{
    /// Create the driver and start the MCLK reference at 44.1 kHz × 256.
    ///
    /// The constructor-time clock is independent of the configured sample
    /// rate; it exists so the codec has a stable reference before
    /// [`power_on`](Es8311::power_on) retunes it. The bus is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ClockFailed`] if the generator cannot start.
    pub fn new(port: P, mut mclk: C, delay: D, config: Es8311Config) -> Result<Self, CodecError> {
        mclk.start(DEFAULT_MCLK_HZ)
            .map_err(|_| CodecError::ClockFailed)?;
        Ok(Self {
            config,
            port,
            mclk,
            delay,
            bus: None,
        })
    }

    /// Whether the register bus is currently claimed (powered-on window).
    #[must_use]
    pub fn is_powered(&self) -> bool {
        self.bus.is_some()
    }

    /// The configured operating sample rate.
    #[must_use]
    pub fn sample_rate(&self) -> SampleRateHz {
        self.config.sample_rate
    }

    /// Bring the codec into its playing state.
    ///
    /// In order: claim the bus, retune MCLK to `sample_rate * 256`, then
    /// replay the active register table with a settling delay after each
    /// write. On failure the driver is left partially initialized — no
    /// rollback is attempted; call [`power_off`](Es8311::power_off) to
    /// quiesce and release what was claimed.
    ///
    /// # Errors
    ///
    /// [`CodecError::BusClaimFailed`] if the bus controller is unavailable,
    /// [`CodecError::ClockFailed`] if MCLK cannot be retuned,
    /// [`CodecError::BusError`] if a register write is not acknowledged.
    pub fn power_on(&mut self) -> Result<(), CodecError> {
        if self.bus.is_none() {
            let bus = self
                .port
                .claim(self.config.bus)
                .map_err(|_| CodecError::BusClaimFailed)?;
            self.bus = Some(bus);
        }
        self.mclk
            .start(mclk_frequency(self.config.sample_rate))
            .map_err(|_| CodecError::ClockFailed)?;
        for &(register, value) in active_config() {
            self.write(register, value)?;
            self.delay.delay_ms(SETTLING_DELAY_MS);
        }
        Ok(())
    }

    /// Walk the codec back to its safe state and release clock and bus.
    ///
    /// The safe register table is written while bus and MCLK are still live
    /// (the codec only accepts commands while clocked); only then is the
    /// clock stopped and the bus released. A write failure aborts the
    /// remaining sequence but never the teardown: clock and bus are
    /// released on every exit path, and the first error is returned.
    ///
    /// Calling this with no bus claimed is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// [`CodecError::BusError`] for a failed safe-config write,
    /// [`CodecError::ClockFailed`] if the generator refuses to stop.
    pub fn power_off(&mut self) -> Result<(), CodecError> {
        let Some(mut bus) = self.bus.take() else {
            return Ok(());
        };
        let mut result = Ok(());
        for &(register, value) in safe_config() {
            if bus.write(ES8311_I2C_ADDR, &[register, value]).is_err() {
                result = Err(CodecError::BusError);
                break;
            }
            self.delay.delay_ms(SETTLING_DELAY_MS);
        }
        if self.mclk.stop().is_err() && result.is_ok() {
            result = Err(CodecError::ClockFailed);
        }
        self.port.release(bus);
        result
    }

    /// Write a single codec register.
    ///
    /// # Errors
    ///
    /// [`CodecError::BusNotReady`] outside the powered-on window (no
    /// transaction is attempted), [`CodecError::BusError`] on transport
    /// failure.
    pub fn write(&mut self, register: u8, value: u8) -> Result<(), CodecError> {
        let bus = self.bus.as_mut().ok_or(CodecError::BusNotReady)?;
        bus.write(ES8311_I2C_ADDR, &[register, value])
            .map_err(|_| CodecError::BusError)
    }

    /// Read a single codec register (write address, repeated-start read).
    ///
    /// # Errors
    ///
    /// Same readiness and transport failures as [`write`](Es8311::write).
    pub fn read(&mut self, register: u8) -> Result<u8, CodecError> {
        let bus = self.bus.as_mut().ok_or(CodecError::BusNotReady)?;
        let mut buf = [0u8; 1];
        bus.write_read(ES8311_I2C_ADDR, &[register], &mut buf)
            .map_err(|_| CodecError::BusError)?;
        Ok(buf[0])
    }

    /// Read the two chip-ID registers (`0x83`, `0x11` on silicon).
    ///
    /// Bring-up diagnostic; not part of the power sequences.
    ///
    /// # Errors
    ///
    /// Same readiness and transport failures as [`read`](Es8311::read).
    pub fn chip_id(&mut self) -> Result<(u8, u8), CodecError> {
        Ok((self.read(REGFD_CHIP_ID1)?, self.read(REGFE_CHIP_ID2)?))
    }

    /// Set the DAC volume from a percentage, clamping to 0–100.
    ///
    /// Maps linearly to the 8-bit gain code (`percent * 255 / 100`) and
    /// writes it to the DAC volume register. Only valid while powered on.
    ///
    /// # Errors
    ///
    /// Inherits [`write`](Es8311::write)'s failure modes.
    pub fn set_volume(&mut self, percent: i32) -> Result<(), CodecError> {
        let gain = GainRegister::from_volume(VolumePercent::from_signed(percent));
        self.write(REG32_DAC_VOLUME, gain.get())
    }

    /// Strict volume variant: rejects `percent > 100` instead of clamping.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidVolume`] for out-of-range input (no bus
    /// transaction), otherwise as [`write`](Es8311::write).
    pub fn try_set_volume(&mut self, percent: u8) -> Result<(), CodecError> {
        let vol = VolumePercent::try_new(percent).map_err(|_| CodecError::InvalidVolume)?;
        self.write(REG32_DAC_VOLUME, GainRegister::from_volume(vol).get())
    }
}
