//! Audio domain newtypes for compile-time safety.
//!
//! - [`VolumePercent`]: user-facing volume, bounded to 0–100
//! - [`GainRegister`]: ES8311 DAC gain code, derived from `VolumePercent` only
//! - [`SampleRateHz`]: validates the ES8311 PCM range (8–96 kHz)

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

// ── VolumePercent ────────────────────────────────────────────────────────────

/// User-facing volume percentage, always in 0–100.
///
/// The driver converts this to a DAC gain code through
/// [`GainRegister::from_volume`]; keeping the percentage in its own type
/// means an unconverted raw value can never reach the volume register.
/// The clamping constructors ([`VolumePercent::new`],
/// [`VolumePercent::from_signed`]) saturate out-of-range input;
/// [`VolumePercent::try_new`] rejects it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct VolumePercent(u8);

impl VolumePercent {
    /// Build from an unsigned percentage, saturating anything above 100.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Create a `VolumePercent` from a signed percentage, clamping to 0–100.
    ///
    /// Callers hand volume around as plain integers; negative requests mean
    /// silence, anything above 100 means full volume.
    #[must_use]
    pub fn from_signed(value: i32) -> Self {
        // clamp bounds the value to 0..=100 before the narrowing cast
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let clamped = value.clamp(0, 100) as u8;
        Self(clamped)
    }

    /// Strict constructor for callers that want to reject bad input
    /// rather than silently saturate it.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `value > 100`.
    pub fn try_new(value: u8) -> Result<Self, OutOfRangeError> {
        if value > 100 {
            Err(OutOfRangeError {
                value: u32::from(value),
                min: 0,
                max: 100,
            })
        } else {
            Ok(Self(value))
        }
    }

    /// The percentage as a plain `u8` (0–100).
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

// ── GainRegister ─────────────────────────────────────────────────────────────

/// ES8311 DAC volume register value (0x00 = silent, 0xFF = maximum gain).
///
/// This type can only be constructed from a [`VolumePercent`], ensuring the
/// conversion formula is applied consistently.
///
/// Formula: `gain = volume_percent * 255 / 100` (integer division, so the
/// fractional part truncates: 70% → 178, not 179).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct GainRegister(u8);

impl GainRegister {
    /// Convert a `VolumePercent` to an ES8311 DAC gain code.
    ///
    /// - 0% volume   → register 0x00 (silent)
    /// - 100% volume → register 0xFF (maximum gain)
    #[must_use]
    pub fn from_volume(vol: VolumePercent) -> Self {
        // vol * 255 fits u16 (max 100 * 255 = 25500), quotient fits u8
        #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
        let gain = (u16::from(vol.get()) * 255 / 100) as u8;
        Self(gain)
    }

    /// Return the raw register value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

// ── SampleRateHz ─────────────────────────────────────────────────────────────

/// Sample rate in Hz, validated to the PCM range supported by the ES8311.
///
/// Valid range: 8000–96000 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct SampleRateHz(u32);

impl SampleRateHz {
    /// Minimum supported sample rate: 8000 Hz (telephony).
    pub const MIN_HZ: u32 = 8_000;

    /// Maximum supported sample rate: 96000 Hz (ES8311 PCM max).
    pub const MAX_HZ: u32 = 96_000;

    /// Power-on-reset operating rate when none is configured: 8 kHz.
    pub const DEFAULT: Self = Self(8_000);

    /// Create a `SampleRateHz`, returning an error if out of 8000–96000 Hz.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `hz < 8000` or `hz > 96000`.
    pub fn new(hz: u32) -> Result<Self, OutOfRangeError> {
        if hz < Self::MIN_HZ || hz > Self::MAX_HZ {
            Err(OutOfRangeError {
                value: hz,
                min: Self::MIN_HZ,
                max: Self::MAX_HZ,
            })
        } else {
            Ok(Self(hz))
        }
    }

    /// Return the sample rate in Hz.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for SampleRateHz {
    fn default() -> Self {
        Self::DEFAULT
    }
}
