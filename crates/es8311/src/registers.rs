//! ES8311 register addresses and the fixed bring-up / tear-down sequences.
//!
//! Reference: Everest Semiconductor ES8311 datasheet (register map, §10).
//!
//! The two write sequences are independently hand-authored tables, not
//! logical inverses of each other. Their order is load-bearing: the codec
//! must see clock-manager and power registers change in this sequence or it
//! can latch an undefined analog output state. Preserve them verbatim.

/// 7-bit I2C device address (CE pin low).
pub const ES8311_I2C_ADDR: u8 = 0x18;

/// REG00: Reset / chip state control.
pub const REG00_RESET: u8 = 0x00;
/// REG01: Clock manager 1 (MCLK source, clock enables).
pub const REG01_CLK_MANAGER1: u8 = 0x01;
/// REG09: Serial data port (SDP) input format.
pub const REG09_SDP_IN: u8 = 0x09;
/// REG0A: Serial data port (SDP) output format.
pub const REG0A_SDP_OUT: u8 = 0x0A;
/// REG0B: System control block start.
pub const REG0B_SYSTEM: u8 = 0x0B;
/// REG17: ADC volume.
pub const REG17_ADC_VOLUME: u8 = 0x17;
/// REG32: DAC volume (0x00 = minimum gain, 0xFF = maximum gain).
pub const REG32_DAC_VOLUME: u8 = 0x32;
/// REG44: GPIO / test-mode control (ADC-to-DAC loopback bit lives here).
pub const REG44_GPIO: u8 = 0x44;
/// REGFD: Chip ID byte 1 (reads 0x83).
pub const REGFD_CHIP_ID1: u8 = 0xFD;
/// REGFE: Chip ID byte 2 (reads 0x11).
pub const REGFE_CHIP_ID2: u8 = 0xFE;

/// One entry of a configuration sequence: `(register address, value)`.
pub type RegisterWrite = (u8, u8);

/// Powered-on configuration: analog/digital path setup, ADC/DAC enables,
/// clock dividers and gain staging for the playing state.
const ACTIVE_CONFIG: [RegisterWrite; 32] = [
    (0x00, 0x80), (0x01, 0x3F), (0x02, 0x00), (0x03, 0x10), (0x04, 0x10),
    (0x05, 0x00), (0x06, 0x03), (0x07, 0x00), (0x08, 0xFF), (0x09, 0x0C),
    (0x0A, 0x4C), (0x0B, 0x00), (0x0C, 0x00), (0x0D, 0x01), (0x0E, 0x02),
    (0x0F, 0x00), (0x10, 0x1F), (0x11, 0x7F), (0x12, 0x00), (0x13, 0x10),
    (0x14, 0x1A), (0x15, 0x40), (0x16, 0x24), (0x17, 0xBF), (0x18, 0x00),
    (0x19, 0x00), (0x1A, 0x00), (0x1B, 0x0A), (0x1C, 0x6A),
    (0x32, 0x9F), (0x37, 0x08), (0x44, 0x50),
];

/// Powered-down configuration: sequences the codec back into a low-power,
/// muted state. Same address order as [`active_config`] so every register is
/// restored to a benign value before the clocks are removed.
const SAFE_CONFIG: [RegisterWrite; 32] = [
    (0x00, 0x1F), (0x01, 0x00), (0x02, 0x00), (0x03, 0x10), (0x04, 0x10),
    (0x05, 0x00), (0x06, 0x03), (0x07, 0x00), (0x08, 0xFF), (0x09, 0x00),
    (0x0A, 0x00), (0x0B, 0x00), (0x0C, 0x20), (0x0D, 0xFC), (0x0E, 0x6A),
    (0x0F, 0x00), (0x10, 0x13), (0x11, 0x7C), (0x12, 0x02), (0x13, 0x40),
    (0x14, 0x10), (0x15, 0x00), (0x16, 0x04), (0x17, 0x00), (0x18, 0x00),
    (0x19, 0x00), (0x1A, 0x00), (0x1B, 0x0C), (0x1C, 0x4C),
    (0x32, 0x00), (0x37, 0x08), (0x44, 0x00),
];

/// Ordered register writes that bring the codec into its playing state.
#[must_use]
pub fn active_config() -> &'static [RegisterWrite] {
    &ACTIVE_CONFIG
}

/// Ordered register writes that quiesce the codec before clock removal.
#[must_use]
pub fn safe_config() -> &'static [RegisterWrite] {
    &SAFE_CONFIG
}
