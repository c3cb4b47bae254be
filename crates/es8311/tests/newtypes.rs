//! Type system enforcement tests for the audio domain newtypes.
//! These newtypes prevent common codec configuration bugs at compile time.

// ── VolumePercent ────────────────────────────────────────────────────────────

#[test]
fn volume_percent_new_clamps_over_100() {
    use es8311::VolumePercent;
    let v = VolumePercent::new(150);
    assert_eq!(v.get(), 100, "VolumePercent::new(150) should clamp to 100");
}

#[test]
fn volume_percent_new_allows_bounds() {
    use es8311::VolumePercent;
    assert_eq!(VolumePercent::new(0).get(), 0);
    assert_eq!(VolumePercent::new(100).get(), 100);
}

#[test]
fn volume_percent_from_signed_clamps_negative() {
    use es8311::VolumePercent;
    assert_eq!(VolumePercent::from_signed(-10).get(), 0);
    assert_eq!(VolumePercent::from_signed(i32::MIN).get(), 0);
}

#[test]
fn volume_percent_from_signed_clamps_over_100() {
    use es8311::VolumePercent;
    assert_eq!(VolumePercent::from_signed(150).get(), 100);
    assert_eq!(VolumePercent::from_signed(i32::MAX).get(), 100);
}

#[test]
fn volume_percent_try_new_rejects_over_100() {
    use es8311::VolumePercent;
    assert!(VolumePercent::try_new(101).is_err());
    assert!(VolumePercent::try_new(255).is_err());
}

#[test]
fn volume_percent_try_new_accepts_valid_range() {
    use es8311::VolumePercent;
    assert!(VolumePercent::try_new(0).is_ok());
    assert!(VolumePercent::try_new(50).is_ok());
    assert!(VolumePercent::try_new(100).is_ok());
}

#[test]
fn volume_percent_is_one_byte() {
    use es8311::VolumePercent;
    assert_eq!(core::mem::size_of::<VolumePercent>(), 1);
}

// ── GainRegister ─────────────────────────────────────────────────────────────

#[test]
fn gain_register_from_volume_0_is_silent() {
    use es8311::{GainRegister, VolumePercent};
    let gain = GainRegister::from_volume(VolumePercent::new(0));
    assert_eq!(gain.get(), 0x00, "0% volume should give gain code 0x00");
}

#[test]
fn gain_register_from_volume_100_is_full_scale() {
    use es8311::{GainRegister, VolumePercent};
    let gain = GainRegister::from_volume(VolumePercent::new(100));
    assert_eq!(gain.get(), 0xFF, "100% volume should give gain code 0xFF");
}

#[test]
fn gain_register_from_volume_70_truncates() {
    use es8311::{GainRegister, VolumePercent};
    // 70 * 255 / 100 = 178.5, integer division truncates to 178 (0xB2)
    let gain = GainRegister::from_volume(VolumePercent::new(70));
    assert_eq!(gain.get(), 0xB2);
}

#[test]
fn gain_register_is_one_byte() {
    use es8311::GainRegister;
    assert_eq!(core::mem::size_of::<GainRegister>(), 1);
}

// ── SampleRateHz ─────────────────────────────────────────────────────────────

#[test]
fn sample_rate_hz_rejects_below_minimum() {
    use es8311::SampleRateHz;
    assert!(SampleRateHz::new(0).is_err());
    assert!(SampleRateHz::new(7999).is_err());
}

#[test]
fn sample_rate_hz_accepts_standard_rates() {
    use es8311::SampleRateHz;
    assert!(SampleRateHz::new(8000).is_ok());
    assert!(SampleRateHz::new(32000).is_ok());
    assert!(SampleRateHz::new(44100).is_ok());
    assert!(SampleRateHz::new(48000).is_ok());
    assert!(SampleRateHz::new(96000).is_ok());
}

#[test]
fn sample_rate_hz_rejects_above_maximum() {
    use es8311::SampleRateHz;
    // ES8311 PCM max: 96 kHz
    assert!(SampleRateHz::new(96_001).is_err());
}

#[test]
fn sample_rate_hz_defaults_to_8khz() {
    use es8311::SampleRateHz;
    assert_eq!(SampleRateHz::default().get(), 8_000);
    assert_eq!(SampleRateHz::DEFAULT.get(), 8_000);
}

#[test]
fn out_of_range_error_reports_bounds() {
    use es8311::SampleRateHz;
    let err = SampleRateHz::new(200_000).unwrap_err();
    assert_eq!(err.value, 200_000);
    assert_eq!(err.min, 8_000);
    assert_eq!(err.max, 96_000);
}
