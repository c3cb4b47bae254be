//! Property-based tests for the volume mapping.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

use es8311::{GainRegister, SampleRateHz, VolumePercent};

proptest::proptest! {
    /// VolumePercent::new never panics for any u8 input (clamps to 100).
    #[test]
    fn volume_percent_new_never_panics(pct in 0u8..=255u8) {
        let v = VolumePercent::new(pct);
        assert!(v.get() <= 100);
    }

    /// VolumePercent::from_signed never panics for any i32 input.
    #[test]
    fn volume_percent_from_signed_never_panics(pct in i32::MIN..=i32::MAX) {
        let v = VolumePercent::from_signed(pct);
        assert!(v.get() <= 100);
    }

    /// Gain mapping matches the reference formula for every valid percent.
    #[test]
    fn gain_matches_reference_formula(pct in 0u8..=100u8) {
        let gain = GainRegister::from_volume(VolumePercent::new(pct));
        let reference = (u32::from(pct) * 255 / 100) as u8;
        assert_eq!(gain.get(), reference);
    }

    /// Higher volume → higher or equal gain code (monotone mapping).
    #[test]
    fn gain_is_monotone_in_volume(a in 0u8..=100u8, b in 0u8..=100u8) {
        let ga = GainRegister::from_volume(VolumePercent::new(a));
        let gb = GainRegister::from_volume(VolumePercent::new(b));
        if a > b {
            assert!(ga.get() >= gb.get(),
                "volume {} → gain {} should be >= volume {} → gain {}",
                a, ga.get(), b, gb.get());
        } else if a < b {
            assert!(ga.get() <= gb.get(),
                "volume {} → gain {} should be <= volume {} → gain {}",
                a, ga.get(), b, gb.get());
        }
    }

    /// SampleRateHz::new never panics for any u32 input.
    #[test]
    fn sample_rate_hz_new_never_panics(hz in 0u32..=u32::MAX) {
        // May return Err but must not panic
        let _ = SampleRateHz::new(hz);
    }

    /// SampleRateHz valid range [8000, 96000] always succeeds, and the MCLK
    /// derived from it is always 256 times the rate.
    #[test]
    fn mclk_is_256_times_any_valid_rate(hz in 8000u32..=96_000u32) {
        let rate = SampleRateHz::new(hz).unwrap();
        assert_eq!(es8311::mclk_frequency(rate), hz * 256);
    }

    /// SampleRateHz out of range always fails.
    #[test]
    fn sample_rate_hz_out_of_range_always_err(hz in 96_001u32..=u32::MAX) {
        assert!(SampleRateHz::new(hz).is_err(),
            "SampleRateHz::new({}) should be Err above 96000", hz);
    }
}
