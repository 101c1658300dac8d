//! Property-based tests over the public API, mirroring the spec's testable properties (section 8)
//! that aren't already pinned down by the module-local scenario tests. Uses `proptest`, the same
//! dev-dependency `zuclubit-momoto`'s `momoto-core` crate reaches for in its own `tests/` suite.

use mpm_pitch::{MicrofftAutocorrelator, MicrofftPitchDetector};
use proptest::prelude::*;

const WINDOW: usize = 256;

fn bounded_window() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..=1.0, WINDOW)
}

proptest! {
    /// Invariant 4: `find_pitch` never returns NaN or +/-infinity for any finite input window.
    #[test]
    fn find_pitch_never_returns_non_finite(window in bounded_window()) {
        let mut detector = MicrofftPitchDetector::with_microfft(WINDOW).unwrap();
        let (pitch, clarity) = detector.find_pitch(&window[..], 44100.0).unwrap();
        prop_assert!(pitch.is_finite(), "pitch = {}", pitch);
        prop_assert!(clarity.is_finite(), "clarity = {}", clarity);
    }

    /// Invariant 7: whenever a window produces a positive clarity, it's within [0, 1].
    #[test]
    fn clarity_is_always_within_unit_interval(window in bounded_window()) {
        let mut detector = MicrofftPitchDetector::with_microfft(WINDOW).unwrap();
        let (_, clarity) = detector.find_pitch(&window[..], 44100.0).unwrap();
        prop_assert!(clarity >= 0.0 && clarity <= 1.0, "clarity = {}", clarity);
    }

    /// Invariant 6: any window whose RMS falls below the configured gate collapses to (0, 0),
    /// regardless of its shape.
    #[test]
    fn sub_threshold_volume_always_collapses_to_silence(
        window in bounded_window(),
        scale in 0.0001f32..0.01,
    ) {
        let mut detector = MicrofftPitchDetector::with_microfft(WINDOW).unwrap();
        detector.set_min_volume_absolute(0.5).unwrap();
        let quiet: Vec<f32> = window.iter().map(|s| s * scale).collect();
        let (pitch, clarity) = detector.find_pitch(&quiet[..], 44100.0).unwrap();
        prop_assert_eq!((pitch, clarity), (0.0, 0.0));
    }

    /// Invariant 2/3: `autocorrelate` is length-preserving and its lag-zero entry is the input's
    /// energy, within the FFT round-trip tolerance the spec prescribes.
    #[test]
    fn autocorrelate_lag_zero_is_energy_and_output_length_matches(window in bounded_window()) {
        let mut ac = MicrofftAutocorrelator::with_microfft(WINDOW).unwrap();
        let out = ac.autocorrelate(&window[..]).unwrap();
        prop_assert_eq!(out.len(), WINDOW);

        let energy: f32 = window.iter().map(|x| x * x).sum();
        let max_sq = window
            .iter()
            .map(|x| x * x)
            .fold(0.0_f32, |acc, v| if v > acc { v } else { acc })
            .max(1.0);
        let n_fft = 512.0_f32; // next_pow2(2 * WINDOW)
        let tolerance = 1e-5 * n_fft * max_sq;
        prop_assert!(
            (out[0] - energy).abs() <= tolerance,
            "lag-zero {} vs energy {} (tolerance {})",
            out[0],
            energy,
            tolerance
        );
    }
}

/// Invariant 5, restated as a deterministic edge case rather than a generated property: silence
/// is always exactly `(0, 0)`, never an approximately-zero float pair.
#[test]
fn all_zero_window_is_always_exact_silence() {
    let mut detector = MicrofftPitchDetector::with_microfft(WINDOW).unwrap();
    let window = [0.0_f32; WINDOW];
    let (pitch, clarity) = detector.find_pitch(&window[..], 44100.0).unwrap();
    assert_eq!((pitch, clarity), (0.0, 0.0));
}
