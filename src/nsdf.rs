//! The MPM Normalised Square Difference Function, `n(tau) = 2 * r'(tau) / m'(tau)`.
//!
//! `m'` is computed incrementally (eq. 6/9 of the McLeod paper) rather than by its defining
//! summation, turning an O(N^2) normalisation pass into O(N).

use crate::autocorr::Autocorrelator;
use crate::error::PitchError;
use crate::fft::RealFft;
use crate::float::Float;

/// Computes the NSDF of `input` into `nsdf`, reusing `autocorrelator`'s scratch buffers.
/// `input.len() == nsdf.len() == autocorrelator.input_length()`.
pub fn compute_nsdf<F: Float, T: RealFft<F>>(
    autocorrelator: &mut Autocorrelator<F, T>,
    input: &[F],
    nsdf: &mut [F],
) -> Result<(), PitchError> {
    autocorrelator.autocorrelate_into(input, nsdf)?;

    let n = input.len();
    // m'(0) = 2 * r'(0).
    let mut m = F::two() * nsdf[0];

    for tau in 0..n {
        // Guard against `m == 0` too: floating point rounding can drive the mathematically
        // non-negative, non-increasing m' slightly below zero, and it never recovers.
        if m <= F::zero() {
            for v in nsdf[tau..].iter_mut() {
                *v = F::zero();
            }
            return Ok(());
        }

        let r = nsdf[tau];
        nsdf[tau] = F::two() * r / m;

        let a = input[tau];
        let b = input[n - 1 - tau];
        m = m - a * a - b * b;
    }

    Ok(())
}
