//! Composes the autocorrelator, NSDF stage, key-maximum scanner and parabolic refiner into the
//! public pitch detection entry point, plus the volume gate and clarity-threshold selection
//! rule that turn a raw NSDF into a single `(pitch_hz, clarity)` estimate.

use alloc::boxed::Box;
use alloc::vec;

use crate::autocorr::Autocorrelator;
use crate::error::PitchError;
use crate::fft::{GenericRealFft, MicrofftRealFft, RealFft};
use crate::float::Float;
use crate::key_maximum::find_key_maxima;
use crate::nsdf::compute_nsdf;
use crate::parabolic::refine;

/// A reusable monophonic pitch detector for windows of a fixed length `N`.
pub struct PitchDetector<F: Float, T: RealFft<F>> {
    autocorrelator: Autocorrelator<F, T>,
    nsdf: Box<[F]>,
    clarity_threshold: F,
    min_volume_absolute: F,
    max_input_amplitude: F,
}

impl<F: Float, T: RealFft<F>> PitchDetector<F, T> {
    /// Builds a detector for input windows of length `n`. `clarity_threshold` defaults to 0.9,
    /// `max_input_amplitude` to 1, `min_volume_absolute` to 0 (volume gate disabled).
    pub fn construct<B>(n: usize, mut buffer_supplier: B) -> Result<Self, PitchError>
    where
        B: FnMut(usize) -> Box<[F]>,
    {
        let autocorrelator = Autocorrelator::construct(n, &mut buffer_supplier)?;
        #[cfg(feature = "logging")]
        log::trace!("constructed a pitch detector for window length {}", n);

        Ok(PitchDetector {
            nsdf: buffer_supplier(n),
            autocorrelator,
            clarity_threshold: F::from_usize(9) / F::from_usize(10),
            min_volume_absolute: F::zero(),
            max_input_amplitude: F::one(),
        })
    }

    /// The configured input window length `N`.
    pub fn input_length(&self) -> usize {
        self.autocorrelator.input_length()
    }

    /// Sets the fraction of the largest key maximum a candidate must reach to be selected.
    /// Must be finite and in `(0, 1]`.
    pub fn set_clarity_threshold(&mut self, k: F) -> Result<(), PitchError> {
        if !k.is_finite() || k <= F::zero() || k > F::one() {
            return Err(PitchError::InvalidConfig {
                parameter: "clarity_threshold",
                reason: "must be finite and in (0, 1]",
            });
        }
        self.clarity_threshold = k;
        Ok(())
    }

    /// Sets the amplitude a full-scale input sample is assumed to reach. Must be finite and
    /// greater than zero. Does not adjust `min_volume_absolute`.
    pub fn set_max_input_amplitude(&mut self, amplitude: F) -> Result<(), PitchError> {
        if !amplitude.is_finite() || amplitude <= F::zero() {
            return Err(PitchError::InvalidConfig {
                parameter: "max_input_amplitude",
                reason: "must be finite and greater than zero",
            });
        }
        self.max_input_amplitude = amplitude;
        Ok(())
    }

    /// Sets the RMS amplitude below which a window is rejected as silence. Must be finite and
    /// within `[0, max_input_amplitude]`.
    pub fn set_min_volume_absolute(&mut self, volume: F) -> Result<(), PitchError> {
        if !volume.is_finite() || volume < F::zero() || volume > self.max_input_amplitude {
            return Err(PitchError::InvalidConfig {
                parameter: "min_volume_absolute",
                reason: "must be finite and within [0, max_input_amplitude]",
            });
        }
        self.min_volume_absolute = volume;
        Ok(())
    }

    /// Sets `min_volume_absolute` from a decibel value, `max_input_amplitude * 10^(db/10)`.
    /// Must be finite and `<= 0`.
    ///
    /// This base-10/10 convention (rather than the acoustically conventional base-20 for
    /// amplitude-referenced dBFS) matches the source's behaviour, preserved here to keep
    /// calibration identical rather than "fixed up".
    pub fn set_min_volume_decibels(&mut self, decibels: F) -> Result<(), PitchError> {
        if !decibels.is_finite() || decibels > F::zero() {
            return Err(PitchError::InvalidConfig {
                parameter: "min_volume_decibels",
                reason: "must be finite and less than or equal to zero",
            });
        }
        let exponent = decibels / F::from_usize(10);
        self.min_volume_absolute = self.max_input_amplitude * F::from_usize(10).powf(exponent);
        Ok(())
    }

    /// Estimates the fundamental frequency and clarity of `input`, sampled at `sample_rate`.
    ///
    /// Returns `(0, 0)` - not an error - for silence, sub-threshold volume, or a window with no
    /// key maxima. Fails with `WrongLength` if `input.len() != N`.
    pub fn find_pitch(&mut self, input: &[F], sample_rate: F) -> Result<(F, F), PitchError> {
        let n = self.autocorrelator.input_length();
        if input.len() != n {
            return Err(PitchError::WrongLength {
                expected: n,
                got: input.len(),
            });
        }

        if self.min_volume_absolute > F::zero() {
            let mut sum_sq = F::zero();
            for &x in input {
                sum_sq = sum_sq + x * x;
            }
            let rms = (sum_sq / F::from_usize(n)).sqrt();
            if rms < self.min_volume_absolute {
                #[cfg(feature = "logging")]
                log::debug!("window rejected by the volume gate");
                return Ok((F::zero(), F::zero()));
            }
        }

        compute_nsdf(&mut self.autocorrelator, input, &mut self.nsdf)?;

        let key_maxima = find_key_maxima(&self.nsdf[..]);
        if key_maxima.is_empty() {
            #[cfg(feature = "logging")]
            log::debug!("no key maxima found in this window");
            return Ok((F::zero(), F::zero()));
        }

        let mut n_max = self.nsdf[key_maxima[0]];
        for &idx in key_maxima.iter().skip(1) {
            if self.nsdf[idx] > n_max {
                n_max = self.nsdf[idx];
            }
        }
        let threshold = self.clarity_threshold * n_max;

        let mut chosen = key_maxima[0];
        for &idx in key_maxima.iter() {
            if self.nsdf[idx] >= threshold {
                chosen = idx;
                break;
            }
        }

        let (x_star, y_star) = refine(&self.nsdf[..], chosen);
        let pitch_hz = sample_rate / x_star;
        let clarity = if y_star > F::one() { F::one() } else { y_star };
        Ok((pitch_hz, clarity))
    }
}

/// Real-time `f32` pitch detector backed by `microfft`.
pub type MicrofftPitchDetector = PitchDetector<f32, MicrofftRealFft>;

impl MicrofftPitchDetector {
    /// Convenience constructor: buffers are plain heap-allocated `f32` slices.
    pub fn with_microfft(n: usize) -> Result<Self, PitchError> {
        Self::construct(n, |len| vec![0.0_f32; len].into_boxed_slice())
    }
}

/// Heap-backed pitch detector generic over the element type, for the `f64`/desktop path.
pub type GenericPitchDetector<F> = PitchDetector<F, GenericRealFft<F>>;

impl<F: Float> GenericPitchDetector<F> {
    /// Convenience constructor using the generic (non-`microfft`) FFT backend.
    pub fn with_generic_fft(n: usize) -> Result<Self, PitchError> {
        Self::construct(n, |len| vec![F::zero(); len].into_boxed_slice())
    }
}
