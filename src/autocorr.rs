//! FFT-based autocorrelation: the circular-convolution trick on a zero-padded input turns a
//! single forward/inverse FFT pair into the *linear* autocorrelation MPM needs, in O(N log N)
//! instead of the O(N^2) direct summation. This is ~30% of the pipeline by design.

use alloc::boxed::Box;
use alloc::vec;

use crate::error::PitchError;
use crate::fft::{GenericRealFft, MicrofftRealFft, RealFft};
use crate::float::Float;
use crate::pow2::next_pow2;

/// Owns the scratch buffers and FFT handle needed to autocorrelate windows of a fixed length
/// `N`. Scratch contents are unspecified between calls; `N` cannot change after construction.
pub struct Autocorrelator<F: Float, T: RealFft<F>> {
    n: usize,
    fft: T,
    padded_input: Box<[F]>,
    transform: Box<[F]>,
    inverse: Box<[F]>,
}

impl<F: Float, T: RealFft<F>> Autocorrelator<F, T> {
    /// Builds an autocorrelator for input windows of length `n`, sizing its FFT for
    /// `N_fft = next_pow2(2 * n)`. `buffer_supplier(len)` returns a fresh buffer of exactly
    /// `len` elements; contents may be uninitialised.
    pub fn construct<B>(n: usize, mut buffer_supplier: B) -> Result<Self, PitchError>
    where
        B: FnMut(usize) -> Box<[F]>,
    {
        if n < 1 {
            return Err(PitchError::InvalidLength { got: n });
        }
        let n_fft = next_pow2(2 * n);
        let fft = T::new(n_fft)?;
        Ok(Autocorrelator {
            n,
            fft,
            padded_input: buffer_supplier(n_fft),
            transform: buffer_supplier(2 * n_fft),
            inverse: buffer_supplier(2 * n_fft),
        })
    }

    /// The configured input window length `N`.
    pub fn input_length(&self) -> usize {
        self.n
    }

    fn run(&mut self, input: &[F]) {
        let n = self.n;
        let n_fft = self.fft.size();

        self.padded_input[..n].copy_from_slice(input);
        for v in self.padded_input[n..].iter_mut() {
            *v = F::zero();
        }

        self.fft
            .real_transform(&mut self.transform, &self.padded_input);
        self.fft.complete_spectrum(&mut self.transform);

        for i in 0..n_fft {
            let re = self.transform[2 * i];
            let im = self.transform[2 * i + 1];
            self.transform[2 * i] = re * re + im * im;
            self.transform[2 * i + 1] = F::zero();
        }

        self.fft.inverse_transform(&mut self.inverse, &self.transform);
    }

    /// Writes the first `N` lags of the autocorrelation of `input` into `output`. No
    /// allocation. Fails with `WrongLength` if either buffer's length doesn't match `N`.
    pub fn autocorrelate_into(&mut self, input: &[F], output: &mut [F]) -> Result<(), PitchError> {
        let n = self.n;
        if input.len() != n {
            return Err(PitchError::WrongLength {
                expected: n,
                got: input.len(),
            });
        }
        if output.len() != n {
            return Err(PitchError::WrongLength {
                expected: n,
                got: output.len(),
            });
        }

        self.run(input);
        for i in 0..n {
            output[i] = self.inverse[2 * i];
        }
        Ok(())
    }

    /// Like `autocorrelate_into`, but allocates and returns a fresh output buffer of length `N`.
    pub fn autocorrelate(&mut self, input: &[F]) -> Result<Box<[F]>, PitchError> {
        let n = self.n;
        if input.len() != n {
            return Err(PitchError::WrongLength {
                expected: n,
                got: input.len(),
            });
        }
        let mut output: Box<[F]> = vec![F::zero(); n].into_boxed_slice();
        self.autocorrelate_into(input, &mut output)?;
        Ok(output)
    }
}

/// Real-time `f32` autocorrelator backed by `microfft`.
pub type MicrofftAutocorrelator = Autocorrelator<f32, MicrofftRealFft>;

impl MicrofftAutocorrelator {
    /// Convenience constructor: buffers are plain heap-allocated `f32` slices.
    pub fn with_microfft(n: usize) -> Result<Self, PitchError> {
        Self::construct(n, |len| vec![0.0_f32; len].into_boxed_slice())
    }
}

/// Heap-backed autocorrelator generic over the element type, for the `f64`/desktop path.
pub type GenericAutocorrelator<F> = Autocorrelator<F, GenericRealFft<F>>;

impl<F: Float> GenericAutocorrelator<F> {
    /// Convenience constructor using the generic (non-`microfft`) FFT backend.
    pub fn with_generic_fft(n: usize) -> Result<Self, PitchError> {
        Self::construct(n, |len| vec![F::zero(); len].into_boxed_slice())
    }
}
