//! The real-input FFT collaborator the autocorrelator is built on.
//!
//! `Autocorrelator` and `PitchDetector` are generic over this trait rather than over a concrete
//! FFT crate - the only place dynamic dispatch could plausibly show up in this pipeline, per the
//! source's design notes, and both shipped backends are known at compile time for a given
//! element type, so they're consumed generically (monomorphised) rather than boxed.

mod generic_backend;
mod microfft_backend;

pub use generic_backend::GenericRealFft;
pub use microfft_backend::MicrofftRealFft;

use crate::error::PitchError;

/// A real-input FFT of a fixed power-of-two `size`.
///
/// `real_transform`/`complete_spectrum`/`inverse_transform` all operate on interleaved
/// real/imaginary buffers of length `2 * size` (`size` complex numbers), matching the layout
/// `Autocorrelator`'s scratch buffers use throughout.
pub trait RealFft<F>: Sized {
    /// Builds an FFT for the given power-of-two `size`. Fails with `UnsupportedFftSize` if the
    /// backend has no radix implementation for it.
    fn new(size: usize) -> Result<Self, PitchError>;

    /// The configured transform size.
    fn size(&self) -> usize;

    /// Forward real transform. `input` has length `size`; `out` has length `2 * size` and, on
    /// return, holds a half spectrum (plus the Nyquist bin) in whatever packing this backend
    /// prefers - the remaining bins are undefined until `complete_spectrum` runs.
    fn real_transform(&mut self, out: &mut [F], input: &[F]);

    /// Fills in the conjugate-symmetric upper half of a spectrum produced by `real_transform`,
    /// so that `buf` holds the full `size`-complex spectrum afterwards.
    fn complete_spectrum(&mut self, buf: &mut [F]);

    /// Inverse complex transform, `1/size`-normalised so `inverse_transform(out, real_transform(...))`
    /// round-trips (modulo rounding). Both buffers have length `2 * size`.
    fn inverse_transform(&mut self, out: &mut [F], input: &[F]);
}
