//! Heap-backed, element-type-generic FFT backend for the `f64`/`Vec` convenience path.
//!
//! `microfft` only has fixed radix tables for `f32`. Nothing in this corpus's FFT crates covers
//! a generic `F: Float` complex transform, so this is a small self-contained iterative radix-2
//! Cooley-Tukey FFT - no new FFT crate dependency pulled in for a path that exists mainly for
//! desktop-side analysis and testing, not the real-time hot path (that's `MicrofftRealFft`).

use core::marker::PhantomData;

use super::RealFft;
use crate::error::PitchError;
use crate::float::Float;

pub struct GenericRealFft<F: Float> {
    size: usize,
    _marker: PhantomData<F>,
}

impl<F: Float> GenericRealFft<F> {
    /// In-place radix-2 Cooley-Tukey, operating on an interleaved complex buffer of length
    /// `2 * n` where `n = buf.len() / 2` is a power of two.
    fn transform(buf: &mut [F], invert: bool) {
        let n = buf.len() / 2;
        if n <= 1 {
            return;
        }

        // Bit-reversal permutation.
        let mut j = 0usize;
        for i in 1..n {
            let mut bit = n >> 1;
            while j & bit != 0 {
                j &= !bit;
                bit >>= 1;
            }
            j |= bit;
            if i < j {
                buf.swap(2 * i, 2 * j);
                buf.swap(2 * i + 1, 2 * j + 1);
            }
        }

        let mut len = 2;
        while len <= n {
            let angle = if invert {
                F::two() * F::pi() / F::from_usize(len)
            } else {
                -(F::two() * F::pi() / F::from_usize(len))
            };
            let wr = angle.cos();
            let wi = angle.sin();
            let half = len / 2;
            let mut i = 0;
            while i < n {
                let mut cur_wr = F::one();
                let mut cur_wi = F::zero();
                for k in 0..half {
                    let a = 2 * (i + k);
                    let b = 2 * (i + k + half);

                    let v_re = buf[b] * cur_wr - buf[b + 1] * cur_wi;
                    let v_im = buf[b] * cur_wi + buf[b + 1] * cur_wr;
                    let u_re = buf[a];
                    let u_im = buf[a + 1];

                    buf[a] = u_re + v_re;
                    buf[a + 1] = u_im + v_im;
                    buf[b] = u_re - v_re;
                    buf[b + 1] = u_im - v_im;

                    let next_wr = cur_wr * wr - cur_wi * wi;
                    let next_wi = cur_wr * wi + cur_wi * wr;
                    cur_wr = next_wr;
                    cur_wi = next_wi;
                }
                i += len;
            }
            len <<= 1;
        }

        if invert {
            let scale = F::one() / F::from_usize(n);
            for v in buf.iter_mut() {
                *v = *v * scale;
            }
        }
    }
}

impl<F: Float> RealFft<F> for GenericRealFft<F> {
    fn new(size: usize) -> Result<Self, PitchError> {
        if size < 2 || size & (size - 1) != 0 {
            return Err(PitchError::UnsupportedFftSize { size });
        }
        Ok(GenericRealFft {
            size,
            _marker: PhantomData,
        })
    }

    fn size(&self) -> usize {
        self.size
    }

    fn real_transform(&mut self, out: &mut [F], input: &[F]) {
        let n = self.size;
        for i in 0..n {
            out[2 * i] = input[i];
            out[2 * i + 1] = F::zero();
        }
        Self::transform(&mut out[..2 * n], false);
    }

    fn complete_spectrum(&mut self, _buf: &mut [F]) {
        // `real_transform` ran a full complex FFT already, so the spectrum is complete on
        // return: nothing left to mirror.
    }

    fn inverse_transform(&mut self, out: &mut [F], input: &[F]) {
        let n = self.size;
        out[..2 * n].copy_from_slice(&input[..2 * n]);
        Self::transform(&mut out[..2 * n], true);
    }
}
