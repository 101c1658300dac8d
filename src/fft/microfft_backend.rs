//! Real-time `f32` backend over the `microfft` crate, the teacher's actual FFT dependency.
//!
//! `microfft` only ships fixed-size radix-2 tables, so construction fails with
//! `UnsupportedFftSize` outside that table (this used to be a `panic!("Unsupported fft size")`
//! in the source; the error taxonomy here turns every caller-reachable precondition into a
//! `Result` instead).

use microfft::Complex32;

use super::RealFft;
use crate::error::PitchError;

const SUPPORTED_SIZES: [usize; 10] = [8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096];

pub struct MicrofftRealFft {
    size: usize,
}

impl RealFft<f32> for MicrofftRealFft {
    fn new(size: usize) -> Result<Self, PitchError> {
        if !SUPPORTED_SIZES.contains(&size) {
            return Err(PitchError::UnsupportedFftSize { size });
        }
        Ok(MicrofftRealFft { size })
    }

    fn size(&self) -> usize {
        self.size
    }

    fn real_transform(&mut self, out: &mut [f32], input: &[f32]) {
        let n = self.size;
        out[..n].copy_from_slice(input);

        // `rfft_n` packs the DC bin's (always-zero) imaginary slot with the Nyquist bin's
        // (always-real) value, to return exactly n/2 complex numbers for n real samples.
        let half: &mut [Complex32] = match n {
            8 => microfft::real::rfft_8((&mut out[..8]).try_into().unwrap()),
            16 => microfft::real::rfft_16((&mut out[..16]).try_into().unwrap()),
            32 => microfft::real::rfft_32((&mut out[..32]).try_into().unwrap()),
            64 => microfft::real::rfft_64((&mut out[..64]).try_into().unwrap()),
            128 => microfft::real::rfft_128((&mut out[..128]).try_into().unwrap()),
            256 => microfft::real::rfft_256((&mut out[..256]).try_into().unwrap()),
            512 => microfft::real::rfft_512((&mut out[..512]).try_into().unwrap()),
            1024 => microfft::real::rfft_1024((&mut out[..1024]).try_into().unwrap()),
            2048 => microfft::real::rfft_2048((&mut out[..2048]).try_into().unwrap()),
            4096 => microfft::real::rfft_4096((&mut out[..4096]).try_into().unwrap()),
            _ => unreachable!("size validated in new()"),
        };
        // `half` aliases out[..n] as n/2 Complex32 - bins 1..n/2-1 are already exactly where
        // they belong. Only the packed DC/Nyquist pair at half[0] needs unpacking.
        let nyquist = half[0].im;
        out[1] = 0.0;
        out[n] = nyquist;
        out[n + 1] = 0.0;
    }

    fn complete_spectrum(&mut self, buf: &mut [f32]) {
        let n = self.size;
        for k in 1..n / 2 {
            buf[2 * (n - k)] = buf[2 * k];
            buf[2 * (n - k) + 1] = -buf[2 * k + 1];
        }
    }

    fn inverse_transform(&mut self, out: &mut [f32], input: &[f32]) {
        let n = self.size;
        for i in 0..n {
            out[2 * i] = input[2 * i];
            out[2 * i + 1] = -input[2 * i + 1];
        }

        // Complex32 is #[repr(C)] { re: f32, im: f32 }: the same layout as our interleaved
        // buffer, so this is a same-size reinterpretation, not a conversion.
        let complex: &mut [Complex32] =
            unsafe { core::slice::from_raw_parts_mut(out.as_mut_ptr().cast::<Complex32>(), n) };

        let transformed: &mut [Complex32] = match n {
            8 => microfft::complex::cfft_8(complex.try_into().unwrap()),
            16 => microfft::complex::cfft_16(complex.try_into().unwrap()),
            32 => microfft::complex::cfft_32(complex.try_into().unwrap()),
            64 => microfft::complex::cfft_64(complex.try_into().unwrap()),
            128 => microfft::complex::cfft_128(complex.try_into().unwrap()),
            256 => microfft::complex::cfft_256(complex.try_into().unwrap()),
            512 => microfft::complex::cfft_512(complex.try_into().unwrap()),
            1024 => microfft::complex::cfft_1024(complex.try_into().unwrap()),
            2048 => microfft::complex::cfft_2048(complex.try_into().unwrap()),
            4096 => microfft::complex::cfft_4096(complex.try_into().unwrap()),
            _ => unreachable!("size validated in new()"),
        };

        let scale = 1.0 / (n as f32);
        for c in transformed.iter_mut() {
            c.re *= scale;
            c.im = -c.im * scale;
        }
    }
}
