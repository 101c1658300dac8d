//! A real-time implementation of the MPM (McLeod Pitch Method) monophonic
//! [pitch](https://en.wikipedia.org/wiki/Pitch_%28music%29) detection algorithm, described in
//! the paper [A smarter way to find pitch](http://www.cs.otago.ac.nz/tartini/papers/A_Smarter_Way_to_Find_Pitch.pdf)
//! by Philip McLeod and Geoff Wyvill.
//!
//! Given a fixed-length window of time domain samples and the sample rate it was captured at,
//! [`PitchDetector::find_pitch`] returns an estimated fundamental frequency in Hz together with
//! a clarity score in `[0, 1]` describing how tonal the window is. The detector is stateless
//! across windows except for its own scratch buffers, allocates nothing in its hot path once
//! constructed, and never tracks multiple simultaneous pitches.
//!
//! The crate is `no_std` (with `alloc`) by default. Enable the `std` feature to get a
//! [`std::error::Error`] impl for [`PitchError`], and `logging` to emit `log` trace/debug
//! output around construction and the signal conditions ("silence", "no key maxima") that are
//! not themselves errors.
//!
//! # Example
//! ```
//! use mpm_pitch::MicrofftPitchDetector;
//!
//! let window_size = 1024;
//! let sample_rate = 44100.0_f32;
//! let frequency = 440.0_f32;
//!
//! let mut window = [0.0_f32; 1024];
//! for (i, sample) in window.iter_mut().enumerate() {
//!     *sample = (2.0 * core::f32::consts::PI * frequency * (i as f32) / sample_rate).sin();
//! }
//!
//! let mut detector = MicrofftPitchDetector::with_microfft(window_size).unwrap();
//! let (pitch_hz, clarity) = detector.find_pitch(&window[..], sample_rate).unwrap();
//! assert!((pitch_hz - frequency).abs() / frequency < 0.01);
//! assert!(clarity > 0.9);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod autocorr;
mod detector;
mod error;
mod fft;
mod float;
mod key_maximum;
mod nsdf;
mod parabolic;
mod pow2;

pub use autocorr::{Autocorrelator, GenericAutocorrelator, MicrofftAutocorrelator};
pub use detector::{GenericPitchDetector, MicrofftPitchDetector, PitchDetector};
pub use error::PitchError;
pub use fft::{GenericRealFft, MicrofftRealFft, RealFft};
pub use float::Float;
pub use key_maximum::find_key_maxima;
pub use parabolic::refine;
pub use pow2::next_pow2;
