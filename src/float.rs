//! The floating point element type the numeric pipeline is generic over.
//!
//! `no_std` has no transcendental functions on `f32`/`f64` (no `sqrt`, `sin`, `cos`, `powf` -
//! those aren't simple bit tricks like `abs`), so this trait routes them through `libm` instead
//! of `std`, the same reason the teacher's `f32`-only no_std build reaches for `micromath`.
//! Implemented for `f32` and `f64`; a heap-backed `Vec<f64>` pipeline just uses the `f64` impl.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Element type for the pitch detection pipeline's buffers.
pub trait Float:
    Copy
    + Clone
    + PartialOrd
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn two() -> Self;
    fn pi() -> Self;
    fn from_usize(v: usize) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn two() -> Self {
        2.0
    }

    fn pi() -> Self {
        core::f32::consts::PI
    }

    fn from_usize(v: usize) -> Self {
        v as f32
    }

    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    fn abs(self) -> Self {
        f32::abs(self)
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    fn sin(self) -> Self {
        libm::sinf(self)
    }

    fn cos(self) -> Self {
        libm::cosf(self)
    }

    fn powf(self, exponent: Self) -> Self {
        libm::powf(self, exponent)
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn two() -> Self {
        2.0
    }

    fn pi() -> Self {
        core::f64::consts::PI
    }

    fn from_usize(v: usize) -> Self {
        v as f64
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }

    fn powf(self, exponent: Self) -> Self {
        libm::pow(self, exponent)
    }
}
