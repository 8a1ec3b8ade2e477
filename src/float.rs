// Copyright (c) 2015, Mikhail Vorotilov
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// * Redistributions of source code must retain the above copyright notice, this
//   list of conditions and the following disclaimer.
//
// * Redistributions in binary form must reproduce the above copyright notice,
//   this list of conditions and the following disclaimer in the documentation
//   and/or other materials provided with the distribution.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::fmt::Debug;
use std::fmt::Display;
use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

/// Generic type that lists functions and constants needed in calculations.
///
/// Implemented for `f32` and `f64`. Small integer constants are built with
/// `F::from(n as i16)`, which is exact for both types.
pub trait FloatType:
    Sized
    + Copy
    + Debug
    + Display
    + From<i16>
    + Into<f64>
    + PartialEq
    + PartialOrd
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    fn zero() -> Self {
        Self::from(0i16)
    }
    fn one() -> Self {
        Self::from(1i16)
    }
    fn pi() -> Self;
    /// Smallest derivative magnitude Newton polishing still divides by.
    fn newton_epsilon() -> Self;
    /// Veltkamp splitting factor, `2^ceil(p/2) + 1` for a `p`-bit mantissa.
    fn split_factor() -> Self;
    /// `(low, high, scale_up)`: coefficient sets whose largest magnitude is
    /// below `low` are multiplied by `scale_up`, sets above `high` are
    /// divided by their largest magnitude.
    fn scale_limits() -> (Self, Self, Self);
    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
    fn acos(self) -> Self;
    fn cos(self) -> Self;
    fn powf(self, n: Self) -> Self;
    fn abs(self) -> Self;
    fn trunc(self) -> Self;
    fn round(self) -> Self;
    fn is_finite(self) -> bool;
}

macro_rules! impl_float_type {
    ($t:ident, $eps:expr, $split:expr, $limit:expr, $up:expr) => {
        impl FloatType for $t {
            #[inline]
            fn pi() -> Self {
                std::$t::consts::PI
            }
            #[inline]
            fn newton_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn split_factor() -> Self {
                $split
            }
            #[inline]
            fn scale_limits() -> (Self, Self, Self) {
                let two: $t = 2.0;
                (two.powi(-$limit), two.powi($limit), two.powi($up))
            }
            #[inline]
            fn sqrt(self) -> Self {
                self.sqrt()
            }
            #[inline]
            fn cbrt(self) -> Self {
                self.cbrt()
            }
            #[inline]
            fn acos(self) -> Self {
                self.acos()
            }
            #[inline]
            fn cos(self) -> Self {
                self.cos()
            }
            #[inline]
            fn powf(self, n: Self) -> Self {
                self.powf(n)
            }
            #[inline]
            fn abs(self) -> Self {
                self.abs()
            }
            #[inline]
            fn trunc(self) -> Self {
                self.trunc()
            }
            #[inline]
            fn round(self) -> Self {
                self.round()
            }
            #[inline]
            fn is_finite(self) -> bool {
                self.is_finite()
            }
        }
    };
}

impl_float_type!(f32, 1e-7, 4097.0, 60, 64);
impl_float_type!(f64, 1e-14, 134_217_729.0, 500, 600);

#[cfg(test)]
mod test {
    use super::*;

    fn third<F: FloatType>() -> F {
        F::one() / F::from(3i16)
    }

    #[test]
    fn test_constants() {
        assert_eq!(<f64 as FloatType>::zero(), 0f64);
        assert_eq!(<f32 as FloatType>::one(), 1f32);
        assert_eq!(<f64 as FloatType>::split_factor(), 2f64.powi(27) + 1f64);
        assert_eq!(<f32 as FloatType>::split_factor(), 2f32.powi(12) + 1f32);
        assert_eq!(<f64 as FloatType>::scale_limits(), (2f64.powi(-500), 2f64.powi(500), 2f64.powi(600)));
        assert_eq!(<f32 as FloatType>::scale_limits(), (2f32.powi(-60), 2f32.powi(60), 2f32.powi(64)));
    }

    #[test]
    fn test_cbrt_of_negative() {
        assert!((FloatType::cbrt(-8f64) + 2f64).abs() < 1e-15);
        assert!(FloatType::powf(-8f64, third()).is_nan());
    }
}
