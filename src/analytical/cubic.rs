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

use super::super::FloatType;
use super::super::Result;
use super::super::Roots;
use super::super::SolveError;

/// Solves a cubic equation a3*x^3 + a2*x^2 + a1*x + a0 = 0.
///
/// The equation is normalized by `a3` and reduced to the depressed form with
/// `Q = (3C - B^2)/9`, `R = (9BC - 27D - 2B^3)/54` and the discriminant
/// `Q^3 + R^2`. A non-positive discriminant gives three real roots via the
/// trigonometric method, in the order `k = 0, 1, 2` of `cos((T + 2k*pi)/3)`.
/// Otherwise the single real root comes from Cardano's formula.
/// Repeated roots are reported as many times as the method produces them.
///
/// Every real cubic has a real root. Errors come from a zero `a3`, which falls
/// back to the quadratic solver, or from `Q` and `R` overflowing after
/// normalization ([`SolveError::RootOutOfRange`]).
///
/// # Examples
///
/// ```
/// use real_roots::find_roots_cubic;
///
/// let three_roots = find_roots_cubic(1f64, -6f64, 11f64, -6f64).unwrap();
/// // Returns three roots close to 3, 1 and 2
/// assert_eq!(three_roots.len(), 3);
///
/// let one_root = find_roots_cubic(1f64, 0f64, 0f64, -8f64).unwrap();
/// // Returns Roots::One([2f64]) as 'x^3 - 8 = 0' has one real root 2
/// assert!((one_root.as_ref()[0] - 2f64).abs() < 1e-12);
/// ```
pub fn find_roots_cubic<F: FloatType>(a3: F, a2: F, a1: F, a0: F) -> Result<Roots<F>> {
    if a3 == F::zero() {
        return super::quadratic::find_roots_quadratic(a2, a1, a0);
    }
    let [a3, a2, a1, a0] = super::scale_coefficients([a3, a2, a1, a0]);

    let _2 = F::from(2i16);
    let _3 = F::from(3i16);
    let _4 = F::from(4i16);
    let _9 = F::from(9i16);
    let _27 = F::from(27i16);
    let _54 = F::from(54i16);
    let zero = F::zero();
    let one = F::one();

    let inverted = one / a3;
    let b = inverted * a2;
    let c = inverted * a1;
    let d = inverted * a0;

    let q = (_3 * c - b * b) / _9;
    let r = (_9 * b * c - _27 * d - _2 * b * b * b) / _54;
    let discriminant = q * q * q + r * r;
    let shift = b / _3;
    if !discriminant.is_finite() {
        return Err(SolveError::RootOutOfRange);
    }

    if q == zero {
        return if r == zero {
            Ok(Roots::One([-shift]))
        } else {
            Ok(Roots::One([(_2 * r).cbrt() - shift]))
        };
    }

    if discriminant <= zero {
        // q < 0 here, so sqrt(-q^3) is real; rounding can push the ratio past 1
        let mut ratio = r / (-q * q * q).sqrt();
        if ratio > one {
            ratio = one;
        } else if ratio < -one {
            ratio = -one;
        }
        let t = ratio.acos();
        let scale = _2 * (-q).sqrt();
        let two_pi = _2 * F::pi();
        let four_pi = _4 * F::pi();
        return Ok(Roots::Three([
            scale * (t / _3).cos() - shift,
            scale * ((t + two_pi) / _3).cos() - shift,
            scale * ((t + four_pi) / _3).cos() - shift,
        ]));
    }

    if r == zero {
        return Ok(Roots::One([-shift]));
    }

    let magnitude = (r.abs() + discriminant.sqrt()).powf(one / _3);
    let ad = if r > zero { magnitude } else { -magnitude };
    Ok(Roots::One([ad - q / ad - shift]))
}
