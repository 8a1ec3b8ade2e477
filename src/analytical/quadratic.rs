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

// Helper: Veltkamp splitting
fn veltkamp_split<F: FloatType>(x: F) -> (F, F) {
    let gamma = F::split_factor() * x;
    let delta = x - gamma;
    let x_hi = gamma + delta;
    let x_lo = x - x_hi;
    (x_hi, x_lo)
}

// Helper: rounding error of x*y given its rounded product (Dekker)
fn product_error<F: FloatType>(x: F, y: F, product: F) -> F {
    let (x_hi, x_lo) = veltkamp_split(x);
    let (y_hi, y_lo) = veltkamp_split(y);
    let t1 = -product + x_hi * y_hi;
    let t2 = t1 + x_hi * y_lo;
    let t3 = t2 + x_lo * y_hi;
    t3 + x_lo * y_lo
}

/// Discriminant b^2 - 4ac, compensated when the two products nearly cancel.
pub(crate) fn discriminant<F: FloatType>(a: F, b: F, c: F) -> F {
    let _3 = F::from(3i16);
    let _4 = F::from(4i16);

    let bb = b * b;
    let ac4 = _4 * a * c;
    let plain = bb - ac4;

    if _3 * plain.abs() >= bb.abs() + ac4.abs() {
        plain
    } else {
        let bb_err = product_error(b, b, bb);
        let ac4_err = product_error(_4 * a, c, ac4);
        plain + (bb_err - ac4_err)
    }
}

/// Solves a quadratic equation a2*x^2 + a1*x + a0 = 0.
///
/// In case two roots are present, the root taken with `+sqrt(discriminant)`
/// is returned first. A zero discriminant yields the single root `-a1/(2*a2)`.
/// A zero `a2` falls back to the linear solver. Coefficients near the
/// overflow or underflow range are rescaled first.
///
/// # Examples
///
/// ```
/// use real_roots::Roots;
/// use real_roots::SolveError;
/// use real_roots::find_roots_quadratic;
///
/// let no_roots = find_roots_quadratic(1f32, 0f32, 1f32);
/// // Returns Err(SolveError::NoRealRoots) as 'x^2 + 1 = 0' has no real roots
/// assert_eq!(no_roots, Err(SolveError::NoRealRoots));
///
/// let one_root = find_roots_quadratic(1f64, 0f64, 0f64);
/// // Returns Roots::One([0f64]) as 'x^2 = 0' has one root 0
/// assert_eq!(one_root, Ok(Roots::One([0f64])));
///
/// let two_roots = find_roots_quadratic(1f32, 0f32, -1f32);
/// // Returns Roots::Two([1f32, -1f32]) as 'x^2 - 1 = 0' has roots 1 and -1
/// assert_eq!(two_roots, Ok(Roots::Two([1f32, -1f32])));
/// ```
pub fn find_roots_quadratic<F: FloatType>(a2: F, a1: F, a0: F) -> Result<Roots<F>> {
    if a2 == F::zero() {
        return super::linear::find_roots_linear(a1, a0);
    }
    let [a2, a1, a0] = super::scale_coefficients([a2, a1, a0]);

    let _2 = F::from(2i16);
    let discriminant = discriminant(a2, a1, a0);

    if discriminant > F::zero() {
        let sq = discriminant.sqrt();
        Ok(Roots::Two([(-a1 + sq) / (_2 * a2), (-a1 - sq) / (_2 * a2)]))
    } else if discriminant == F::zero() {
        Ok(Roots::One([-a1 / (_2 * a2)]))
    } else {
        Err(SolveError::NoRealRoots)
    }
}
