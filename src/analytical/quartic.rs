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
use super::super::SolverConfig;

/// Solves a quartic equation a4*x^4 + a3*x^3 + a2*x^2 + a1*x + a0 = 0.
///
/// The normalized quartic is split into two quadratics through the first root
/// `y0` of the resolvent cubic
/// `y^3 - C*y^2 + (DB - 4E)*y + (4CE - D^2 - B^2*E) = 0`.
/// Roots of the first quadratic come first, each pair with the `+sqrt` root
/// leading. Pairs whose discriminant is negative are dropped.
///
/// A `y0` lying within rounding noise of a multiple of 0.01 is snapped onto
/// it, so exact splits such as `x^4 - 3x^2 - 4 = (x^2 - 4)(x^2 + 1)` reach the
/// `R == 0` branch.
///
/// Uses the default thresholds of [`SolverConfig`].
///
/// # Examples
///
/// ```
/// use real_roots::Roots;
/// use real_roots::SolveError;
/// use real_roots::find_roots_quartic;
///
/// let two_roots = find_roots_quartic(1f64, 0f64, 0f64, 0f64, -1f64);
/// // Returns Roots::Two([1f64, -1f64]) as 'x^4 - 1 = 0' has real roots 1 and -1
/// assert_eq!(two_roots, Ok(Roots::Two([1f64, -1f64])));
///
/// let no_roots = find_roots_quartic(1f64, 0f64, 0f64, 0f64, 1f64);
/// // Returns Err(SolveError::NoRealRoots) as 'x^4 + 1 = 0' has no real roots
/// assert_eq!(no_roots, Err(SolveError::NoRealRoots));
/// ```
pub fn find_roots_quartic<F: FloatType>(a4: F, a3: F, a2: F, a1: F, a0: F) -> Result<Roots<F>> {
    find_roots_quartic_with(&SolverConfig::default(), a4, a3, a2, a1, a0)
}

/// Same as [`find_roots_quartic`] with the thresholds taken from `config`.
pub fn find_roots_quartic_with<F: FloatType>(
    config: &SolverConfig<F>,
    a4: F,
    a3: F,
    a2: F,
    a1: F,
    a0: F,
) -> Result<Roots<F>> {
    let zero = F::zero();
    if a4 == zero {
        return super::cubic::find_roots_cubic(a3, a2, a1, a0);
    }
    let [a4, a3, a2, a1, a0] = super::scale_coefficients([a4, a3, a2, a1, a0]);

    let _2 = F::from(2i16);
    let _3 = F::from(3i16);
    let _4 = F::from(4i16);
    let _8 = F::from(8i16);
    let one = F::one();
    let half = one / _2;
    let quarter = one / _4;
    let three_quarters = _3 / _4;

    let inverted = one / a4;
    let b = inverted * a3;
    let c = inverted * a2;
    let d = inverted * a1;
    let e = inverted * a0;

    let resolvent = super::cubic::find_roots_cubic(one, -c, d * b - _4 * e, _4 * c * e - d * d - b * b * e)?;
    let y0 = *resolvent.as_ref().first().ok_or(SolveError::NoRealRoots)?;
    let y0 = snap_resolvent_root(y0, config.resolvent_tolerance);

    let r2 = quarter * b * b - c + y0;
    if !r2.is_finite() {
        return Err(SolveError::RootOutOfRange);
    }
    if r2 < zero {
        log::trace!("quartic resolvent root {} gives a complex split", y0);
        return Err(SolveError::NoRealRoots);
    }
    let r = r2.sqrt();

    // Discriminants of the two quadratic factors
    let (d2, e2) = if r < config.near_zero {
        vanishing_r_discriminants(b, c, e, y0)
    } else {
        let u = three_quarters * b * b - _2 * c - r2;
        let v = quarter * (one / r) * (_4 * b * c - _8 * d - b * b * b);
        (u + v, u - v)
    };

    let rr = |sq: F| half * r + half * sq - quarter * b;
    let ee = |sq: F| -half * r + half * sq - quarter * b;

    match (d2 >= zero, e2 >= zero) {
        (true, true) => {
            let (sd, se) = (d2.sqrt(), e2.sqrt());
            let (x1, x3) = (rr(sd), ee(se));
            Ok(Roots::Four([x1, x1 - sd, x3, x3 - se]))
        }
        (false, true) => {
            let se = e2.sqrt();
            let x1 = ee(se);
            Ok(Roots::Two([x1, x1 - se]))
        }
        (true, false) => {
            let sd = d2.sqrt();
            let x1 = rr(sd);
            Ok(Roots::Two([x1, x1 - sd]))
        }
        (false, false) => Err(SolveError::NoRealRoots),
    }
}

/// Snaps `y` onto the nearest multiple of 0.01 when the two are within
/// `tolerance` of each other, relative to `max(1, |y|)`.
fn snap_resolvent_root<F: FloatType>(y: F, tolerance: F) -> F {
    let hundred = F::from(100i16);
    let snapped = (y * hundred).round() / hundred;
    let scale = if y.abs() > F::one() { y.abs() } else { F::one() };
    if (y - snapped).abs() <= tolerance * scale {
        snapped
    } else {
        y
    }
}

// Both factors are reported as having no real roots when T = y0^2 - 4E < 0
fn vanishing_r_discriminants<F: FloatType>(b: F, c: F, e: F, y0: F) -> (F, F) {
    let _2 = F::from(2i16);
    let _4 = F::from(4i16);
    let three_quarters = F::from(3i16) / _4;

    let t = y0 * y0 - _4 * e;
    if t < F::zero() {
        (-F::one(), -F::one())
    } else {
        let sq = t.sqrt();
        let d2 = three_quarters * b * b - _2 * c + _2 * sq;
        (d2, d2 - _4 * sq)
    }
}
