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

/// Solves a linear equation a1*x + a0 = 0.
///
/// # Examples
///
/// ```
/// use real_roots::Roots;
/// use real_roots::SolveError;
/// use real_roots::find_roots_linear;
///
/// // Returns Roots::One([-2f64]) as '2x + 4 = 0' has one root -2
/// assert_eq!(find_roots_linear(2f64, 4f64), Ok(Roots::One([-2f64])));
///
/// // A zero first coefficient does not describe a linear equation
/// assert_eq!(find_roots_linear(0f32, 1f32), Err(SolveError::DegenerateLeadingCoefficient));
/// ```
pub fn find_roots_linear<F: FloatType>(a1: F, a0: F) -> Result<Roots<F>> {
    if a1 == F::zero() {
        return Err(SolveError::DegenerateLeadingCoefficient);
    }
    Ok(Roots::One([-a0 / a1]))
}

#[cfg(test)]
mod test {
    use super::super::super::*;

    #[test]
    fn test_find_roots_linear() {
        assert_eq!(find_roots_linear(0f32, 0f32), Err(SolveError::DegenerateLeadingCoefficient));
        assert_eq!(find_roots_linear(0f64, 5f64), Err(SolveError::DegenerateLeadingCoefficient));
        assert_eq!(find_roots_linear(2f64, 1f64), Ok(Roots::One([-0.5f64])));
        assert_eq!(find_roots_linear(-4f32, 8f32), Ok(Roots::One([2f32])));
    }

    #[test]
    fn test_linear_residual() {
        let cases = [(3f64, 7f64), (-0.25f64, 1e6f64), (1e-8f64, -3f64), (123.456f64, -0.001f64)];
        for (a, b) in cases {
            match find_roots_linear(a, b) {
                Ok(Roots::One([x])) => assert!((a * x + b).abs() < 1e-9, "a={} b={} x={}", a, b, x),
                other => panic!("Expected one root, got {:?}", other),
            }
        }
    }
}
