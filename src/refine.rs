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

use super::FloatType;
use super::Roots;

/// Evaluates the polynomial and its derivative at `x` (Horner's scheme).
///
/// Coefficients are ordered from the highest degree down to the constant term.
fn eval_with_derivative<F: FloatType>(coefficients: &[F], x: F) -> (F, F) {
    let mut value = F::zero();
    let mut derivative = F::zero();
    for &c in coefficients {
        derivative = derivative * x + value;
        value = value * x + c;
    }
    (value, derivative)
}

/// Performs Newton-Raphson refinement on roots
/// x_new = x - P(x) / P'(x)
///
/// A root whose derivative is too close to zero keeps its current value, so
/// repeated roots are never pushed away.
pub fn refine_roots<F: FloatType>(roots: Roots<F>, coefficients: &[F], steps: u32) -> Roots<F> {
    if steps == 0 {
        return roots;
    }
    let epsilon = F::newton_epsilon();
    roots.map(|x| {
        let mut x_curr = x;
        for _ in 0..steps {
            let (p_x, p_prime_x) = eval_with_derivative(coefficients, x_curr);
            if p_prime_x.abs() < epsilon {
                break;
            }
            let next = x_curr - p_x / p_prime_x;
            if !next.is_finite() {
                break;
            }
            x_curr = next;
        }
        x_curr
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_eval_with_derivative() {
        // 2x^3 - x + 5 at x = 2: value 19, derivative 23
        assert_eq!(eval_with_derivative(&[2f64, 0f64, -1f64, 5f64], 2f64), (19f64, 23f64));
        assert_eq!(eval_with_derivative(&[3f32, 1f32], 10f32), (31f32, 3f32));
    }

    #[test]
    fn test_refine_roots() {
        // x^2 - 2 starting from rough guesses
        let roots = refine_roots(Roots::Two([1.5f64, -1.5f64]), &[1f64, 0f64, -2f64], 6);
        assert_float_array_eq!(1e-15, roots.as_ref(), [2f64.sqrt(), -(2f64.sqrt())]);
    }

    #[test]
    fn test_refine_roots_flat_derivative() {
        // (x - 1)^2 at its double root: derivative is zero, value unchanged
        let roots = refine_roots(Roots::One([1f64]), &[1f64, -2f64, 1f64], 4);
        assert_eq!(roots, Roots::One([1f64]));
        assert_eq!(refine_roots(Roots::One([7f64]), &[1f64, -2f64, 1f64], 0), Roots::One([7f64]));
    }
}
