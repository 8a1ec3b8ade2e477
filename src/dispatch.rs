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

use super::analytical::cubic::find_roots_cubic;
use super::analytical::linear::find_roots_linear;
use super::analytical::quadratic::find_roots_quadratic;
use super::analytical::quartic::find_roots_quartic_with;
use super::error::MAX_COEFFICIENTS;
use super::refine::refine_roots;
use super::FloatType;
use super::Result;
use super::Roots;
use super::SolveError;
use super::SolverConfig;

/// Strips exactly-zero leading coefficients, borrowing the tail of `coefficients`.
///
/// The comparison is `== 0`, so a leading term that is merely negligible
/// keeps the apparent degree.
pub fn normalize<F: FloatType>(coefficients: &[F]) -> &[F] {
    let mut rest = coefficients;
    while let Some((&first, tail)) = rest.split_first() {
        if first != F::zero() {
            break;
        }
        rest = tail;
    }
    rest
}

/// Equation solver parameterized by a [`SolverConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solver<F: FloatType> {
    config: SolverConfig<F>,
}

impl<F: FloatType> Default for Solver<F> {
    fn default() -> Self {
        Solver::new(SolverConfig::default())
    }
}

impl<F: FloatType> Solver<F> {
    pub fn new(config: SolverConfig<F>) -> Self {
        Solver { config }
    }

    pub fn config(&self) -> &SolverConfig<F> {
        &self.config
    }

    /// Finds the real roots of the equation whose coefficients are listed
    /// from the highest degree term down to the constant term.
    ///
    /// Accepts 2 to 5 coefficients. Leading zeros lower the degree; an
    /// equation left without a non-zero coefficient ahead of the constant
    /// term is rejected with [`SolveError::InvalidDegree`].
    pub fn solve(&self, coefficients: &[F]) -> Result<Roots<F>> {
        if coefficients.len() < 2 || coefficients.len() > MAX_COEFFICIENTS {
            return Err(SolveError::InvalidDegree {
                coefficients: coefficients.len(),
                leading_zeros: 0,
            });
        }
        if let Some(index) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(SolveError::NonFiniteCoefficient { index });
        }

        let stripped = normalize(coefficients);
        let leading_zeros = coefficients.len() - stripped.len();
        log::trace!(
            "solving degree {} equation ({} leading zeros stripped)",
            stripped.len().saturating_sub(1),
            leading_zeros
        );

        let roots = match *stripped {
            [a1, a0] => find_roots_linear(a1, a0),
            [a2, a1, a0] => find_roots_quadratic(a2, a1, a0),
            [a3, a2, a1, a0] => find_roots_cubic(a3, a2, a1, a0),
            [a4, a3, a2, a1, a0] => find_roots_quartic_with(&self.config, a4, a3, a2, a1, a0),
            _ => Err(SolveError::InvalidDegree {
                coefficients: coefficients.len(),
                leading_zeros,
            }),
        };

        match roots.map(|roots| refine_roots(roots, stripped, self.config.refine_steps)) {
            Ok(roots) if roots.iter().any(|x| !x.is_finite()) => {
                log::debug!("roots of {:?} overflowed: {:?}", coefficients, roots);
                Err(SolveError::RootOutOfRange)
            }
            Ok(roots) => Ok(roots),
            Err(e) => {
                log::debug!("no solution for {:?}: {}", coefficients, e);
                Err(e)
            }
        }
    }
}

/// Finds the real roots of an equation of degree 1 to 4 with the default
/// [`SolverConfig`].
///
/// # Examples
///
/// ```
/// use real_roots::Roots;
/// use real_roots::SolveError;
/// use real_roots::solve;
///
/// // 0x^3 + 0x^2 + 2x + 4 = 0 reduces to the linear equation 2x + 4 = 0
/// assert_eq!(solve(&[0f64, 0f64, 2f64, 4f64]), Ok(Roots::One([-2f64])));
///
/// // A lone constant is not an equation of degree 1 or higher
/// assert_eq!(
///     solve(&[1f64]),
///     Err(SolveError::InvalidDegree { coefficients: 1, leading_zeros: 0 })
/// );
/// ```
pub fn solve<F: FloatType>(coefficients: &[F]) -> Result<Roots<F>> {
    Solver::default().solve(coefficients)
}

#[cfg(test)]
mod test {
    use super::super::*;
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(&[0f64, 0f64, 2f64, 4f64]), &[2f64, 4f64]);
        assert_eq!(normalize(&[1f64, 0f64]), &[1f64, 0f64]);
        assert_eq!(normalize(&[0f32, 0f32]), &[] as &[f32]);
        // negative zero compares equal to zero
        assert_eq!(normalize(&[-0f64, 3f64, 1f64]), &[3f64, 1f64]);
        assert_eq!(normalize(&[1e-300f64, 3f64]), &[1e-300f64, 3f64]);
    }

    #[test]
    fn test_solve_dispatch() {
        assert_eq!(solve(&[2f64, 4f64]), Ok(Roots::One([-2f64])));
        assert_eq!(solve(&[1f64, 0f64, -1f64]), Ok(Roots::Two([1f64, -1f64])));
        assert_eq!(solve(&[1f64, 0f64, 1f64]), Err(SolveError::NoRealRoots));
        assert_eq!(solve(&[1f64, 0f64, 0f64, 0f64, -1f64]), Ok(Roots::Two([1f64, -1f64])));
        let cubic = solve(&[1f64, -6f64, 11f64, -6f64]).unwrap();
        assert_eq!(cubic.len(), 3);
    }

    #[test]
    fn test_solve_strips_leading_zeros() {
        assert_eq!(solve(&[0f64, 0f64, 2f64, 4f64]), Ok(Roots::One([-2f64])));
        assert_eq!(solve(&[0f64, 1f64, 0f64, -1f64]), Ok(Roots::Two([1f64, -1f64])));
        assert_eq!(solve(&[0f64, 0f64, 0f64, 1f64, 0f64]), solve(&[1f64, 0f64]));
    }

    #[test]
    fn test_solve_invalid_degree() {
        assert_eq!(
            solve::<f64>(&[]),
            Err(SolveError::InvalidDegree { coefficients: 0, leading_zeros: 0 })
        );
        assert_eq!(
            solve(&[1f64]),
            Err(SolveError::InvalidDegree { coefficients: 1, leading_zeros: 0 })
        );
        assert_eq!(
            solve(&[1f64, 2f64, 3f64, 4f64, 5f64, 6f64]),
            Err(SolveError::InvalidDegree { coefficients: 6, leading_zeros: 0 })
        );
        // Only the constant term is left after stripping
        let constant = solve(&[0f64, 5f64]).unwrap_err();
        assert_eq!(constant, SolveError::InvalidDegree { coefficients: 2, leading_zeros: 1 });
        assert!(constant.to_string().ends_with("2 provided"));
        assert_eq!(
            solve(&[0f64, 0f64, 0f64]),
            Err(SolveError::InvalidDegree { coefficients: 3, leading_zeros: 3 })
        );
    }

    #[test]
    fn test_solve_overflowing_coefficients() {
        // Rescaled to x^2 + x + 1e-200 before the discriminant is formed
        match solve(&[1e200f64, 1e200f64, 1f64]).unwrap() {
            Roots::Two([x1, x2]) => {
                assert!(x1.abs() < 1e-12);
                assert!((x2 + 1f64).abs() < 1e-12);
            }
            roots => panic!("Expected Roots::Two, got {:?}", roots),
        }
        // The normalized cubic does not fit in f64
        assert_eq!(solve(&[1f64, 1e200f64, 1e200f64, 1f64]), Err(SolveError::RootOutOfRange));
    }

    #[test]
    fn test_solve_non_finite() {
        assert_eq!(
            solve(&[1f64, f64::NAN, 1f64]),
            Err(SolveError::NonFiniteCoefficient { index: 1 })
        );
        assert_eq!(
            solve(&[f64::NEG_INFINITY, 1f64]),
            Err(SolveError::NonFiniteCoefficient { index: 0 })
        );
    }

    #[test]
    fn test_solver_refinement() {
        let plain = solve(&[2f64, -3f64, -5f64, 7f64, -1f64]).unwrap();
        let solver = Solver::new(SolverConfig::default().with_refine_steps(2));
        let refined = solver.solve(&[2f64, -3f64, -5f64, 7f64, -1f64]).unwrap();
        assert_eq!(refined.len(), plain.len());
        assert_float_array_eq!(1e-9, refined.as_ref(), plain.as_ref());
        assert_eq!(solver.config().refine_steps, 2);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let coefficients = [3f64, -1f64, -7f64, 2f64, 1f64];
        assert_eq!(solve(&coefficients), solve(&coefficients));
        assert_eq!(coefficients, [3f64, -1f64, -7f64, 2f64, 1f64]);
    }
}
