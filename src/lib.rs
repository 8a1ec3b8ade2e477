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

//! Real roots of polynomial equations of degree 1 to 4.
//!
//! Coefficients are given from the highest degree term down to the constant
//! term. Every closed-form solver returns the real roots in the order its
//! method produces them, or a [`SolveError`] when there is nothing to return.
//!
//! ```
//! use real_roots::{format_root, solve, Roots};
//!
//! // x^2 - 1 = 0
//! let roots = solve(&[1f64, 0f64, -1f64]).unwrap();
//! assert_eq!(roots, Roots::Two([1f64, -1f64]));
//! let text: Vec<String> = roots.iter().map(|&x| format_root(x)).collect();
//! assert_eq!(text, ["1", "-1"]);
//! ```

#[cfg(test)]
macro_rules! assert_float_array_eq {
    ($delta:expr, $x:expr, $y:expr) => {
        match (&$x, &$y) {
            (x_ref, y_ref) => {
                let x = &x_ref[..];
                let y = &y_ref[..];
                assert_eq!(x.len(), y.len(), "Length mismatch: {:?} vs {:?}", x, y);
                for (i, (a, b)) in x.iter().zip(y.iter()).enumerate() {
                    assert!(
                        (*a - *b).abs() < $delta,
                        "Element {} mismatch: {:?} vs {:?}",
                        i,
                        x,
                        y
                    );
                }
            }
        }
    };
}

mod analytical;
mod config;
mod dispatch;
mod error;
mod float;
mod format;
mod refine;
mod roots;

pub use self::analytical::cubic::find_roots_cubic;
pub use self::analytical::linear::find_roots_linear;
pub use self::analytical::quadratic::find_roots_quadratic;
pub use self::analytical::quartic::find_roots_quartic;
pub use self::analytical::quartic::find_roots_quartic_with;
pub use self::config::RootFormat;
pub use self::config::SolverConfig;
pub use self::dispatch::normalize;
pub use self::dispatch::solve;
pub use self::dispatch::Solver;
pub use self::error::Result;
pub use self::error::SolveError;
pub use self::error::MAX_COEFFICIENTS;
pub use self::float::FloatType;
pub use self::format::format_root;
pub use self::format::format_roots;
pub use self::format::solve_formatted;
pub use self::refine::refine_roots;
pub use self::roots::Roots;
