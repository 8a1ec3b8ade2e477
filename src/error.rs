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

use thiserror::Error;

/// Highest number of coefficients that has a closed-form solution.
pub const MAX_COEFFICIENTS: usize = 5;

/// Reasons an equation could not be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Coefficient count outside `2..=5`, or nothing but the constant term
    /// left once `leading_zeros` zero coefficients are stripped.
    #[error("{}", invalid_degree_message(.coefficients, .leading_zeros))]
    InvalidDegree { coefficients: usize, leading_zeros: usize },

    #[error("the first argument of a linear equation could not be zero")]
    DegenerateLeadingCoefficient,

    #[error("there are no real roots for this equation")]
    NoRealRoots,

    /// Intermediate values overflowed, so the roots are not representable.
    #[error("the roots of this equation are out of floating point range")]
    RootOutOfRange,

    /// A coefficient is NaN or infinite.
    #[error("coefficient {index} is not a finite number")]
    NonFiniteCoefficient { index: usize },
}

fn invalid_degree_message(coefficients: &usize, leading_zeros: &usize) -> String {
    if *coefficients > MAX_COEFFICIENTS {
        "there is no algebraic solution of general quintic and higher degree equations".to_string()
    } else if *leading_zeros > 0 {
        format!(
            "no variable terms are left after removing {} leading zero coefficients, {} provided",
            leading_zeros, coefficients
        )
    } else {
        format!("there should be at least 2 coefficients in the equation, {} provided", coefficients)
    }
}

pub type Result<T, E = SolveError> = std::result::Result<T, E>;
