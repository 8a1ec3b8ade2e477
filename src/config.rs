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

/// Tunable parameters of [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<F: FloatType> {
    /// Below this value the quartic square root `R` is treated as zero.
    pub near_zero: F,
    /// Relative distance within which the first resolvent root of a quartic
    /// is snapped onto the nearest multiple of 0.01. Zero keeps it as computed.
    pub resolvent_tolerance: F,
    /// Newton-Raphson iterations applied to every root against the solved
    /// polynomial. Zero leaves the closed-form values untouched.
    pub refine_steps: u32,
}

impl<F: FloatType> Default for SolverConfig<F> {
    fn default() -> Self {
        // 1e-12, built from exact small integers
        let thousand = F::from(1000i16);
        SolverConfig {
            near_zero: F::one() / (thousand * thousand * thousand * thousand),
            resolvent_tolerance: F::newton_epsilon() * thousand,
            refine_steps: 0,
        }
    }
}

impl<F: FloatType> SolverConfig<F> {
    pub fn with_near_zero(mut self, near_zero: F) -> Self {
        self.near_zero = near_zero;
        self
    }

    pub fn with_resolvent_tolerance(mut self, resolvent_tolerance: F) -> Self {
        self.resolvent_tolerance = resolvent_tolerance;
        self
    }

    pub fn with_refine_steps(mut self, refine_steps: u32) -> Self {
        self.refine_steps = refine_steps;
        self
    }
}

/// Rendering rules of [`format_root`](crate::format_root).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFormat {
    /// Values at most this far from their integer part print without decimals.
    pub integer_tolerance: f64,
    /// Decimal places for every other value.
    pub decimals: usize,
}

impl Default for RootFormat {
    fn default() -> Self {
        RootFormat {
            integer_tolerance: 0.001,
            decimals: 2,
        }
    }
}
