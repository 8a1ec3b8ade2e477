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

use super::solve;
use super::FloatType;
use super::Result;
use super::RootFormat;
use super::Roots;

impl RootFormat {
    /// Renders `value` without decimals when it lies within
    /// `integer_tolerance` of its integer part, and with `decimals` places
    /// otherwise.
    pub fn format<F: FloatType>(&self, value: F) -> String {
        let value: f64 = value.into();
        let whole = value.trunc();
        let rendered = if value == whole || (value - whole).abs() <= self.integer_tolerance {
            format!("{:.0}", value)
        } else {
            format!("{:.*}", self.decimals, value)
        };
        // -0.0 and tiny negatives rounded to zero
        match rendered.strip_prefix('-') {
            Some(digits) if digits.bytes().all(|b| b == b'0' || b == b'.') => digits.to_string(),
            _ => rendered,
        }
    }
}

/// Renders a root for display with the default [`RootFormat`].
///
/// # Examples
///
/// ```
/// use real_roots::format_root;
///
/// assert_eq!(format_root(3f64), "3");
/// assert_eq!(format_root(3.0007f64), "3");
/// assert_eq!(format_root(3.14159f64), "3.14");
/// ```
pub fn format_root<F: FloatType>(value: F) -> String {
    RootFormat::default().format(value)
}

pub fn format_roots<F: FloatType>(roots: &Roots<F>) -> Vec<String> {
    roots.iter().map(|&x| format_root(x)).collect()
}

/// Solves the equation and renders every root with [`format_root`].
pub fn solve_formatted<F: FloatType>(coefficients: &[F]) -> Result<Vec<String>> {
    solve(coefficients).map(|roots| format_roots(&roots))
}

#[cfg(test)]
mod test {
    use super::super::*;

    #[test]
    fn test_format_root() {
        assert_eq!(format_root(3f64), "3");
        assert_eq!(format_root(3.0007f64), "3");
        assert_eq!(format_root(3.14159f64), "3.14");
        assert_eq!(format_root(-2f64), "-2");
        assert_eq!(format_root(-3.0007f64), "-3");
        assert_eq!(format_root(0.5f32), "0.50");
        assert_eq!(format_root(-1.2345f64), "-1.23");
    }

    #[test]
    fn test_format_root_near_integer_above_only() {
        // Only values just past their integer part collapse
        assert_eq!(format_root(2.9996f64), "3.00");
        assert_eq!(format_root(1.001f64), "1");
        assert_eq!(format_root(1.0011f64), "1.00");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_root(-0f64), "0");
        assert_eq!(format_root(-0.0004f64), "0");
        assert_eq!(format_root(-0.004f64), "0.00");
    }

    #[test]
    fn test_format_custom() {
        let format = RootFormat {
            integer_tolerance: 0.0,
            decimals: 4,
        };
        assert_eq!(format.format(3.0007f64), "3.0007");
        assert_eq!(format.format(3f64), "3");
        assert_eq!(format.format(f64::NAN), "NaN");
        assert_eq!(format.format(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_solve_formatted() {
        assert_eq!(solve_formatted(&[1f64, 0f64, -1f64]), Ok(vec!["1".to_string(), "-1".to_string()]));
        assert_eq!(solve_formatted(&[0f64, 0f64, 2f64, 4f64]), Ok(vec!["-2".to_string()]));
        assert_eq!(solve_formatted(&[1f64, 0f64, 1f64]), Err(SolveError::NoRealRoots));
        let quadratic = solve_formatted(&[1f64, -3f64, 2f64]).unwrap();
        assert_eq!(quadratic, vec!["2", "1"]);
    }
}
