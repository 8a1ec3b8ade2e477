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

pub mod cubic;
pub mod linear;
pub mod quadratic;
pub mod quartic;

use super::FloatType;

/// Rescales coefficients whose largest magnitude is close to the overflow or
/// underflow range. A common factor leaves the roots unchanged.
pub(crate) fn scale_coefficients<F: FloatType, const N: usize>(coefficients: [F; N]) -> [F; N] {
    let zero = F::zero();
    let max_abs = coefficients
        .iter()
        .map(|c| c.abs())
        .fold(zero, |max, c| if c > max { c } else { max });

    let (low_threshold, high_threshold, scale_up) = F::scale_limits();
    let factor = if max_abs < low_threshold && max_abs > zero {
        scale_up
    } else if max_abs > high_threshold {
        F::one() / max_abs
    } else {
        return coefficients;
    };
    log::trace!("rescaling coefficients {:?} by {}", coefficients, factor);
    coefficients.map(|c| c * factor)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_scale_coefficients() {
        assert_eq!(scale_coefficients([1f64, -3f64, 2f64]), [1f64, -3f64, 2f64]);
        assert_eq!(scale_coefficients([0f64, 0f64]), [0f64, 0f64]);
        let huge = 2f64.powi(600);
        assert_eq!(scale_coefficients([huge, -2f64 * huge, 0f64]), [0.5f64, -1f64, 0f64]);
        let tiny = 2f64.powi(-520);
        assert_eq!(scale_coefficients([tiny, -tiny]), [2f64.powi(80), -2f64.powi(80)]);
        assert_eq!(scale_coefficients([2f32.powi(70), 1f32]), [1f32, 2f32.powi(-70)]);
    }
}
