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

/// Real roots of an equation.
///
/// Roots are kept in the order the solving algorithm produced them, and a
/// repeated root may appear more than once. An equation without real roots
/// is reported as [`SolveError::NoRealRoots`](crate::SolveError::NoRealRoots)
/// rather than as an empty set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots<F: FloatType> {
    One([F; 1]),
    Two([F; 2]),
    Three([F; 3]),
    Four([F; 4]),
}

impl<F: FloatType> AsRef<[F]> for Roots<F> {
    fn as_ref(&self) -> &[F] {
        match self {
            Roots::One(x) => x,
            Roots::Two(x) => x,
            Roots::Three(x) => x,
            Roots::Four(x) => x,
        }
    }
}

impl<F: FloatType> Roots<F> {
    pub fn len(&self) -> usize {
        self.as_ref().len()
    }

    /// Always false, a root set holds at least one root.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.as_ref().iter()
    }

    pub fn into_vec(self) -> Vec<F> {
        self.as_ref().to_vec()
    }

    /// Applies `f` to every root, keeping the number and order of roots.
    pub fn map<G: FnMut(F) -> F>(self, mut f: G) -> Self {
        match self {
            Roots::One([x1]) => Roots::One([f(x1)]),
            Roots::Two([x1, x2]) => Roots::Two([f(x1), f(x2)]),
            Roots::Three([x1, x2, x3]) => Roots::Three([f(x1), f(x2), f(x3)]),
            Roots::Four([x1, x2, x3, x4]) => Roots::Four([f(x1), f(x2), f(x3), f(x4)]),
        }
    }
}

impl<'a, F: FloatType> IntoIterator for &'a Roots<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_roots_keep_order_and_duplicates() {
        let roots = Roots::Four([3f64, 3f64, 1f64, 1f64]);
        assert_eq!(roots.len(), 4);
        assert_eq!(roots.as_ref(), &[3f64, 3f64, 1f64, 1f64]);
        assert_eq!(roots.into_vec(), vec![3f64, 3f64, 1f64, 1f64]);
    }

    #[test]
    fn test_roots_map() {
        let roots = Roots::Two([1f32, -1f32]).map(|x| x * 2f32);
        assert_eq!(roots, Roots::Two([2f32, -2f32]));
        let sum: f32 = roots.iter().sum();
        assert_eq!(sum, 0f32);
    }
}
