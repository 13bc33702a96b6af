/*
 * // Copyright (c) the primext developers 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use num_traits::Num;

/// Saturates a value into an inclusive range.
///
/// The upper bound is checked first, then the lower one. With an inverted
/// range (`min > max`) any value above `max` therefore yields `max`.
/// Unlike [Ord::clamp] this never panics, and a NaN value passes through.
pub trait ClampToBounds: Sized {
    fn clamp_to_bounds(self, min: Self, max: Self) -> Self;

    /// Same as [ClampToBounds::clamp_to_bounds] with `(min, max)` bounds
    #[inline]
    fn clamp_to_range(self, bounds: (Self, Self)) -> Self {
        self.clamp_to_bounds(bounds.0, bounds.1)
    }
}

impl<T: Num + PartialOrd + Copy> ClampToBounds for T {
    #[inline]
    fn clamp_to_bounds(self, min: T, max: T) -> T {
        if self > max {
            max
        } else if self < min {
            min
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_clamp_in_range() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let a: i32 = rng.random_range(-1000..1000);
            let b: i32 = rng.random_range(-1000..1000);
            let (min, max) = if a <= b { (a, b) } else { (b, a) };
            let x: i32 = rng.random_range(-2000..2000);
            let clamped = x.clamp_to_bounds(min, max);
            assert!(clamped >= min && clamped <= max);
            if x >= min && x <= max {
                assert_eq!(clamped, x);
            }
            assert_eq!(clamped, x.clamp(min, max));
        }
    }

    #[test]
    fn test_clamp_inverted_range() {
        assert_eq!(5i32.clamp_to_bounds(10, 0), 0);
        assert_eq!((-5i32).clamp_to_bounds(10, 0), 10);
        assert_eq!(5u8.clamp_to_range((10, 0)), 0);
        assert_eq!(5.0f64.clamp_to_bounds(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_clamp_widths() {
        assert_eq!(300u16.clamp_to_bounds(0, 255), 255);
        assert_eq!((-129i64).clamp_to_bounds(-128, 127), -128);
        assert_eq!(u64::MAX.clamp_to_range((1, 2)), 2);
        assert_eq!(i8::MIN.clamp_to_range((-1, 1)), -1);
        assert_eq!(7u32.clamp_to_bounds(7, 7), 7);
    }

    #[test]
    fn test_clamp_floats() {
        assert_eq!(1.5f32.clamp_to_bounds(0.0, 1.0), 1.0);
        assert_eq!((-0.5f64).clamp_to_range((0.0, 1.0)), 0.0);
        assert_eq!(0.25f64.clamp_to_bounds(0.0, 1.0), 0.25);
        assert!(f64::NAN.clamp_to_bounds(0.0, 1.0).is_nan());
        assert_eq!(f32::INFINITY.clamp_to_bounds(0.0, 1.0), 1.0);
    }
}
