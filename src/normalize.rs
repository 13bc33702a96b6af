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
use crate::err::NumericError;
use std::ops::{Add, Div, Mul, Sub};

#[inline(always)]
fn remap<T>(value: T, range_min: T, range_max: T, new_range_min: T, new_range_max: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    new_range_min + (value - range_min) * (new_range_max - new_range_min) / (range_max - range_min)
}

/// `trunc(new_min + (value - min) * (new_max - new_min) / (max - min))` without
/// rounding, `None` when the 128 bit numerator overflows.
#[inline]
fn remap_exact(
    value: i128,
    range_min: i128,
    range_max: i128,
    new_range_min: i128,
    new_range_max: i128,
) -> Option<i128> {
    let span = range_max - range_min;
    let scaled = (value - range_min).checked_mul(new_range_max - new_range_min)?;
    let numerator = new_range_min.checked_mul(span)?.checked_add(scaled)?;
    Some(numerator / span)
}

/// Linear remap of a value from one inclusive range to another:
///
/// `new_min + (value - min) * (new_max - new_min) / (max - min)`
///
/// Floating point values keep their precision. Integers are widened to `f64`
/// before the arithmetic, so the fractional part is preserved and intermediate
/// products cannot wrap.
///
/// # Precision
///
/// `f64` holds 53 significant bits, so 64 bit operands above 2^53 are rounded
/// before the remap and the result carries the same relative error.
/// [NormalizeInt] does not have this limit in most cases.
///
/// Nothing requires `min <= max`: an inverted range flips the sign of
/// the scale.
///
/// # Panics
///
/// Integer implementations panic with `attempt to divide by zero` when
/// `range_min == range_max`, the same way integer division does. Floating point
/// implementations return infinity or NaN instead. Use
/// [Normalize::try_normalize] to get an error rather than either outcome.
///
/// # Example
///
/// ```
/// use primext::Normalize;
///
/// assert_eq!(5.0f64.normalize(0.0, 10.0, 0.0, 100.0), 50.0);
/// assert_eq!(1u8.normalize_range((0, 4), (0, 10)), 2.5);
/// ```
pub trait Normalize: Copy + PartialEq {
    type Output;

    fn normalize(
        self,
        range_min: Self,
        range_max: Self,
        new_range_min: Self,
        new_range_max: Self,
    ) -> Self::Output;

    /// Same as [Normalize::normalize] with ranges given as `(min, max)` pairs
    #[inline]
    fn normalize_range(self, range: (Self, Self), new_range: (Self, Self)) -> Self::Output {
        self.normalize(range.0, range.1, new_range.0, new_range.1)
    }

    /// Checked [Normalize::normalize], fails on a degenerate source range
    #[inline]
    fn try_normalize(
        self,
        range_min: Self,
        range_max: Self,
        new_range_min: Self,
        new_range_max: Self,
    ) -> Result<Self::Output, NumericError> {
        if range_min == range_max {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.normalize(range_min, range_max, new_range_min, new_range_max))
    }

    #[inline]
    fn try_normalize_range(
        self,
        range: (Self, Self),
        new_range: (Self, Self),
    ) -> Result<Self::Output, NumericError> {
        self.try_normalize(range.0, range.1, new_range.0, new_range.1)
    }
}

/// [Normalize] for integers, truncated back to the source width.
///
/// The remap runs in 128 bit integer arithmetic and the quotient is truncated
/// toward zero. Results outside of the type range saturate at its bounds.
///
/// # Precision
///
/// Exact unless the numerator `new_min * (max - min) + (value - min) * (new_max - new_min)`
/// overflows `i128`, which needs 64 bit operands whose differences approach
/// the full 64 bit width. Such inputs are remapped through `f64` like
/// [Normalize] and lose the bits beyond the 53rd.
///
/// # Panics
///
/// Panics when `range_min == range_max`, see [Normalize].
pub trait NormalizeInt: Normalize<Output = f64> {
    fn normalize_int(
        self,
        range_min: Self,
        range_max: Self,
        new_range_min: Self,
        new_range_max: Self,
    ) -> Self;

    #[inline]
    fn normalize_int_range(self, range: (Self, Self), new_range: (Self, Self)) -> Self {
        self.normalize_int(range.0, range.1, new_range.0, new_range.1)
    }
}

macro_rules! define_float_normalize {
    ($T: ty) => {
        impl Normalize for $T {
            type Output = $T;

            #[inline]
            fn normalize(
                self,
                range_min: $T,
                range_max: $T,
                new_range_min: $T,
                new_range_max: $T,
            ) -> $T {
                remap(self, range_min, range_max, new_range_min, new_range_max)
            }
        }
    };
}

define_float_normalize!(f32);
define_float_normalize!(f64);

macro_rules! define_integer_normalize {
    ($T: ty) => {
        impl Normalize for $T {
            type Output = f64;

            #[inline]
            fn normalize(
                self,
                range_min: $T,
                range_max: $T,
                new_range_min: $T,
                new_range_max: $T,
            ) -> f64 {
                assert!(range_min != range_max, "attempt to divide by zero");
                remap(
                    self as f64,
                    range_min as f64,
                    range_max as f64,
                    new_range_min as f64,
                    new_range_max as f64,
                )
            }
        }

        impl NormalizeInt for $T {
            #[inline]
            fn normalize_int(
                self,
                range_min: $T,
                range_max: $T,
                new_range_min: $T,
                new_range_max: $T,
            ) -> $T {
                assert!(range_min != range_max, "attempt to divide by zero");
                match remap_exact(
                    self as i128,
                    range_min as i128,
                    range_max as i128,
                    new_range_min as i128,
                    new_range_max as i128,
                ) {
                    Some(v) => v.clamp(<$T>::MIN as i128, <$T>::MAX as i128) as $T,
                    None => self.normalize(range_min, range_max, new_range_min, new_range_max) as $T,
                }
            }
        }
    };
}

define_integer_normalize!(i8);
define_integer_normalize!(u8);
define_integer_normalize!(i16);
define_integer_normalize!(u16);
define_integer_normalize!(i32);
define_integer_normalize!(u32);
define_integer_normalize!(i64);
define_integer_normalize!(u64);
