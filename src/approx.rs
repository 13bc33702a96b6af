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

/// Default tolerance of single precision comparisons
pub const EPSILON_F32: f32 = 1E-09f32;

/// Default tolerance of double precision comparisons.
///
/// Holds the same literal as [EPSILON_F32] widened to double precision,
/// so the exact value is `9.99999971718069e-10`.
pub const EPSILON_F64: f64 = EPSILON_F32 as f64;

/// Approximate equality within an absolute tolerance.
///
/// Two values are considered equal when both are infinite (sign is ignored),
/// both are NaN, or their absolute difference is strictly less than
/// the tolerance.
///
/// Mixed precision comparisons test infinity and NaN in the precision of each
/// operand and take the difference in double precision.
///
/// Optional operands are equal when both are absent, unequal when only one is,
/// and otherwise compared by value.
///
/// # Example
///
/// ```
/// use primext::EqualsWithin;
///
/// assert!(1.0f64.approx_eq(1.0 + 1e-10));
/// assert!(f64::INFINITY.approx_eq(f64::NEG_INFINITY));
/// assert!(!0.5f32.equals_within(0.6f64, 0.05));
/// assert!(None::<f64>.approx_eq(None::<f64>));
/// ```
pub trait EqualsWithin<Rhs = Self>: Sized {
    type Tolerance: Copy;

    /// Tolerance used by [EqualsWithin::approx_eq]
    const EPSILON: Self::Tolerance;

    fn equals_within(self, rhs: Rhs, within: Self::Tolerance) -> bool;

    #[inline]
    fn approx_eq(self, rhs: Rhs) -> bool {
        self.equals_within(rhs, Self::EPSILON)
    }
}

macro_rules! define_equals_within {
    ($L: ty, $R: ty, $Tol: ty, $Wide: ty, $eps: expr) => {
        impl EqualsWithin<$R> for $L {
            type Tolerance = $Tol;
            const EPSILON: $Tol = $eps;

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn equals_within(self, rhs: $R, within: $Tol) -> bool {
                (self.is_infinite() && rhs.is_infinite())
                    || (self.is_nan() && rhs.is_nan())
                    || (self as $Wide - rhs as $Wide).abs() < within as $Wide
            }
        }

        impl EqualsWithin<Option<$R>> for Option<$L> {
            type Tolerance = $Tol;
            const EPSILON: $Tol = $eps;

            #[inline]
            fn equals_within(self, rhs: Option<$R>, within: $Tol) -> bool {
                match (self, rhs) {
                    (Some(l), Some(r)) => l.equals_within(r, within),
                    (None, None) => true,
                    _ => false,
                }
            }
        }
    };
}

define_equals_within!(f64, f64, f64, f64, EPSILON_F64);
define_equals_within!(f64, f32, f64, f64, EPSILON_F64);
define_equals_within!(f32, f32, f32, f32, EPSILON_F32);
define_equals_within!(f32, f64, f32, f64, EPSILON_F32);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_epsilon_literal() {
        assert_eq!(EPSILON_F64, 1E-09f32 as f64);
        assert!((EPSILON_F64 - 1e-9).abs() < 1e-16);
    }

    #[test]
    fn test_finite_matches_abs_difference() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let x: f64 = rng.random_range(-1000.0f64..1000.0);
            let y: f64 = x + rng.random_range(-1e-6f64..1e-6);
            let tol: f64 = rng.random_range(1e-9f64..1e-6);
            assert_eq!(x.equals_within(y, tol), (x - y).abs() < tol);
        }
        for _ in 0..10000 {
            let x: f32 = rng.random_range(-10.0f32..10.0);
            let y: f32 = x + rng.random_range(-1e-3f32..1e-3);
            let tol: f32 = rng.random_range(1e-5f32..1e-3);
            assert_eq!(x.equals_within(y, tol), (x - y).abs() < tol);
        }
    }

    #[test]
    fn test_tolerance_is_strict() {
        assert!(!1.0f64.equals_within(1.5, 0.5));
        assert!(1.0f64.equals_within(1.25, 0.5));
        assert!(!0.0f64.equals_within(0.0, 0.0));
    }

    #[test]
    fn test_default_epsilon() {
        assert!(1.0f64.approx_eq(1.0 + 5e-10));
        assert!(!1.0f64.approx_eq(1.0 + 2e-9));
        assert!(3.0f32.approx_eq(3.0f32));
        assert!(!3.0f32.approx_eq(3.0001f32));
    }

    #[test]
    fn test_infinities_and_nan() {
        assert!(f64::INFINITY.approx_eq(f64::INFINITY));
        assert!(f64::INFINITY.approx_eq(f64::NEG_INFINITY));
        assert!(f32::NEG_INFINITY.approx_eq(f32::INFINITY));
        assert!(f64::NAN.approx_eq(f64::NAN));
        assert!(f32::NAN.approx_eq(f32::NAN));
        assert!(!f64::INFINITY.approx_eq(f64::NAN));
        assert!(!f64::NAN.approx_eq(f64::INFINITY));
        assert!(!f64::NAN.equals_within(0.0, f64::INFINITY));
        assert!(!f64::INFINITY.equals_within(1e300, f64::MAX));
    }

    #[test]
    fn test_mixed_precision() {
        // 0.1f32 widens to 0.10000000149011612
        assert!(!0.1f64.approx_eq(0.1f32));
        assert!(0.1f64.equals_within(0.1f32, 1e-7));
        assert!(!0.1f32.approx_eq(0.1f64));
        assert!(0.1f32.equals_within(0.1f64, 1e-7));
        assert!(0.5f32.approx_eq(0.5f64));
        assert!(f32::INFINITY.approx_eq(f64::NEG_INFINITY));
        assert!(f64::NAN.approx_eq(f32::NAN));
        assert!(!f32::NAN.approx_eq(f64::INFINITY));
    }

    #[test]
    fn test_optional_operands() {
        assert!(None::<f64>.approx_eq(None::<f64>));
        assert!(!None::<f64>.approx_eq(Some(1.0f64)));
        assert!(!Some(1.0f64).approx_eq(None::<f64>));
        assert!(Some(1.0f64).approx_eq(Some(1.0f64)));
        assert!(!Some(1.0f64).approx_eq(Some(2.0f64)));
        assert!(None::<f32>.approx_eq(None::<f64>));
        assert!(!Some(2.0f32).equals_within(None::<f32>, 10.0));
        assert!(Some(2.0f32).equals_within(Some(2.5f64), 1.0));
        assert!(Some(f64::NAN).approx_eq(Some(f32::NAN)));
    }
}
