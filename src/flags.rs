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
use bitflags::Flags;
use num_traits::{One, PrimInt, Unsigned, Zero};
use std::fmt::{Binary, Debug, Formatter};
use std::hash::Hash;
use std::iter::FusedIterator;
use std::marker::PhantomData;

mod sealed {
    #[allow(unreachable_pub)]
    pub trait Sealed {}
}

/// Unsigned storage of a flag bit field.
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only, so flag types declared
/// over wider storage are rejected at compile time:
///
/// ```compile_fail
/// use primext::FlagsExt;
///
/// bitflags::bitflags! {
///     #[derive(Clone, Copy, PartialEq, Eq)]
///     struct Wide: u128 {
///         const LOW = 1;
///     }
/// }
///
/// let _ = Wide::LOW.is_single_flag();
/// ```
pub trait FlagBits: PrimInt + Unsigned + Binary + Debug + Hash + Default + sealed::Sealed {
    /// Width of the bit field in bits
    const BITS: u32;
}

macro_rules! define_flag_bits {
    ($T: ty) => {
        impl sealed::Sealed for $T {}

        impl FlagBits for $T {
            const BITS: u32 = <$T>::BITS;
        }
    };
}

define_flag_bits!(u8);
define_flag_bits!(u16);
define_flag_bits!(u32);
define_flag_bits!(u64);

/// Iterator over the single bit values of a flag set.
///
/// Yields one value per set bit in ascending bit order. A value with no bit
/// set yields the empty value exactly once, so the sequence is never empty.
/// Clone it to walk the same sequence again.
pub struct SingleFlags<F: Flags<Bits: FlagBits>> {
    remaining: F::Bits,
    pending_empty: bool,
    _marker: PhantomData<F>,
}

impl<F: Flags<Bits: FlagBits>> SingleFlags<F> {
    #[inline]
    pub fn new(value: &F) -> SingleFlags<F> {
        let bits = value.bits();
        SingleFlags {
            remaining: bits,
            pending_empty: bits.is_zero(),
            _marker: PhantomData,
        }
    }
}

impl<F: Flags<Bits: FlagBits>> Clone for SingleFlags<F> {
    fn clone(&self) -> Self {
        SingleFlags {
            remaining: self.remaining,
            pending_empty: self.pending_empty,
            _marker: PhantomData,
        }
    }
}

impl<F: Flags<Bits: FlagBits>> Debug for SingleFlags<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleFlags")
            .field("remaining", &self.remaining)
            .field("pending_empty", &self.pending_empty)
            .finish()
    }
}

impl<F: Flags<Bits: FlagBits>> Iterator for SingleFlags<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.pending_empty {
            self.pending_empty = false;
            return Some(F::empty());
        }
        if self.remaining.is_zero() {
            return None;
        }
        let lowest = <F::Bits as One>::one() << self.remaining.trailing_zeros() as usize;
        self.remaining = self.remaining & !lowest;
        Some(F::from_bits_retain(lowest))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.pending_empty {
            1
        } else {
            self.remaining.count_ones() as usize
        };
        (len, Some(len))
    }
}

impl<F: Flags<Bits: FlagBits>> DoubleEndedIterator for SingleFlags<F> {
    #[inline]
    fn next_back(&mut self) -> Option<F> {
        if self.pending_empty {
            self.pending_empty = false;
            return Some(F::empty());
        }
        if self.remaining.is_zero() {
            return None;
        }
        let shift = <F::Bits as FlagBits>::BITS - 1 - self.remaining.leading_zeros();
        let highest = <F::Bits as One>::one() << shift as usize;
        self.remaining = self.remaining & !highest;
        Some(F::from_bits_retain(highest))
    }
}

impl<F: Flags<Bits: FlagBits>> ExactSizeIterator for SingleFlags<F> {}

impl<F: Flags<Bits: FlagBits>> FusedIterator for SingleFlags<F> {}

/// Bit field queries available on every [Flags] type stored in 8 to 64 bits,
/// `bitflags!` declarations included.
///
/// # Example
///
/// ```
/// use primext::FlagsExt;
///
/// bitflags::bitflags! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     struct Mode: u8 {
///         const READ = 0b0001;
///         const WRITE = 0b0010;
///         const EXECUTE = 0b0100;
///         const SHARED = 0b1000;
///     }
/// }
///
/// let value = Mode::WRITE | Mode::EXECUTE;
/// assert!(value.has_any_flag_of(&[Mode::EXECUTE, Mode::SHARED]));
/// assert!(!value.has_any_flag_of(&[Mode::EXECUTE | Mode::SHARED]));
/// assert_eq!(
///     (Mode::READ | Mode::EXECUTE).to_single_flags(),
///     vec![Mode::READ, Mode::EXECUTE]
/// );
/// assert_eq!(Mode::empty().to_single_flags(), vec![Mode::empty()]);
/// ```
pub trait FlagsExt: Flags<Bits: FlagBits> + Copy + PartialEq {
    /// True when no more than one bit is set
    #[inline]
    fn is_single_flag(&self) -> bool {
        let v = self.bits();
        v.is_zero() || (v & (v - <Self::Bits as One>::one())).is_zero()
    }

    /// True when every bit of `flag` is set in `self`; the empty flag is
    /// contained in any value.
    #[inline]
    fn has_flag(&self, flag: Self) -> bool {
        let other = flag.bits();
        self.bits() & other == other
    }

    #[inline]
    fn enumerate_flags(&self) -> SingleFlags<Self> {
        SingleFlags::new(self)
    }

    /// Splits into single bit values, see [SingleFlags]
    fn to_single_flags(&self) -> Vec<Self> {
        self.enumerate_flags().collect()
    }

    /// True when at least one candidate is fully contained in `self`.
    ///
    /// A candidate with several bits matches only if all of them are set,
    /// sharing one bit is not enough.
    fn has_any_flag<I: IntoIterator<Item = Self>>(&self, flags: I) -> bool {
        flags.into_iter().any(|flag| self.has_flag(flag))
    }

    fn has_any_flag_of(&self, flags: &[Self]) -> bool {
        flags.iter().any(|&flag| self.has_flag(flag))
    }

    /// True when `self` is bit for bit equal to at least one candidate
    fn equals_any<I: IntoIterator<Item = Self>>(&self, flags: I) -> bool {
        flags.into_iter().any(|flag| self.bits() == flag.bits())
    }

    fn equals_any_of(&self, flags: &[Self]) -> bool {
        flags.iter().any(|flag| self.bits() == flag.bits())
    }
}

impl<F: Flags<Bits: FlagBits> + Copy + PartialEq> FlagsExt for F {}

/// Merges flag values into one with bitwise OR, an empty input gives
/// the empty value.
pub fn to_flags<F, I>(flags: I) -> F
where
    F: Flags<Bits: FlagBits>,
    I: IntoIterator<Item = F>,
{
    let bits = flags
        .into_iter()
        .fold(<F::Bits as Zero>::zero(), |acc, flag| acc | flag.bits());
    F::from_bits_retain(bits)
}

/// [to_flags] as an iterator adapter
pub trait ToFlags: Iterator<Item: Flags<Bits: FlagBits>> {
    fn to_flags(self) -> Self::Item;
}

impl<I: Iterator<Item: Flags<Bits: FlagBits>>> ToFlags for I {
    #[inline]
    fn to_flags(self) -> I::Item {
        to_flags(self)
    }
}
