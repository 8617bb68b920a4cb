//! # BigInt
//! Arbitrary-precision integers in sign-magnitude form. The magnitude is a
//! sequence of 16-bit words, most significant first, so a value with `k`
//! words spans `-(2^(16k) - 1)` to `2^(16k) - 1`.
//! Range from `-2^524240` to `2^524240` (exclusive); results beyond that
//! range are overflows.
//! # Example
//! ```
//! use bigint16::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```
//!

use std::cmp::{Ord, Ordering, PartialOrd};
use std::ops::Neg;

use crate::big_num_cache;
use crate::big_num_constants::*;
use crate::error::{Error, Result};

/// Implements an operator trait for every owned/borrowed operand pair on top
/// of a checked method. Overflow saturates to an overflow value.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $checked: ident) => {
        impl std::ops::$imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                crate::big_int::saturate(self.$checked(rhs))
            }
        }

        impl std::ops::$imp for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                std::ops::$imp::$method(&self, &rhs)
            }
        }

        impl std::ops::$imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                std::ops::$imp::$method(&self, rhs)
            }
        }

        impl std::ops::$imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                std::ops::$imp::$method(self, &rhs)
            }
        }

        impl std::ops::$assign_imp for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = std::ops::$imp::$method(&*self, &rhs);
            }
        }

        impl std::ops::$assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = std::ops::$imp::$method(&*self, rhs);
            }
        }
    };
}

/// Immutable arbitrary-precision integer.
///
/// The magnitude never has a leading zero word, except for zero itself which
/// is the single word `0` with a positive sign. A value with the overflow
/// flag set carries no magnitude; its sign is the overflow direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    mag: Vec<u16>,
    overflow: bool,
}

/// Allocates `len` zeroed words, reporting a failed reservation instead of aborting.
pub(crate) fn alloc_words(len: usize) -> Result<Vec<u16>> {
    let mut words = Vec::new();
    words
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure { words: len })?;
    words.resize(len, 0);
    Ok(words)
}

/// The `i`-th word counted from the least significant end, zero past the top.
#[inline(always)]
pub(crate) fn low_word(words: &[u16], i: usize) -> u16 {
    if i < words.len() {
        words[words.len() - 1 - i]
    } else {
        0
    }
}

/// Unwraps an operator result: overflow becomes an overflow value, anything
/// else (division by zero, allocation failure) panics like the primitive
/// integer operators do.
pub(crate) fn saturate(result: Result<BigInt>) -> BigInt {
    match result {
        Ok(val) => val,
        Err(Error::Overflow { negative }) => BigInt::overflowed(negative),
        Err(err) => panic!("{}", err),
    }
}

// 杂项辅助函数
impl BigInt {
    /// Number of significant bits in the magnitude; zero has none.
    pub fn bit_length(&self) -> usize {
        let top = self.mag[0];
        if self.mag.len() == 1 && top == 0 {
            0
        } else {
            ((self.mag.len() - 1) << 4) + (WORD_BITS - top.leading_zeros()) as usize
        }
    }
    /// Magnitude words, most significant first.
    pub fn words(&self) -> &[u16] {
        &self.mag
    }
    pub(crate) fn words_mut(&mut self) -> &mut [u16] {
        &mut self.mag
    }
    pub fn is_zero(&self) -> bool {
        !self.overflow && self.mag.len() == 1 && self.mag[0] == 0
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    pub fn is_overflow(&self) -> bool {
        self.overflow
    }
    /// `-1`, `0` or `1`. Overflow values report their direction.
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }
    pub(crate) fn overflow_error(&self) -> Error {
        Error::Overflow { negative: self.negative }
    }
    /// Rejects overflow operands, reporting an overflow in direction `negative`.
    pub(crate) fn check_operands(a: &BigInt, b: &BigInt, negative: bool) -> Result<()> {
        if a.overflow || b.overflow {
            Err(Error::Overflow { negative })
        } else {
            Ok(())
        }
    }
}

// 实现构造
impl BigInt {
    /// Builds a value from parts that are already canonical.
    pub(crate) fn from_parts(mag: Vec<u16>, negative: bool) -> Self {
        debug_assert!(!mag.is_empty());
        BigInt { negative, mag, overflow: false }
    }
    pub fn zero() -> BigInt {
        BigInt::from_parts(vec![0], false)
    }
    pub fn one() -> BigInt {
        BigInt::from_parts(vec![1], false)
    }
    /// The overflow value: flag set, a single zero word, the sign bit giving
    /// the direction (`true` for negative overflow).
    pub fn overflowed(negative: bool) -> BigInt {
        BigInt { negative, mag: vec![0], overflow: true }
    }
    /// A zero value occupying `word_count` packed words (header included),
    /// rounded up to an even count. Trimming it yields the canonical zero.
    pub fn allocate(word_count: usize) -> Result<BigInt> {
        if word_count > MAX_TOTAL_WORDS {
            return Err(Error::Overflow { negative: false });
        }
        let word_count = (word_count.max(2) + 1) & !1;
        Ok(BigInt::from_parts(alloc_words(word_count - 1)?, false))
    }
    /// Builds a value from most-significant-first words that may carry
    /// leading zeros.
    pub fn from_words(negative: bool, words: &[u16]) -> Result<BigInt> {
        let mut mag = alloc_words(words.len().max(1))?;
        let start = mag.len() - words.len();
        mag[start..].copy_from_slice(words);
        BigInt::trim(mag, negative)
    }
    /// Canonical form of `mag` with sign `negative`: leading zero words
    /// dropped, negative zero folded to zero, size limit enforced.
    pub(crate) fn trim(mag: Vec<u16>, negative: bool) -> Result<BigInt> {
        let mut val = BigInt { negative, mag, overflow: false };
        val.strip();
        if val.mag.len() > MAX_MAG_WORDS {
            tracing::debug!(words = val.mag.len(), negative, "magnitude overflow");
            return Err(val.overflow_error());
        }
        Ok(val)
    }
    /// Canonical form of a value that may carry leading zero words, such as
    /// one obtained from [`BigInt::allocate`]. Idempotent.
    pub fn trimmed(mut self) -> BigInt {
        if !self.overflow {
            self.strip();
        }
        self
    }
    /// In-place part of [`BigInt::trim`]; never grows the value.
    pub(crate) fn strip(&mut self) {
        match self.mag.iter().position(|&w| w != 0) {
            Some(0) => {}
            Some(first) => {
                self.mag.drain(..first);
            }
            None => {
                self.mag.clear();
                self.mag.push(0);
                self.negative = false;
            }
        }
    }
}

// 实现大小比较
/// Three-way magnitude comparison; the shorter operand is zero-extended.
pub(crate) fn cmp_words(x: &[u16], y: &[u16]) -> Ordering {
    let len = x.len().max(y.len());
    for i in (0..len).rev() {
        let a = low_word(x, i);
        let b = low_word(y, i);
        if a != b {
            return a.cmp(&b);
        }
    }
    Ordering::Equal
}

impl BigInt {
    pub fn compare_magnitude(&self, other: &BigInt) -> Ordering {
        cmp_words(&self.mag, &other.mag)
    }
    pub fn compare(&self, other: &BigInt) -> Ordering {
        self.cmp(other)
    }
    // -1 for negative overflow, 1 for positive overflow, 0 otherwise
    fn overflow_rank(&self) -> i8 {
        match (self.overflow, self.negative) {
            (false, _) => 0,
            (true, true) => -1,
            (true, false) => 1,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.overflow_rank().cmp(&other.overflow_rank()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.overflow {
            return Ordering::Equal;
        }
        match other.negative.cmp(&self.negative) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.negative {
            self.compare_magnitude(other).reverse()
        } else {
            self.compare_magnitude(other)
        }
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        self.clone().abs_take()
    }
    fn abs_take(self) -> BigInt {
        let BigInt { mag, overflow, .. } = self;
        BigInt { negative: false, mag, overflow }
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        let BigInt { negative, mag, overflow } = self;
        BigInt { negative: !negative, mag, overflow }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现机器整数转换
macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_num!(i8, i16, i32, isize, i64, i128);

impl BigInt {
    fn value_of(val: u128, negative: bool) -> BigInt {
        if let Some(cached) = u64::try_from(val).ok().and_then(|v| big_num_cache::small(v, negative)) {
            return cached;
        }
        let mut mag = Vec::with_capacity(8);
        let mut rest = val;
        while rest != 0 {
            mag.push(rest as u16);
            rest >>= WORD_BITS;
        }
        mag.reverse();
        BigInt::from_parts(mag, negative)
    }
    fn to_u128_mag(&self) -> Option<u128> {
        if self.overflow || self.mag.len() > 8 {
            return None;
        }
        Some(self.mag.iter().fold(0u128, |acc, &w| (acc << WORD_BITS) | w as u128))
    }
    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        self.to_u128_mag().and_then(|m| u64::try_from(m).ok())
    }
    pub fn to_i64(&self) -> Option<i64> {
        let m = i128::try_from(self.to_u128_mag()?).ok()?;
        i64::try_from(if self.negative { -m } else { m }).ok()
    }
}
