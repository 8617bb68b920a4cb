use std::cmp::Ordering;

use crate::big_int::alloc_words;
use crate::big_num_cache;
use crate::big_num_constants::*;
use crate::error::{Error, Result};
use crate::BigInt;

// 实现除法
impl BigInt {
    /// Divides `self` by a one-word divisor **in place**: afterwards `self`
    /// holds the (trimmed) quotient and the remainder magnitude is returned.
    /// The remainder is a bare magnitude; the caller applies the sign `self`
    /// had before the call.
    ///
    /// A zero divisor leaves `self` untouched.
    pub fn divide_in_place(&mut self, divisor: u16) -> Result<u16> {
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        if self.is_overflow() {
            return Err(self.overflow_error());
        }
        let remainder = divide_one_word(self.words_mut(), divisor);
        self.strip();
        Ok(remainder)
    }

    /// Truncating division: `(quotient, remainder)` with
    /// `quotient * divisor + remainder == self`, `|remainder| < |divisor|`
    /// and the remainder taking the sign of `self`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let negative = self.is_negative() ^ divisor.is_negative();
        BigInt::check_operands(self, divisor, negative)?;

        let v = divisor.words();
        if v.len() == 1 {
            let mut quotient = self.clone();
            let remainder = quotient.divide_in_place(v[0])?;
            let quotient = BigInt::trim(quotient.words().to_vec(), negative)?;
            let remainder = BigInt::trim(vec![remainder], self.is_negative())?;
            return Ok((quotient, remainder));
        }

        match self.compare_magnitude(divisor) {
            Ordering::Less => return Ok((BigInt::zero(), self.clone())),
            Ordering::Equal => return Ok((BigInt::signed_one(negative), BigInt::zero())),
            Ordering::Greater => {}
        }

        let (q, r) = divide_knuth(self.words(), v)?;
        Ok((BigInt::trim(q, negative)?, BigInt::trim(r, self.is_negative())?))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of the truncating division, signed like `self`.
    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    fn signed_one(negative: bool) -> BigInt {
        big_num_cache::small(1, negative).unwrap_or_else(|| BigInt::from_parts(vec![1], negative))
    }
}

/// Short division of a most-significant-first magnitude, in place; returns
/// the remainder. Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1
/// exercise 16.
pub(crate) fn divide_one_word(u: &mut [u16], v: u16) -> u16 {
    let divisor = v as u32;
    let mut r: u32 = 0;
    for word in u.iter_mut() {
        let partial = (r << WORD_BITS) | *word as u32;
        *word = (partial / divisor) as u16;
        r = partial % divisor;
    }
    r as u16
}

/// Value of `words << shift` as least-significant-first words, optionally
/// with one extra top word for the bits shifted out.
fn normalize(words: &[u16], shift: u32, extra: bool) -> Result<Vec<u16>> {
    let len = words.len();
    let mut out = alloc_words(len + extra as usize)?;
    let mut carry: u16 = 0;
    for (i, &w) in words.iter().rev().enumerate() {
        let wide = (w as u32) << shift;
        out[i] = wide as u16 | carry;
        carry = (wide >> WORD_BITS) as u16;
    }
    if extra {
        out[len] = carry;
    } else {
        debug_assert_eq!(carry, 0);
    }
    Ok(out)
}

/// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
/// Requires `v.len() >= 2`, `u > v`, both without leading zero words.
/// Returns quotient and remainder magnitudes, most significant first.
fn divide_knuth(u: &[u16], v: &[u16]) -> Result<(Vec<u16>, Vec<u16>)> {
    let _span = tracing::trace_span!("long_divide", dividend_words = u.len(), divisor_words = v.len()).entered();
    let n = v.len();
    let m = u.len() - n;

    // D1 normalize
    // shift the divisor left until its top word has the high bit set,
    // so that the trial digit below is off by at most two
    let shift = v[0].leading_zeros();
    let vn = normalize(v, shift, false)?;
    let mut un = normalize(u, shift, true)?;
    let v_top = vn[n - 1] as u64;
    let v_second = vn[n - 2] as u64;

    let mut q = alloc_words(m + 1)?;
    // D2 loop over quotient digits, most significant first
    for j in (0..=m).rev() {
        // D3 calculate qhat from the top two remainder words
        let num = ((un[j + n] as u64) << WORD_BITS) | un[j + n - 1] as u64;
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;
        while qhat >= WORD_BASE || qhat * v_second > ((rhat << WORD_BITS) | un[j + n - 2] as u64) {
            qhat -= 1;
            rhat += v_top;
            tracing::trace!(j, qhat, "trial digit lowered");
            if rhat >= WORD_BASE {
                break;
            }
        }

        // D4 multiply and subtract
        if mul_sub(&mut un[j..=j + n], &vn, qhat) {
            // D6 add back: qhat was one too large
            qhat -= 1;
            tracing::trace!(j, qhat, "trial digit corrected by add back");
            add_back(&mut un[j..=j + n], &vn);
        }
        q[j] = qhat as u16;
    }

    // D8 unnormalize the remainder
    let mut r = alloc_words(n)?;
    for i in 0..n {
        let pair = un[i] as u32 | (un[i + 1] as u32) << WORD_BITS;
        r[n - 1 - i] = (pair >> shift) as u16;
    }
    q.reverse();
    Ok((q, r))
}

/// `u -= qhat * v` over `v.len() + 1` least-significant-first words.
/// Returns `true` when the result went negative.
fn mul_sub(u: &mut [u16], v: &[u16], qhat: u64) -> bool {
    let n = v.len();
    let mut borrow: i64 = 0;
    let mut carry: u64 = 0;
    for i in 0..n {
        let product = qhat * v[i] as u64 + carry;
        carry = product >> WORD_BITS;
        let t = u[i] as i64 - (product & WORD_MASK as u64) as i64 - borrow;
        u[i] = t as u16;
        borrow = (t < 0) as i64;
    }
    let t = u[n] as i64 - carry as i64 - borrow;
    u[n] = t as u16;
    t < 0
}

/// `u += v`, discarding the carry out of the top word (it cancels the
/// borrow left by [`mul_sub`]).
fn add_back(u: &mut [u16], v: &[u16]) {
    let n = v.len();
    let mut carry: u32 = 0;
    for i in 0..n {
        let sum = u[i] as u32 + v[i] as u32 + carry;
        u[i] = sum as u16;
        carry = sum >> WORD_BITS;
    }
    u[n] = u[n].wrapping_add(carry as u16);
}

forward_binop!(Div, div, DivAssign, div_assign, checked_div);
forward_binop!(Rem, rem, RemAssign, rem_assign, checked_rem);
