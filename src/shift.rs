use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::big_int::{alloc_words, saturate};
use crate::big_num_constants::*;
use crate::error::{Error, Result};
use crate::BigInt;

// 实现左移
impl BigInt {
    /// `self * 2^n`.
    pub fn checked_shl(&self, n: u32) -> Result<BigInt> {
        if self.is_overflow() {
            return Err(self.overflow_error());
        }
        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }
        if self.bit_length() + n as usize > MAX_BITS {
            tracing::debug!(bits = self.bit_length(), n, "shift left overflow");
            return Err(Error::Overflow { negative: self.is_negative() });
        }
        BigInt::trim(shl_impl(self.words(), n)?, self.is_negative())
    }
}

/// Shifts a magnitude left by `n` bits. Each destination word combines the
/// bits carried out of the less significant source word with the shifted
/// bits of the current one; the carry out of the top source word becomes an
/// extra leading word (zero when it does not cross a word boundary).
fn shl_impl(mag: &[u16], n: u32) -> Result<Vec<u16>> {
    let n_words = (n / WORD_BITS) as usize;
    let n_bits = n % WORD_BITS;
    let mut new_mag = alloc_words(mag.len() + n_words + 1)?;
    let mut carry: u16 = 0;
    for (i, &w) in mag.iter().enumerate().rev() {
        let wide = (w as u32) << n_bits;
        new_mag[i + 1] = wide as u16 | carry;
        carry = (wide >> WORD_BITS) as u16;
    }
    new_mag[0] = carry;
    Ok(new_mag)
}

// 实现右移
impl BigInt {
    /// Shifts the magnitude right by `n` bits keeping the sign, so the result
    /// truncates toward zero (`-5 >> 1 == -2`). Shifting out every bit gives zero.
    pub fn checked_shr(&self, n: u32) -> Result<BigInt> {
        if self.is_overflow() {
            return Err(self.overflow_error());
        }
        if n as usize >= self.bit_length() {
            return Ok(BigInt::zero());
        }
        if n == 0 {
            return Ok(self.clone());
        }
        BigInt::trim(shr_impl(self.words(), n)?, self.is_negative())
    }
}

/// Drops the low `n` bits of a magnitude; requires `n < bit length`.
fn shr_impl(mag: &[u16], n: u32) -> Result<Vec<u16>> {
    let n_words = (n / WORD_BITS) as usize;
    let n_bits = n % WORD_BITS;
    let keep = mag.len() - n_words;
    let mut new_mag = alloc_words(keep)?;
    // bits falling from the more significant word into the top of the next
    let mut carry: u16 = 0;
    for i in 0..keep {
        let wide = ((mag[i] as u32) << WORD_BITS) >> n_bits;
        new_mag[i] = (wide >> WORD_BITS) as u16 | carry;
        carry = wide as u16;
    }
    Ok(new_mag)
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        saturate(self.checked_shl(n))
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        &self << n
    }
}

impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, n: u32) {
        *self = &*self << n;
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        match self.checked_shr(n) {
            Ok(val) => val,
            // an overflow value stays an overflow value
            Err(Error::Overflow { .. }) => self.clone(),
            Err(err) => panic!("{}", err),
        }
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        &self >> n
    }
}

impl ShrAssign<u32> for BigInt {
    fn shr_assign(&mut self, n: u32) {
        *self = &*self >> n;
    }
}
