use std::cmp::Ordering;

use crate::big_int::{alloc_words, cmp_words, low_word};
use crate::big_num_constants::*;
use crate::error::Result;
use crate::BigInt;

// 实现加减法
impl BigInt {
    pub fn checked_add(&self, val: &BigInt) -> Result<BigInt> {
        self.add_signed(val, false)
    }

    /// `self - val`, computed as `self + (-val)`.
    pub fn checked_sub(&self, val: &BigInt) -> Result<BigInt> {
        self.add_signed(val, true)
    }

    fn add_signed(&self, val: &BigInt, flip: bool) -> Result<BigInt> {
        let val_negative = val.is_negative() ^ flip;
        if self.is_overflow() {
            return Err(self.overflow_error());
        }
        BigInt::check_operands(self, val, val_negative)?;

        if self.is_negative() == val_negative {
            return BigInt::trim(add_words(self.words(), val.words())?, val_negative);
        }

        // the larger magnitude decides the sign
        match cmp_words(self.words(), val.words()) {
            Ordering::Less => BigInt::trim(sub_words(val.words(), self.words())?, val_negative),
            _ => BigInt::trim(sub_words(self.words(), val.words())?, self.is_negative()),
        }
    }
}

/// Magnitude sum, one word longer than the longer operand.
pub(crate) fn add_words(x: &[u16], y: &[u16]) -> Result<Vec<u16>> {
    let len = x.len().max(y.len());
    let mut result = alloc_words(len + 1)?;
    let mut carry: u32 = 0;
    for i in 0..len {
        let sum = low_word(x, i) as u32 + low_word(y, i) as u32 + carry;
        result[len - i] = sum as u16;
        carry = sum >> WORD_BITS;
    }
    result[0] = carry as u16;
    Ok(result)
}

/// Magnitude difference `big - little`; requires `big >= little`.
pub(crate) fn sub_words(big: &[u16], little: &[u16]) -> Result<Vec<u16>> {
    let len = big.len().max(little.len());
    let mut result = alloc_words(len)?;
    let mut borrow: i32 = 0;
    for i in 0..len {
        let mut difference = low_word(big, i) as i32 - low_word(little, i) as i32 - borrow;
        borrow = 0;
        if difference < 0 {
            difference += WORD_BASE as i32;
            borrow = 1;
        }
        result[len - 1 - i] = difference as u16;
    }
    debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");
    Ok(result)
}

forward_binop!(Add, add, AddAssign, add_assign, checked_add);
forward_binop!(Sub, sub, SubAssign, sub_assign, checked_sub);
