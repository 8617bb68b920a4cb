use crate::big_int::alloc_words;
use crate::big_num_constants::*;
use crate::error::{Error, Result};
use crate::BigInt;

// 实现乘法
impl BigInt {
    /// Multiplies by a single word. `0` gives zero and `1` a clone without
    /// touching the magnitude.
    pub fn mul_word(&self, multiplier: u16) -> Result<BigInt> {
        if self.is_overflow() {
            return Err(self.overflow_error());
        }
        match multiplier {
            0 => Ok(BigInt::zero()),
            1 => Ok(self.clone()),
            _ => BigInt::trim(mul_by_word(self.words(), multiplier)?, self.is_negative()),
        }
    }

    pub fn checked_mul(&self, val: &BigInt) -> Result<BigInt> {
        let negative = self.is_negative() ^ val.is_negative();
        BigInt::check_operands(self, val, negative)?;
        if self.is_zero() || val.is_zero() {
            return Ok(BigInt::zero());
        }

        let x = self.words();
        let y = val.words();
        if y.len() == 1 {
            return BigInt::trim(mul_by_word(x, y[0])?, negative);
        }
        if x.len() == 1 {
            return BigInt::trim(mul_by_word(y, x[0])?, negative);
        }

        // The product has at least `bits(x) + bits(y) - 1` bits, so this
        // rejects certain overflows before allocating a scratch buffer for them.
        if self.bit_length() + val.bit_length() - 1 > MAX_BITS {
            tracing::debug!(x_words = x.len(), y_words = y.len(), negative, "product overflow");
            return Err(Error::Overflow { negative });
        }
        BigInt::trim(mul_to_len(x, y)?, negative)
    }

    /// `self^exp` by square-and-multiply; `x^0 == 1` for every finite `x`.
    pub fn pow(&self, mut exp: u32) -> Result<BigInt> {
        let negative = self.is_negative() && exp & 1 == 1;
        if self.is_overflow() {
            return Err(Error::Overflow { negative });
        }
        let mut result = BigInt::one();
        let mut base = self.clone();
        while exp != 0 {
            if exp & 1 == 1 {
                result = result.checked_mul(&base).map_err(|err| err.with_direction(negative))?;
            }
            exp >>= 1;
            if exp != 0 {
                // a square is positive; report the direction of the final power
                base = base.checked_mul(&base).map_err(|err| err.with_direction(negative))?;
            }
        }
        Ok(result)
    }
}

/// `x * y` for a one-word `y`; the final carry lands in an extra leading word.
pub(crate) fn mul_by_word(x: &[u16], y: u16) -> Result<Vec<u16>> {
    let x_len = x.len();
    let mut result = alloc_words(x_len + 1)?;
    let mut product: u32 = 0;
    for x_index in (0..x_len).rev() {
        product = x[x_index] as u32 * y as u32 + (product >> WORD_BITS);
        result[x_index + 1] = product as u16;
    }
    result[0] = (product >> WORD_BITS) as u16;
    Ok(result)
}

/// Schoolbook product of two magnitudes into `x.len() + y.len()` words.
fn mul_to_len(x: &[u16], y: &[u16]) -> Result<Vec<u16>> {
    let _span = tracing::trace_span!("long_multiply", x_words = x.len(), y_words = y.len()).entered();
    let mut z = alloc_words(x.len() + y.len())?;

    for x_index in (0..x.len()).rev() {
        let piece = x[x_index] as u32;
        let mut carry: u32 = 0;
        for y_index in (0..y.len()).rev() {
            let z_index = x_index + y_index + 1;
            // at most (2^16 - 1)^2 + 2 * (2^16 - 1), which fits in 32 bits
            let product = piece * y[y_index] as u32 + z[z_index] as u32 + carry;
            z[z_index] = product as u16;
            carry = product >> WORD_BITS;
        }
        z[x_index] = carry as u16;
    }

    Ok(z)
}

forward_binop!(Mul, mul, MulAssign, mul_assign, checked_mul);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_by_int() {
        let a = BigInt::from(10000000000000000_u64);
        let b = BigInt::from(3001);
        let result: BigInt = "30010000000000000000".parse().unwrap();
        assert_eq!(result, &a * &b);
        assert_eq!(result, b * a);
    }

    #[test]
    fn test_mul_word() {
        let a = BigInt::from(-0x1_ffff_i64);
        assert_eq!(a.mul_word(0).unwrap(), BigInt::zero());
        assert_eq!(a.mul_word(1).unwrap(), a);
        assert_eq!(a.mul_word(0xffff).unwrap(), BigInt::from(-0x1_ffff_i64 * 0xffff));
        assert_eq!(mul_by_word(&[0xffff, 0xffff], 0xffff).unwrap(), vec![0xfffe, 0xffff, 0x0001]);
    }

    #[test]
    fn test_mul_to_len() {
        let a: BigInt = "10000000000000000".parse().unwrap();
        let b: BigInt = "30000000000000000".parse().unwrap();
        let result: BigInt = "300000000000000000000000000000000".parse().unwrap();
        assert_eq!(a * b, result);
    }

    #[test]
    fn test_word_boundary() {
        let a = BigInt::from(65536);
        assert_eq!(&a * &a, BigInt::from(4294967296_u64));
        let m = BigInt::from(u64::MAX);
        let square = &m * &m;
        assert_eq!(square, BigInt::from(u64::MAX as u128 * u64::MAX as u128));
    }

    #[test]
    fn test_signs() {
        let a = BigInt::from(-70000);
        let b = BigInt::from(80000);
        assert_eq!(&a * &b, BigInt::from(-5_600_000_000_i64));
        assert_eq!(&a * &a, BigInt::from(4_900_000_000_i64));
        assert_eq!(&a * &BigInt::zero(), BigInt::zero());
        assert!(!(&a * &BigInt::zero()).is_negative());
        assert_eq!(&a * &BigInt::one(), a);
    }

    #[test]
    fn test_pow() {
        assert_eq!(BigInt::from(2).pow(100).unwrap(), "1267650600228229401496703205376".parse().unwrap());
        assert_eq!(BigInt::from(-3).pow(3).unwrap(), BigInt::from(-27));
        assert_eq!(BigInt::zero().pow(0).unwrap(), BigInt::one());
        assert_eq!(BigInt::from(2).pow(MAX_BITS as u32), Err(Error::Overflow { negative: false }));
        assert_eq!(BigInt::from(-2).pow(MAX_BITS as u32 + 1), Err(Error::Overflow { negative: true }));
        // overflow raised while squaring the base keeps the sign of the power
        assert_eq!(BigInt::from(-2).pow((1 << 19) + 1), Err(Error::Overflow { negative: true }));
        assert_eq!(BigInt::from(-2).pow(1 << 20), Err(Error::Overflow { negative: false }));
    }

    #[test]
    fn test_overflow() {
        let half_bits = MAX_BITS as u32 / 2;
        let half = BigInt::one().checked_shl(half_bits - 1).unwrap();
        let product = half.checked_mul(&half).unwrap();
        assert_eq!(product.bit_length(), MAX_BITS - 1);

        // rejected by the bit-length estimate
        let big = BigInt::one().checked_shl(half_bits).unwrap();
        assert_eq!(big.checked_mul(&-&big), Err(Error::Overflow { negative: true }));
        assert!((&big * &big).is_overflow());

        // passes the estimate, caught once the product is trimmed
        let a = BigInt::one().checked_shl(half_bits + 1).unwrap() - BigInt::one();
        let b = &big - &BigInt::one();
        assert_eq!(a.bit_length() + b.bit_length() - 1, MAX_BITS);
        assert_eq!(a.checked_mul(&b), Err(Error::Overflow { negative: false }));
        let c = &b * &b;
        assert_eq!(c.words().len(), MAX_MAG_WORDS);
    }
}
