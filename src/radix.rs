use std::fmt::{self, Display, LowerHex};
use std::str::FromStr;

use crate::big_int::alloc_words;
use crate::big_num_cache;
use crate::big_num_constants::*;
use crate::div::divide_one_word;
use crate::error::{Error, Result};
use crate::BigInt;

const OVERFLOW_TEXT: &str = "overflow";

const NEG_OVERFLOW_TEXT: &str = "-overflow";

/// Splits an optional leading `-`.
fn split_sign(val: &str) -> (bool, &str) {
    match val.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, val),
    }
}

/// Value of an ASCII hex digit; callers validate with `is_ascii_hexdigit` first.
fn hex_nibble(b: u8) -> u16 {
    debug_assert!(b.is_ascii_hexdigit());
    match b {
        b'0'..=b'9' => (b - b'0') as u16,
        b'a'..=b'f' => (b - b'a' + 10) as u16,
        _ => (b - b'A' + 10) as u16,
    }
}

// 实现解析
impl BigInt {
    /// Parses an optionally `-`-prefixed run of decimal digits. Leading zeros
    /// are accepted, `"-0"` is zero, anything else (including an empty digit
    /// run) is malformed input.
    pub fn from_decimal_str(val: &str) -> Result<BigInt> {
        let (negative, digits) = split_sign(val);
        let cursor = val.len() - digits.len();
        if digits.is_empty() {
            return Err(Error::malformed(val, cursor));
        }
        if let Some(pos) = digits.bytes().position(|b| !b.is_ascii_digit()) {
            return Err(Error::malformed(val, cursor + pos));
        }

        // Fold digit groups as `result = result * 10^len + group`, each group
        // short enough for its power of ten to fit one word.
        let bytes = digits.as_bytes();
        let mut first_group_len = bytes.len() % DIGITS_PER_WORD;
        if first_group_len == 0 {
            first_group_len = DIGITS_PER_WORD;
        }
        let groups = std::iter::once(&bytes[..first_group_len])
            .chain(bytes[first_group_len..].chunks(DIGITS_PER_WORD));

        let mut result = BigInt::zero();
        for group in groups {
            let group_val = group.iter().fold(0u16, |acc, &b| acc * 10 + (b - b'0') as u16);
            let scale = 10u16.pow(group.len() as u32);
            result = result
                .mul_word(scale)
                .and_then(|r| r.checked_add(&BigInt::digit_group(group_val)))
                .map_err(|err| err.with_direction(negative))?;
        }

        Ok(if negative { -result } else { result })
    }

    /// Parses an optionally `-`-prefixed hexadecimal number with an optional
    /// `0x`/`0X` prefix; digits may be in either case.
    pub fn from_hex_str(val: &str) -> Result<BigInt> {
        let (negative, rest) = split_sign(val);
        let digits = rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .unwrap_or(rest);
        let cursor = val.len() - digits.len();
        if digits.is_empty() {
            return Err(Error::malformed(val, cursor));
        }
        if let Some(pos) = digits.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(Error::malformed(val, cursor + pos));
        }

        // pack nibbles from the least significant end
        let mut mag = alloc_words(digits.len().div_ceil(NIBBLES_PER_WORD))?;
        let len = mag.len();
        for (i, b) in digits.bytes().rev().enumerate() {
            let nibble = hex_nibble(b);
            mag[len - 1 - i / NIBBLES_PER_WORD] |= nibble << (4 * (i % NIBBLES_PER_WORD));
        }
        BigInt::trim(mag, negative)
    }

    fn digit_group(val: u16) -> BigInt {
        big_num_cache::small(val as u64, false).unwrap_or_else(|| BigInt::from_parts(vec![val], false))
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self> {
        BigInt::from_decimal_str(val)
    }
}

// 实现打印
impl BigInt {
    /// Decimal digits of the magnitude, without sign.
    fn mag_to_decimal(&self) -> String {
        // Translate the number a digit group at a time; the scratch copy is
        // divided in place and shrinks as its leading words reach zero.
        let mut tmp = self.words().to_vec();
        let mut digit_group: Vec<u16> = Vec::with_capacity(tmp.len() * 5 / DIGITS_PER_WORD + 1);
        let mut start = 0;
        loop {
            digit_group.push(divide_one_word(&mut tmp[start..], WORD_RADIX));
            while start < tmp.len() && tmp[start] == 0 {
                start += 1;
            }
            if start == tmp.len() {
                break;
            }
        }

        let mut result = String::with_capacity(digit_group.len() * DIGITS_PER_WORD);
        let mut groups = digit_group.iter().rev();
        if let Some(first) = groups.next() {
            result.push_str(&first.to_string());
        }
        // remaining groups padded with leading zeros
        for group in groups {
            result.push_str(&format!("{:0width$}", group, width = DIGITS_PER_WORD));
        }
        result
    }

    /// Hex digits of the magnitude, without sign or prefix; leading zero
    /// nibbles are suppressed, zero is `"0"`.
    fn mag_to_hex(&self) -> String {
        let mut result = String::with_capacity(self.words().len() * NIBBLES_PER_WORD);
        for &word in self.words() {
            for j in (0..NIBBLES_PER_WORD).rev() {
                let nibble = (word >> (4 * j)) & 0xf;
                if nibble != 0 || !result.is_empty() {
                    result.push(DIGITS[nibble as usize]);
                }
            }
        }
        if result.is_empty() {
            result.push('0');
        }
        result
    }

    /// `overflow` or `-overflow` for overflow values.
    fn overflow_text(&self) -> Option<&'static str> {
        match (self.is_overflow(), self.is_negative()) {
            (false, _) => None,
            (true, false) => Some(OVERFLOW_TEXT),
            (true, true) => Some(NEG_OVERFLOW_TEXT),
        }
    }

    /// Minimal decimal form, `-` prefixed when negative.
    pub fn to_decimal_string(&self) -> String {
        if let Some(text) = self.overflow_text() {
            return text.to_owned();
        }
        let digits = self.mag_to_decimal();
        if self.is_negative() {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// Lowercase, minimal-digit, `0x` prefixed form, `-` before the prefix
    /// when negative. Zero is `"0x0"`.
    pub fn to_hex_string(&self) -> String {
        if let Some(text) = self.overflow_text() {
            return text.to_owned();
        }
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}0x{}", sign, self.mag_to_hex())
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.overflow_text() {
            Some(text) => f.pad(text),
            None => f.pad_integral(!self.is_negative(), "", &self.mag_to_decimal()),
        }
    }
}

impl LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.overflow_text() {
            Some(text) => f.pad(text),
            None => f.pad_integral(!self.is_negative(), "0x", &self.mag_to_hex()),
        }
    }
}
