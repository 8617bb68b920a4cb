//! Packed wire format.
//!
//! A packed value is a header word followed by the magnitude, most
//! significant word first. The header holds the total word count (header
//! included, always even) in bits 15..2, the overflow flag in bit 1 and the
//! sign in bit 0. An even-length magnitude gets one leading zero word so the
//! total stays even.

use crate::big_num_constants::*;
use crate::error::{Error, Result};
use crate::BigInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub word_count: usize,
    pub overflow: bool,
    pub negative: bool,
}

impl Header {
    pub fn encode(&self) -> u16 {
        let mut word = ((self.word_count << 1) as u16) & HEADER_SIZE_MASK;
        if self.overflow {
            word |= HEADER_OVERFLOW_BIT;
        }
        if self.negative {
            word |= HEADER_SIGN_BIT;
        }
        word
    }

    pub fn decode(word: u16) -> Header {
        Header {
            word_count: ((word & HEADER_SIZE_MASK) >> 1) as usize,
            overflow: word & HEADER_OVERFLOW_BIT != 0,
            negative: word & HEADER_SIGN_BIT != 0,
        }
    }
}

impl BigInt {
    /// Packed size in words, header and padding included.
    pub fn word_count(&self) -> usize {
        (self.words().len() + 2) & !1
    }

    pub fn header(&self) -> Header {
        Header {
            word_count: self.word_count(),
            overflow: self.is_overflow(),
            negative: self.is_negative(),
        }
    }

    pub fn to_packed(&self) -> Vec<u16> {
        let mut packed = Vec::with_capacity(self.word_count());
        packed.push(self.header().encode());
        if self.words().len() % 2 == 0 {
            packed.push(0);
        }
        packed.extend_from_slice(self.words());
        packed
    }

    /// Reads a packed buffer. The header's word count must match the slice
    /// length exactly; the magnitude may carry leading zero words.
    pub fn from_packed(words: &[u16]) -> Result<BigInt> {
        let header = match words.first() {
            Some(&word) => Header::decode(word),
            None => return Err(Error::MalformedPacked { declared: 0, actual: 0 }),
        };
        if header.word_count != words.len() {
            return Err(Error::MalformedPacked {
                declared: header.word_count,
                actual: words.len(),
            });
        }
        if header.overflow {
            return Ok(BigInt::overflowed(header.negative));
        }
        BigInt::from_words(header.negative, &words[1..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let header = Header { word_count: 4, overflow: false, negative: true };
        assert_eq!(header.encode(), 0b1001);
        assert_eq!(Header::decode(0b1001), header);
        let largest = Header { word_count: MAX_TOTAL_WORDS, overflow: true, negative: false };
        assert_eq!(largest.encode(), 0xfffe);
        assert_eq!(Header::decode(0xfffe), largest);
    }

    #[test]
    fn test_word_count_is_even() {
        assert_eq!(BigInt::zero().word_count(), 2);
        assert_eq!(BigInt::from(65536).word_count(), 4);
        assert_eq!(BigInt::from(1_u64 << 32).word_count(), 4);
        assert_eq!(BigInt::from(u64::MAX).word_count(), 6);
        assert_eq!(BigInt::allocate(7).unwrap().word_count(), 8);
    }

    #[test]
    fn test_to_packed() {
        assert_eq!(BigInt::zero().to_packed(), vec![0b0100, 0]);
        assert_eq!(BigInt::from(-5).to_packed(), vec![0b0101, 5]);
        // two magnitude words, one padding word
        assert_eq!(BigInt::from(0x1_0002).to_packed(), vec![0b1000, 0, 1, 2]);
        assert_eq!(BigInt::overflowed(true).to_packed(), vec![0b0111, 0]);
    }

    #[test]
    fn test_from_packed() {
        let a: BigInt = "-123456789012345678901234567890".parse().unwrap();
        assert_eq!(BigInt::from_packed(&a.to_packed()).unwrap(), a);
        // untrimmed input is accepted
        assert_eq!(BigInt::from_packed(&[0b1000, 0, 0, 9]).unwrap(), BigInt::from(9));
        assert_eq!(BigInt::from_packed(&[0b1001, 0, 0, 0]).unwrap(), BigInt::zero());
        assert_eq!(BigInt::from_packed(&[0b0110, 0]).unwrap(), BigInt::overflowed(false));
    }

    #[test]
    fn test_from_packed_malformed() {
        assert_eq!(
            BigInt::from_packed(&[]),
            Err(Error::MalformedPacked { declared: 0, actual: 0 })
        );
        assert_eq!(
            BigInt::from_packed(&[0b1000, 0, 1]),
            Err(Error::MalformedPacked { declared: 4, actual: 3 })
        );
        assert_eq!(
            BigInt::from_packed(&[0]),
            Err(Error::MalformedPacked { declared: 0, actual: 1 })
        );
    }
}
