pub const DIGITS: [char; 16] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f'
];

pub const WORD_BITS: u32 = u16::BITS;

pub const WORD_BASE: u64 = 1 << WORD_BITS;

pub const WORD_MASK: u32 = u16::MAX as u32;

// Packed header word: bits 15..2 count word pairs, bit 1 overflow, bit 0 sign.
pub const HEADER_SIGN_BIT: u16 = 0x0001;

pub const HEADER_OVERFLOW_BIT: u16 = 0x0002;

pub const HEADER_SIZE_MASK: u16 = 0xfffc;

/// Largest packed size, header included.
pub const MAX_TOTAL_WORDS: usize = (HEADER_SIZE_MASK >> 1) as usize;

pub const MAX_MAG_WORDS: usize = MAX_TOTAL_WORDS - 1;

pub const MAX_BITS: usize = MAX_MAG_WORDS * WORD_BITS as usize;

/// Decimal digits handled per short multiply / short divide step.
pub const DIGITS_PER_WORD: usize = 4;

/// `10^DIGITS_PER_WORD`, the largest power of ten below `WORD_BASE`.
pub const WORD_RADIX: u16 = 10_000;

pub const NIBBLES_PER_WORD: usize = 4;

pub const MAX_CONSTANT: usize = 16;
