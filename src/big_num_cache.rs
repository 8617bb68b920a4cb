use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::from_parts(vec![i as u16], false));
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::from_parts(vec![i as u16], i != 0));
}

/// Returns a cached copy of `val` (with the given sign) when `val <= MAX_CONSTANT`.
pub fn small(val: u64, negative: bool) -> Option<BigInt> {
    if val > MAX_CONSTANT as u64 {
        return None;
    }
    let cache: &[BigInt; MAX_CONSTANT + 1] = if negative { &NEG_CACHE } else { &POS_CACHE };
    Some(cache[val as usize].clone())
}
