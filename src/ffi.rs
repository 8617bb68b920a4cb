//! C entry points.
//!
//! Values cross the boundary as opaque `*mut BigInt` handles owned by the
//! caller until passed to [`bigint_release`]. Strings returned by the
//! conversion functions are released with [`bigint_string_free`]. A null
//! handle argument makes the call return null (or `0`/`false`) and logs a
//! warning. Results too large to represent come back as overflow values,
//! which [`bigint_is_overflow`] reports.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::error::{Error, Result};
use crate::BigInt;

fn into_handle(val: BigInt) -> *mut BigInt {
    Box::into_raw(Box::new(val))
}

fn result_handle(result: Result<BigInt>) -> *mut BigInt {
    match result {
        Ok(val) => into_handle(val),
        Err(Error::Overflow { negative }) => into_handle(BigInt::overflowed(negative)),
        Err(err) => {
            tracing::warn!(%err, "bigint operation failed");
            ptr::null_mut()
        }
    }
}

unsafe fn handle_ref<'a>(ptr: *const BigInt, arg: &'static str) -> Option<&'a BigInt> {
    let val = ptr.as_ref();
    if val.is_none() {
        tracing::warn!(arg, "null bigint handle");
    }
    val
}

unsafe fn parse_c_str(
    s: *const c_char,
    parse: fn(&str) -> Result<BigInt>,
) -> *mut BigInt {
    if s.is_null() {
        tracing::warn!("null string passed to bigint parser");
        return ptr::null_mut();
    }
    match CStr::from_ptr(s).to_str() {
        Ok(text) => result_handle(parse(text)),
        Err(err) => {
            tracing::warn!(%err, "bigint literal is not utf-8");
            ptr::null_mut()
        }
    }
}

fn into_c_string(text: String) -> *mut c_char {
    match CString::new(text) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

unsafe fn binary(
    a: *const BigInt,
    b: *const BigInt,
    op: fn(&BigInt, &BigInt) -> Result<BigInt>,
) -> *mut BigInt {
    match (handle_ref(a, "a"), handle_ref(b, "b")) {
        (Some(a), Some(b)) => result_handle(op(a, b)),
        _ => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn bigint_from_long(val: i64) -> *mut BigInt {
    into_handle(BigInt::from(val))
}

/// # Safety
/// `s` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn bigint_from_decimal(s: *const c_char) -> *mut BigInt {
    parse_c_str(s, BigInt::from_decimal_str)
}

/// # Safety
/// `s` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn bigint_from_hexadecimal(s: *const c_char) -> *mut BigInt {
    parse_c_str(s, BigInt::from_hex_str)
}

/// # Safety
/// `a` and `b` must be null or live handles.
#[no_mangle]
pub unsafe extern "C" fn bigint_add(a: *const BigInt, b: *const BigInt) -> *mut BigInt {
    binary(a, b, BigInt::checked_add)
}

/// # Safety
/// `a` and `b` must be null or live handles.
#[no_mangle]
pub unsafe extern "C" fn bigint_subtract(a: *const BigInt, b: *const BigInt) -> *mut BigInt {
    binary(a, b, BigInt::checked_sub)
}

/// # Safety
/// `a` and `b` must be null or live handles.
#[no_mangle]
pub unsafe extern "C" fn bigint_multiply(a: *const BigInt, b: *const BigInt) -> *mut BigInt {
    binary(a, b, BigInt::checked_mul)
}

/// Returns the quotient and stores the remainder through `remainder` when it
/// is not null. A zero divisor returns null and stores null.
///
/// # Safety
/// `a` and `b` must be null or live handles; `remainder` must be null or
/// valid for a pointer write.
#[no_mangle]
pub unsafe extern "C" fn bigint_divide(
    a: *const BigInt,
    b: *const BigInt,
    remainder: *mut *mut BigInt,
) -> *mut BigInt {
    let (quotient, rem) = match (handle_ref(a, "a"), handle_ref(b, "b")) {
        (Some(a), Some(b)) => match a.div_rem(b) {
            Ok((q, r)) => (into_handle(q), into_handle(r)),
            Err(Error::Overflow { negative }) => (
                into_handle(BigInt::overflowed(negative)),
                into_handle(BigInt::overflowed(a.is_negative())),
            ),
            Err(err) => {
                tracing::warn!(%err, "bigint division failed");
                (ptr::null_mut(), ptr::null_mut())
            }
        },
        _ => (ptr::null_mut(), ptr::null_mut()),
    };
    match remainder.as_mut() {
        Some(slot) => *slot = rem,
        None => bigint_release(rem),
    }
    quotient
}

/// `-1`, `0` or `1`; `0` when either handle is null.
///
/// # Safety
/// `a` and `b` must be null or live handles.
#[no_mangle]
pub unsafe extern "C" fn bigint_compare(a: *const BigInt, b: *const BigInt) -> i32 {
    match (handle_ref(a, "a"), handle_ref(b, "b")) {
        (Some(a), Some(b)) => a.compare(b) as i32,
        _ => 0,
    }
}

/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn bigint_shift_left(a: *const BigInt, n: u32) -> *mut BigInt {
    match handle_ref(a, "a") {
        Some(a) => result_handle(a.checked_shl(n)),
        None => ptr::null_mut(),
    }
}

/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn bigint_shift_right(a: *const BigInt, n: u32) -> *mut BigInt {
    match handle_ref(a, "a") {
        Some(a) => into_handle(a >> n),
        None => ptr::null_mut(),
    }
}

/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn bigint_to_decimal(a: *const BigInt) -> *mut c_char {
    match handle_ref(a, "a") {
        Some(a) => into_c_string(a.to_decimal_string()),
        None => ptr::null_mut(),
    }
}

/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn bigint_to_hexadecimal(a: *const BigInt) -> *mut c_char {
    match handle_ref(a, "a") {
        Some(a) => into_c_string(a.to_hex_string()),
        None => ptr::null_mut(),
    }
}

/// # Safety
/// `s` must be null or a string returned by this library, not yet freed.
#[no_mangle]
pub unsafe extern "C" fn bigint_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Copies the packed form into `out` when `capacity` is large enough and
/// returns the number of words it needs. Pass a null `out` to query the size.
///
/// # Safety
/// `a` must be null or a live handle; `out` must be null or valid for
/// `capacity` word writes.
#[no_mangle]
pub unsafe extern "C" fn bigint_packed(a: *const BigInt, out: *mut u16, capacity: usize) -> usize {
    let Some(a) = handle_ref(a, "a") else {
        return 0;
    };
    let packed = a.to_packed();
    if !out.is_null() && capacity >= packed.len() {
        ptr::copy_nonoverlapping(packed.as_ptr(), out, packed.len());
    }
    packed.len()
}

/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn bigint_is_overflow(a: *const BigInt) -> bool {
    handle_ref(a, "a").is_some_and(BigInt::is_overflow)
}

/// # Safety
/// `a` must be null or a handle returned by this library, not yet released.
#[no_mangle]
pub unsafe extern "C" fn bigint_release(a: *mut BigInt) {
    if !a.is_null() {
        drop(Box::from_raw(a));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn decimal(a: *const BigInt) -> String {
        let s = bigint_to_decimal(a);
        let text = CStr::from_ptr(s).to_str().unwrap().to_owned();
        bigint_string_free(s);
        text
    }

    #[test]
    fn test_arithmetic() {
        unsafe {
            let a = bigint_from_decimal(c"12345678901234567890".as_ptr());
            let b = bigint_from_long(-65536);
            let sum = bigint_add(a, b);
            let diff = bigint_subtract(a, b);
            let product = bigint_multiply(a, b);
            assert_eq!(decimal(sum), "12345678901234502354");
            assert_eq!(decimal(diff), "12345678901234633426");
            assert_eq!(decimal(product), "-809086412471308641239040");
            assert_eq!(bigint_compare(b, a), -1);
            assert_eq!(bigint_compare(a, a), 0);
            for p in [a, b, sum, diff, product] {
                bigint_release(p);
            }
        }
    }

    #[test]
    fn test_divide() {
        unsafe {
            let a = bigint_from_long(-100);
            let b = bigint_from_long(7);
            let mut rem = ptr::null_mut();
            let q = bigint_divide(a, b, &mut rem);
            assert_eq!(decimal(q), "-14");
            assert_eq!(decimal(rem), "-2");
            bigint_release(q);
            bigint_release(rem);

            let zero = bigint_from_long(0);
            let mut rem = ptr::null_mut();
            assert!(bigint_divide(a, zero, &mut rem).is_null());
            assert!(rem.is_null());

            // remainder discarded
            let q = bigint_divide(a, b, ptr::null_mut());
            assert_eq!(decimal(q), "-14");
            for p in [a, b, zero, q] {
                bigint_release(p);
            }
        }
    }

    #[test]
    fn test_hex_and_shift() {
        unsafe {
            let a = bigint_from_hexadecimal(c"-0xff".as_ptr());
            let b = bigint_shift_left(a, 20);
            let c = bigint_shift_right(b, 16);
            let s = bigint_to_hexadecimal(c);
            assert_eq!(CStr::from_ptr(s).to_str().unwrap(), "-0xff0");
            bigint_string_free(s);
            for p in [a, b, c] {
                bigint_release(p);
            }
        }
    }

    #[test]
    fn test_overflow_values() {
        unsafe {
            let one = bigint_from_long(1);
            let big = bigint_shift_left(one, crate::MAX_BITS as u32);
            assert!(bigint_is_overflow(big));
            assert!(!bigint_is_overflow(one));
            assert_eq!(decimal(big), "overflow");
            // overflow propagates
            let sum = bigint_add(big, one);
            assert!(bigint_is_overflow(sum));
            for p in [one, big, sum] {
                bigint_release(p);
            }
        }
    }

    #[test]
    fn test_packed() {
        unsafe {
            let a = bigint_from_long(0x1_0002);
            assert_eq!(bigint_packed(a, ptr::null_mut(), 0), 4);
            let mut buf = [0xaaaa_u16; 4];
            assert_eq!(bigint_packed(a, buf.as_mut_ptr(), 2), 4);
            assert_eq!(buf, [0xaaaa; 4]);
            assert_eq!(bigint_packed(a, buf.as_mut_ptr(), buf.len()), 4);
            assert_eq!(buf, [0b1000, 0, 1, 2]);
            bigint_release(a);
        }
    }

    #[test]
    fn test_null_and_malformed() {
        unsafe {
            assert!(bigint_from_decimal(ptr::null()).is_null());
            assert!(bigint_from_decimal(c"12a".as_ptr()).is_null());
            assert!(bigint_add(ptr::null(), ptr::null()).is_null());
            assert!(bigint_to_decimal(ptr::null()).is_null());
            assert_eq!(bigint_compare(ptr::null(), ptr::null()), 0);
            assert_eq!(bigint_packed(ptr::null(), ptr::null_mut(), 0), 0);
            assert!(!bigint_is_overflow(ptr::null()));
            bigint_release(ptr::null_mut());
            bigint_string_free(ptr::null_mut());
        }
    }
}
