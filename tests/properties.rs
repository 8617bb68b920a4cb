use bigint16::BigInt;
use num_bigint::{BigInt as Oracle, BigUint};
use proptest::prelude::*;

/// Words near the carry and normalization boundaries show up far more often
/// than uniform sampling would produce them.
fn word() -> impl Strategy<Value = u16> {
    prop_oneof![
        3 => any::<u16>(),
        1 => prop::sample::select(vec![0_u16, 1, 0x7fff, 0x8000, 0xfffe, 0xffff]),
    ]
}

fn bigint(max_words: usize) -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(word(), 1..=max_words))
        .prop_map(|(negative, words)| BigInt::from_words(negative, &words).unwrap())
}

fn to_oracle(val: &BigInt) -> Oracle {
    let bytes: Vec<u8> = val.words().iter().flat_map(|w| w.to_be_bytes()).collect();
    let mag = Oracle::from(BigUint::from_bytes_be(&bytes));
    if val.is_negative() {
        -mag
    } else {
        mag
    }
}

fn assert_canonical(val: &BigInt) {
    let words = val.words();
    assert!(words.len() == 1 || words[0] != 0, "leading zero word in {:?}", val);
    assert!(!(val.is_negative() && val.is_zero()), "negative zero");
}

proptest! {
    #[test]
    fn prop_add_sub(a in bigint(12), b in bigint(12)) {
        let sum = &a + &b;
        let diff = &a - &b;
        assert_canonical(&sum);
        assert_canonical(&diff);
        prop_assert_eq!(to_oracle(&sum), to_oracle(&a) + to_oracle(&b));
        prop_assert_eq!(to_oracle(&diff), to_oracle(&a) - to_oracle(&b));
        prop_assert_eq!(&sum, &(&b + &a));
        prop_assert_eq!(&(&sum - &b), &a);
    }

    #[test]
    fn prop_mul(a in bigint(12), b in bigint(12)) {
        let product = &a * &b;
        assert_canonical(&product);
        prop_assert_eq!(to_oracle(&product), to_oracle(&a) * to_oracle(&b));
        prop_assert_eq!(&product, &(&b * &a));
    }

    #[test]
    fn prop_div_rem(a in bigint(16), b in bigint(8)) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        assert_canonical(&q);
        assert_canonical(&r);
        prop_assert_eq!(to_oracle(&q), to_oracle(&a) / to_oracle(&b));
        prop_assert_eq!(to_oracle(&r), to_oracle(&a) % to_oracle(&b));
        prop_assert_eq!(&(&q * &b + &r), &a);
        prop_assert!(r.compare_magnitude(&b).is_lt());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn prop_shift(a in bigint(10), n in 0_u32..200) {
        let shifted = &a << n;
        assert_canonical(&shifted);
        prop_assert_eq!(&shifted, &(&a * &BigInt::from(2).pow(n).unwrap()));
        prop_assert_eq!(&(&shifted >> n), &a);

        // magnitude shift, sign kept
        let expected = to_oracle(&a.abs()) >> n;
        let expected = if a.is_negative() { -expected } else { expected };
        prop_assert_eq!(to_oracle(&(&a >> n)), expected);
    }

    #[test]
    fn prop_strings(a in bigint(12)) {
        let oracle = to_oracle(&a);
        let decimal = a.to_decimal_string();
        prop_assert_eq!(&decimal, &oracle.to_string());
        prop_assert_eq!(&BigInt::from_decimal_str(&decimal).unwrap(), &a);
        let hex = a.to_hex_string();
        prop_assert_eq!(&hex, &format!("{:#x}", oracle));
        prop_assert_eq!(&BigInt::from_hex_str(&hex).unwrap(), &a);
    }

    #[test]
    fn prop_order(a in bigint(6), b in bigint(6)) {
        prop_assert_eq!(a.cmp(&b), to_oracle(&a).cmp(&to_oracle(&b)));
        prop_assert_eq!(a.compare_magnitude(&b), to_oracle(&a.abs()).cmp(&to_oracle(&b.abs())));
    }

    #[test]
    fn prop_packed(a in bigint(12)) {
        let packed = a.to_packed();
        prop_assert_eq!(packed.len() % 2, 0);
        prop_assert_eq!(packed.len(), a.word_count());
        prop_assert_eq!(&BigInt::from_packed(&packed).unwrap(), &a);
    }
}
