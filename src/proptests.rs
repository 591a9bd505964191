//! Property-based tests checked against `num-bigint` as an independent
//! reference implementation.

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::{multiply, power, ChunkSize, ChunkedInteger, MAX_CHUNK_SIZE};

fn canonical(input: &str) -> &str {
    let trimmed = input.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

fn reference(input: &str) -> BigUint {
    input.parse().unwrap()
}

fn chunk_size() -> impl Strategy<Value = ChunkSize> {
    (1..=MAX_CHUNK_SIZE).prop_map(|digits| ChunkSize::new(digits).unwrap())
}

// ==================== Representation ====================

proptest! {
    /// Parsing keeps the supplied string verbatim.
    #[test]
    fn decimal_round_trip(input in "[0-9]{1,80}", size in chunk_size()) {
        let number = ChunkedInteger::from_decimal_with(&input, size).unwrap();
        prop_assert_eq!(number.to_string(), input);
    }

    /// Only the leading chunk may be short, and re-rendering the chunks gives
    /// the canonical form of the input.
    #[test]
    fn chunks_are_in_range(input in "[0-9]{1,80}", size in chunk_size()) {
        let number = ChunkedInteger::from_decimal_with(&input, size).unwrap();
        let chunks = number.chunks();

        prop_assert!(!chunks.is_empty());
        prop_assert!(chunks.len() == 1 || chunks[0] != 0);
        prop_assert!(chunks.iter().all(|&chunk| u64::from(chunk) < size.radix()));

        let rebuilt = ChunkedInteger::from_chunks_with(number.to_chunks(), size).unwrap();
        prop_assert_eq!(rebuilt.to_string(), canonical(&input));
        for chunk in &chunks[1..] {
            prop_assert_eq!(format!("{:0w$}", chunk, w = size.digits()).len(), size.digits());
        }
    }

    /// Wrapping chunks and parsing their decimal form agree.
    #[test]
    fn chunks_round_trip(chunks in prop::collection::vec(0_u32..1_000, 1..20)) {
        let number = ChunkedInteger::from_chunks(chunks).unwrap();
        let parsed = ChunkedInteger::from_decimal(number.as_str()).unwrap();

        prop_assert_eq!(parsed, number);
    }
}

// ==================== Multiplication ====================

proptest! {
    /// Products match the reference implementation.
    #[test]
    fn multiply_matches_reference(a in "[0-9]{1,60}", b in "[0-9]{1,60}", size in chunk_size()) {
        let x = ChunkedInteger::from_decimal_with(&a, size).unwrap();
        let y = ChunkedInteger::from_decimal_with(&b, size).unwrap();

        let product = multiply(&x, &y).unwrap();
        let expected = reference(&a) * reference(&b);

        prop_assert_eq!(product.to_string(), expected.to_string());
    }

    /// Operand order does not matter.
    #[test]
    fn multiply_commutes(a in "[0-9]{1,40}", b in "[0-9]{1,40}") {
        let x = ChunkedInteger::from_decimal(&a).unwrap();
        let y = ChunkedInteger::from_decimal(&b).unwrap();

        prop_assert_eq!(multiply(&x, &y).unwrap(), multiply(&y, &x).unwrap());
    }

    /// Maximal chunks exercise the widest carries.
    #[test]
    fn multiply_all_nines(a_len in 1_usize..60, b_len in 1_usize..60, size in chunk_size()) {
        let a = "9".repeat(a_len);
        let b = "9".repeat(b_len);
        let x = ChunkedInteger::from_decimal_with(&a, size).unwrap();
        let y = ChunkedInteger::from_decimal_with(&b, size).unwrap();

        let expected = reference(&a) * reference(&b);
        prop_assert_eq!(multiply(&x, &y).unwrap().to_string(), expected.to_string());
    }
}

// ==================== Exponentiation ====================

proptest! {
    /// Anything to the power of zero is one.
    #[test]
    fn power_zero_is_one(a in "[0-9]{1,40}") {
        let x = ChunkedInteger::from_decimal(&a).unwrap();
        prop_assert_eq!(power(&x, 0), ChunkedInteger::one());
    }

    /// Squaring is multiplying by itself.
    #[test]
    fn power_two_is_square(a in "[0-9]{1,40}", size in chunk_size()) {
        let x = ChunkedInteger::from_decimal_with(&a, size).unwrap();
        prop_assert_eq!(power(&x, 2), multiply(&x, &x).unwrap());
    }

    /// Powers match the reference implementation.
    #[test]
    fn power_matches_reference(a in "[0-9]{1,10}", exponent in 0_u32..100, size in chunk_size()) {
        let x = ChunkedInteger::from_decimal_with(&a, size).unwrap();
        let expected = reference(&a).pow(exponent);

        prop_assert_eq!(power(&x, u64::from(exponent)).to_string(), expected.to_string());
    }

    /// `a^(m + n) == a^m * a^n`
    #[test]
    fn power_adds_exponents(a in "[0-9]{1,8}", m in 0_u64..60, n in 0_u64..60) {
        let x = ChunkedInteger::from_decimal(&a).unwrap();
        let combined = multiply(&power(&x, m), &power(&x, n)).unwrap();

        prop_assert_eq!(power(&x, m + n), combined);
    }
}
