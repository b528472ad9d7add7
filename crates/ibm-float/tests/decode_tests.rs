//! Conversion tests against reference vectors and the reference encoder.

use ibm_float::{decode_bits, decode_one, decode_simple, DecodeError, IbmFloat32};
use test_utils::{
    assert_rel_eq, create_normalized_words, create_random_words, encode_ibm, OVERFLOW_WORDS,
    REFERENCE_VECTORS, UNNORMALIZED_VECTORS,
};

// ============================================================================
// Reference vectors
// ============================================================================

#[test]
fn test_reference_vectors() {
    for &(word, expected) in REFERENCE_VECTORS {
        let decoded = decode_one(word).unwrap();
        assert_eq!(decoded, expected, "word {:#010x}", word);
    }
}

#[test]
fn test_negative_one_hundred_twelve() {
    // sign=1, exponent=0x42, mantissa=0x700000: -0x7/16 * 16^2
    assert_eq!(decode_one(0xC270_0000).unwrap(), -112.0);
    assert_eq!(decode_one(0xC110_0000).unwrap(), -1.0);
}

#[test]
fn test_unnormalized_words_are_renormalized() {
    for &(word, expected) in UNNORMALIZED_VECTORS {
        let bits = decode_bits(word).unwrap();
        assert_eq!(bits.to_f64(), expected, "word {:#010x}", word);
        assert!(!bits.is_subnormal(), "word {:#010x}", word);
    }
}

#[test]
fn test_unnormalized_word_near_top_of_range() {
    // A decoder that only accepts up to three normalizing shifts rejects this word
    let word = 0x610F_FFFF;
    assert!(!IbmFloat32::from_bits(word).is_normalized());

    let decoded = decode_one(word).unwrap();
    assert!(decoded < f32::MAX as f64);
    assert_eq!(decoded, decode_simple(word));
}

// ============================================================================
// Zero handling
// ============================================================================

#[test]
fn test_zero_mantissa_gives_signed_zero_for_every_exponent() {
    for exponent in 0u32..=0x7F {
        let positive = decode_one(exponent << 24).unwrap();
        assert_eq!(positive, 0.0);
        assert!(positive.is_sign_positive(), "exponent {:#x}", exponent);

        let negative = decode_one(0x8000_0000 | exponent << 24).unwrap();
        assert_eq!(negative, 0.0);
        assert!(negative.is_sign_negative(), "exponent {:#x}", exponent);
    }
}

// ============================================================================
// Overflow
// ============================================================================

#[test]
fn test_overflow_words_fail() {
    for &word in OVERFLOW_WORDS {
        match decode_one(word) {
            Err(DecodeError::Overflow { word: w, exponent }) => {
                assert_eq!(w, word);
                assert!(exponent >= 255, "exponent {} for {:#010x}", exponent, word);
            }
            other => panic!("expected overflow for {:#010x}, got {:?}", word, other),
        }
    }
}

#[test]
fn test_overflow_boundary_for_exponent_0x61() {
    // Leading digit 1 needs three shifts: exponent 4*97 - 130 - 3 = 255
    assert!(decode_one(0x6110_0000).is_err());
    // Leading digit 0 with next digit F needs four shifts: 254
    assert!(decode_one(0x610F_0000).is_ok());
}

#[test]
fn test_results_are_never_infinite_or_nan() {
    for word in create_random_words(50_000, 2024) {
        if let Ok(value) = decode_one(word) {
            assert!(value.is_finite(), "word {:#010x} -> {}", word, value);
        }
    }
}

#[test]
fn test_overflow_agrees_with_exact_magnitude() {
    // decode_simple is exact in binary64, so it tells us which words truly
    // exceed the binary32 range
    for word in create_random_words(50_000, 99) {
        let exact = decode_simple(word).abs();
        match decode_one(word) {
            Ok(_) => assert!(exact <= f32::MAX as f64, "word {:#010x}", word),
            Err(_) => assert!(exact > f32::MAX as f64, "word {:#010x}", word),
        }
    }
}

// ============================================================================
// Agreement with exact evaluation
// ============================================================================

#[test]
fn test_normal_range_is_exact() {
    for word in create_normalized_words(50_000, 11) {
        assert_eq!(decode_one(word).unwrap(), decode_simple(word), "word {:#010x}", word);
    }
}

#[test]
fn test_matches_exact_value_cast_to_f32_outside_subnormals() {
    for word in create_random_words(50_000, 5) {
        let exact = decode_simple(word);
        if exact.abs() < f32::MIN_POSITIVE as f64 || exact.abs() > f32::MAX as f64 {
            continue;
        }
        assert_eq!(decode_one(word).unwrap(), exact, "word {:#010x}", word);
    }
}

#[test]
fn test_subnormal_results_truncate_toward_zero() {
    for word in create_random_words(50_000, 17) {
        let exact = decode_simple(word);
        if exact == 0.0 || exact.abs() >= f32::MIN_POSITIVE as f64 {
            continue;
        }
        let decoded = decode_one(word).unwrap();
        assert!(decoded.abs() <= exact.abs(), "word {:#010x}", word);
        assert!(
            exact.abs() - decoded.abs() < f32::from_bits(1) as f64,
            "word {:#010x}",
            word
        );
    }
}

#[test]
fn test_deterministic() {
    for word in create_random_words(1000, 3) {
        assert_eq!(decode_one(word), decode_one(word));
    }
}

// ============================================================================
// Round trip through the reference encoder
// ============================================================================

#[test]
fn test_round_trip_through_encoder() {
    let values = [
        1.0_f32,
        -1.0,
        273.15,
        -40.0,
        101_325.0,
        0.001,
        1.0e-30,
        -6.02e23,
        3.0e38,
        std::f32::consts::PI,
    ];

    for value in values {
        let word = encode_ibm(value as f64).unwrap();
        let decoded = decode_one(word).unwrap();
        // Hex normalization can drop up to three low bits of the binary32 significand
        assert_rel_eq!(decoded, value, 2.0_f64.powi(-20));
    }
}

#[test]
fn test_round_trip_of_decoded_words() {
    // Decoding a normalized word is exact, so re-encoding reproduces it
    for word in create_normalized_words(10_000, 23) {
        let decoded = decode_one(word).unwrap();
        assert_eq!(encode_ibm(decoded), Some(word), "word {:#010x}", word);
    }
}
