//! Property checks over the full code point and code unit ranges.

use pretty_assertions::assert_eq;
use unichar_runtime::consts::{
    MAX_CODE_POINT, MAX_HIGH_SURROGATE, MAX_LOW_SURROGATE, MIN_HIGH_SURROGATE, MIN_LOW_SURROGATE,
    MIN_SUPPLEMENTARY_CODE_POINT,
};
use unichar_runtime::{
    check_radix, code_points, encode, to_chars, to_code_point, CharClassifier, CharError,
    StdPrimitives,
};

fn classifier() -> CharClassifier<StdPrimitives> {
    CharClassifier::default()
}

#[test]
fn test_supplementary_round_trip() {
    for cp in MIN_SUPPLEMENTARY_CODE_POINT..=MAX_CODE_POINT {
        let units = to_chars(cp).expect("supplementary code point");
        assert_eq!(units.len(), 2, "cp {:#x}", cp);
        assert_eq!(to_code_point(units[0], units[1]), cp);
    }
}

#[test]
fn test_bmp_is_single_unit() {
    for cp in 0..MIN_SUPPLEMENTARY_CODE_POINT {
        assert_eq!(to_chars(cp), Ok(vec![cp as u16]));
    }
}

#[test]
fn test_out_of_range_code_points_fail() {
    for cp in [i32::MIN, -0x10000, -1, MAX_CODE_POINT + 1, 0x7FFF_FFFF] {
        let err = to_chars(cp).unwrap_err();
        assert_eq!(err, CharError::InvalidCodePoint { code_point: cp });
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn test_surrogate_pairs() {
    let cls = classifier();
    for high in MIN_HIGH_SURROGATE..=MAX_HIGH_SURROGATE {
        for low in (MIN_LOW_SURROGATE..=MAX_LOW_SURROGATE).step_by(97) {
            assert!(cls.is_surrogate_pair(high, low));
            // swapped order is never a pair
            assert!(!cls.is_surrogate_pair(low, high));
        }
    }
    for other in [0x0000u16, 0x0041, 0xD7FF, 0xE000, 0xFFFF] {
        assert!(!cls.is_surrogate_pair(other, MIN_LOW_SURROGATE));
        assert!(!cls.is_surrogate_pair(MIN_HIGH_SURROGATE, other));
    }
}

#[test]
fn test_check_radix_domain() {
    for r in -5..=50 {
        let res = check_radix(r);
        if (2..=36).contains(&r) {
            assert_eq!(res, Ok(r));
        } else {
            assert_eq!(res, Err(CharError::InvalidRadix { radix: r }));
        }
    }
}

#[test]
fn test_letter_or_digit_is_union() {
    let cls = classifier();
    for c in 0u16..=0xFFFF {
        assert_eq!(
            cls.is_letter_or_digit(c),
            cls.is_letter(c) || cls.is_digit(c),
            "unit {:#x}",
            c
        );
    }
}

#[test]
fn test_case_predicates_are_letters() {
    let cls = classifier();
    for c in 0u16..=0xFFFF {
        if cls.is_upper_case(c) || cls.is_lower_case(c) || cls.is_title_case(c) {
            assert!(cls.is_letter(c), "unit {:#x}", c);
        }
    }
}

#[test]
fn test_concrete_cases() {
    let cls = classifier();
    assert_eq!(to_code_point(0xD800, 0xDC00), 0x10000);
    assert_eq!(to_chars(0x10000), Ok(vec![0xD800, 0xDC00]));
    assert_eq!(to_chars(0x41), Ok(vec![0x41]));
    assert!(check_radix(37).is_err());
    assert_eq!(check_radix(16), Ok(16));
    assert!(cls.is_surrogate_pair(0xD800, 0xDC00));
    assert!(!cls.is_surrogate_pair(0x0041, 0xDC00));
}

#[test]
fn test_utf16_matches_std() {
    let text = "héllo, 世界 😀 𝄞";
    let cps: Vec<i32> = text.chars().map(|c| c as i32).collect();
    let units = encode(cps.iter().copied()).expect("valid text");
    let expected: Vec<u16> = text.encode_utf16().collect();
    assert_eq!(units, expected);
    assert_eq!(code_points(&units).collect::<Vec<_>>(), cps);
}

#[test]
fn test_case_mapping_is_simple_mapping() {
    let cls = classifier();
    assert_eq!(cls.to_lower_case(0x0130), 0x0069);
    assert_eq!(cls.to_upper_case(0x1F80), 0x1F88);
    assert_eq!(cls.to_upper_case(0x1FB3), 0x1FBC);
    assert_eq!(cls.to_lower_case_code_point(0x0130), 0x0069);
    // ß has only a full mapping ("SS") and stays put
    assert_eq!(cls.to_upper_case(0x00DF), 0x00DF);
    // Across the Latin blocks, a single-char full mapping is also the simple one.
    for c in 0u16..=0x024F {
        let Some(ch) = char::from_u32(c as u32) else { continue };
        let mut upper = ch.to_uppercase();
        if let (Some(u), None) = (upper.next(), upper.next()) {
            if (u as u32) < 0x10000 {
                assert_eq!(cls.to_upper_case(c), u as u16, "unit {:#x}", c);
            }
        }
    }
}
