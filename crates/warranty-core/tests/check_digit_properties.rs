//! Exhaustive checks over every base number `00000..=99999`.

use warranty_core::{
    calculate_check_digit, generate_warranty_code, inspect_warranty_code, validate_warranty_code,
    BaseNumber, Rejection, WarrantyCode, WarrantyError,
};

fn all_base_numbers() -> impl Iterator<Item = String> {
    (0..=99_999u32).map(|n| format!("{n:05}"))
}

#[test]
fn check_digit_is_deterministic_and_in_range() {
    for n in all_base_numbers() {
        let first = calculate_check_digit(&n).unwrap();
        assert!(first <= 9, "{n} -> {first}");
        assert_eq!(calculate_check_digit(&n).unwrap(), first);
    }
}

#[test]
fn every_generated_code_validates() {
    for n in all_base_numbers() {
        let code = generate_warranty_code(&n).unwrap();
        assert_eq!(code.len(), 6);
        assert!(code.starts_with(&n));
        assert!(validate_warranty_code(&code), "{code}");
    }
}

#[test]
fn every_wrong_check_digit_is_rejected() {
    for n in all_base_numbers() {
        let expected = calculate_check_digit(&n).unwrap();
        for d in (0..=9u8).filter(|&d| d != expected) {
            let code = format!("{n}{d}");
            assert!(!validate_warranty_code(&code), "{code}");
            assert_eq!(
                inspect_warranty_code(&code).unwrap_err(),
                Rejection::CheckDigitMismatch { expected, found: d }
            );
        }
    }
}

#[test]
fn typed_and_string_apis_agree() {
    for index in (0..=99_999u32).step_by(97) {
        let base = BaseNumber::from_index(index).unwrap();
        let typed = WarrantyCode::generate(base);
        let s = generate_warranty_code(&base.to_string()).unwrap();
        assert_eq!(typed.to_string(), s);
        assert_eq!(s.parse::<WarrantyCode>().unwrap(), typed);
    }
}

#[test]
fn concrete_vectors() {
    assert_eq!(calculate_check_digit("10000").unwrap(), 3);
    assert_eq!(generate_warranty_code("10000").unwrap(), "100003");
    assert_eq!(calculate_check_digit("12345").unwrap(), 8);
    assert_eq!(generate_warranty_code("12345").unwrap(), "123458");
    assert_eq!(calculate_check_digit("99999").unwrap(), 5);
    assert_eq!(generate_warranty_code("99999").unwrap(), "999995");
    assert_eq!(calculate_check_digit("00000").unwrap(), 1);
    assert_eq!(generate_warranty_code("00000").unwrap(), "000001");

    assert!(validate_warranty_code("100003"));
    assert!(!validate_warranty_code("100000"));
    assert!(!validate_warranty_code("12345"));
    assert!(!validate_warranty_code("abcdef"));
}

#[test]
fn shape_rejections() {
    for code in ["", "1", "12345", "1234567", "10000３"] {
        assert!(!validate_warranty_code(code), "{code:?}");
    }
    for code in ["abcdef", "12345a", "1 0003", "+10003"] {
        assert!(matches!(
            inspect_warranty_code(code),
            Err(Rejection::NonDigit { .. })
        ));
    }
}

#[test]
fn base_length_preconditions() {
    for input in ["", "1", "1234", "123456", "1234567890"] {
        assert!(matches!(
            calculate_check_digit(input),
            Err(WarrantyError::InvalidInputLength { expected: 5, .. })
        ));
        assert!(generate_warranty_code(input).is_err());
    }
}

#[test]
fn single_digit_substitutions_are_mostly_detected() {
    // A single substitution always changes the sum mod 11; it goes undetected
    // only when the remainders are 0 and 10, which both map to check digit 1.
    let mut undetected = 0u32;
    let mut total = 0u32;
    for n in all_base_numbers().step_by(13) {
        let code = generate_warranty_code(&n).unwrap();
        for pos in 0..5 {
            for d in b'0'..=b'9' {
                let mut bytes = code.clone().into_bytes();
                if bytes[pos] == d {
                    continue;
                }
                bytes[pos] = d;
                let altered = String::from_utf8(bytes).unwrap();
                total += 1;
                if validate_warranty_code(&altered) {
                    undetected += 1;
                }
            }
        }
    }
    assert!(undetected * 10 < total, "{undetected}/{total}");
}
