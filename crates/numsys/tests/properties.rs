//! Property tests for parse/format symmetry across every base and scheme.

use numsys::{convert, format, parse, NumberSystem, NumsysError, SignScheme};
use proptest::prelude::*;

const SEPARATORS: [char; 7] = ['\t', '\n', '\x0B', '\x0C', '\r', ' ', '_'];

fn scheme() -> impl Strategy<Value = SignScheme> {
    prop::sample::select(SignScheme::ALL.to_vec())
}

fn positional_system() -> impl Strategy<Value = NumberSystem> {
    (2u32..=36, scheme()).prop_map(|(base, scheme)| NumberSystem { base, scheme })
}

fn interesting_value() -> impl Strategy<Value = i64> {
    prop_oneof![
        any::<i64>(),
        -1000i64..=1000,
        prop::sample::select(vec![0, 1, -1, i64::MAX, i64::MIN, i64::MAX - 1, i64::MIN + 1]),
    ]
}

/// Inserts each separator before the character at `pos % (len + 1)`.
fn sprinkle(text: &str, inserts: &[(usize, char)]) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for &(pos, sep) in inserts {
        let at = pos % (chars.len() + 1);
        chars.insert(at, sep);
    }
    chars.into_iter().collect()
}

/// Replaces every digit with `base - 1 - digit`.
fn complement_digits(text: &str, base: u32) -> String {
    text.chars()
        .map(|c| {
            let digit = c.to_digit(base).unwrap();
            char::from_digit(base - 1 - digit, base).unwrap().to_ascii_uppercase()
        })
        .collect()
}

/// Writes `magnitude` in base 2 or 16.
fn radix_text(magnitude: u64, base: u32) -> String {
    match base {
        2 => format!("{magnitude:b}"),
        _ => format!("{magnitude:X}"),
    }
}

proptest! {
    #[test]
    fn roundtrip_every_scheme_and_base(sys in positional_system(), value in interesting_value()) {
        let text = format(value, sys).unwrap();
        prop_assert_eq!(parse(&text, sys), Ok(value), "text {:?} in {}", text, sys);
    }

    #[test]
    fn lowercase_text_parses_the_same(sys in positional_system(), value in interesting_value()) {
        let text = format(value, sys).unwrap();
        prop_assert_eq!(parse(&text.to_lowercase(), sys), Ok(value));
    }

    #[test]
    fn separators_are_ignored(
        sys in positional_system(),
        value in interesting_value(),
        inserts in prop::collection::vec((any::<usize>(), prop::sample::select(SEPARATORS.to_vec())), 0..8),
    ) {
        let text = sprinkle(&format(value, sys).unwrap(), &inserts);
        prop_assert_eq!(parse(&text, sys), Ok(value), "text {:?}", text);
    }

    #[test]
    fn formatted_sign_position_matches_scheme(sys in positional_system(), value in interesting_value()) {
        let text = format(value, sys).unwrap();
        let first = text.chars().next().unwrap();
        match (sys.scheme, value < 0) {
            (SignScheme::SignedMarker, true) => prop_assert_eq!(first, '-'),
            (SignScheme::SignedMarker, false) => prop_assert_ne!(first, '-'),
            (_, true) => prop_assert_eq!(first, numsys::codec::max_digit(sys.base)),
            (_, false) => prop_assert_eq!(first, '0'),
        }
    }

    #[test]
    fn decimal_hex_octal_binary_agree_with_std(value in any::<i64>()) {
        let sign = if value < 0 { "-" } else { "" };
        let abs = value.unsigned_abs();
        prop_assert_eq!(format(value, NumberSystem::BINARY).unwrap(), format!("{sign}{abs:b}"));
        prop_assert_eq!(format(value, NumberSystem::OCTAL).unwrap(), format!("{sign}{abs:o}"));
        prop_assert_eq!(format(value, NumberSystem::DECIMAL).unwrap(), value.to_string());
        prop_assert_eq!(format(value, NumberSystem::HEXADECIMAL).unwrap(), format!("{sign}{abs:X}"));
        prop_assert_eq!(
            convert(&value.to_string(), NumberSystem::DECIMAL, NumberSystem::HEXADECIMAL).unwrap(),
            format!("{sign}{abs:X}")
        );
    }

    #[test]
    fn values_beyond_i64_overflow(excess in (i64::MAX as u64 + 1)..=u64::MAX) {
        let text = format!("{excess:x}");
        prop_assert_eq!(parse(&text, NumberSystem::HEXADECIMAL), Err(NumsysError::MagnitudeOverflow));

        if excess > i64::MAX as u64 + 1 {
            let text = format!("-{excess}");
            prop_assert_eq!(parse(&text, NumberSystem::DECIMAL), Err(NumsysError::MagnitudeOverflow));
        }
    }

    #[test]
    fn sign_position_schemes_overflow_beyond_i64(
        excess in (i64::MAX as u64 + 2)..=u64::MAX,
        base in prop::sample::select(vec![2u32, 16]),
    ) {
        let max = numsys::codec::max_digit(base);
        let sign_digit = NumberSystem { base, scheme: SignScheme::SignDigit };
        let ones = NumberSystem { base, scheme: SignScheme::OnesComplement };
        let twos = NumberSystem { base, scheme: SignScheme::TwosComplement };

        // Positive magnitudes are stored plainly under all three schemes
        for sys in [sign_digit, ones, twos] {
            let text = format!("0{}", radix_text(excess, base));
            prop_assert_eq!(parse(&text, sys), Err(NumsysError::MagnitudeOverflow));
        }

        let text = format!("{max}{}", radix_text(excess, base));
        prop_assert_eq!(parse(&text, sign_digit), Err(NumsysError::MagnitudeOverflow));

        let text = format!("{max}{}", complement_digits(&radix_text(excess, base), base));
        prop_assert_eq!(parse(&text, ones), Err(NumsysError::MagnitudeOverflow));

        let text = format!("{max}{}", complement_digits(&radix_text(excess - 1, base), base));
        prop_assert_eq!(parse(&text, twos), Err(NumsysError::MagnitudeOverflow));
    }

    #[test]
    fn unary_roundtrip_non_negative(value in 0i64..2000, scheme in scheme()) {
        let sys = NumberSystem { base: 1, scheme };
        let text = format(value, sys).unwrap();
        prop_assert_eq!(text.len() as i64, value);
        prop_assert_eq!(parse(&text, sys), Ok(value));
    }
}

#[test]
fn test_invalid_base_rejected_everywhere() {
    for base in [0, 37] {
        for scheme in SignScheme::ALL {
            let bad = NumberSystem { base, scheme };
            assert_eq!(parse("1", bad), Err(NumsysError::InvalidBase { base }));
            assert_eq!(format(1, bad), Err(NumsysError::InvalidBase { base }));
            assert_eq!(convert("1", bad, NumberSystem::DECIMAL), Err(NumsysError::InvalidBase { base }));
            assert_eq!(convert("1", NumberSystem::DECIMAL, bad), Err(NumsysError::InvalidBase { base }));
        }
    }
}

#[test]
fn test_unrecognized_scheme_code_rejected() {
    for code in [0u8, 3, 5, 12, 15, 16] {
        let err = NumberSystem::from_raw(10, code).unwrap_err();
        assert_eq!(err, NumsysError::InvalidScheme { code });
        assert_eq!(err.kind(), numsys::ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_documented_examples() {
    let twos = NumberSystem { base: 2, scheme: SignScheme::TwosComplement };
    let sign_digit = NumberSystem { base: 10, scheme: SignScheme::SignDigit };
    let unary = NumberSystem { base: 1, scheme: SignScheme::SignedMarker };

    assert_eq!(parse("ff", NumberSystem::HEXADECIMAL), parse("FF", NumberSystem::HEXADECIMAL));
    assert_eq!(parse("1_0 10", NumberSystem::BINARY), parse("1010", NumberSystem::BINARY));
    assert_eq!(parse("1111", twos), Ok(-1));
    assert_eq!(convert("FF", NumberSystem::HEXADECIMAL, NumberSystem::BINARY).unwrap(), "11111111");
    assert!(format(-5, sign_digit).unwrap().starts_with('9'));
    assert!(format(5, sign_digit).unwrap().starts_with('0'));
    assert_eq!(format(5, unary).unwrap(), "00000");
    assert_eq!(format(0, unary).unwrap(), "");
}
