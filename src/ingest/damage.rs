/// Damage figure normalization.
///
/// The source table records damage as human-readable strings: a decimal
/// number followed by 'M' (millions of USD) or 'B' (billions of USD), or the
/// sentinel "Damages not recorded". This module converts those strings into
/// `DamageValue`s.
///
/// Amounts are parsed as `Decimal` and scaled exactly before conversion to
/// `f64`, so "1.42B" becomes exactly 1_420_000_000.0 rather than whatever
/// `1.42_f64 * 1e9` rounds to.
///
/// Anything that is neither the sentinel nor a well-formed suffixed number is
/// reported as `MalformedDamageString`; entries are never dropped.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::model::{
    BILLION_SUFFIX, DAMAGES_NOT_RECORDED, DamageValue, DatasetError, MILLION_SUFFIX,
};

const MILLION: i64 = 1_000_000;
const BILLION: i64 = 1_000_000_000;

/// Parses a single damage string.
///
/// `index` is the entry's position in its column and is only used to
/// identify the entry in a `MalformedDamageString` error.
pub fn parse_damage(index: usize, raw: &str) -> Result<DamageValue, DatasetError> {
    if raw == DAMAGES_NOT_RECORDED {
        return Ok(DamageValue::Unrecorded);
    }

    let malformed = || DatasetError::MalformedDamageString {
        index,
        value: raw.to_string(),
    };

    let (number, multiplier) = if let Some(number) = raw.strip_suffix(MILLION_SUFFIX) {
        (number, MILLION)
    } else if let Some(number) = raw.strip_suffix(BILLION_SUFFIX) {
        (number, BILLION)
    } else {
        return Err(malformed());
    };

    let amount: Decimal = number.parse().map_err(|_| malformed())?;
    if amount.is_sign_negative() {
        return Err(malformed());
    }

    let usd = amount
        .checked_mul(Decimal::from(multiplier))
        .and_then(|scaled| scaled.to_f64())
        .ok_or_else(malformed)?;

    Ok(DamageValue::Recorded(usd))
}

/// Converts a column of damage strings into `DamageValue`s.
///
/// The output has the same length and order as the input. The first
/// malformed entry aborts the conversion.
pub fn convert_damages<S: AsRef<str>>(damages: &[S]) -> Result<Vec<DamageValue>, DatasetError> {
    damages
        .iter()
        .enumerate()
        .map(|(idx, raw)| parse_damage(idx, raw.as_ref()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(raw: &str) -> f64 {
        match parse_damage(0, raw) {
            Ok(DamageValue::Recorded(usd)) => usd,
            other => panic!("'{}' should parse as a recorded amount, got {:?}", raw, other),
        }
    }

    // --- Suffix rule ---------------------------------------------------------

    #[test]
    fn test_million_suffix_scales_by_1e6() {
        assert_eq!(recorded("100M"), 1.0e8);
        assert_eq!(recorded("27.9M"), 27_900_000.0);
        assert_eq!(recorded("2M"), 2_000_000.0);
    }

    #[test]
    fn test_billion_suffix_scales_by_1e9() {
        assert_eq!(recorded("1.42B"), 1.42e9);
        assert_eq!(recorded("125B"), 1.25e11);
        assert_eq!(recorded("10B"), 1.0e10);
    }

    #[test]
    fn test_zero_amount_is_recorded_not_unrecorded() {
        assert_eq!(parse_damage(0, "0M").unwrap(), DamageValue::Recorded(0.0));
    }

    #[test]
    fn test_sentinel_yields_unrecorded() {
        assert_eq!(
            parse_damage(0, "Damages not recorded").unwrap(),
            DamageValue::Unrecorded
        );
    }

    // --- Malformed entries ---------------------------------------------------

    #[test]
    fn test_unknown_suffix_is_malformed() {
        let err = parse_damage(7, "12K").unwrap_err();
        match err {
            DatasetError::MalformedDamageString { index, value } => {
                assert_eq!(index, 7);
                assert_eq!(value, "12K");
            }
            other => panic!("expected MalformedDamageString, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_suffix_is_malformed() {
        assert!(parse_damage(0, "100").is_err());
        assert!(parse_damage(0, "").is_err());
    }

    #[test]
    fn test_lowercase_suffix_is_malformed() {
        assert!(parse_damage(0, "100m").is_err());
        assert!(parse_damage(0, "1.5b").is_err());
    }

    #[test]
    fn test_suffix_without_number_is_malformed() {
        assert!(parse_damage(0, "M").is_err());
        assert!(parse_damage(0, "abcB").is_err());
    }

    #[test]
    fn test_negative_amount_is_malformed() {
        assert!(parse_damage(0, "-5M").is_err());
    }

    #[test]
    fn test_sentinel_variants_are_malformed() {
        // Only the exact sentinel text is accepted.
        assert!(parse_damage(0, "damages not recorded").is_err());
        assert!(parse_damage(0, " Damages not recorded").is_err());
    }

    // --- Column conversion ---------------------------------------------------

    #[test]
    fn test_convert_damages_preserves_length_and_order() {
        let raw = ["Damages not recorded", "100M", "1.42B", "5M"];
        let converted = convert_damages(&raw).expect("all entries are well-formed");

        assert_eq!(
            converted,
            vec![
                DamageValue::Unrecorded,
                DamageValue::Recorded(1.0e8),
                DamageValue::Recorded(1.42e9),
                DamageValue::Recorded(5.0e6),
            ]
        );
    }

    #[test]
    fn test_convert_damages_reports_position_of_first_malformed_entry() {
        let raw = vec!["100M".to_string(), "oops".to_string(), "1B".to_string()];
        let err = convert_damages(&raw).unwrap_err();

        assert!(
            matches!(err, DatasetError::MalformedDamageString { index: 1, .. }),
            "should flag position 1, got {:?}",
            err
        );
    }

    #[test]
    fn test_convert_damages_empty_column() {
        let raw: [&str; 0] = [];
        assert!(convert_damages(&raw).unwrap().is_empty());
    }
}
