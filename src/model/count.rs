use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde_with::DeserializeAs;

/// Reads a non-negative integer counter from a CSV cell.
///
/// Spreadsheet exports write counters of columns containing gaps as floats (`"1234.0"`),
/// so a decimal point followed only by zeros is accepted too. Signs and exponents are not.
/// An empty cell is only valid for optional counters.
pub struct Count;

impl<'de> DeserializeAs<'de, u64> for Count {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        deserializer
            .deserialize_str(CountVisitor)?
            .ok_or_else(|| de::Error::custom("missing count"))
    }
}

impl<'de> DeserializeAs<'de, Option<u64>> for Count {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        deserializer.deserialize_str(CountVisitor)
    }
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = Option<u64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer count")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let text = value.trim();
        if text.is_empty() {
            return Ok(None);
        }

        parse_count(text)
            .map(Some)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

fn parse_count(text: &str) -> Option<u64> {
    let (digits, fraction) = text.split_once('.').unwrap_or((text, ""));

    let plain = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    if digits.is_empty() || !plain(digits) || !fraction.bytes().all(|byte| byte == b'0') {
        return None;
    }

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_integer() {
        assert_eq!(parse_count("1234"), Some(1234));
    }

    #[test]
    fn parse_integral_float() {
        assert_eq!(parse_count("1234.0"), Some(1234));
    }

    #[test]
    fn reject_fractional_and_negative_counts() {
        assert_eq!(parse_count("12.5"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("-3.0"), None);
        assert_eq!(parse_count("NaN"), None);
        assert_eq!(parse_count("+3"), None);
        assert_eq!(parse_count(".0"), None);
        assert_eq!(parse_count("many"), None);
    }

    #[test]
    fn reject_counts_beyond_u64() {
        assert_eq!(parse_count("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_count("18446744073709551616"), None);
        assert_eq!(parse_count("18446744073709551616.0"), None);
    }

    #[test]
    fn reject_exponent_notation() {
        assert_eq!(parse_count("1e3"), None);
        assert_eq!(parse_count("1.0e3"), None);
        assert_eq!(parse_count("inf"), None);
    }
}
