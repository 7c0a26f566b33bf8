//! Conversions between text, integers and `0x`-prefixed hex strings.
//!
//! Every hex string produced here is lowercase and carries a single `0x` prefix.

use crate::error::{CodecError, Result};
use alloy_primitives::{Sign, U256};
use serde_json::Value;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A sign-magnitude integer with a magnitude of at most 256 bits.
///
/// The codecs only ever emit non-negative integers, but inputs are accepted with a sign so that
/// negative values can be rejected with [`CodecError::Range`] where they are used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BigInt {
    /// The sign of the value. Zero is always treated as positive.
    pub sign: Sign,
    /// The absolute value.
    pub abs: U256,
}

impl BigInt {
    /// Creates a non-negative integer.
    pub const fn positive(abs: U256) -> Self {
        Self { sign: Sign::Positive, abs }
    }

    /// Returns `true` if the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative && !self.abs.is_zero()
    }

    /// Returns the magnitude of a non-negative value.
    pub fn into_unsigned(self) -> Result<U256> {
        if self.is_negative() {
            return Err(CodecError::Range(self.to_string()));
        }
        Ok(self.abs)
    }
}

impl From<U256> for BigInt {
    fn from(abs: U256) -> Self {
        Self::positive(abs)
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        Self::positive(U256::from(n))
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
        Self { sign, abs: U256::from(n.unsigned_abs()) }
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        Display::fmt(&self.abs, f)
    }
}

impl FromStr for BigInt {
    type Err = CodecError;

    /// Parses a decimal or `0x`-prefixed hexadecimal integer with an optional sign.
    fn from_str(s: &str) -> Result<Self> {
        let err = || CodecError::Conversion(format!("{s:?}"));

        let trimmed = s.trim();
        let (sign, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &trimmed[1..]),
            Some(b'+') => (Sign::Positive, &trimmed[1..]),
            _ => (Sign::Positive, trimmed),
        };
        let (digits, radix) = match unsigned.strip_prefix("0x") {
            Some(digits) => (digits, 16),
            None => (unsigned, 10),
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(err());
        }

        let abs = U256::from_str_radix(digits, radix as u64).map_err(|_| err())?;
        Ok(Self { sign, abs })
    }
}

/// Converts UTF-8 text to hex, two digits per byte.
///
/// # Example
///
/// ```
/// use evm_codec::hex;
///
/// assert_eq!(hex::string_to_hex("yo"), "0x796f");
/// assert_eq!(hex::string_to_hex(""), "0x");
/// ```
pub fn string_to_hex(text: &str) -> String {
    alloy_primitives::hex::encode_prefixed(text)
}

/// Converts `0x`-prefixed hex back to UTF-8 text.
///
/// # Example
///
/// ```
/// use evm_codec::hex;
///
/// assert_eq!(hex::hex_to_string("0x48656c6c6f")?, "Hello");
/// assert!(hex::hex_to_string("48656c6c6f").is_err());
/// # Ok::<_, evm_codec::CodecError>(())
/// ```
pub fn hex_to_string(hex: &str) -> Result<String> {
    let bytes = decode_digits(remove_prefix(hex)?)?;
    String::from_utf8(bytes).map_err(|e| CodecError::Format(format!("{hex}: {e}")))
}

/// Converts a JSON number to minimal hex, without any padding.
///
/// Anything other than a number fails with [`CodecError::Type`].
pub fn number_to_hex(value: &Value) -> Result<String> {
    let Value::Number(n) = value else {
        return Err(CodecError::Type(value.to_string()));
    };
    let n: BigInt = n.to_string().parse().map_err(|_| CodecError::Type(n.to_string()))?;
    Ok(format!("0x{:x}", n.into_unsigned()?))
}

/// Converts a JSON number or a numeric string to a [`BigInt`].
pub fn to_big_int(value: &Value) -> Result<BigInt> {
    match value {
        Value::Number(n) => n.to_string().parse(),
        Value::String(s) => s.parse(),
        other => Err(CodecError::Conversion(other.to_string())),
    }
}

/// Converts a JSON number or a numeric string to minimal hex.
pub fn big_int_to_hex(value: &Value) -> Result<String> {
    let n = to_big_int(value)?.into_unsigned()?;
    Ok(format!("0x{n:x}"))
}

/// Parses `0x`-prefixed hex into an unsigned integer.
///
/// # Example
///
/// ```
/// use alloy_primitives::U256;
/// use evm_codec::hex;
///
/// assert_eq!(hex::hex_to_big_int("0xff")?, U256::from(255));
/// # Ok::<_, evm_codec::CodecError>(())
/// ```
pub fn hex_to_big_int(hex: &str) -> Result<U256> {
    let digits = remove_prefix(hex)?;
    U256::from_str_radix(digits, 16).map_err(|_| CodecError::Conversion(hex.to_string()))
}

/// Returns `true` if `value` is `0x` followed by at least one hex digit, in either case.
pub fn is_hex(value: &str) -> bool {
    value.strip_prefix("0x").is_some_and(is_hex_digits)
}

/// Left-pads the digits of `hex` with zeros up to `target_digits`.
///
/// Values that already have `target_digits` or more digits are returned as is.
///
/// # Example
///
/// ```
/// use evm_codec::hex;
///
/// assert_eq!(hex::pad_hex("0x1f", 6)?, "0x00001f");
/// assert_eq!(hex::pad_hex("0x1234", 2)?, "0x1234");
/// # Ok::<_, evm_codec::CodecError>(())
/// ```
pub fn pad_hex(hex: &str, target_digits: usize) -> Result<String> {
    let digits = remove_prefix(hex)?;
    Ok(format!("0x{}", left_pad(digits, target_digits)))
}

/// Strips the `0x` prefix from valid hex.
pub fn remove_prefix(hex: &str) -> Result<&str> {
    if !is_hex(hex) {
        return Err(CodecError::Format(hex.to_string()));
    }
    Ok(&hex[2..])
}

/// Left-pads `digits` with `0` up to `width` characters. Never truncates.
pub fn left_pad(digits: &str, width: usize) -> String {
    format!("{digits:0>width$}")
}

/// Returns `true` if `digits` is non-empty and contains only hex digits.
pub(crate) fn is_hex_digits(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decodes bare hex digits into bytes.
pub(crate) fn decode_digits(digits: &str) -> Result<Vec<u8>> {
    alloy_primitives::hex::decode(digits).map_err(|e| CodecError::Format(format!("{digits}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn string_hex_conversions() {
        assert_eq!(string_to_hex("Hi"), "0x4869");
        assert_eq!(string_to_hex("你好"), "0xe4bda0e5a5bd");
        assert_eq!(hex_to_string("0xe4bda0e5a5bd").unwrap(), "你好");
        assert_eq!(hex_to_string("0x4869").unwrap(), "Hi");
    }

    #[test]
    fn hex_to_string_rejects_malformed() {
        assert!(matches!(hex_to_string("0x"), Err(CodecError::Format(_))));
        assert!(matches!(hex_to_string("4869"), Err(CodecError::Format(_))));
        assert!(matches!(hex_to_string("0x486"), Err(CodecError::Format(_))));
        assert!(matches!(hex_to_string("0xzz"), Err(CodecError::Format(_))));
        assert!(matches!(hex_to_string("0xff"), Err(CodecError::Format(_))));
    }

    #[test]
    fn number_to_hex_is_minimal() {
        assert_eq!(number_to_hex(&json!(0)).unwrap(), "0x0");
        assert_eq!(number_to_hex(&json!(15)).unwrap(), "0xf");
        assert_eq!(number_to_hex(&json!(256)).unwrap(), "0x100");
        assert_eq!(number_to_hex(&json!(u64::MAX)).unwrap(), "0xffffffffffffffff");
    }

    #[test]
    fn number_to_hex_requires_number() {
        assert!(matches!(number_to_hex(&json!("15")), Err(CodecError::Type(_))));
        assert!(matches!(number_to_hex(&json!(true)), Err(CodecError::Type(_))));
        assert!(matches!(number_to_hex(&json!(1.5)), Err(CodecError::Type(_))));
        assert!(matches!(number_to_hex(&json!(-1)), Err(CodecError::Range(_))));
    }

    #[test]
    fn to_big_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(to_big_int(&json!(42)).unwrap(), BigInt::from(42u64));
        assert_eq!(to_big_int(&json!("42")).unwrap(), BigInt::from(42u64));
        assert_eq!(to_big_int(&json!("0x2a")).unwrap(), BigInt::from(42u64));
        assert_eq!(to_big_int(&json!("-7")).unwrap(), BigInt::from(-7i64));
        assert_eq!(
            to_big_int(&json!(
                "115792089237316195423570985008687907853269984665640564039457584007913129639935"
            ))
            .unwrap(),
            BigInt::from(U256::MAX)
        );
    }

    #[test]
    fn to_big_int_rejects_other_kinds() {
        for value in [json!(true), json!(null), json!([1]), json!({"a": 1}), json!(""), json!("1a")]
        {
            assert!(matches!(to_big_int(&value), Err(CodecError::Conversion(_))), "{value}");
        }
        // one past U256::MAX
        let too_big =
            json!("115792089237316195423570985008687907853269984665640564039457584007913129639936");
        assert!(matches!(to_big_int(&too_big), Err(CodecError::Conversion(_))));
    }

    #[test]
    fn big_int_hex_conversions() {
        assert_eq!(big_int_to_hex(&json!("255")).unwrap(), "0xff");
        assert_eq!(big_int_to_hex(&json!(4096)).unwrap(), "0x1000");
        assert!(matches!(big_int_to_hex(&json!("-1")), Err(CodecError::Range(_))));
        assert_eq!(hex_to_big_int("0x0").unwrap(), U256::ZERO);
        assert_eq!(hex_to_big_int("0xDEADbeef").unwrap(), U256::from(0xdeadbeef_u64));
        assert!(matches!(hex_to_big_int("deadbeef"), Err(CodecError::Format(_))));
    }

    #[test]
    fn hex_validation() {
        assert!(is_hex("0x0"));
        assert!(is_hex("0xAbCdEf"));
        assert!(!is_hex("0x"));
        assert!(!is_hex("abcd"));
        assert!(!is_hex("0X12"));
        assert!(!is_hex("0x12g4"));
    }

    #[test]
    fn prefix_and_padding() {
        assert_eq!(remove_prefix("0xabc").unwrap(), "abc");
        assert!(matches!(remove_prefix("abc"), Err(CodecError::Format(_))));
        assert_eq!(pad_hex("0x1", 4).unwrap(), "0x0001");
        assert!(matches!(pad_hex("1", 4), Err(CodecError::Format(_))));
        assert_eq!(left_pad("ab", 4), "00ab");
        assert_eq!(left_pad("abcdef", 4), "abcdef");
    }

    proptest! {
        #[test]
        fn printable_ascii_round_trips(s in "[ -~]*") {
            let hex = string_to_hex(&s);
            prop_assert!(hex.starts_with("0x"));
            prop_assert_eq!(hex.len(), 2 + 2 * s.len());
            if !s.is_empty() {
                prop_assert_eq!(hex_to_string(&hex).unwrap(), s);
            }
        }

        #[test]
        fn big_int_hex_round_trips(n in any::<u128>()) {
            let hex = big_int_to_hex(&Value::String(n.to_string())).unwrap();
            prop_assert_eq!(hex_to_big_int(&hex).unwrap(), U256::from(n));
        }
    }
}
