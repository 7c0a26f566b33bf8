//! Length-prefixed hex serialization of integers, strings and lists.
//!
//! This is NOT interoperable with canonical Ethereum RLP. Values up to `0x7f` encode as a single
//! byte, like RLP, but long forms drop the `0x80`/`0xc0` offsets and the length-of-length byte:
//!
//! - integers above `0x7f` are their unpadded hex digits,
//! - strings are the unpadded hex byte count followed by the bytes,
//! - lists are the unpadded hex byte count of the concatenated element encodings, followed by
//!   those encodings.
//!
//! [`decode`] does not invert the long forms either. A leading byte up to `0x7f` makes the whole
//! input decode as UTF-8 text, and a leading byte from `0xc0` reads `(length, payload)` pairs.

use crate::{
    error::{CodecError, Result},
    hex::{self, BigInt},
};
use alloy_primitives::{U256, hex as hexenc};
use serde_json::Value;
use std::fmt::{Display, Formatter, Write};

/// Largest value that encodes as itself.
const SINGLE_BYTE_MAX: u8 = 0x7f;

/// Smallest leading byte that marks a list.
const LIST_OFFSET: u8 = 0xc0;

/// Arbitrary nested data accepted by [`encode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Number(BigInt),
    Text(String),
    List(Vec<Item>),
}

impl Item {
    /// Converts a JSON value into an [`Item`].
    ///
    /// Integers and arrays map directly. Strings are kept as text, never parsed as hex. Floats,
    /// booleans, nulls and objects are rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .to_string()
                .parse()
                .map(Self::Number)
                .map_err(|_| CodecError::UnsupportedType(format!("number {n}"))),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Array(values) => values.iter().map(Self::from_value).collect(),
            Value::Null => Err(CodecError::UnsupportedType("null".to_string())),
            Value::Bool(_) => Err(CodecError::UnsupportedType("boolean".to_string())),
            Value::Object(_) => Err(CodecError::UnsupportedType("object".to_string())),
        }
    }
}

impl FromIterator<Item> for Item {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

impl From<U256> for Item {
    fn from(n: U256) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for Item {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Result of [`decode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// The input decoded as UTF-8 text.
    Text(String),
    /// Raw `0x`-prefixed payloads of a list. Payloads are not decoded further.
    List(Vec<String>),
}

impl Display for Decoded {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}")?,
            Self::List(items) => {
                f.write_char('[')?;
                let mut iter = items.iter().peekable();
                while let Some(item) = iter.next() {
                    write!(f, "\"{item}\"")?;
                    if iter.peek().is_some() {
                        f.write_char(',')?;
                    }
                }
                f.write_char(']')?;
            }
        }
        Ok(())
    }
}

/// Encodes an [`Item`], dispatching on its kind.
///
/// # Example
///
/// ```
/// use evm_codec::rlp::{self, Item};
///
/// assert_eq!(rlp::encode(&Item::from(123u64))?, "0x7b");
/// assert_eq!(rlp::encode(&Item::from("Hi"))?, "0x24869");
/// # Ok::<_, evm_codec::CodecError>(())
/// ```
pub fn encode(item: &Item) -> Result<String> {
    let encoded = encode_raw(item)?;
    trace!(target: "codec::rlp", ?item, %encoded, "encoded item");
    Ok(format!("0x{encoded}"))
}

/// Encodes a JSON value. See [`Item::from_value`] for the accepted shapes.
pub fn encode_value(value: &Value) -> Result<String> {
    encode(&Item::from_value(value)?)
}

/// Encodes a non-negative integer.
///
/// Values up to `0x7f` become one byte. Anything larger becomes its unpadded hex digits.
pub fn encode_number(n: BigInt) -> Result<String> {
    encode_number_raw(n).map(|digits| format!("0x{digits}"))
}

/// Encodes a string as its byte count followed by its UTF-8 bytes.
///
/// A single byte up to `0x7f` encodes as itself.
pub fn encode_string(s: &str) -> String {
    format!("0x{}", encode_string_raw(s))
}

/// Encodes each element and prefixes the concatenation with its byte count.
pub fn encode_list(items: &[Item]) -> Result<String> {
    encode_list_raw(items).map(|digits| format!("0x{digits}"))
}

fn encode_raw(item: &Item) -> Result<String> {
    match item {
        Item::Number(n) => encode_number_raw(*n),
        Item::Text(s) => Ok(encode_string_raw(s)),
        Item::List(items) => encode_list_raw(items),
    }
}

fn encode_number_raw(n: BigInt) -> Result<String> {
    let n = n.into_unsigned()?;
    if n <= U256::from(SINGLE_BYTE_MAX) {
        return Ok(format!("{:02x}", n.to::<u8>()));
    }
    Ok(format!("{n:x}"))
}

fn encode_string_raw(s: &str) -> String {
    let bytes = s.as_bytes();
    match bytes {
        [b] if *b <= SINGLE_BYTE_MAX => format!("{b:02x}"),
        _ => format!("{:x}{}", bytes.len(), hexenc::encode(bytes)),
    }
}

fn encode_list_raw(items: &[Item]) -> Result<String> {
    let mut body = String::new();
    for item in items {
        body.push_str(&encode_raw(item)?);
    }
    Ok(format!("{:x}{body}", body.len() / 2))
}

/// Decodes `0x`-prefixed hex produced by this codec's conventions.
///
/// # Example
///
/// ```
/// use evm_codec::rlp::{self, Decoded};
///
/// assert_eq!(rlp::decode("0x4869")?, Decoded::Text("Hi".to_string()));
/// assert_eq!(
///     rlp::decode("0xc60261620163")?,
///     Decoded::List(vec!["0x6162".to_string(), "0x63".to_string()])
/// );
/// # Ok::<_, evm_codec::CodecError>(())
/// ```
pub fn decode(hex_text: &str) -> Result<Decoded> {
    if hex_text.strip_prefix("0x").unwrap_or(hex_text).len() < 2 {
        return Err(CodecError::Length(format!("{hex_text} is shorter than one byte")));
    }
    let digits = hex::remove_prefix(hex_text)?;

    let decoded = match read_byte(digits, 0)? {
        0..=SINGLE_BYTE_MAX => Decoded::Text(decode_string(digits)?),
        LIST_OFFSET..=u8::MAX => Decoded::List(decode_list(digits)?),
        prefix => return Err(CodecError::UnsupportedFormat(prefix)),
    };
    trace!(target: "codec::rlp", %hex_text, %decoded, "decoded");
    Ok(decoded)
}

/// Interprets all of `digits` as UTF-8 bytes. No length prefix is skipped.
fn decode_string(digits: &str) -> Result<String> {
    let bytes = hex::decode_digits(digits)?;
    String::from_utf8(bytes).map_err(|e| CodecError::Format(format!("0x{digits}: {e}")))
}

/// Skips the leading length field, then splits the rest into `(length, payload)` pairs.
fn decode_list(digits: &str) -> Result<Vec<String>> {
    let declared = read_byte(digits, 0)?;
    trace!(target: "codec::rlp", declared, "decoding list");

    let mut items = Vec::new();
    let mut offset = 2;
    while offset < digits.len() {
        let len = read_byte(digits, offset)? as usize;
        offset += 2;
        let end = offset + len * 2;
        let payload = digits.get(offset..end).ok_or_else(|| {
            CodecError::Length(format!(
                "list item at digit {offset} declares {len} bytes, {} digits remain",
                digits.len() - offset
            ))
        })?;
        items.push(format!("0x{payload}"));
        offset = end;
    }
    Ok(items)
}

/// Reads the byte whose first hex digit is at `offset`.
fn read_byte(digits: &str, offset: usize) -> Result<u8> {
    let pair = digits
        .get(offset..offset + 2)
        .ok_or_else(|| CodecError::Length(format!("truncated byte at digit {offset}")))?;
    u8::from_str_radix(pair, 16).map_err(|_| CodecError::Format(pair.to_string()))
}
