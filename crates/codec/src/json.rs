//! ABI encoding of JSON arrays and objects, one word per element.
//!
//! Element types are inferred from the JSON value when encoding. Decoding needs a descriptor of
//! the same shape as the original value whose leaves are type tags, e.g. `["uint256", "bool"]` or
//! `{"amount": "uint256", "to": "address"}`.

use crate::{
    abi::{self, AbiType, WORD_HEX_LEN},
    error::{CodecError, Result},
};
use serde_json::{Map, Value};
use std::fmt::{self, Display, Formatter};

/// The type inferred for a JSON value by [`get_type`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InferredType {
    /// A scalar supported by [`abi::encode_parameter`].
    Param(AbiType),
    /// A nested array. Rendered as `bytes[]`, which has no [`AbiType`], so it never encodes.
    Array,
}

impl Display for InferredType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(ty) => Display::fmt(ty, f),
            Self::Array => f.write_str("bytes[]"),
        }
    }
}

impl TryFrom<InferredType> for AbiType {
    type Error = CodecError;

    fn try_from(ty: InferredType) -> Result<Self> {
        match ty {
            InferredType::Param(ty) => Ok(ty),
            InferredType::Array => Err(CodecError::UnsupportedType(ty.to_string())),
        }
    }
}

/// Infers the ABI type of a JSON value.
///
/// Every string, hex-formatted or not, is `string`, so `bytes32` is never inferred. Null and
/// nested objects are rejected.
pub fn get_type(value: &Value) -> Result<InferredType> {
    let ty = match value {
        Value::Number(_) => InferredType::Param(AbiType::Uint256),
        Value::String(_) => InferredType::Param(AbiType::String),
        Value::Bool(_) => InferredType::Param(AbiType::Bool),
        Value::Array(_) => InferredType::Array,
        Value::Null | Value::Object(_) => {
            return Err(CodecError::UnsupportedType(value.to_string()));
        }
    };
    Ok(ty)
}

/// Returns the number of hex digits a value of `ty` occupies in an encoded sequence.
pub const fn get_item_length(_ty: AbiType) -> usize {
    WORD_HEX_LEN
}

/// Encodes every element of an array, or every value of an object in insertion order, and
/// concatenates the words.
///
/// # Example
///
/// ```
/// use evm_codec::json;
/// use serde_json::json;
///
/// let encoded = json::encode_json(&json!({ "amount": 1, "ok": true }))?;
/// assert_eq!(encoded.len(), 128);
/// assert!(encoded.ends_with("01"));
/// # Ok::<_, evm_codec::CodecError>(())
/// ```
pub fn encode_json(value: &Value) -> Result<String> {
    let values: Vec<&Value> = match value {
        Value::Array(values) => values.iter().collect(),
        Value::Object(map) => map.values().collect(),
        other => {
            return Err(CodecError::UnsupportedType(format!("{other} is not an array or object")));
        }
    };

    let mut encoded = String::with_capacity(values.len() * WORD_HEX_LEN);
    for value in values {
        encoded.push_str(&encode_element(value)?);
    }
    trace!(target: "codec::json", words = encoded.len() / WORD_HEX_LEN, "encoded json");
    Ok(encoded)
}

/// Decodes words produced by [`encode_json`] using a descriptor of type tags.
///
/// An optional `0x` prefix on `encoded` is ignored, as is data past the last descriptor entry.
pub fn decode_json(encoded: &str, descriptor: &Value) -> Result<Value> {
    let mut reader = WordReader::new(encoded.strip_prefix("0x").unwrap_or(encoded));
    let decoded = match descriptor {
        Value::Array(tags) => {
            Value::Array(tags.iter().map(|tag| reader.decode_next(tag)).collect::<Result<_>>()?)
        }
        Value::Object(tags) => {
            let mut map = Map::with_capacity(tags.len());
            for (key, tag) in tags {
                map.insert(key.clone(), reader.decode_next(tag)?);
            }
            Value::Object(map)
        }
        other => {
            return Err(CodecError::UnsupportedType(format!(
                "{other} is not an array or object descriptor"
            )));
        }
    };
    trace!(target: "codec::json", consumed = reader.offset, "decoded json");
    Ok(decoded)
}

fn encode_element(value: &Value) -> Result<String> {
    let ty = AbiType::try_from(get_type(value)?)?;
    abi::encode_parameter(ty, value)
}

/// Slices consecutive items out of encoded data.
struct WordReader<'a> {
    data: &'a str,
    offset: usize,
}

impl<'a> WordReader<'a> {
    fn new(data: &'a str) -> Self {
        Self { data, offset: 0 }
    }

    fn decode_next(&mut self, tag: &Value) -> Result<Value> {
        let ty: AbiType = tag
            .as_str()
            .ok_or_else(|| CodecError::UnsupportedType(tag.to_string()))?
            .parse()?;
        let end = self.offset + get_item_length(ty);
        let word = self.data.get(self.offset..end).ok_or_else(|| {
            CodecError::Length(format!(
                "{ty} at digit {} needs {} digits, {} remain",
                self.offset,
                get_item_length(ty),
                self.data.len().saturating_sub(self.offset)
            ))
        })?;
        self.offset = end;
        abi::decode_parameter(ty, word)
    }
}
