//! Fixed-width ABI parameter encoding.
//!
//! Every scalar is encoded into one 32-byte word, rendered as 64 lowercase hex digits without a
//! `0x` prefix. `string` and `bytes` values longer than one word are emitted unpadded and are
//! not truncated.

use crate::{
    error::{CodecError, Result},
    hex::{self, left_pad},
};
use alloy_primitives::{U256, hex as hexenc, keccak256};
use serde_json::Value;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Hex digits in one ABI word.
pub const WORD_HEX_LEN: usize = 64;

/// Hex digits in an address, without the `0x` prefix.
pub const ADDRESS_HEX_LEN: usize = 40;

/// The encoding of `false`.
pub const FALSE_WORD: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// The encoding of `true`.
pub const TRUE_WORD: &str = "0000000000000000000000000000000000000000000000000000000000000001";

/// The parameter types supported by [`encode_parameter`] and [`decode_parameter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbiType {
    Uint256,
    String,
    Bool,
    Address,
    Bytes32,
    Bytes,
}

impl AbiType {
    /// All supported types.
    pub const ALL: [Self; 6] =
        [Self::Uint256, Self::String, Self::Bool, Self::Address, Self::Bytes32, Self::Bytes];

    /// Returns the Solidity name of the type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uint256 => "uint256",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Address => "address",
            Self::Bytes32 => "bytes32",
            Self::Bytes => "bytes",
        }
    }
}

impl Display for AbiType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AbiType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| CodecError::UnsupportedType(s.to_string()))
    }
}

/// Encodes `value` as a single ABI word of type `ty`.
///
/// # Example
///
/// ```
/// use evm_codec::abi::{self, AbiType};
/// use serde_json::json;
///
/// assert_eq!(
///     abi::encode_parameter(AbiType::Uint256, &json!(100))?,
///     "0000000000000000000000000000000000000000000000000000000000000064"
/// );
/// assert_eq!(
///     abi::encode_parameter(
///         AbiType::Address,
///         &json!("0x32Be343B94f860124dC4fEe278FDCBD38C102D88")
///     )?,
///     "00000000000000000000000032be343b94f860124dc4fee278fdcbd38c102d88"
/// );
/// # Ok::<_, evm_codec::CodecError>(())
/// ```
pub fn encode_parameter(ty: AbiType, value: &Value) -> Result<String> {
    let word = match ty {
        AbiType::Uint256 => {
            let n = hex::to_big_int(value)?.into_unsigned()?;
            left_pad(&format!("{n:x}"), WORD_HEX_LEN)
        }
        AbiType::String => left_pad(&hexenc::encode(expect_str(ty, value)?), WORD_HEX_LEN),
        AbiType::Bool => match value {
            Value::Bool(true) => TRUE_WORD.to_string(),
            Value::Bool(false) => FALSE_WORD.to_string(),
            other => return Err(mismatch(ty, other)),
        },
        AbiType::Address => {
            let address = expect_str(ty, value)?;
            if address.len() != ADDRESS_HEX_LEN + 2 || !hex::is_hex(address) {
                return Err(CodecError::InvalidAddress(address.to_string()));
            }
            left_pad(&address[2..].to_lowercase(), WORD_HEX_LEN)
        }
        AbiType::Bytes32 => {
            let word = expect_str(ty, value)?;
            if word.len() != WORD_HEX_LEN {
                return Err(CodecError::Length(format!(
                    "bytes32 needs {WORD_HEX_LEN} hex digits, got {}",
                    word.len()
                )));
            }
            if !hex::is_hex_digits(word) {
                return Err(CodecError::Format(word.to_string()));
            }
            word.to_string()
        }
        AbiType::Bytes => {
            let data = expect_str(ty, value)?;
            let digits = data.strip_prefix("0x").unwrap_or(data);
            if !hex::is_hex_digits(digits) {
                return Err(CodecError::Format(data.to_string()));
            }
            left_pad(&digits.to_lowercase(), WORD_HEX_LEN)
        }
    };
    if word.len() > WORD_HEX_LEN {
        debug!(target: "codec::abi", %ty, len = word.len(), "value overflows a single word");
    }
    Ok(word)
}

/// Decodes a word produced by [`encode_parameter`] back into a JSON value.
///
/// `uint256` decodes to a number, `bool` to a boolean, everything else to a string. Addresses
/// come back lowercase.
pub fn decode_parameter(ty: AbiType, word: &str) -> Result<Value> {
    if !hex::is_hex_digits(word) {
        return Err(CodecError::Format(word.to_string()));
    }

    let value = match ty {
        AbiType::Uint256 => {
            if word.len() > WORD_HEX_LEN {
                return Err(CodecError::Length(format!(
                    "uint256 needs at most {WORD_HEX_LEN} hex digits, got {}",
                    word.len()
                )));
            }
            let n = U256::from_str_radix(word, 16)
                .map_err(|_| CodecError::Conversion(word.to_string()))?;
            serde_json::from_str(&n.to_string())
                .map_err(|_| CodecError::Conversion(n.to_string()))?
        }
        AbiType::String => {
            let bytes = hex::decode_digits(word)?;
            let text = String::from_utf8(bytes).map_err(|e| CodecError::Format(e.to_string()))?;
            Value::String(text.trim_matches('\0').to_string())
        }
        AbiType::Bool => Value::Bool(word == TRUE_WORD),
        AbiType::Address => {
            let start = word.len().checked_sub(ADDRESS_HEX_LEN).ok_or_else(|| {
                CodecError::Length(format!(
                    "address needs {ADDRESS_HEX_LEN} hex digits, got {}",
                    word.len()
                ))
            })?;
            Value::String(format!("0x{}", word[start..].to_lowercase()))
        }
        AbiType::Bytes32 => {
            if word.len() != WORD_HEX_LEN {
                return Err(CodecError::Length(format!(
                    "bytes32 needs {WORD_HEX_LEN} hex digits, got {}",
                    word.len()
                )));
            }
            Value::String(word.to_string())
        }
        AbiType::Bytes => Value::String(word.to_string()),
    };
    Ok(value)
}

/// Returns the 4-byte selector of a function signature: the first 4 bytes of
/// `keccak256(signature)`.
///
/// # Example
///
/// ```
/// use evm_codec::abi;
///
/// assert_eq!(abi::function_selector("transfer(address,uint256)"), "0xa9059cbb");
/// ```
pub fn function_selector(signature: &str) -> String {
    let hash = keccak256(signature.as_bytes());
    hexenc::encode_prefixed(&hash[..4])
}

fn expect_str(ty: AbiType, value: &Value) -> Result<&str> {
    value.as_str().ok_or_else(|| mismatch(ty, value))
}

fn mismatch(ty: AbiType, value: &Value) -> CodecError {
    CodecError::Conversion(format!("{value} to {ty}"))
}
