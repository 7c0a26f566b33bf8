use evm_codec::abi::AbiType;
use serde_json::Value;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes a tracing subscriber that writes to stderr, filtered by `RUST_LOG`.
pub fn subscriber() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

/// Parses a CLI argument as JSON, falling back to a plain JSON string.
///
/// This is how `to-rlp` tells `123`, `"123"` and `[1, "a"]` apart while still accepting bare
/// text such as `Hi`.
pub fn parse_json_or_string(input: &str) -> Value {
    serde_json::from_str(input).unwrap_or_else(|_| Value::String(input.to_string()))
}

/// Turns a raw CLI argument into the JSON value expected by `ty`.
///
/// Integers stay strings, since numeric strings are accepted for `uint256` and keep their
/// full precision. Anything that is not `true` or `false` is passed through for `bool` and
/// rejected by the encoder.
pub fn coerce_abi_arg(ty: AbiType, input: &str) -> Value {
    match (ty, input.trim()) {
        (AbiType::Bool, "true") => Value::Bool(true),
        (AbiType::Bool, "false") => Value::Bool(false),
        (AbiType::Uint256, s) => Value::String(s.to_string()),
        _ => Value::String(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_or_string() {
        assert_eq!(parse_json_or_string("123"), json!(123));
        assert_eq!(parse_json_or_string("\"123\""), json!("123"));
        assert_eq!(parse_json_or_string("[1, \"a\"]"), json!([1, "a"]));
        assert_eq!(parse_json_or_string("Hi"), json!("Hi"));
        assert_eq!(parse_json_or_string("0x7b"), json!("0x7b"));
    }

    #[test]
    fn coerces_by_type() {
        assert_eq!(coerce_abi_arg(AbiType::Bool, "true"), json!(true));
        assert_eq!(coerce_abi_arg(AbiType::Bool, " false "), json!(false));
        assert_eq!(coerce_abi_arg(AbiType::Bool, "1"), json!("1"));
        assert_eq!(coerce_abi_arg(AbiType::Uint256, " 42 "), json!("42"));
        assert_eq!(coerce_abi_arg(AbiType::String, " hi "), json!(" hi "));
    }
}
