use clap::{Parser, Subcommand};
use evm_codec::abi::AbiType;

/// Encode and decode EVM values from the command line.
#[derive(Parser)]
#[command(name = "evmc", version, next_display_order = None)]
pub struct Evmc {
    #[command(subcommand)]
    pub cmd: EvmcSubcommand,
}

#[derive(Subcommand)]
pub enum EvmcSubcommand {
    /// Convert UTF-8 text to hex.
    #[command(visible_aliases = &["--from-utf8", "fu"])]
    FromUtf8 {
        /// The text to convert.
        text: Option<String>,
    },

    /// Convert hex data to UTF-8 text.
    #[command(visible_aliases = &["--to-utf8", "tu"])]
    ToUtf8 {
        /// The hex data to convert.
        hexdata: Option<String>,
    },

    /// Convert a decimal or hex number to minimal hex.
    #[command(visible_aliases = &["--to-hex", "th"])]
    ToHex {
        /// The number to convert.
        value: Option<String>,
    },

    /// Convert hex to a decimal number.
    #[command(visible_aliases = &["--to-dec", "td"])]
    ToDec {
        /// The hex value to convert.
        value: Option<String>,
    },

    /// Left-pad hex with zeros.
    #[command(visible_aliases = &["--pad-hex", "ph"])]
    PadHex {
        /// The hex value to pad.
        value: Option<String>,

        /// The number of hex digits to pad to.
        #[arg(long, short, default_value_t = 64)]
        len: usize,
    },

    /// Strip the 0x prefix from hex.
    #[command(visible_aliases = &["--strip-hex", "sh"])]
    StripHex {
        /// The hex value.
        value: Option<String>,
    },

    /// Check whether a value is 0x-prefixed hex.
    IsHex {
        /// The value to check.
        value: Option<String>,
    },

    /// RLP encode an integer, a string or a list.
    ///
    /// The input is parsed as JSON if possible, otherwise it is taken as a string.
    #[command(visible_aliases = &["--to-rlp"])]
    ToRlp {
        /// The value to encode, e.g. `123`, `Hi` or `[1, "dog"]`.
        value: Option<String>,
    },

    /// Decode RLP hex data.
    #[command(visible_aliases = &["--from-rlp"])]
    FromRlp {
        /// The RLP hex data.
        value: Option<String>,
    },

    /// ABI encode a single value into one 32-byte word.
    #[command(visible_aliases = &["ae"])]
    AbiEncode {
        /// The parameter type: uint256, string, bool, address, bytes32 or bytes.
        r#type: AbiType,

        /// The value to encode.
        value: Option<String>,
    },

    /// Decode a single ABI word.
    #[command(visible_aliases = &["ad"])]
    AbiDecode {
        /// The parameter type: uint256, string, bool, address, bytes32 or bytes.
        r#type: AbiType,

        /// The word to decode.
        word: Option<String>,
    },

    /// Get the selector for a function signature.
    #[command(visible_aliases = &["si"])]
    Sig {
        /// The function signature, e.g. transfer(address,uint256).
        sig: Option<String>,
    },

    /// ABI encode every element of a JSON array or object.
    #[command(visible_aliases = &["je"])]
    JsonEncode {
        /// The JSON array or object.
        value: Option<String>,
    },

    /// Decode concatenated ABI words using a JSON type descriptor.
    #[command(visible_aliases = &["jd"])]
    JsonDecode {
        /// The encoded words.
        encoded: Option<String>,

        /// The type descriptor, e.g. `["uint256","bool"]` or `{"to":"address"}`.
        descriptor: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Evmc::command().debug_assert();
    }

    #[test]
    fn parse_abi_type() {
        let args = Evmc::parse_from(["evmc", "abi-encode", "address", "0x00"]);
        match args.cmd {
            EvmcSubcommand::AbiEncode { r#type, value } => {
                assert_eq!(r#type, AbiType::Address);
                assert_eq!(value.as_deref(), Some("0x00"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn reject_unknown_abi_type() {
        assert!(Evmc::try_parse_from(["evmc", "abi-encode", "uint8", "1"]).is_err());
        assert!(Evmc::try_parse_from(["evmc", "abi-decode", "bytes[]", "00"]).is_err());
    }

    #[test]
    fn parse_pad_hex() {
        let args = Evmc::parse_from(["evmc", "pad-hex", "0x1", "--len", "8"]);
        match args.cmd {
            EvmcSubcommand::PadHex { value, len } => {
                assert_eq!(value.as_deref(), Some("0x1"));
                assert_eq!(len, 8);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn parse_sig_alias() {
        let args = Evmc::parse_from(["evmc", "si", "transfer(address,uint256)"]);
        match args.cmd {
            EvmcSubcommand::Sig { sig } => {
                assert_eq!(sig.as_deref(), Some("transfer(address,uint256)"));
            }
            _ => unreachable!(),
        }
    }
}
