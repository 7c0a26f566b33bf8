#[macro_use]
extern crate tracing;

use clap::Parser;
use evm_codec::{abi, hex, json, rlp};
use evmc::{handler, stdin, utils};
use eyre::{Result, WrapErr};
use serde_json::Value;

pub mod args;

use args::{Evmc, EvmcSubcommand};

fn main() -> Result<()> {
    handler::install();
    utils::subscriber();
    let args = Evmc::parse();
    run(args)
}

fn run(args: Evmc) -> Result<()> {
    match args.cmd {
        // Hex conversions
        EvmcSubcommand::FromUtf8 { text } => {
            let value = stdin::unwrap(text, false)?;
            println!("{}", hex::string_to_hex(&value));
        }
        EvmcSubcommand::ToUtf8 { hexdata } => {
            let value = stdin::unwrap_line(hexdata)?;
            println!("{}", hex::hex_to_string(&value)?);
        }
        EvmcSubcommand::ToHex { value } => {
            let value = stdin::unwrap_line(value)?;
            println!("{}", hex::big_int_to_hex(&Value::String(value))?);
        }
        EvmcSubcommand::ToDec { value } => {
            let value = stdin::unwrap_line(value)?;
            println!("{}", hex::hex_to_big_int(&value)?);
        }
        EvmcSubcommand::PadHex { value, len } => {
            let value = stdin::unwrap_line(value)?;
            println!("{}", hex::pad_hex(&value, len)?);
        }
        EvmcSubcommand::StripHex { value } => {
            let value = stdin::unwrap_line(value)?;
            println!("{}", hex::remove_prefix(&value)?);
        }
        EvmcSubcommand::IsHex { value } => {
            let value = stdin::unwrap_line(value)?;
            println!("{}", hex::is_hex(&value));
        }

        // RLP
        EvmcSubcommand::ToRlp { value } => {
            let value = stdin::unwrap_line(value)?;
            let value = utils::parse_json_or_string(&value);
            debug!(%value, "rlp encoding");
            println!("{}", rlp::encode_value(&value).wrap_err("could not RLP encode value")?);
        }
        EvmcSubcommand::FromRlp { value } => {
            let value = stdin::unwrap_line(value)?;
            println!("{}", rlp::decode(&value).wrap_err("could not decode RLP data")?);
        }

        // ABI
        EvmcSubcommand::AbiEncode { r#type, value } => {
            let value = stdin::unwrap_line(value)?;
            let value = utils::coerce_abi_arg(r#type, &value);
            println!("{}", abi::encode_parameter(r#type, &value)?);
        }
        EvmcSubcommand::AbiDecode { r#type, word } => {
            let word = stdin::unwrap_line(word)?;
            let word = word.strip_prefix("0x").unwrap_or(&word);
            match abi::decode_parameter(r#type, word)? {
                Value::String(s) => println!("{s}"),
                other => println!("{other}"),
            }
        }
        EvmcSubcommand::Sig { sig } => {
            let sig = stdin::unwrap_line(sig)?;
            println!("{}", abi::function_selector(&sig));
        }

        // JSON
        EvmcSubcommand::JsonEncode { value } => {
            let value = stdin::unwrap(value, false)?;
            let value: Value = serde_json::from_str(&value).wrap_err("invalid JSON value")?;
            println!("{}", json::encode_json(&value)?);
        }
        EvmcSubcommand::JsonDecode { encoded, descriptor } => {
            let (encoded, descriptor) = stdin::unwrap2(encoded, descriptor)?;
            let descriptor: Value =
                serde_json::from_str::<Value>(&descriptor).wrap_err("invalid JSON descriptor")?;
            println!("{}", json::decode_json(encoded.trim(), &descriptor)?);
        }
    }
    Ok(())
}
