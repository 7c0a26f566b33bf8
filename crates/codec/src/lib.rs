//! # evm-codec
//!
//! Canonical text encodings for EVM primitive values:
//!
//! - [`hex`]: text, integer and hex string conversions.
//! - [`rlp`]: a length-prefixed hex serialization of integers, strings and lists. Not
//!   interoperable with canonical RLP, see the module docs.
//! - [`abi`]: fixed 32-byte ABI words for single scalars, and function selectors.
//! - [`json`]: ABI words for every element of a JSON array or object.
//!
//! All operations are pure functions.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod abi;
pub mod hex;
pub mod json;
pub mod rlp;

mod error;
pub use error::{CodecError, Result};
