//! # evmc
//!
//! Shared plumbing for the `evmc` binary: error reporting, stdin handling and logging setup.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod errors;
pub mod handler;
pub mod stdin;
pub mod utils;
