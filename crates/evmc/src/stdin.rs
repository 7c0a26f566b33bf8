//! Utility functions for reading from [`stdin`](std::io::stdin).

use eyre::Result;
use std::{
    error::Error as StdError,
    io::{self, BufRead, Read},
    str::FromStr,
};

/// Unwraps the given `Option<T>` or [reads stdin into a String](read) and parses it as `T`.
pub fn unwrap<T>(value: Option<T>, read_line: bool) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match value {
        Some(value) => Ok(value),
        None => read(read_line)?.parse().map_err(Into::into),
    }
}

/// Shortcut for `(unwrap(a), unwrap(b))`.
pub fn unwrap2<A, B>(a: Option<A>, b: Option<B>) -> Result<(A, B)>
where
    A: FromStr,
    B: FromStr,
    A::Err: StdError + Send + Sync + 'static,
    B::Err: StdError + Send + Sync + 'static,
{
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        (a, b) => Ok((unwrap(a, true)?, unwrap(b, true)?)),
    }
}

/// Unwraps the given `Option<String>` or reads a single line from stdin, trimmed.
pub fn unwrap_line(value: Option<String>) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(read(true)?.trim().to_string()),
    }
}

/// Reads bytes from [`stdin`][io::stdin] into a String.
///
/// If `read_line` is true, stop at the first newline (the `0xA` byte).
pub fn read(read_line: bool) -> Result<String> {
    let mut stdin = io::stdin().lock();
    let mut buf = String::new();
    if read_line {
        stdin.read_line(&mut buf)?;
        // remove the trailing newline
        if buf.ends_with('\n') {
            buf.pop();
        }
    } else {
        stdin.read_to_string(&mut buf)?;
    }
    Ok(buf)
}
