//! Error and panic reporting for the `evmc` binary.

use crate::errors::dedup_chain;
use eyre::EyreHandler;
use itertools::Itertools;
use std::{
    error::Error,
    fmt::{self, Write},
};

/// Environment variable that switches error reports to the verbose `color-eyre` format.
pub const DEBUG_ENV: &str = "EVMC_DEBUG";

/// Appended to every panic report.
const PANIC_SECTION: &str = concat!(
    "evmc v",
    env!("CARGO_PKG_VERSION"),
    " panicked. Please open an issue at ",
    env!("CARGO_PKG_REPOSITORY"),
    "/issues with the command that triggered it."
);

/// An [`eyre`] handler that renders codec failures as a short cause list.
///
/// With a verbose handler attached, `Debug` output is delegated to it instead.
#[derive(Default)]
pub struct Handler {
    verbose: Option<Box<dyn EyreHandler>>,
}

impl Handler {
    /// Creates a handler that only prints the cause list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handler that delegates `Debug` reports to `verbose` when it is set.
    pub fn with_verbose(verbose: Option<Box<dyn EyreHandler>>) -> Self {
        Self { verbose }
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", dedup_chain(error).iter().format("; "))
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verbose {
            Some(verbose) => verbose.debug(error, f),
            None if f.alternate() => fmt::Debug::fmt(error, f),
            None => write_report(f, &dedup_chain(error)),
        }
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(verbose) = &mut self.verbose {
            verbose.track_caller(location);
        }
    }
}

/// Writes the top-level error followed by a numbered list of its causes.
fn write_report<W: Write>(w: &mut W, chain: &[String]) -> fmt::Result {
    let Some((error, causes)) = chain.split_first() else { return Ok(()) };
    w.write_str(error)?;
    if causes.is_empty() {
        return Ok(());
    }
    w.write_str("\n\nCaused by:")?;
    for (i, cause) in causes.iter().enumerate() {
        write!(w, "\n  {i}: {cause}")?;
    }
    Ok(())
}

/// Installs the [`eyre`] and [`panic`](mod@std::panic) hooks as the global ones.
///
/// Errors print the short cause list unless [`DEBUG_ENV`] is set. Panics always get the full
/// `color-eyre` report with a pointer to the issue tracker.
pub fn install() {
    if std::env::var_os("RUST_BACKTRACE").is_none() {
        unsafe {
            std::env::set_var("RUST_BACKTRACE", "1");
        }
    }

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(PANIC_SECTION)
        .display_env_section(false)
        .into_hooks();
    panic_hook.install();

    let eyre_hook = eyre_hook.into_eyre_hook();
    let verbose = std::env::var_os(DEBUG_ENV).is_some();
    let installed = eyre::set_hook(Box::new(move |e| {
        Box::new(Handler::with_verbose(verbose.then(|| eyre_hook(e))))
    }));
    if let Err(e) = installed {
        debug!("eyre hook already installed: {e}");
    }
}
