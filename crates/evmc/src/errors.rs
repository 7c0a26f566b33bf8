//! Error chain formatting.

use eyre::Chain;
use std::error::Error;

mod private {
    use super::*;

    pub trait ErrorChain {
        fn chain(&self) -> Chain<'_>;
    }

    impl ErrorChain for dyn Error + 'static {
        fn chain(&self) -> Chain<'_> {
            Chain::new(self)
        }
    }

    impl ErrorChain for eyre::Report {
        fn chain(&self) -> Chain<'_> {
            self.chain()
        }
    }
}

/// Displays a chain of errors in a single line.
pub fn display_chain<E: private::ErrorChain + ?Sized>(error: &E) -> String {
    dedup_chain(error).join("; ")
}

/// Collects the messages of an error chain, dropping causes already quoted by their parent.
pub fn dedup_chain<E: private::ErrorChain + ?Sized>(error: &E) -> Vec<String> {
    let mut causes: Vec<String> =
        error.chain().map(|cause| cause.to_string().trim().to_string()).collect();
    // `msg1: msg2; msg2` -> `msg1: msg2`
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::WrapErr;
    use evm_codec::{CodecError, hex};

    #[test]
    fn drops_quoted_causes() {
        let err = hex::hex_to_string("zz").unwrap_err();
        let report = Err::<(), _>(err.clone())
            .wrap_err_with(|| format!("bad input: {err}"))
            .unwrap_err();
        assert_eq!(report.chain().count(), 2);
        assert_eq!(display_chain(&report), "bad input: invalid hex format: zz");
    }

    #[test]
    fn keeps_distinct_causes() {
        let err = Err::<(), _>(CodecError::UnsupportedFormat(0x80))
            .wrap_err("from-rlp failed")
            .unwrap_err();
        assert_eq!(dedup_chain(&err), ["from-rlp failed", "unsupported RLP prefix byte 0x80"]);
    }
}
