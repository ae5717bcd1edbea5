//! Error types for the codec.
//!
//! Every failure is deterministic given identical inputs, so callers should
//! not retry without changing the input. The core never swallows a condition
//! or attempts a partial recovery (no best-effort decode of a malformed
//! stream).

use thiserror::Error;

/// Alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure conditions signalled by the codec.
#[derive(Debug, Error)]
pub enum Error {
    /// The frequency table was empty, so there is nothing to build a tree
    /// from.
    #[error("empty alphabet: no symbols to build a tree from")]
    EmptyAlphabet,

    /// A symbol in the text being encoded has no entry in the code table.
    /// This can only happen when the table was derived from a different
    /// source than the text.
    #[error("unknown symbol {symbol:?}: not present in the code table")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: char,
    },

    /// The bit stream is inconsistent with the supplied tree, either because
    /// it was corrupted or because it was produced by a different tree.
    #[error("malformed bit stream: {0}")]
    MalformedStream(String),

    /// The I/O collaborator could not supply or persist data. Not raised by
    /// the core itself; surfaced as-is so callers can use one error type
    /// around the whole pipeline.
    #[error("source unavailable: {0}")]
    Source(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        fn read() -> Result<String> {
            let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
            Err(io_err.into())
        }

        let err = read().unwrap_err();
        assert!(matches!(err, Error::Source(_)));
        assert!(err.to_string().starts_with("source unavailable"));
    }

    #[test]
    fn unknown_symbol_names_the_symbol() {
        let err = Error::UnknownSymbol { symbol: 'q' };
        assert_eq!(err.to_string(), "unknown symbol 'q': not present in the code table");
    }
}
