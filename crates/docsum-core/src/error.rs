//! Checksum error type surfaced to the calling pipeline.

use thiserror::Error;

/// Failure while computing a document checksum.
///
/// Absence of a checksum (component disabled, or no configured field
/// contributed a value) is not an error; it is the `Ok(None)` outcome.
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// The document's content stream could not be opened or read.
    #[error("cannot create checksum for {reference}")]
    Content {
        /// The document's reference identifier.
        reference: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn content_error_names_reference_and_chains_source() {
        let err = ChecksumError::Content {
            reference: "https://example.com/a".to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "transport died"),
        };
        assert!(err.to_string().contains("https://example.com/a"));
        assert!(err.source().unwrap().to_string().contains("transport died"));
    }
}
