//! Digest primitive: fixed-length hash of a buffer or a stream, rendered
//! as lowercase hex.
//!
//! Checksums here detect content changes between pipeline runs; they are
//! not a security boundary. MD5 is the default because checksums already
//! persisted by earlier pipeline runs were produced with it.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::io::{self, Read};

const BUF_SIZE: usize = 64 * 1024;

/// Digest algorithm: "md5" (default, 128-bit) or "sha256".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Sha256,
}

impl DigestAlgorithm {
    /// Digest an in-memory buffer and return the lowercase hex form.
    pub fn hex_digest(&self, bytes: &[u8]) -> String {
        match self {
            DigestAlgorithm::Md5 => hex::encode(Md5::digest(bytes)),
            DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
        }
    }

    /// Digest a byte stream and return the lowercase hex form.
    /// Reads in chunks to keep memory use bounded; suitable for
    /// arbitrarily large documents. Identical bytes produce the same
    /// digest as [`hex_digest`](Self::hex_digest).
    pub fn hex_digest_reader<R: Read>(&self, reader: R) -> io::Result<String> {
        match self {
            DigestAlgorithm::Md5 => hex_of_reader::<Md5, R>(reader),
            DigestAlgorithm::Sha256 => hex_of_reader::<Sha256, R>(reader),
        }
    }
}

fn hex_of_reader<D: Digest, R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = D::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn md5_empty_input() {
        assert_eq!(
            DigestAlgorithm::Md5.hex_digest(b""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn md5_known_content() {
        assert_eq!(
            DigestAlgorithm::Md5.hex_digest(b"hello\n"),
            "b1946ac92492d2347c6235b4d2611184"
        );
    }

    #[test]
    fn sha256_known_content() {
        assert_eq!(
            DigestAlgorithm::Sha256.hex_digest(b"hello\n"),
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03"
        );
    }

    #[test]
    fn reader_matches_buffer_across_chunks() {
        // Larger than one read buffer so the loop runs more than once.
        let bytes: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        for algo in [DigestAlgorithm::Md5, DigestAlgorithm::Sha256] {
            let from_buf = algo.hex_digest(&bytes);
            let from_reader = algo.hex_digest_reader(Cursor::new(bytes.clone())).unwrap();
            assert_eq!(from_buf, from_reader);
        }
    }

    #[test]
    fn empty_reader_matches_empty_buffer() {
        let digest = DigestAlgorithm::Md5
            .hex_digest_reader(Cursor::new(Vec::new()))
            .unwrap();
        assert_eq!(digest, "d41d8cd98f00b204e9800998ecf8427e");
    }
}
