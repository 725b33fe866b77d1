//! Document seam between the ingestion pipeline and the checksummer.
//!
//! The checksummer only depends on this trait and does not know where
//! document bodies actually come from.

use crate::metadata::Metadata;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Minimal document surface needed to compute a checksum.
pub trait Document {
    /// Stable identifier used in logs and error messages (URL, path, ...).
    fn reference(&self) -> &str;

    /// Open a fresh readable stream over the body content. The caller
    /// owns the stream and drops it when done; the document itself is
    /// never mutated or closed by reading.
    fn open_content(&self) -> io::Result<Box<dyn Read + '_>>;

    fn metadata(&self) -> &Metadata;

    fn metadata_mut(&mut self) -> &mut Metadata;
}

/// Document backed by a file on disk. The path doubles as the reference.
#[derive(Debug)]
pub struct FileDocument {
    path: PathBuf,
    reference: String,
    metadata: Metadata,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let reference = path.display().to_string();
        Self {
            path,
            reference,
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

impl Document for FileDocument {
    fn reference(&self) -> &str {
        &self.reference
    }

    fn open_content(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

/// In-memory document, for tests and embedding callers.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    reference: String,
    content: Vec<u8>,
    metadata: Metadata,
}

impl MemoryDocument {
    pub fn new(reference: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            reference: reference.into(),
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

impl Document for MemoryDocument {
    fn reference(&self) -> &str {
        &self.reference
    }

    fn open_content(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.content.as_slice()))
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}
