//! Document checksummer: fingerprints a document from its body content
//! or from selected metadata fields, so the pipeline can detect whether
//! a document changed since the previous run.

use crate::digest::DigestAlgorithm;
use crate::document::Document;
use crate::error::ChecksumError;
use crate::metadata::Metadata;
use serde::{Deserialize, Serialize};

/// Metadata field receiving the checksum when `keep` is enabled and no
/// target field is configured.
pub const DEFAULT_TARGET_FIELD: &str = "document.checksum";

/// Checksummer settings (the `[checksummer]` section of config.toml).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksumConfig {
    /// Metadata fields used to build the checksum. Empty means the whole
    /// body content is digested instead.
    pub source_fields: Vec<String>,
    /// When true, no checksum is produced at all.
    pub disabled: bool,
    /// Store the computed checksum back into the document's metadata.
    pub keep: bool,
    /// Field receiving the stored checksum when `keep` is set;
    /// [`DEFAULT_TARGET_FIELD`] if unset.
    pub target_field: Option<String>,
    /// Digest algorithm. "md5" matches checksums stored by earlier runs;
    /// switching invalidates them (every document reads as changed once).
    pub algorithm: DigestAlgorithm,
}

/// Computes document checksums according to a [`ChecksumConfig`].
///
/// A call never mutates the instance, so one long-lived checksummer may
/// serve concurrent documents as long as the configuration is not being
/// swapped mid-call.
#[derive(Debug, Clone, Default)]
pub struct DocumentChecksummer {
    config: ChecksumConfig,
}

impl DocumentChecksummer {
    pub fn new(config: ChecksumConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChecksumConfig {
        &self.config
    }

    /// Replace the source fields used by subsequent calls. Empty switches
    /// back to content mode.
    pub fn set_source_fields(&mut self, fields: Vec<String>) {
        self.config.source_fields = fields;
    }

    /// Enable or disable checksum production for subsequent calls.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Compute the checksum for a document. `None` means "no checksum":
    /// the component is disabled, or no configured field contributed a
    /// value. Mode is re-evaluated on every call.
    ///
    /// When `keep` is set, a produced checksum is also appended to the
    /// document's metadata under the target field.
    pub fn checksum<D: Document>(&self, doc: &mut D) -> Result<Option<String>, ChecksumError> {
        if self.config.disabled {
            return Ok(None);
        }

        let checksum = if self.config.source_fields.is_empty() {
            Some(self.from_content(doc)?)
        } else {
            self.from_fields(doc.metadata())
        };

        if self.config.keep {
            if let Some(value) = &checksum {
                let field = self
                    .config
                    .target_field
                    .as_deref()
                    .unwrap_or(DEFAULT_TARGET_FIELD);
                doc.metadata_mut().add_value(field, value.clone());
            }
        }

        Ok(checksum)
    }

    /// Field mode: digest of `name=value;` pairs. Field names are sorted
    /// first so neither the configured order nor the metadata's internal
    /// key order affects the result; value order within a field is kept
    /// as stored. Duplicate configured names are not deduplicated and
    /// contribute once per occurrence.
    fn from_fields(&self, metadata: &Metadata) -> Option<String> {
        let mut fields: Vec<&str> = self
            .config
            .source_fields
            .iter()
            .map(String::as_str)
            .collect();
        fields.sort_unstable();

        let mut buf = String::new();
        for field in &fields {
            let Some(values) = metadata.values(field) else {
                continue;
            };
            for value in values {
                if !value.trim().is_empty() {
                    buf.push_str(field);
                    buf.push('=');
                    buf.push_str(value);
                    buf.push(';');
                }
            }
        }

        // No field contributed anything: no checksum, rather than a
        // digest of the empty string.
        if buf.trim().is_empty() {
            return None;
        }

        let checksum = self.config.algorithm.hex_digest(buf.as_bytes());
        tracing::debug!(
            "document checksum from {}: {}",
            fields.join(","),
            checksum
        );
        Some(checksum)
    }

    /// Content mode: streaming digest of the whole body. Empty content is
    /// a valid input and yields the algorithm's empty-input digest (never
    /// `None`, unlike the field path). The stream is owned by this call
    /// and dropped on every exit path.
    fn from_content<D: Document>(&self, doc: &D) -> Result<String, ChecksumError> {
        let stream = doc.open_content().map_err(|source| ChecksumError::Content {
            reference: doc.reference().to_string(),
            source,
        })?;
        let checksum = self
            .config
            .algorithm
            .hex_digest_reader(stream)
            .map_err(|source| ChecksumError::Content {
                reference: doc.reference().to_string(),
                source,
            })?;
        tracing::debug!("document checksum from content of {}: {}", doc.reference(), checksum);
        Ok(checksum)
    }
}
