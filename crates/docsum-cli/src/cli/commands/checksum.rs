//! Checksum command: fingerprint one document.

use anyhow::{bail, Result};
use docsum_core::checksummer::DocumentChecksummer;
use docsum_core::config::DocsumConfig;
use docsum_core::digest::DigestAlgorithm;
use docsum_core::document::FileDocument;
use docsum_core::metadata::Metadata;
use std::path::Path;

/// Compute and print the checksum of the given document. CLI flags
/// override the corresponding config-file settings.
pub fn run_checksum(
    cfg: &DocsumConfig,
    path: &Path,
    fields: &[String],
    metadata_path: Option<&Path>,
    algorithm: Option<&str>,
) -> Result<()> {
    let mut checksummer_cfg = cfg.checksummer.clone();
    if !fields.is_empty() {
        checksummer_cfg.source_fields = fields.to_vec();
    }
    if let Some(name) = algorithm {
        checksummer_cfg.algorithm = parse_algorithm(name)?;
    }

    let metadata = match metadata_path {
        Some(p) => Metadata::load_json(p)?,
        None => Metadata::new(),
    };

    let mut doc = FileDocument::new(path).with_metadata(metadata);
    let checksummer = DocumentChecksummer::new(checksummer_cfg);
    match checksummer.checksum(&mut doc)? {
        Some(digest) => println!("{}  {}", digest, path.display()),
        None => println!("no checksum produced for {}", path.display()),
    }
    Ok(())
}

fn parse_algorithm(name: &str) -> Result<DigestAlgorithm> {
    match name {
        "md5" => Ok(DigestAlgorithm::Md5),
        "sha256" => Ok(DigestAlgorithm::Sha256),
        other => bail!("unknown digest algorithm: {} (expected md5 or sha256)", other),
    }
}
