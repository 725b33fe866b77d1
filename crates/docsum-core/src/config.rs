use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::checksummer::ChecksumConfig;

/// Global configuration loaded from `~/.config/docsum/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsumConfig {
    /// Checksummer settings. Defaults: content mode, md5, not disabled.
    pub checksummer: ChecksumConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docsum")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DocsumConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DocsumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DocsumConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::DigestAlgorithm;

    #[test]
    fn default_config_values() {
        let cfg = DocsumConfig::default();
        assert!(cfg.checksummer.source_fields.is_empty());
        assert!(!cfg.checksummer.disabled);
        assert!(!cfg.checksummer.keep);
        assert!(cfg.checksummer.target_field.is_none());
        assert_eq!(cfg.checksummer.algorithm, DigestAlgorithm::Md5);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DocsumConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DocsumConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.checksummer, cfg.checksummer);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            [checksummer]
            source_fields = ["title", "author"]
            keep = true
            target_field = "collector.checksum"
        "#;
        let cfg: DocsumConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.checksummer.source_fields,
            vec!["title".to_string(), "author".to_string()]
        );
        assert!(!cfg.checksummer.disabled);
        assert!(cfg.checksummer.keep);
        assert_eq!(
            cfg.checksummer.target_field.as_deref(),
            Some("collector.checksum")
        );
        assert_eq!(cfg.checksummer.algorithm, DigestAlgorithm::Md5);
    }

    #[test]
    fn config_toml_algorithm() {
        let toml = r#"
            [checksummer]
            algorithm = "sha256"
        "#;
        let cfg: DocsumConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.checksummer.algorithm, DigestAlgorithm::Sha256);

        let toml_md5 = r#"
            [checksummer]
            algorithm = "md5"
        "#;
        let cfg_md5: DocsumConfig = toml::from_str(toml_md5).unwrap();
        assert_eq!(cfg_md5.checksummer.algorithm, DigestAlgorithm::Md5);
    }

    #[test]
    fn config_toml_empty_file_is_all_defaults() {
        let cfg: DocsumConfig = toml::from_str("").unwrap();
        assert!(cfg.checksummer.source_fields.is_empty());
        assert!(!cfg.checksummer.disabled);
    }

    #[test]
    fn config_toml_disabled() {
        let toml = r#"
            [checksummer]
            disabled = true
        "#;
        let cfg: DocsumConfig = toml::from_str(toml).unwrap();
        assert!(cfg.checksummer.disabled);
    }
}
