//! Config command: show where the config lives and what is in effect.

use anyhow::Result;
use docsum_core::config::{self, DocsumConfig};

/// Print the config file path and the effective settings as TOML.
pub fn run_config(cfg: &DocsumConfig) -> Result<()> {
    println!("config file: {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
