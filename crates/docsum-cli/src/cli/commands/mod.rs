mod checksum;
mod config;

pub use checksum::run_checksum;
pub use config::run_config;
