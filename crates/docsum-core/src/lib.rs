pub mod config;
pub mod logging;

pub mod checksummer;
pub mod digest;
pub mod document;
pub mod error;
pub mod metadata;
