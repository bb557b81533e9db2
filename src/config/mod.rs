//! Configuration loading

pub mod settings;

pub use settings::{EmailSettings, OutputSettings, ScanSettings, Settings};
