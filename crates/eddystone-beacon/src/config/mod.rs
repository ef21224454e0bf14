//! Beacon config loader (strict parsing).

pub mod schema;

use std::fs;

use eddystone_core::error::{BeaconError, Result};

pub use schema::{BeaconConfig, FrameConfig, Mode, ReceiverSection, SenderSection};

pub fn load_from_file(path: &str) -> Result<BeaconConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| BeaconError::InvalidConfig(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<BeaconConfig> {
    let cfg: BeaconConfig = serde_yaml::from_str(s)
        .map_err(|e| BeaconError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
