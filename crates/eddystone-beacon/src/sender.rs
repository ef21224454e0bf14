//! Sender side: configured frame -> raw advertisement.

use eddystone_core::error::{BeaconError, Result};
use eddystone_core::{build_packet, EncodedFrameSpec, RawAdvertisement};

use crate::config::BeaconConfig;

/// Holds the frame to broadcast.
#[derive(Debug, Clone)]
pub struct Sender {
    spec: EncodedFrameSpec,
}

impl Sender {
    pub fn new(spec: EncodedFrameSpec) -> Self {
        Self { spec }
    }

    pub fn from_config(cfg: &BeaconConfig) -> Result<Self> {
        let section = cfg
            .sender
            .as_ref()
            .ok_or_else(|| BeaconError::InvalidConfig("missing sender section".into()))?;
        Ok(Self::new(section.frame.to_spec()?))
    }

    pub fn spec(&self) -> &EncodedFrameSpec {
        &self.spec
    }

    /// Raw advertising data, ready for the radio's raw-adv-data primitive.
    pub fn advertisement(&self) -> Result<RawAdvertisement> {
        let adv = build_packet(&self.spec)?;
        tracing::info!(
            frame_type = ?self.spec.frame_type(),
            len = adv.len(),
            data = %hex::encode(adv.as_bytes()),
            "eddystone advertisement configured"
        );
        Ok(adv)
    }
}
