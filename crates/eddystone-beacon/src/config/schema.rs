use serde::Deserialize;

use eddystone_core::error::{BeaconError, Result};
use eddystone_core::protocol::fixed_from_temperature;
use eddystone_core::EncodedFrameSpec;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeaconConfig {
    pub version: u32,

    #[serde(default)]
    pub mode: Mode,

    #[serde(default)]
    pub sender: Option<SenderSection>,

    #[serde(default)]
    pub receiver: ReceiverSection,
}

impl BeaconConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BeaconError::InvalidConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        match (&self.mode, &self.sender) {
            (Mode::Sender, None) => {
                return Err(BeaconError::InvalidConfig(
                    "mode sender requires a sender section".into(),
                ));
            }
            (_, Some(sender)) => {
                sender.frame.to_spec()?; // reject frames that cannot be broadcast
            }
            _ => {}
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Build one advertisement and print it.
    Sender,
    /// Decode advertisement reports.
    #[default]
    Receiver,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SenderSection {
    pub frame: FrameConfig,
}

/// Readable frame definition; converted to the wire layout by `to_spec`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum FrameConfig {
    Uid {
        ranging_data: i8,
        /// 20 hex digits.
        namespace_id: String,
        /// 12 hex digits.
        instance_id: String,
        /// 4 hex digits.
        #[serde(default)]
        reserved: Option<String>,
    },
    Url {
        tx_power: i8,
        url: String,
    },
    Tlm {
        #[serde(default)]
        version: u8,
        battery_mv: u16,
        temperature_c: f32,
        adv_count: u32,
        /// Tenths of a second since power-on.
        uptime_ds: u32,
    },
}

impl FrameConfig {
    pub fn to_spec(&self) -> Result<EncodedFrameSpec> {
        match self {
            FrameConfig::Uid {
                ranging_data,
                namespace_id,
                instance_id,
                reserved,
            } => Ok(EncodedFrameSpec::Uid {
                ranging_data: *ranging_data,
                namespace_id: parse_hex("sender.frame.namespace_id", namespace_id)?,
                instance_id: parse_hex("sender.frame.instance_id", instance_id)?,
                reserved: reserved
                    .as_deref()
                    .map(|r| parse_hex("sender.frame.reserved", r))
                    .transpose()?,
            }),
            FrameConfig::Url { tx_power, url } => EncodedFrameSpec::url(*tx_power, url)
                .map_err(|e| BeaconError::InvalidConfig(format!("sender.frame.url: {e}"))),
            FrameConfig::Tlm {
                version,
                battery_mv,
                temperature_c,
                adv_count,
                uptime_ds,
            } => {
                let temperature = fixed_from_temperature(*temperature_c).ok_or_else(|| {
                    BeaconError::InvalidConfig(
                        "sender.frame.temperature_c must be within -128.0..128.0".into(),
                    )
                })?;
                Ok(EncodedFrameSpec::Tlm {
                    version: *version,
                    battery_voltage: *battery_mv,
                    temperature,
                    adv_count: *adv_count,
                    time: *uptime_ds,
                })
            }
        }
    }
}

fn parse_hex<const N: usize>(field: &str, s: &str) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    hex::decode_to_slice(s, &mut out).map_err(|e| {
        BeaconError::InvalidConfig(format!("{field} must be {} hex digits: {e}", N * 2))
    })?;
    Ok(out)
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReceiverSection {
    /// Log dropped non-beacon reports at debug level.
    #[serde(default)]
    pub report_non_beacons: bool,
}
