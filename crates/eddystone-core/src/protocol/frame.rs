//! Eddystone frame decoding (UID / URL / TLM).
//!
//! Byte layouts, offsets relative to the first byte after the frame type:
//!
//! ```text
//! UID  ranging(i8) namespace[10] instance[6] [reserved[2]]     17 or 19 bytes
//! URL  tx_power(i8) scheme(u8) encoded_url[0..=16]            2..=18 bytes
//! TLM  version(u8) vbatt(u16) temp(8.8) adv_cnt(u32) sec_cnt(u32)  13..=14 bytes
//! ```
//!
//! Multi-byte TLM fields are big-endian.

use bytes::Buf;

use super::{url, FrameType};
use crate::error::{BeaconError, Result};

/// Namespace id length of a UID frame.
pub const UID_NAMESPACE_LEN: usize = 10;
/// Instance id length of a UID frame.
pub const UID_INSTANCE_LEN: usize = 6;
/// Reserved trailer of a UID frame.
pub const UID_RESERVED_LEN: usize = 2;
/// UID payload without the reserved trailer.
pub const UID_PAYLOAD_LEN: usize = 1 + UID_NAMESPACE_LEN + UID_INSTANCE_LEN;
/// Longest URL payload: tx power + scheme + encoded body.
pub const URL_MAX_PAYLOAD_LEN: usize = 1 + url::MAX_ENCODED_URL_LEN;
/// TLM payload (all fields).
pub const TLM_PAYLOAD_LEN: usize = 13;
/// Longest TLM payload accepted.
pub const TLM_MAX_PAYLOAD_LEN: usize = 14;

/// Decoded Eddystone reading.
#[derive(Debug, Clone, PartialEq)]
pub enum BeaconResult {
    Uid(UidFrame),
    Url(UrlFrame),
    Tlm(TlmFrame),
}

impl BeaconResult {
    pub fn frame_type(&self) -> FrameType {
        match self {
            BeaconResult::Uid(_) => FrameType::Uid,
            BeaconResult::Url(_) => FrameType::Url,
            BeaconResult::Tlm(_) => FrameType::Tlm,
        }
    }
}

/// Eddystone-UID frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UidFrame {
    /// Calibrated Tx power at 0 m, in dBm.
    pub ranging_data: i8,
    pub namespace_id: [u8; UID_NAMESPACE_LEN],
    pub instance_id: [u8; UID_INSTANCE_LEN],
    /// Reserved trailer, present only on 19-byte payloads.
    pub reserved: Option<[u8; UID_RESERVED_LEN]>,
}

/// Eddystone-URL frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFrame {
    /// Calibrated Tx power at 0 m, in dBm.
    pub tx_power: i8,
    /// Expanded URL.
    pub url: String,
}

/// Eddystone-TLM (unencrypted) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TlmFrame {
    pub version: u8,
    /// Battery voltage in mV.
    pub battery_voltage: u16,
    /// Beacon temperature in °C.
    pub temperature: f32,
    /// Advertising PDUs sent since power-on.
    pub adv_count: u32,
    /// Time since power-on, 0.1 s per tick.
    pub time: u32,
}

impl TlmFrame {
    /// Time since power-on in whole seconds.
    pub fn uptime_secs(&self) -> u32 {
        self.time / 10
    }
}

/// Decode a frame payload for the given frame type byte.
pub fn decode_frame(frame_type: u8, payload: &[u8]) -> Result<BeaconResult> {
    match FrameType::try_from(frame_type)? {
        FrameType::Uid => decode_uid(payload).map(BeaconResult::Uid),
        FrameType::Url => decode_url(payload).map(BeaconResult::Url),
        FrameType::Tlm => decode_tlm(payload).map(BeaconResult::Tlm),
    }
}

fn decode_uid(mut buf: &[u8]) -> Result<UidFrame> {
    let len = buf.remaining();
    if len != UID_PAYLOAD_LEN && len != UID_PAYLOAD_LEN + UID_RESERVED_LEN {
        return Err(BeaconError::LengthMismatch { frame: FrameType::Uid, len });
    }

    let ranging_data = buf.get_i8();
    let mut namespace_id = [0u8; UID_NAMESPACE_LEN];
    buf.copy_to_slice(&mut namespace_id);
    let mut instance_id = [0u8; UID_INSTANCE_LEN];
    buf.copy_to_slice(&mut instance_id);

    let reserved = if buf.remaining() == UID_RESERVED_LEN {
        let mut rfu = [0u8; UID_RESERVED_LEN];
        buf.copy_to_slice(&mut rfu);
        Some(rfu)
    } else {
        None
    };

    Ok(UidFrame {
        ranging_data,
        namespace_id,
        instance_id,
        reserved,
    })
}

fn decode_url(mut buf: &[u8]) -> Result<UrlFrame> {
    let len = buf.remaining();
    if len < 2 || len > URL_MAX_PAYLOAD_LEN {
        return Err(BeaconError::LengthMismatch { frame: FrameType::Url, len });
    }

    let tx_power = buf.get_i8();
    let scheme = buf.get_u8();
    let url = url::decode_scheme_and_body(scheme, buf)?;

    Ok(UrlFrame { tx_power, url })
}

fn decode_tlm(mut buf: &[u8]) -> Result<TlmFrame> {
    let len = buf.remaining();
    if !(TLM_PAYLOAD_LEN..=TLM_MAX_PAYLOAD_LEN).contains(&len) {
        return Err(BeaconError::LengthMismatch { frame: FrameType::Tlm, len });
    }

    let version = buf.get_u8();
    let battery_voltage = buf.get_u16();
    let temperature = temperature_from_fixed(buf.get_i16());
    let adv_count = buf.get_u32();
    let time = buf.get_u32();

    Ok(TlmFrame {
        version,
        battery_voltage,
        temperature,
        adv_count,
        time,
    })
}

/// 8.8 fixed point to °C: signed high byte plus low byte / 256.
pub fn temperature_from_fixed(raw: i16) -> f32 {
    let [hi, lo] = raw.to_be_bytes();
    f32::from(hi as i8) + f32::from(lo) / 256.0
}

/// °C to 8.8 fixed point, `None` outside the representable range.
pub fn fixed_from_temperature(celsius: f32) -> Option<i16> {
    if !celsius.is_finite() || !(-128.0..128.0).contains(&celsius) {
        return None;
    }
    let scaled = (celsius * 256.0).round();
    Some(scaled.clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16)
}
