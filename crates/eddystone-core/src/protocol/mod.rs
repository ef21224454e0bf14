//! Eddystone wire format (advertisement scanning, frames, URL compression).
//!
//! This module hosts both directions through the frame grammar:
//! - Decode: AD structure scan -> frame type + payload -> typed frame.
//! - Encode: frame definition -> flags + UUID list + service data packet.
//!
//! All parsers are panic-free: malformed input is reported as `BeaconError`
//! instead of panicking or indexing raw buffers, so hostile or simply
//! unrelated BLE traffic cannot take down the scanner.

pub mod ad;
pub mod frame;
pub mod packet;
pub mod url;

use crate::error::{BeaconError, Result};

pub use ad::{scan, CommonHeader};
pub use frame::{
    decode_frame, fixed_from_temperature, temperature_from_fixed, BeaconResult, TlmFrame,
    UidFrame, UrlFrame,
};
pub use packet::{build_packet, build_packet_into, EncodedFrameSpec, RawAdvertisement};

/// Eddystone 16-bit service UUID.
pub const SERVICE_UUID: u16 = 0xFEAA;

/// AD type: Flags.
pub const AD_TYPE_FLAGS: u8 = 0x01;
/// AD type: Complete List of 16-bit Service UUIDs.
pub const AD_TYPE_16BIT_UUID_LIST: u8 = 0x03;
/// AD type: Service Data - 16-bit UUID.
pub const AD_TYPE_SERVICE_DATA: u8 = 0x16;

/// Legacy advertising payload limit.
pub const MAX_ADV_LEN: usize = 31;

/// Eddystone frame type carried right after the service UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameType {
    Uid,
    Url,
    Tlm,
}

impl FrameType {
    /// On-wire tag.
    pub fn as_byte(self) -> u8 {
        match self {
            FrameType::Uid => 0x00,
            FrameType::Url => 0x10,
            FrameType::Tlm => 0x20,
        }
    }
}

impl TryFrom<u8> for FrameType {
    type Error = BeaconError;

    fn try_from(b: u8) -> Result<Self> {
        match b {
            0x00 => Ok(FrameType::Uid),
            0x10 => Ok(FrameType::Url),
            0x20 => Ok(FrameType::Tlm),
            other => Err(BeaconError::InvalidFrameType(other)),
        }
    }
}

/// Decode the first `len` bytes of `buf` as reported by the radio stack.
pub fn decode_advertisement(buf: &[u8], len: usize) -> Result<BeaconResult> {
    decode_with_header(buf, len).map(|(_, result)| result)
}

/// Decode a whole buffer.
pub fn decode(buf: &[u8]) -> Result<BeaconResult> {
    decode_advertisement(buf, buf.len())
}

/// Like [`decode_advertisement`], also returning the header fields gathered
/// during the scan.
pub fn decode_with_header(buf: &[u8], len: usize) -> Result<(CommonHeader, BeaconResult)> {
    if len == 0 || buf.is_empty() {
        return Err(BeaconError::InvalidArgument("empty advertisement".into()));
    }
    let adv = buf.get(..len).ok_or_else(|| {
        BeaconError::InvalidArgument(format!(
            "reported length {len} exceeds buffer of {} bytes",
            buf.len()
        ))
    })?;

    let (header, payload) = scan(adv)?;
    let result = decode_frame(header.frame_type.as_byte(), payload)?;
    tracing::trace!(frame_type = ?header.frame_type, payload_len = payload.len(), "eddystone frame decoded");
    Ok((header, result))
}
