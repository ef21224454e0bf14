//! Outgoing advertisement construction.
//!
//! Packet layout, in this order and no other:
//!
//! ```text
//! 02 01 06                      flags: LE general discoverable, BR/EDR not supported
//! 03 03 AA FE                   complete list of 16-bit service UUIDs
//! LL 16 AA FE TT <payload>      service data, LL = 1 + payload length
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use super::frame::{
    TLM_PAYLOAD_LEN, UID_INSTANCE_LEN, UID_NAMESPACE_LEN, UID_PAYLOAD_LEN, UID_RESERVED_LEN,
};
use super::url::{self, URL_SCHEME_PREFIXES};
use super::{
    FrameType, AD_TYPE_16BIT_UUID_LIST, AD_TYPE_FLAGS, AD_TYPE_SERVICE_DATA, MAX_ADV_LEN,
    SERVICE_UUID,
};
use crate::error::{BeaconError, Result};

/// Flags value: LE general discoverable, BR/EDR not supported.
pub const FLAGS_GENERAL_DISCOVERABLE_NO_BREDR: u8 = 0x06;

/// Flags (3) + UUID list (4) + service data header (5).
const PACKET_HEADER_LEN: usize = 12;

/// Frame definition to broadcast, in on-wire field layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedFrameSpec {
    Uid {
        ranging_data: i8,
        namespace_id: [u8; UID_NAMESPACE_LEN],
        instance_id: [u8; UID_INSTANCE_LEN],
        reserved: Option<[u8; UID_RESERVED_LEN]>,
    },
    Url {
        tx_power: i8,
        /// Index into the scheme prefix table.
        scheme: u8,
        /// Already compressed body.
        encoded_url: Vec<u8>,
    },
    Tlm {
        version: u8,
        /// mV
        battery_voltage: u16,
        /// 8.8 fixed point °C.
        temperature: i16,
        adv_count: u32,
        /// 0.1 s ticks.
        time: u32,
    },
}

impl EncodedFrameSpec {
    /// URL frame from readable text.
    pub fn url(tx_power: i8, text: &str) -> Result<Self> {
        let encoded = url::encode(text)?;
        let spec = EncodedFrameSpec::Url {
            tx_power,
            scheme: encoded.scheme,
            encoded_url: encoded.body,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn frame_type(&self) -> FrameType {
        match self {
            EncodedFrameSpec::Uid { .. } => FrameType::Uid,
            EncodedFrameSpec::Url { .. } => FrameType::Url,
            EncodedFrameSpec::Tlm { .. } => FrameType::Tlm,
        }
    }

    /// Bytes after the frame type byte.
    pub fn payload_len(&self) -> usize {
        match self {
            EncodedFrameSpec::Uid { reserved: None, .. } => UID_PAYLOAD_LEN,
            EncodedFrameSpec::Uid { reserved: Some(_), .. } => UID_PAYLOAD_LEN + UID_RESERVED_LEN,
            EncodedFrameSpec::Url { encoded_url, .. } => 2 + encoded_url.len(),
            EncodedFrameSpec::Tlm { .. } => TLM_PAYLOAD_LEN,
        }
    }

    /// Total advertisement length.
    pub fn packet_len(&self) -> usize {
        PACKET_HEADER_LEN + self.payload_len()
    }

    /// Check the definition fits the frame grammar.
    pub fn validate(&self) -> Result<()> {
        if let EncodedFrameSpec::Url {
            scheme,
            encoded_url,
            ..
        } = self
        {
            if usize::from(*scheme) >= URL_SCHEME_PREFIXES.len() {
                return Err(BeaconError::InvalidScheme(*scheme));
            }
            if encoded_url.is_empty() {
                return Err(BeaconError::InvalidArgument("empty url body".into()));
            }
            if encoded_url.len() > url::MAX_ENCODED_BODY_LEN {
                return Err(BeaconError::LengthMismatch {
                    frame: FrameType::Url,
                    len: self.payload_len(),
                });
            }
        }
        Ok(())
    }
}

/// Outgoing advertisement payload (at most 31 bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAdvertisement {
    bytes: Bytes,
}

impl RawAdvertisement {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl AsRef<[u8]> for RawAdvertisement {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Build the advertisement for a frame definition.
pub fn build_packet(spec: &EncodedFrameSpec) -> Result<RawAdvertisement> {
    spec.validate()?;
    let mut out = BytesMut::with_capacity(MAX_ADV_LEN);
    write_packet(spec, &mut out);
    Ok(RawAdvertisement {
        bytes: out.freeze(),
    })
}

/// Build the advertisement into `dst`, returning the number of bytes written.
pub fn build_packet_into(spec: &EncodedFrameSpec, dst: &mut [u8]) -> Result<usize> {
    if dst.is_empty() {
        return Err(BeaconError::InvalidArgument("empty destination buffer".into()));
    }
    spec.validate()?;

    let needed = spec.packet_len();
    if dst.len() < needed {
        return Err(BeaconError::BoundsViolation {
            needed,
            remaining: dst.len(),
        });
    }

    let mut out = &mut dst[..];
    write_packet(spec, &mut out);
    Ok(needed)
}

fn write_packet<B: BufMut>(spec: &EncodedFrameSpec, out: &mut B) {
    out.put_u8(0x02);
    out.put_u8(AD_TYPE_FLAGS);
    out.put_u8(FLAGS_GENERAL_DISCOVERABLE_NO_BREDR);

    out.put_u8(0x03);
    out.put_u8(AD_TYPE_16BIT_UUID_LIST);
    out.put_u16_le(SERVICE_UUID);

    // validated specs never exceed 19 payload bytes
    out.put_u8(1 + spec.payload_len() as u8);
    out.put_u8(AD_TYPE_SERVICE_DATA);
    out.put_u16_le(SERVICE_UUID);
    out.put_u8(spec.frame_type().as_byte());

    match spec {
        EncodedFrameSpec::Uid {
            ranging_data,
            namespace_id,
            instance_id,
            reserved,
        } => {
            out.put_i8(*ranging_data);
            out.put_slice(namespace_id);
            out.put_slice(instance_id);
            if let Some(rfu) = reserved {
                out.put_slice(rfu);
            }
        }
        EncodedFrameSpec::Url {
            tx_power,
            scheme,
            encoded_url,
        } => {
            out.put_i8(*tx_power);
            out.put_u8(*scheme);
            out.put_slice(encoded_url);
        }
        EncodedFrameSpec::Tlm {
            version,
            battery_voltage,
            temperature,
            adv_count,
            time,
        } => {
            out.put_u8(*version);
            out.put_u16(*battery_voltage);
            out.put_i16(*temperature);
            out.put_u32(*adv_count);
            out.put_u32(*time);
        }
    }
}
