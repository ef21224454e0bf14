//! Advertising Data (AD) structure scanning (panic-free).
//!
//! Parsing rules:
//! - Never index (`buf[0]`) — always use `Buf` and `remaining()` checks.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.
//!
//! Each AD structure is `[len][type][len - 1 bytes of value]`. The scan stops
//! at the first service-data structure carrying the Eddystone UUID; the frame
//! payload is everything after its frame-type byte up to the end of the
//! advertisement. The service-data length byte is only bounds-checked: some
//! transmitters fill it with `1 + frame payload` rather than the full value
//! length, and receivers have to accept both.

use bytes::Buf;

use super::{FrameType, AD_TYPE_16BIT_UUID_LIST, AD_TYPE_FLAGS, AD_TYPE_SERVICE_DATA, SERVICE_UUID};
use crate::error::{BeaconError, Result};

/// Header fields gathered while walking the AD structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonHeader {
    /// Value of the Flags AD structure, if one preceded the service data.
    pub flags: Option<u8>,
    /// First UUID of the 16-bit service UUID list, if present.
    pub service_uuid: Option<u16>,
    /// Frame type of the service data.
    pub frame_type: FrameType,
    /// UUID the service data was tagged with (always [`SERVICE_UUID`]).
    pub service_data_type: u16,
}

/// Walk the AD structures of `adv` until the Eddystone service data is found.
///
/// Returns the gathered header and the frame payload slice.
pub fn scan(adv: &[u8]) -> Result<(CommonHeader, &[u8])> {
    let mut buf = adv;
    let mut flags = None;
    let mut service_uuid = None;

    while buf.has_remaining() {
        let ad_len = usize::from(buf.get_u8());
        if ad_len == 0 {
            // zero length terminates the significant part
            break;
        }
        if buf.remaining() < ad_len {
            return Err(BeaconError::BoundsViolation {
                needed: ad_len,
                remaining: buf.remaining(),
            });
        }

        let ad_type = buf.get_u8();
        let value_len = ad_len - 1;

        match ad_type {
            AD_TYPE_FLAGS => {
                if value_len > 0 {
                    flags = Some(buf.get_u8());
                    buf.advance(value_len - 1);
                }
            }
            AD_TYPE_16BIT_UUID_LIST => {
                if value_len < 2 {
                    return Err(BeaconError::NotABeaconAdvertisement);
                }
                let uuid = buf.get_u16_le();
                if uuid != SERVICE_UUID {
                    return Err(BeaconError::NotABeaconAdvertisement);
                }
                service_uuid = Some(uuid);
                buf.advance(value_len - 2);
            }
            AD_TYPE_SERVICE_DATA => {
                // uuid (u16) + frame type (u8)
                if buf.remaining() < 3 {
                    return Err(BeaconError::BoundsViolation {
                        needed: 3,
                        remaining: buf.remaining(),
                    });
                }
                let uuid = buf.get_u16_le();
                if uuid != SERVICE_UUID {
                    return Err(BeaconError::NotABeaconAdvertisement);
                }
                let frame_type = FrameType::try_from(buf.get_u8())?;

                let header = CommonHeader {
                    flags,
                    service_uuid,
                    frame_type,
                    service_data_type: uuid,
                };
                return Ok((header, buf));
            }
            other => {
                tracing::trace!(ad_type = other, len = ad_len, "skipping ad structure");
                buf.advance(value_len);
            }
        }
    }

    Err(BeaconError::NotABeaconAdvertisement)
}
