//! Eddystone core: the beacon frame codec and its error surface.
//!
//! This crate decodes raw BLE advertisement payloads into typed Eddystone
//! readings (UID, URL, TLM) and builds outgoing advertisement payloads from a
//! frame definition. It carries no radio, runtime, or I/O dependencies: every
//! entry point is a synchronous transform between byte buffers and values, so
//! it can be called from scan callbacks on any thread.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every malformed advertisement surfaces as a `BeaconError` instead of
//! crashing the scanning process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{BeaconError, ErrorCode, Result};
pub use protocol::{
    build_packet, build_packet_into, decode, decode_advertisement, decode_with_header,
    BeaconResult, CommonHeader, EncodedFrameSpec, FrameType, RawAdvertisement, TlmFrame,
    UidFrame, UrlFrame,
};
