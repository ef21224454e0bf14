//! Shared error type across eddystone crates.

use thiserror::Error;

use crate::protocol::FrameType;

/// Stable error codes (used by test vectors and log fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Empty buffer, bad length argument, or unusable frame definition.
    InvalidArgument,
    /// Not an Eddystone advertisement.
    NotABeacon,
    /// An AD structure reaches past the end of the buffer.
    BoundsViolation,
    /// Frame payload length not permitted for its frame type.
    LengthMismatch,
    /// URL scheme prefix outside the known table.
    InvalidScheme,
    /// Frame type byte is not UID/URL/TLM.
    InvalidFrameType,
    /// Configuration rejected.
    InvalidConfig,
}

impl ErrorCode {
    /// String representation used in logs and vector files.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::NotABeacon => "NOT_A_BEACON",
            ErrorCode::BoundsViolation => "BOUNDS_VIOLATION",
            ErrorCode::LengthMismatch => "LENGTH_MISMATCH",
            ErrorCode::InvalidScheme => "INVALID_SCHEME",
            ErrorCode::InvalidFrameType => "INVALID_FRAME_TYPE",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BeaconError>;

/// Unified error type used by the codec and the beacon tooling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeaconError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not an eddystone advertisement")]
    NotABeaconAdvertisement,
    #[error("ad structure out of bounds: needs {needed} bytes, {remaining} remaining")]
    BoundsViolation { needed: usize, remaining: usize },
    #[error("{frame:?} frame payload has invalid length {len}")]
    LengthMismatch { frame: FrameType, len: usize },
    #[error("invalid url scheme prefix: {0:#04x}")]
    InvalidScheme(u8),
    #[error("invalid frame type: {0:#04x}")]
    InvalidFrameType(u8),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl BeaconError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            BeaconError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            BeaconError::NotABeaconAdvertisement => ErrorCode::NotABeacon,
            BeaconError::BoundsViolation { .. } => ErrorCode::BoundsViolation,
            BeaconError::LengthMismatch { .. } => ErrorCode::LengthMismatch,
            BeaconError::InvalidScheme(_) => ErrorCode::InvalidScheme,
            BeaconError::InvalidFrameType(_) => ErrorCode::InvalidFrameType,
            BeaconError::InvalidConfig(_) => ErrorCode::InvalidConfig,
        }
    }

    /// Ordinary non-beacon BLE traffic; callers should drop it quietly.
    pub fn is_not_a_beacon(&self) -> bool {
        matches!(self, BeaconError::NotABeaconAdvertisement)
    }
}
