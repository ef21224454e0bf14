//! Top-level facade crate for eddystone.
//!
//! Re-exports the codec and the beacon tooling so users can depend on a single crate.

pub mod core {
    pub use eddystone_core::*;
}

pub mod beacon {
    pub use eddystone_beacon::*;
}
