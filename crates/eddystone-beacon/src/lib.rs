//! Eddystone beacon tooling.
//!
//! This crate sits between the codec and a BLE radio stack: it loads the
//! beacon configuration, builds the advertisement a sender should broadcast,
//! and turns scan reports into logged beacon readings. The radio itself
//! (controller bring-up, scan and advertising parameters) stays outside.

pub mod config;
pub mod receiver;
pub mod sender;
