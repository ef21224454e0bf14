//! Frames built for broadcast decode back to the same reading.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use eddystone_core::protocol::{fixed_from_temperature, MAX_ADV_LEN};
use eddystone_core::{build_packet, decode, BeaconResult, EncodedFrameSpec, TlmFrame, UidFrame, UrlFrame};
use proptest::prelude::*;

#[test]
fn url_beacon_round_trip() {
    let spec = EncodedFrameSpec::url(-20, "https://www.rust-lang.org/").unwrap();
    let raw = build_packet(&spec).unwrap();
    assert!(raw.len() <= MAX_ADV_LEN);
    assert_eq!(
        decode(raw.as_bytes()).unwrap(),
        BeaconResult::Url(UrlFrame { tx_power: -20, url: "https://www.rust-lang.org/".into() })
    );
}

#[test]
fn tlm_beacon_round_trip() {
    let spec = EncodedFrameSpec::Tlm {
        version: 0,
        battery_voltage: 2950,
        temperature: fixed_from_temperature(-12.25).unwrap(),
        adv_count: u32::MAX,
        time: 36_000,
    };
    let raw = build_packet(&spec).unwrap();
    assert_eq!(
        decode(raw.as_bytes()).unwrap(),
        BeaconResult::Tlm(TlmFrame {
            version: 0,
            battery_voltage: 2950,
            temperature: -12.25,
            adv_count: u32::MAX,
            time: 36_000,
        })
    );
}

proptest! {
    #[test]
    fn prop_uid_beacon_round_trip(
        ranging_data in any::<i8>(),
        namespace_id in any::<[u8; 10]>(),
        instance_id in any::<[u8; 6]>(),
        reserved in any::<Option<[u8; 2]>>(),
    ) {
        let spec = EncodedFrameSpec::Uid { ranging_data, namespace_id, instance_id, reserved };
        let raw = build_packet(&spec).unwrap();
        prop_assert!(raw.len() <= MAX_ADV_LEN);
        prop_assert_eq!(
            decode(raw.as_bytes()).unwrap(),
            BeaconResult::Uid(UidFrame { ranging_data, namespace_id, instance_id, reserved })
        );
    }
}
