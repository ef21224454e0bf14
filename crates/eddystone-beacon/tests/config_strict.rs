#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use eddystone_beacon::config::{self, FrameConfig, Mode};
use eddystone_core::EncodedFrameSpec;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
mode: sender
sender:
  frame:
    type: url
    tx_power: -20
    url: "https://google.com"
    tx_powr: 3 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.mode, Mode::Receiver);
    assert!(cfg.sender.is_none());
    assert!(!cfg.receiver.report_non_beacons);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn sender_mode_requires_frame() {
    let err = config::load_from_str("version: 1\nmode: sender\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn uid_frame_from_hex_ids() {
    let ok = r#"
version: 1
mode: sender
sender:
  frame:
    type: uid
    ranging_data: -59
    namespace_id: "56562456565656562456"
    instance_id: "000000000001"
    reserved: "0000"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let spec = cfg.sender.unwrap().frame.to_spec().unwrap();
    assert_eq!(
        spec,
        EncodedFrameSpec::Uid {
            ranging_data: -59,
            namespace_id: [0x56, 0x56, 0x24, 0x56, 0x56, 0x56, 0x56, 0x56, 0x24, 0x56],
            instance_id: [0, 0, 0, 0, 0, 1],
            reserved: Some([0, 0]),
        }
    );
}

#[test]
fn uid_namespace_must_be_ten_bytes() {
    let bad = r#"
version: 1
sender:
  frame:
    type: uid
    ranging_data: -59
    namespace_id: "5656"
    instance_id: "000000000001"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("namespace_id"), "{err}");
}

#[test]
fn url_frame_is_checked_at_load() {
    let too_long = r#"
version: 1
sender:
  frame:
    type: url
    tx_power: 0
    url: "https://an-unreasonably-long-host.example"
"#;
    let err = config::load_from_str(too_long).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");

    let bad_scheme = r#"
version: 1
sender:
  frame:
    type: url
    tx_power: 0
    url: "ftp://x"
"#;
    assert!(config::load_from_str(bad_scheme).is_err());
}

#[test]
fn tlm_frame_defaults_and_range() {
    let ok = r#"
version: 1
mode: sender
sender:
  frame:
    type: tlm
    battery_mv: 3000
    temperature_c: 25.0
    adv_count: 777
    uptime_ds: 1212
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let frame = &cfg.sender.as_ref().unwrap().frame;
    assert!(matches!(frame, FrameConfig::Tlm { version: 0, .. }));
    assert_eq!(
        frame.to_spec().unwrap(),
        EncodedFrameSpec::Tlm {
            version: 0,
            battery_voltage: 3000,
            temperature: 25 << 8,
            adv_count: 777,
            time: 1212,
        }
    );

    let hot = ok.replace("25.0", "200.0");
    let err = config::load_from_str(&hot).expect_err("must fail");
    assert!(err.to_string().contains("temperature_c"), "{err}");
}
