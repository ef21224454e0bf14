#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::Cursor;

use eddystone_beacon::config::{self, ReceiverSection};
use eddystone_beacon::receiver::{Receiver, ReceiverStats};
use eddystone_beacon::sender::Sender;
use eddystone_core::{BeaconResult, UrlFrame};

#[test]
fn sender_output_is_understood_by_receiver() {
    let cfg = config::load_from_str(
        r#"
version: 1
mode: sender
sender:
  frame:
    type: url
    tx_power: -20
    url: "https://www.example.com/"
"#,
    )
    .unwrap();
    let adv = Sender::from_config(&cfg).unwrap().advertisement().unwrap();

    let mut rx = Receiver::new(&ReceiverSection::default());
    let res = rx.handle_report(adv.as_bytes());
    assert_eq!(
        res,
        Some(BeaconResult::Url(UrlFrame { tx_power: -20, url: "https://www.example.com/".into() }))
    );
}

#[test]
fn run_drains_report_stream() {
    let input = "\
# flags + uuid list + url frame
0201060303aafe0316aafe1003036f6f6f676c65
0201060303aafe1116aafe20000bb8198000000309000004bc
020106030309180416aafe0000
0201061416aafe00000000
zz
";
    let mut rx = Receiver::new(&ReceiverSection::default());
    let stats = rx.run(Cursor::new(input)).unwrap();
    assert_eq!(
        stats,
        ReceiverStats {
            reports: 4,
            beacons: 2,
            non_beacons: 1,
            malformed: 1,
            bad_lines: 1,
        }
    );
}
