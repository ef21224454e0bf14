//! Eddystone beacon tool.
//!
//! - sender mode: print the configured advertisement as hex
//! - receiver mode: read hex scan reports from stdin, log decoded beacons
//!
//! Usage: `eddystone-beacon [config.yaml]` (default `eddystone.yaml`).

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

use eddystone_beacon::config::{self, Mode};
use eddystone_beacon::receiver::Receiver;
use eddystone_beacon::sender::Sender;

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "eddystone.yaml".into());
    let cfg = config::load_from_file(&path).expect("config load failed");

    match cfg.mode {
        Mode::Sender => {
            tracing::info!(config = %path, "eddystone sender mode");
            let sender = Sender::from_config(&cfg).expect("sender config invalid");
            let adv = sender.advertisement().expect("advertisement build failed");
            println!("{}", hex::encode(adv.as_bytes()));
        }
        Mode::Receiver => {
            tracing::info!(config = %path, "eddystone receiver mode");
            let mut receiver = Receiver::new(&cfg.receiver);
            receiver
                .run(io::stdin().lock())
                .expect("reading scan reports failed");
        }
    }
}
