//! Receiver side: scan reports -> decoded readings.
//!
//! Most BLE traffic is not Eddystone, so non-beacon reports are dropped
//! quietly; malformed Eddystone frames are logged at warn.

use std::io::BufRead;

use eddystone_core::error::{BeaconError, Result};
use eddystone_core::{decode_with_header, BeaconResult, CommonHeader};

use crate::config::ReceiverSection;

/// Counters over the reports seen so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReceiverStats {
    pub reports: u64,
    pub beacons: u64,
    pub non_beacons: u64,
    pub malformed: u64,
    /// Input lines that were not hex.
    pub bad_lines: u64,
}

#[derive(Debug, Default)]
pub struct Receiver {
    report_non_beacons: bool,
    stats: ReceiverStats,
}

impl Receiver {
    pub fn new(cfg: &ReceiverSection) -> Self {
        Self {
            report_non_beacons: cfg.report_non_beacons,
            stats: ReceiverStats::default(),
        }
    }

    pub fn stats(&self) -> ReceiverStats {
        self.stats
    }

    /// Decode one advertisement report from the radio.
    pub fn handle_report(&mut self, raw: &[u8]) -> Option<BeaconResult> {
        self.stats.reports += 1;

        match decode_with_header(raw, raw.len()) {
            Ok((header, res)) => {
                self.stats.beacons += 1;
                log_reading(&header, &res);
                Some(res)
            }
            Err(e) if e.is_not_a_beacon() => {
                self.stats.non_beacons += 1;
                if self.report_non_beacons {
                    tracing::debug!(len = raw.len(), "not an eddystone advertisement");
                }
                None
            }
            Err(e) => {
                self.stats.malformed += 1;
                tracing::warn!(code = e.code().as_str(), error = %e, "malformed eddystone advertisement");
                None
            }
        }
    }

    /// One report per line, hex encoded. Blank lines and `#` comments are skipped.
    pub fn handle_line(&mut self, line: &str) -> Option<BeaconResult> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let compact: String = line.split_whitespace().collect();
        match hex::decode(&compact) {
            Ok(raw) => self.handle_report(&raw),
            Err(e) => {
                self.stats.bad_lines += 1;
                tracing::warn!(error = %e, "report line is not hex");
                None
            }
        }
    }

    /// Drain reports from `input` until end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<ReceiverStats> {
        for line in input.lines() {
            let line = line
                .map_err(|e| BeaconError::InvalidArgument(format!("read report failed: {e}")))?;
            self.handle_line(&line);
        }

        tracing::info!(
            reports = self.stats.reports,
            beacons = self.stats.beacons,
            non_beacons = self.stats.non_beacons,
            malformed = self.stats.malformed,
            bad_lines = self.stats.bad_lines,
            "receiver finished"
        );
        Ok(self.stats)
    }
}

fn log_reading(header: &CommonHeader, res: &BeaconResult) {
    tracing::info!(flags = ?header.flags, frame_type = ?header.frame_type, "eddystone found");

    match res {
        BeaconResult::Uid(uid) => {
            tracing::info!(
                ranging_dbm = uid.ranging_data,
                namespace_id = %hex::encode(uid.namespace_id),
                instance_id = %hex::encode(uid.instance_id),
                "eddystone uid"
            );
        }
        BeaconResult::Url(url) => {
            tracing::info!(tx_power_dbm = url.tx_power, url = %url.url, "eddystone url");
        }
        BeaconResult::Tlm(tlm) => {
            let temperature_c = format!("{:.1}", tlm.temperature);
            tracing::info!(
                version = tlm.version,
                battery_mv = tlm.battery_voltage,
                temperature_c = %temperature_c,
                adv_count = tlm.adv_count,
                uptime_s = tlm.uptime_secs(),
                "eddystone tlm"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddystone_core::UrlFrame;

    #[test]
    fn decodes_hex_line() {
        let mut rx = Receiver::default();
        let res = rx.handle_line("02 01 06 03 03 aa fe 03 16 aa fe 10 03 03 67 6f 6f 67 6c 65");
        assert_eq!(
            res,
            Some(BeaconResult::Url(UrlFrame { tx_power: 3, url: "https://google".into() }))
        );
        assert_eq!(rx.stats().beacons, 1);
    }

    #[test]
    fn counts_each_kind_of_report() {
        let mut rx = Receiver::new(&ReceiverSection { report_non_beacons: true });
        assert!(rx.handle_line("020106050974657374").is_none());
        assert!(rx.handle_line("02010604 16aafe30 00").is_none());
        assert!(rx.handle_line("not hex").is_none());
        assert!(rx.handle_line("   ").is_none());
        assert!(rx.handle_line("# comment").is_none());

        let stats = rx.stats();
        assert_eq!(stats.reports, 2);
        assert_eq!(stats.non_beacons, 1);
        assert_eq!(stats.malformed, 1);
        assert_eq!(stats.bad_lines, 1);
        assert_eq!(stats.beacons, 0);
    }
}
