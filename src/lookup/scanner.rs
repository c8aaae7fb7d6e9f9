// ==========================================
// License range scanner
// ==========================================
// Fixed-size worker pool over an independent license range,
// first-match-wins: the first worker to hit the target name raises
// the stop flag, feeding stops, remaining workers drain and exit.
// Per-license faults are logged and skipped.
// ==========================================

use crate::lookup::client::{LawyerDetails, LicenseLookup};
use crate::report::normalize::normalize;
use crossbeam_channel::bounded;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tracing::{info, warn};

/// Name pair the scan is looking for, NFKC-normalized once at
/// construction so comparison and payload normalization agree.
#[derive(Debug, Clone)]
pub struct NameTarget {
    first_name: String,
    last_name: String,
}

impl NameTarget {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: normalize(first_name).logical,
            last_name: normalize(last_name).logical,
        }
    }

    fn matches(&self, details: &LawyerDetails) -> bool {
        let first = details.first_name.as_deref().map(|n| normalize(n).logical);
        let last = details.last_name.as_deref().map(|n| normalize(n).logical);
        first.as_deref() == Some(&self.first_name) && last.as_deref() == Some(&self.last_name)
    }
}

/// First directory entry matching the target.
#[derive(Debug, Clone)]
pub struct ScanMatch {
    pub license: u32,
    pub details: LawyerDetails,
}

/// Scan a license range with a fixed-size worker pool.
///
/// Returns the first match, or None when the range is exhausted.
/// `worker_count` must be > 0.
pub fn scan_license_range<C>(
    client: &C,
    range: RangeInclusive<u32>,
    target: &NameTarget,
    worker_count: usize,
) -> Option<ScanMatch>
where
    C: LicenseLookup + Sync,
{
    assert!(worker_count > 0, "worker_count must be > 0");

    let (job_tx, job_rx) = bounded::<u32>(worker_count * 2);
    let (match_tx, match_rx) = bounded::<ScanMatch>(worker_count);
    let stop = AtomicBool::new(false);

    info!(
        start = *range.start(),
        end = *range.end(),
        worker_count,
        "starting license scan"
    );

    thread::scope(|scope| {
        for worker_id in 0..worker_count {
            let job_rx = job_rx.clone();
            let match_tx = match_tx.clone();
            let stop = &stop;
            scope.spawn(move || {
                while let Ok(license) = job_rx.recv() {
                    if stop.load(Ordering::Relaxed) {
                        break;
                    }
                    match client.fetch(license) {
                        Ok(Some(details)) if target.matches(&details) => {
                            stop.store(true, Ordering::Relaxed);
                            info!(worker_id, license, "match found");
                            let _ = match_tx.try_send(ScanMatch { license, details });
                            break;
                        }
                        Ok(_) => {}
                        Err(e) => {
                            warn!(worker_id, license, error = %e, "lookup failed, skipping");
                        }
                    }
                }
            });
        }

        // Feed until the range is exhausted or a worker signalled
        for license in range {
            if stop.load(Ordering::Relaxed) {
                break;
            }
            if job_tx.send(license).is_err() {
                break;
            }
        }
        drop(job_tx);
    });

    drop(match_tx);
    match_rx.try_recv().ok()
}
