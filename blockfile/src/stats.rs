use std::sync::atomic::{AtomicU64, Ordering};

/// Operation counters for a device, growing monotonically for the life of the
/// handle. An increment records that an operation was issued, not that it
/// succeeded, so a failed transfer still counts.
///
/// Increments are atomic; concurrent callers never lose updates.
#[derive(Debug, Default)]
pub struct DiskStats {
    reads: AtomicU64,
    writes: AtomicU64,
    syncs: AtomicU64,
}

impl DiskStats {
    pub(crate) fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_sync(&self) {
        self.syncs.fetch_add(1, Ordering::Relaxed);
    }

    /// Blocks read since the device was opened.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Blocks written since the device was opened.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Durability barriers issued since the device was opened.
    pub fn syncs(&self) -> u64 {
        self.syncs.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn counters_start_at_zero() {
        let stats = DiskStats::default();
        assert_eq!(stats.reads(), 0);
        assert_eq!(stats.writes(), 0);
        assert_eq!(stats.syncs(), 0);
    }

    #[test]
    fn each_record_call_bumps_its_counter_exactly_once() {
        let stats = DiskStats::default();
        stats.record_read();
        stats.record_read();
        stats.record_read();
        stats.record_write();
        stats.record_sync();
        stats.record_sync();

        assert_eq!(stats.reads(), 3);
        assert_eq!(stats.writes(), 1);
        assert_eq!(stats.syncs(), 2);
    }

    #[test]
    fn concurrent_increments_are_never_lost() {
        let stats = Arc::new(DiskStats::default());

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record_write();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(stats.writes(), 4000);
    }
}
