use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Shared counters tracking a slicing run. Cloning hands out another handle
/// to the same counters, so a caller can poll from a different thread than
/// the one doing the work.
#[derive(Clone, Default)]
pub struct Progress(Arc<ProgressInner>);

#[derive(Default)]
struct ProgressInner {
    complete: AtomicU64,
    total: AtomicU64,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_total(&self, total: u64) {
        self.0.total.store(total, Ordering::Relaxed);
    }

    pub fn add_complete(&self, count: u64) {
        self.0.complete.fetch_add(count, Ordering::Relaxed);
    }

    pub fn completed(&self) -> u64 {
        self.0.complete.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.0.total.load(Ordering::Relaxed)
    }

    pub fn fraction(&self) -> f32 {
        let total = self.0.total.load(Ordering::Relaxed);
        if total == 0 {
            return 0.0;
        }

        self.0.complete.load(Ordering::Relaxed) as f32 / total as f32
    }

    pub fn finished(&self) -> bool {
        let total = self.0.total.load(Ordering::Relaxed);
        total != 0 && self.0.complete.load(Ordering::Relaxed) >= total
    }

    pub fn set_finished(&self) {
        let total = self.0.total.load(Ordering::Relaxed);
        self.0.complete.store(total, Ordering::Relaxed);
    }
}
