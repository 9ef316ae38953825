use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// In-memory read counters keyed by slug. Clones share the same map.
#[derive(Clone, Default, Debug)]
pub struct ReadCounts {
    counts: Arc<Mutex<HashMap<String, u64>>>,
}

impl ReadCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for `slug`, 0 if it has never been marked.
    pub fn get(&self, slug: &str) -> u64 {
        self.lock().get(slug).copied().unwrap_or(0)
    }

    /// Bumps the counter for `slug` and returns the new value.
    pub fn increment(&self, slug: &str) -> u64 {
        let mut counts = self.lock();
        let count = counts.entry(slug.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn reset(&self) {
        self.lock().clear();
    }

    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.lock().clone()
    }

    // A panic while holding the lock cannot leave a half-written counter.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_slug_reads_zero() {
        let counts = ReadCounts::new();
        assert_eq!(counts.get("anything"), 0);
        assert_eq!(counts.get(""), 0);
        assert!(counts.snapshot().is_empty());
    }

    #[test]
    fn increment_returns_running_total() {
        let counts = ReadCounts::new();
        assert_eq!(counts.increment("1984"), 1);
        assert_eq!(counts.increment("1984"), 2);
        assert_eq!(counts.increment("1984"), 3);
        assert_eq!(counts.get("1984"), 3);
    }

    #[test]
    fn counters_are_independent() {
        let counts = ReadCounts::new();
        counts.increment("1984");
        counts.increment("1984");
        counts.increment("moby-dick");

        assert_eq!(counts.get("1984"), 2);
        assert_eq!(counts.get("moby-dick"), 1);
        assert_eq!(counts.get("pride-and-prejudice"), 0);
    }

    #[test]
    fn clones_share_state_and_reset_clears() {
        let counts = ReadCounts::new();
        let handle = counts.clone();
        handle.increment("emma");
        assert_eq!(counts.get("emma"), 1);

        counts.reset();
        assert_eq!(handle.get("emma"), 0);
    }

    #[test]
    fn concurrent_increments_are_all_counted() {
        let counts = ReadCounts::new();
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let counts = counts.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        counts.increment("1984");
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }
        assert_eq!(counts.get("1984"), 800);
    }
}
