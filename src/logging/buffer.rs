//! In-memory history of recent log lines
//!
//! Keeps the last N rendered lines so diagnostics survive even when the log
//! file cannot be written.

use std::collections::VecDeque;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Default number of lines kept
pub const RECENT_CAPACITY: usize = 200;

/// Thread-safe bounded FIFO of rendered log lines
pub struct RecentMessages {
    lines: RwLock<VecDeque<String>>,
    capacity: usize,
}

impl RecentMessages {
    /// Create an empty history holding at most `capacity` lines
    ///
    /// A capacity of zero is bumped to one so the newest line is always kept.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append a line, evicting the oldest one if full
    ///
    /// Eviction and insertion happen under one write lock.
    pub fn push(&self, line: String) {
        let mut lines = self.write();
        if lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the current lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.read().iter().cloned().collect()
    }

    /// Get the number of lines in the history
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of lines kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // A panic elsewhere while holding the lock leaves the deque intact,
    // so keep serving it.
    fn read(&self) -> RwLockReadGuard<'_, VecDeque<String>> {
        self.lines.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<String>> {
        self.lines.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for RecentMessages {
    fn default() -> Self {
        Self::new(RECENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_push_and_snapshot() {
        let recent = RecentMessages::new(10);

        recent.push("message 1".to_string());
        recent.push("warning 1".to_string());
        recent.push("error 1".to_string());

        assert_eq!(recent.len(), 3);
        assert_eq!(recent.snapshot(), vec!["message 1", "warning 1", "error 1"]);
    }

    #[test]
    fn test_capacity() {
        let recent = RecentMessages::new(3);

        for i in 0..5 {
            recent.push(format!("msg {}", i));
        }

        assert_eq!(recent.len(), 3);
        assert_eq!(recent.snapshot(), vec!["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_newest() {
        let recent = RecentMessages::new(0);
        recent.push("a".to_string());
        recent.push("b".to_string());
        assert_eq!(recent.capacity(), 1);
        assert_eq!(recent.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let recent = RecentMessages::default();
        recent.push("first".to_string());

        let snapshot = recent.snapshot();
        recent.push("second".to_string());

        assert_eq!(snapshot, vec!["first"]);
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn test_concurrent_pushes_stay_bounded() {
        let recent = Arc::new(RecentMessages::new(50));

        std::thread::scope(|s| {
            for t in 0..8 {
                let recent = Arc::clone(&recent);
                s.spawn(move || {
                    for i in 0..100 {
                        recent.push(format!("t{}-{}", t, i));
                        assert!(recent.len() <= 50);
                    }
                });
            }
        });

        let lines = recent.snapshot();
        assert_eq!(lines.len(), 50);
        let mut unique = lines.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let recent = Arc::new(RecentMessages::new(5));
        recent.push("before".to_string());

        let poisoner = Arc::clone(&recent);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lines.write().unwrap();
            panic!("poison");
        })
        .join();

        recent.push("after".to_string());
        assert_eq!(recent.snapshot(), vec!["before", "after"]);
    }
}
