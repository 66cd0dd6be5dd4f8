//! TTL-bounded memoization of validation results.
//!
//! The cache maps a request fingerprint to its previously computed report.
//! An entry is never served once its age reaches the configured TTL;
//! expired entries are removed lazily on access and periodically by a
//! background sweep thread, which bounds memory between accesses.
//!
//! The cache is an explicit component with its own lifecycle: construct it
//! with a [`CacheConfig`], share it behind the owning engine, and drop (or
//! [`ResultCache::shutdown`]) it to stop the sweeper. Several instances
//! can coexist; nothing here is process-global.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use idv_model::{Fingerprint, ValidationReport};

/// Cache behavior knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum entry age. Default 5 minutes.
    pub ttl: Duration,
    /// How often the background sweep removes expired entries. Typically
    /// finer-grained than the TTL. Default 60 seconds.
    pub sweep_interval: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_sweep_interval(mut self, sweep_interval: Duration) -> Self {
        self.sweep_interval = sweep_interval;
        self
    }
}

/// Hit/miss counters, cheap enough to keep on the hot path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

struct CacheEntry {
    report: ValidationReport,
    created_at: Instant,
}

struct Shared {
    ttl: Duration,
    entries: Mutex<HashMap<Fingerprint, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Shared {
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<Fingerprint, CacheEntry>> {
        // A poisoned lock means a panic mid-insert/remove; both are
        // whole-entry operations, so the map itself is still coherent.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn purge_expired(&self, now: Instant) -> usize {
        let ttl = self.ttl;
        let mut entries = self.lock_entries();
        let before = entries.len();
        entries.retain(|_, entry| now.duration_since(entry.created_at) < ttl);
        before - entries.len()
    }
}

/// Read-through cache of `Fingerprint -> ValidationReport`.
pub struct ResultCache {
    shared: Arc<Shared>,
    stop: Option<mpsc::Sender<()>>,
    sweeper: Option<JoinHandle<()>>,
}

impl ResultCache {
    /// Start a cache and its sweep thread.
    pub fn new(config: CacheConfig) -> Self {
        let shared = Arc::new(Shared {
            ttl: config.ttl,
            entries: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        });
        let (stop, stop_rx) = mpsc::channel();
        let sweep_shared = Arc::clone(&shared);
        let interval = config.sweep_interval;
        let sweeper = std::thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        let removed = sweep_shared.purge_expired(Instant::now());
                        if removed > 0 {
                            tracing::debug!(removed, "swept expired validation results");
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        Self {
            shared,
            stop: Some(stop),
            sweeper: Some(sweeper),
        }
    }

    /// Look up a fingerprint. Expired entries count as absent and are
    /// removed on the spot.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<ValidationReport> {
        self.get_at(fingerprint, Instant::now())
    }

    /// [`ResultCache::get`] against an explicit clock reading; lets tests
    /// exercise expiry without sleeping.
    pub fn get_at(&self, fingerprint: &Fingerprint, now: Instant) -> Option<ValidationReport> {
        let mut entries = self.shared.lock_entries();
        let fresh = match entries.get(fingerprint) {
            Some(entry) => now.duration_since(entry.created_at) < self.shared.ttl,
            None => false,
        };
        if fresh {
            self.shared.hits.fetch_add(1, Ordering::Relaxed);
            return entries.get(fingerprint).map(|entry| entry.report.clone());
        }
        entries.remove(fingerprint);
        self.shared.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Store a report, replacing any previous entry whole.
    pub fn put(&self, fingerprint: Fingerprint, report: ValidationReport) {
        self.put_at(fingerprint, report, Instant::now());
    }

    /// [`ResultCache::put`] against an explicit clock reading.
    pub fn put_at(&self, fingerprint: Fingerprint, report: ValidationReport, now: Instant) {
        let mut entries = self.shared.lock_entries();
        entries.insert(
            fingerprint,
            CacheEntry {
                report,
                created_at: now,
            },
        );
    }

    /// Remove expired entries immediately; returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.shared.purge_expired(Instant::now())
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.shared.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.shared.hits.load(Ordering::Relaxed),
            misses: self.shared.misses.load(Ordering::Relaxed),
        }
    }

    /// Stop the sweep thread and wait for it to exit. Also runs on drop.
    pub fn shutdown(mut self) {
        self.stop_sweeper();
    }

    fn stop_sweeper(&mut self) {
        if let Some(stop) = self.stop.take() {
            // Receiver sees either the message or the disconnect.
            let _ = stop.send(());
        }
        if let Some(sweeper) = self.sweeper.take() {
            let _ = sweeper.join();
        }
    }
}

impl Drop for ResultCache {
    fn drop(&mut self) {
        self.stop_sweeper();
    }
}
