//! Build metrics.
//!
//! Counters are atomics so concurrent page builds can share one instance
//! through an `Arc`. Each builder owns its own metrics; there is no global.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct BuildMetrics {
    /// Content files read and parsed from disk
    loads: AtomicUsize,

    /// Loads answered from the loader's memo cache
    cache_hits: AtomicUsize,

    /// Pages served from a locale other than the requested one because the
    /// requested file did not exist
    locale_fallbacks: AtomicUsize,

    /// Pages served from the fallback locale because the requested locale's
    /// document failed validation
    validation_fallbacks: AtomicUsize,

    /// Pages rendered successfully
    pages_built: AtomicUsize,

    /// Pages that failed with a fatal error
    pages_failed: AtomicUsize,
}

/// Snapshot of `BuildMetrics`, written into the build manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub loads: usize,
    pub cache_hits: usize,
    pub locale_fallbacks: usize,
    pub validation_fallbacks: usize,
    pub pages_built: usize,
    pub pages_failed: usize,
    /// Percentage of built pages that showed a fallback notice
    pub fallback_rate: f64,
}

impl BuildMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_fallback(&self) {
        self.locale_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_fallback(&self) {
        self.validation_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_page_built(&self) {
        self.pages_built.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_page_failed(&self) {
        self.pages_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn locale_fallbacks(&self) -> usize {
        self.locale_fallbacks.load(Ordering::Relaxed)
    }

    pub fn validation_fallbacks(&self) -> usize {
        self.validation_fallbacks.load(Ordering::Relaxed)
    }

    pub fn pages_built(&self) -> usize {
        self.pages_built.load(Ordering::Relaxed)
    }

    pub fn pages_failed(&self) -> usize {
        self.pages_failed.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> MetricsReport {
        let built = self.pages_built();
        let fallbacks = self.locale_fallbacks() + self.validation_fallbacks();
        let fallback_rate = if built > 0 {
            (fallbacks as f64 / built as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            loads: self.loads(),
            cache_hits: self.cache_hits(),
            locale_fallbacks: self.locale_fallbacks(),
            validation_fallbacks: self.validation_fallbacks(),
            pages_built: built,
            pages_failed: self.pages_failed(),
            fallback_rate,
        }
    }
}
