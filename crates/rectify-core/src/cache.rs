//! Shared cache of computed reference curves.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::curve::IvCurve;

/// Cache of reference curves keyed by device name.
///
/// Passed by reference into the sweep engine; there is no ambient global
/// state. Curves are stored behind `Arc`, so `get` hands out a snapshot and
/// a concurrent `put` for the same name replaces the entry atomically
/// without disturbing readers. Entries live until invalidated or replaced
/// by a forced recompute.
#[derive(Debug, Default)]
pub struct CurveCache {
    inner: RwLock<HashMap<String, Arc<IvCurve>>>,
}

impl CurveCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached curve for a device, if any.
    pub fn get(&self, name: &str) -> Option<Arc<IvCurve>> {
        self.read().get(name).cloned()
    }

    /// Store a curve for a device, replacing any previous entry.
    ///
    /// Returns the shared handle now held by the cache.
    pub fn put(&self, name: &str, curve: IvCurve) -> Arc<IvCurve> {
        let curve = Arc::new(curve);
        self.write().insert(name.to_string(), Arc::clone(&curve));
        curve
    }

    /// Remove the entry for a device. Returns true if one existed.
    pub fn invalidate(&self, name: &str) -> bool {
        self.write().remove(name).is_some()
    }

    /// Whether a curve is cached for the device.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Number of cached curves.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.write().clear();
    }

    // The map stays usable after a panic in another holder; recover the
    // guard instead of propagating poison.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<IvCurve>>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<IvCurve>>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_curve(scale: f64) -> IvCurve {
        IvCurve::from_pairs([(0.0, 0.0), (0.5, 1e-3 * scale), (1.0, 0.1 * scale)])
    }

    #[test]
    fn test_put_then_get() {
        let cache = CurveCache::new();
        assert!(cache.get("1N4007").is_none());

        let stored = cache.put("1N4007", sample_curve(1.0));
        let fetched = cache.get("1N4007").expect("curve should be cached");
        assert!(Arc::ptr_eq(&stored, &fetched), "get should return the stored handle");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_replaces_existing() {
        let cache = CurveCache::new();
        cache.put("1N4007", sample_curve(1.0));
        cache.put("1N4007", sample_curve(2.0));

        let fetched = cache.get("1N4007").unwrap();
        assert_eq!(fetched.current()[2], 0.2, "second put should replace the first");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate() {
        let cache = CurveCache::new();
        cache.put("1N4007", sample_curve(1.0));

        assert!(cache.invalidate("1N4007"));
        assert!(!cache.invalidate("1N4007"), "second invalidate finds nothing");
        assert!(!cache.contains("1N4007"));
    }

    #[test]
    fn test_independent_entries() {
        let cache = CurveCache::new();
        cache.put("1N4007", sample_curve(1.0));
        cache.put("1N4148", sample_curve(3.0));

        cache.invalidate("1N4007");
        assert!(cache.contains("1N4148"), "other devices are unaffected");

        cache.clear();
        assert!(cache.is_empty());
    }
}
