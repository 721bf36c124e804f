use actions::Revalidator;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Views held before new keys stop being cached.
pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct CachedView {
    generation: u64,
    view: Value,
}

/// Rendered views keyed by request path and query.
///
/// Every revalidation bumps a generation counter before it drops entries.
/// An insert re-reads the counter after writing and withdraws its own entry
/// if a revalidation started in between, so a read racing a mutation never
/// leaves its view behind. At most `capacity` views are held; once full,
/// views for new keys are served uncached.
#[derive(Debug, Clone)]
pub struct ViewCache {
    views: Arc<DashMap<String, CachedView>>,
    generation: Arc<AtomicU64>,
    capacity: usize,
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            views: Arc::new(DashMap::new()),
            generation: Arc::new(AtomicU64::new(0)),
            capacity,
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.views.get(key).map(|entry| entry.view.clone())
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Stores `view` unless the cache was revalidated after `generation` was
    /// read, or the cache is full.
    pub fn insert_if_current(&self, key: String, view: Value, generation: u64) {
        if self.generation() != generation {
            return;
        }
        if self.views.len() >= self.capacity && !self.views.contains_key(&key) {
            tracing::debug!(%key, "View cache full; serving uncached.");
            return;
        }

        self.views.insert(key.clone(), CachedView { generation, view });

        // Concurrent inserts can overshoot the capacity; the late one backs out.
        let evicted = self.views.len() > self.capacity;
        if evicted || self.generation() != generation {
            self.views.remove_if(&key, |_, cached| cached.generation == generation);
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl Revalidator for ViewCache {
    fn revalidate_path(&self, path: &str) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.views.retain(|key, _| !is_under(key, path));
        tracing::debug!(path, "Revalidated cached views.");
    }
}

// `key` is `path` itself, `path?…` or `path/…`.
fn is_under(key: &str, path: &str) -> bool {
    match key.strip_prefix(path) {
        Some(rest) => rest.is_empty() || rest.starts_with('?') || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn revalidation_drops_the_path_and_its_children_only() {
        let cache = ViewCache::new();
        let generation = cache.generation();
        cache.insert_if_current("/dashboard/investments?query=&page=1".into(), json!(1), generation);
        cache.insert_if_current("/dashboard/investments/abc/edit".into(), json!(2), generation);
        cache.insert_if_current("/dashboard/investments-archive".into(), json!(3), generation);
        cache.insert_if_current("/dashboard/companies".into(), json!(4), generation);

        cache.revalidate_path("/dashboard/investments");

        assert!(cache.get("/dashboard/investments?query=&page=1").is_none());
        assert!(cache.get("/dashboard/investments/abc/edit").is_none());
        assert_eq!(cache.get("/dashboard/investments-archive"), Some(json!(3)));
        assert_eq!(cache.get("/dashboard/companies"), Some(json!(4)));
    }

    #[test]
    fn stale_views_are_not_cached() {
        let cache = ViewCache::new();
        let generation = cache.generation();
        cache.revalidate_path("/dashboard/investments");
        cache.insert_if_current("/dashboard/investments?query=&page=1".into(), json!(1), generation);
        assert!(cache.is_empty());
    }

    #[test]
    fn full_cache_stops_taking_new_keys() {
        let cache = ViewCache::with_capacity(3);
        let generation = cache.generation();
        for i in 0..10 {
            cache.insert_if_current(format!("/dashboard/investments?query=q{i}&page=1"), json!(i), generation);
        }
        assert_eq!(cache.len(), 3);
        assert!(cache.get("/dashboard/investments?query=q9&page=1").is_none());

        // Existing keys can still be refreshed.
        cache.insert_if_current("/dashboard/investments?query=q0&page=1".into(), json!("new"), generation);
        assert_eq!(cache.get("/dashboard/investments?query=q0&page=1"), Some(json!("new")));
    }

    #[test]
    fn freed_space_is_reused_after_revalidation() {
        let cache = ViewCache::with_capacity(1);
        cache.insert_if_current("/dashboard/investments?query=a&page=1".into(), json!(1), cache.generation());
        cache.revalidate_path("/dashboard/investments");
        cache.insert_if_current("/dashboard/investments?query=b&page=1".into(), json!(2), cache.generation());
        assert_eq!(cache.get("/dashboard/investments?query=b&page=1"), Some(json!(2)));
    }

    #[test]
    fn revalidation_racing_an_insert_leaves_nothing_behind() {
        let cache = ViewCache::new();
        let key = "/dashboard/investments?query=&page=1";

        // The generation is read before the revalidation starts, as in a
        // handler whose fetch overlaps a mutation.
        let racer = cache.clone();
        let barrier = Arc::new(std::sync::Barrier::new(2));
        let signal = barrier.clone();
        let handle = std::thread::spawn(move || {
            signal.wait();
            racer.revalidate_path("/dashboard/investments");
        });

        let generation = cache.generation();
        barrier.wait();
        cache.insert_if_current(key.into(), json!("stale"), generation);
        handle.join().unwrap();

        // Whichever order the two ran in, a stale view is never left cached.
        assert!(cache.get(key).is_none());
    }
}
