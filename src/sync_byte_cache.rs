use super::byte_lru_cache::{ByteLruCache, ByteSized};
use parking_lot::Mutex;

/// A thread-safe wrapper around [`ByteLruCache`] for shared use.
///
/// A single mutex protects the whole cache: every `get` and `add` holds it
/// for the full call, including any eviction loop an `add` triggers, so all
/// operations on one instance are totally ordered and the recency order any
/// caller observes is consistent with that total order.
///
/// The inner cache is constructed lazily on the first `add`, inside the same
/// critical section that protects all later access. Lookups against a cache
/// that has never been written miss without constructing anything.
///
/// # Examples
///
/// ```rust
/// use byte_lru_cache::SyncByteCache;
/// use std::sync::Arc;
/// use std::thread;
///
/// let cache: Arc<SyncByteCache<String>> = Arc::new(SyncByteCache::new(1 << 20));
/// let writer = Arc::clone(&cache);
/// thread::spawn(move || {
///     writer.add("key1".to_string(), "value1".to_string());
/// })
/// .join()
/// .unwrap();
/// ```
pub struct SyncByteCache<V: ByteSized> {
    inner: Mutex<Option<ByteLruCache<V>>>,
    max_bytes: usize,
}

impl<V: ByteSized> SyncByteCache<V> {
    /// Creates a new cache with the given byte budget (0 = unbounded).
    ///
    /// No memory is reserved until the first `add`.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            inner: Mutex::new(None),
            max_bytes,
        }
    }

    /// Looks up a key, promoting it to most-recently-used on a hit.
    ///
    /// # Returns
    ///
    /// * `Some(V)` if the key exists
    /// * `None` if the key doesn't exist, or nothing was ever added
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let mut guard = self.inner.lock();
        guard.as_mut()?.get(key)
    }

    /// Inserts a key-value pair, evicting least-recently-used entries as
    /// needed to respect the byte budget.
    pub fn add(&self, key: String, value: V) {
        let mut guard = self.inner.lock();
        guard
            .get_or_insert_with(|| ByteLruCache::new(self.max_bytes, None))
            .add(key, value);
    }

    /// Returns the number of entries in the cache (0 before the first add).
    pub fn len(&self) -> usize {
        self.inner.lock().as_ref().map_or(0, |cache| cache.len())
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the configured byte budget (0 = unbounded).
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }
}
