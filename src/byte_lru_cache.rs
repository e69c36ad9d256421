use std::collections::HashMap;
use std::ptr::NonNull;

/// A value that can report its own logical size in bytes.
///
/// The cache accounts every entry as `key.len() + value.size()` against its
/// byte budget, so the stored value type decides what "size" means for it —
/// usually the payload length, not the in-memory footprint.
///
/// # Examples
///
/// ```rust
/// use byte_lru_cache::ByteSized;
///
/// struct Blob(Vec<u8>);
///
/// impl ByteSized for Blob {
///     fn size(&self) -> usize {
///         self.0.len()
///     }
/// }
/// ```
pub trait ByteSized {
    /// Returns the logical byte size of this value for budget accounting.
    fn size(&self) -> usize;
}

impl ByteSized for String {
    fn size(&self) -> usize {
        self.len()
    }
}

impl ByteSized for &str {
    fn size(&self) -> usize {
        self.len()
    }
}

impl ByteSized for Vec<u8> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl ByteSized for Box<[u8]> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> ByteSized for [u8; N] {
    fn size(&self) -> usize {
        N
    }
}

/// Callback invoked once for every entry evicted under capacity pressure.
///
/// The handler receives the evicted key and value by ownership, after the
/// entry has been fully removed from the cache. It runs synchronously inside
/// the eviction loop, so it should stay cheap (counters, metrics); anything
/// expensive extends the time the owning lock is held.
pub type EvictionHandler<V> = Box<dyn FnMut(String, V) + Send>;

// Internal node structure for the doubly linked list
struct Node<V> {
    key: String,
    value: V,
    prev: *mut Node<V>,
    next: *mut Node<V>,
}

impl<V> Node<V> {
    fn new(key: String, value: V) -> Self {
        Self {
            key,
            value,
            prev: std::ptr::null_mut(),
            next: std::ptr::null_mut(),
        }
    }
}

// Internal doubly linked list, ordered most-recently-used (head) to
// least-recently-used (tail).
struct DoublyLinkedList<V> {
    head: *mut Node<V>,
    tail: *mut Node<V>,
    len: usize,
}

impl<V> DoublyLinkedList<V> {
    fn new() -> Self {
        Self {
            head: std::ptr::null_mut(),
            tail: std::ptr::null_mut(),
            len: 0,
        }
    }

    // Insert node at the front of the list
    fn push_front(&mut self, node: *mut Node<V>) {
        unsafe {
            (*node).prev = std::ptr::null_mut();
            (*node).next = self.head;

            if !self.head.is_null() {
                (*self.head).prev = node;
            } else {
                // Empty list case
                self.tail = node;
            }
            self.head = node;
            self.len += 1;
        }
    }

    // Remove specified node
    fn remove(&mut self, node: *mut Node<V>) {
        unsafe {
            let prev = (*node).prev;
            let next = (*node).next;

            if !prev.is_null() {
                (*prev).next = next;
            } else {
                self.head = next;
            }

            if !next.is_null() {
                (*next).prev = prev;
            } else {
                self.tail = prev;
            }

            self.len -= 1;
        }
    }

    // Remove node from the back
    fn pop_back(&mut self) -> Option<*mut Node<V>> {
        if self.tail.is_null() {
            return None;
        }

        unsafe {
            let old_tail = self.tail;
            let prev = (*old_tail).prev;

            if !prev.is_null() {
                (*prev).next = std::ptr::null_mut();
                self.tail = prev;
            } else {
                self.head = std::ptr::null_mut();
                self.tail = std::ptr::null_mut();
            }

            self.len -= 1;
            Some(old_tail)
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    // Reinsert node at the front of the list
    fn reinsert_front(&mut self, node: *mut Node<V>) {
        self.remove(node);
        self.push_front(node);
    }
}

/// A byte-budgeted LRU cache. Not safe for concurrent use; callers must
/// serialize access (see [`SyncByteCache`](crate::SyncByteCache)).
///
/// Entries live in a doubly linked list ordered from most- to
/// least-recently-used, with a `HashMap` index from key to list node for
/// O(1) lookup, promotion, and removal. The cache charges
/// `key.len() + value.size()` per entry and evicts from the tail whenever
/// the total exceeds `max_bytes`. A `max_bytes` of 0 disables eviction
/// entirely.
///
/// # Examples
///
/// ```rust
/// use byte_lru_cache::ByteLruCache;
///
/// let mut cache: ByteLruCache<String> = ByteLruCache::new(64, None);
/// cache.add("key1".to_string(), "value1".to_string());
/// assert_eq!(cache.get("key1"), Some("value1".to_string()));
/// ```
pub struct ByteLruCache<V: ByteSized> {
    max_bytes: usize,
    used_bytes: usize,
    list: DoublyLinkedList<V>,
    map: HashMap<String, NonNull<Node<V>>>,
    on_evicted: Option<EvictionHandler<V>>,
}

// The raw node pointers are owned exclusively by this cache and never
// escape it, so moving the whole cache across threads is safe.
unsafe impl<V: ByteSized + Send> Send for ByteLruCache<V> {}

impl<V: ByteSized> ByteLruCache<V> {
    /// Creates a new cache with the given byte budget.
    ///
    /// # Arguments
    ///
    /// * `max_bytes` - Maximum total of `key.len() + value.size()` over all
    ///   entries; 0 means unbounded (eviction disabled)
    /// * `on_evicted` - Optional handler invoked once per evicted entry
    pub fn new(max_bytes: usize, on_evicted: Option<EvictionHandler<V>>) -> Self {
        Self {
            max_bytes,
            used_bytes: 0,
            list: DoublyLinkedList::new(),
            map: HashMap::new(),
            on_evicted,
        }
    }

    /// Retrieves a value from the cache by its key.
    ///
    /// A hit promotes the entry to most-recently-used and returns a clone
    /// of the value. A miss has no side effect.
    ///
    /// # Returns
    ///
    /// * `Some(V)` if the key exists
    /// * `None` if the key doesn't exist
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        if let Some(entry) = self.map.get(key) {
            let node_ptr = entry.as_ptr();
            // Move to front of list
            self.list.reinsert_front(node_ptr);
            Some(unsafe { (*node_ptr).value.clone() })
        } else {
            None
        }
    }

    /// Inserts a key-value pair, then evicts from the tail until the byte
    /// budget is satisfied.
    ///
    /// If the key already exists its value is replaced in place, the entry
    /// is promoted to most-recently-used, and `used_bytes` shifts by the
    /// size difference between the new and old value. Otherwise a new entry
    /// is charged at `key.len() + value.size()`.
    ///
    /// A single value larger than the whole budget is inserted and then
    /// immediately evicted by the loop: it is never retained, but it does
    /// pass through the eviction handler once.
    pub fn add(&mut self, key: String, value: V) {
        if let Some(entry) = self.map.get(key.as_str()) {
            let node_ptr = entry.as_ptr();
            unsafe {
                let old_size = (*node_ptr).value.size();
                // Update before replacing; the delta may be negative.
                self.used_bytes = self.used_bytes - old_size + value.size();
                (*node_ptr).value = value;
            }
            // Move to front of list
            self.list.reinsert_front(node_ptr);
        } else {
            self.used_bytes += key.len() + value.size();
            let node_ptr = Box::into_raw(Box::new(Node::new(key.clone(), value)));
            self.list.push_front(node_ptr);
            self.map
                .insert(key, unsafe { NonNull::new_unchecked(node_ptr) });
        }

        while self.max_bytes != 0 && self.used_bytes > self.max_bytes {
            self.remove_oldest();
        }
    }

    /// Evicts the least-recently-used entry; no-op when the cache is empty.
    ///
    /// The entry is removed from both the list and the index and its bytes
    /// are released before the eviction handler (if any) receives the owned
    /// key and value.
    pub fn remove_oldest(&mut self) {
        if let Some(node_ptr) = self.list.pop_back() {
            let node = unsafe { Box::from_raw(node_ptr) };
            self.map.remove(node.key.as_str());
            self.used_bytes -= node.key.len() + node.value.size();
            if let Some(handler) = self.on_evicted.as_mut() {
                handler(node.key, node.value);
            }
        }
    }

    /// Returns the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.list.len() == 0
    }

    /// Returns the bytes currently charged against the budget.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Returns the configured byte budget (0 = unbounded).
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    // Keys from most- to least-recently-used, for order assertions.
    #[cfg(test)]
    fn keys_front_to_back(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.list.len());
        let mut current = self.list.head;
        while !current.is_null() {
            unsafe {
                keys.push((*current).key.clone());
                current = (*current).next;
            }
        }
        keys
    }
}

impl<V: ByteSized> Drop for ByteLruCache<V> {
    fn drop(&mut self) {
        // Free all nodes
        let mut current = self.list.head;
        while !current.is_null() {
            unsafe {
                let next = (*current).next;
                drop(Box::from_raw(current));
                current = next;
            }
        }
    }
}
