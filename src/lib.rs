//! A byte-budgeted LRU (Least Recently Used) cache in Rust.
//!
//! This crate provides the local storage layer for a caching node: entries
//! are charged by byte size (`key.len() + value.size()`) rather than by
//! count, and the least-recently-used entry is evicted whenever the total
//! would exceed a fixed budget. Two layers are exposed:
//!
//! 1. [`ByteLruCache`] - The single-threaded core: recency ordering, byte
//!    accounting, and the eviction loop with an optional eviction handler
//! 2. [`SyncByteCache`] - A mutex-guarded wrapper safe to share across
//!    threads, with lazy construction of the core on first write
//!
//! # Features
//!
//! - Strict LRU eviction driven by a configurable byte budget (0 = unbounded)
//! - O(1) get, add, and evict via a doubly linked list plus a key index
//! - Exact byte accounting, including through value replacement
//! - Optional per-eviction callback for lightweight bookkeeping
//! - Thread-safe wrapper with a single lock and a total operation order
//!
//! # Examples
//!
//! ```rust
//! use byte_lru_cache::{ByteLruCache, SyncByteCache};
//!
//! // Core cache, caller-serialized: budget of 16 bytes.
//! let mut core: ByteLruCache<String> = ByteLruCache::new(16, None);
//! core.add("key1".to_string(), "value1".to_string());
//! assert_eq!(core.get("key1"), Some("value1".to_string()));
//!
//! // Shared cache for concurrent callers.
//! let shared: SyncByteCache<Vec<u8>> = SyncByteCache::new(1 << 20);
//! shared.add("blob".to_string(), vec![1, 2, 3]);
//! assert_eq!(shared.get("blob"), Some(vec![1, 2, 3]));
//! ```

pub mod byte_lru_cache;
mod ffi;
pub mod sync_byte_cache;

pub use byte_lru_cache::{ByteLruCache, ByteSized, EvictionHandler};
pub use sync_byte_cache::SyncByteCache;
