//! arraypool
//!
//! A reusable pool of growable buffers for hot loops.
//!
//! Code that repeatedly needs a temporary `Vec<T>` (scratch space for a
//! parser, a per-frame list of hits, a batch of pending writes) can take one
//! from an [`ArrayPool`] and give it back when done. Released buffers keep
//! their allocation, so the steady state performs no allocation at all.
//!
//! The crate intentionally:
//! - does NOT lock (one pool per thread, or wrap it yourself)
//! - does NOT shrink buffers
//! - does NOT track which buffers are outstanding
//!
//! # Usage
//!
//! ```
//! use arraypool::ArrayPool;
//!
//! let mut pool: ArrayPool<u32> = ArrayPool::new(5, 6);
//! assert_eq!(pool.size(), 5);
//!
//! for frame in 0..100u32 {
//!     let mut hits = pool.get();
//!     hits.extend((0..frame % 10).map(|i| i * frame));
//!     // ... use hits ...
//!     pool.release(hits);
//! }
//!
//! // Every frame was served from the pre-allocated buffers.
//! assert_eq!(pool.size(), 5);
//! assert_eq!(pool.capacity_hint(), 9);
//! ```
//!
//! # Scoped
//!
//! ```
//! use arraypool::ArrayPool;
//!
//! let mut pool: ArrayPool<char> = ArrayPool::default();
//! let upper: String = {
//!     let mut scratch = pool.scoped();
//!     scratch.extend("pool".chars().map(|c| c.to_ascii_uppercase()));
//!     scratch.iter().collect()
//! };
//! assert_eq!(upper, "POOL");
//! assert_eq!(pool.available(), 1);
//! ```
//!
//! # Logging
//!
//! Allocation and capacity-hint events are emitted through the [`log`]
//! facade at `trace` and `debug` level. No logger is installed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod pool;

//
// Public surface
//

pub use config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_POOL_SIZE, PoolConfig};
pub use error::PoolError;
pub use pool::{ArrayPool, Pooled};
