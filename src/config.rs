//! Configuration for pool construction.
//!
//! - [`PoolConfig`] - Eager pool size and initial buffer capacity

/// Default number of buffers allocated up front.
pub const DEFAULT_POOL_SIZE: usize = 0;

/// Default backing capacity for newly created buffers.
pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

/// Configuration for an [`ArrayPool`](crate::ArrayPool).
///
/// `pool_size` buffers are allocated eagerly, each with room for
/// `initial_capacity` elements. The capacity only seeds the pool's capacity
/// hint; the hint grows as larger buffers are released.
///
/// # Example
///
/// ```
/// use arraypool::{ArrayPool, PoolConfig};
///
/// let config = PoolConfig::default()
///     .with_pool_size(4)
///     .with_initial_capacity(256);
///
/// let pool: ArrayPool<u32> = ArrayPool::with_config(config);
/// assert_eq!(pool.size(), 4);
/// assert_eq!(pool.capacity_hint(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    pool_size: usize,
    initial_capacity: usize,
}

impl PoolConfig {
    /// Creates a new configuration.
    pub const fn new(pool_size: usize, initial_capacity: usize) -> Self {
        Self {
            pool_size,
            initial_capacity,
        }
    }

    /// Sets the number of buffers to pre-allocate.
    pub fn with_pool_size(mut self, size: usize) -> Self {
        self.pool_size = size;
        self
    }

    /// Sets the starting capacity hint.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Returns the number of buffers to pre-allocate.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Returns the starting capacity hint.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE, DEFAULT_INITIAL_CAPACITY)
    }
}
