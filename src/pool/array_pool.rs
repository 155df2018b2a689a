//! Free-list pool of reusable `Vec<T>` buffers.

use log::{debug, trace};

use crate::config::PoolConfig;
use crate::error::PoolError;

use super::Pooled;

/// A pool of growable buffers that recycles their backing storage.
///
/// Buffers are handed out as plain `Vec<T>` by [`get`](Self::get) and come
/// back through [`release`](Self::release), which clears them without
/// freeing their allocation. Buffers created on a pool miss are sized to
/// the pool's capacity hint: the largest length ever seen at release time,
/// or the initial capacity if that is larger.
///
/// The pool does no locking. All mutating calls take `&mut self`; share it
/// across threads behind a `Mutex` or keep one pool per thread.
///
/// # Example
///
/// ```
/// use arraypool::ArrayPool;
///
/// let mut pool: ArrayPool<u32> = ArrayPool::new(0, 0);
/// assert_eq!(pool.size(), 0);
///
/// let mut buf = pool.get();
/// assert_eq!(pool.size(), 1);
///
/// buf.push(123);
/// pool.release(buf);
///
/// // Drawn from the free list: no new allocation, length reset.
/// let buf = pool.get();
/// assert!(buf.is_empty());
/// assert_eq!(pool.size(), 1);
/// ```
#[derive(Debug)]
pub struct ArrayPool<T> {
    /// Capacity given to freshly created buffers. Never decreases.
    capacity_hint: usize,
    /// Buffers ever constructed by this pool.
    created: usize,
    /// Available buffers, all of length 0. Used as a stack.
    free: Vec<Vec<T>>,
}

impl<T> ArrayPool<T> {
    /// Creates a pool with `pool_size` pre-allocated buffers of capacity
    /// `initial_capacity`.
    pub fn new(pool_size: usize, initial_capacity: usize) -> Self {
        Self::with_config(PoolConfig::new(pool_size, initial_capacity))
    }

    /// Creates a pool from a [`PoolConfig`].
    pub fn with_config(config: PoolConfig) -> Self {
        let mut pool = Self::empty(config);
        pool.free.reserve_exact(config.pool_size());
        for _ in 0..config.pool_size() {
            let buf = pool.create();
            pool.free.push(buf);
        }
        pool
    }

    /// Like [`new`](Self::new), but reports allocation failure instead of
    /// aborting.
    pub fn try_new(pool_size: usize, initial_capacity: usize) -> Result<Self, PoolError> {
        Self::try_with_config(PoolConfig::new(pool_size, initial_capacity))
    }

    /// Like [`with_config`](Self::with_config), but reports allocation
    /// failure instead of aborting.
    pub fn try_with_config(config: PoolConfig) -> Result<Self, PoolError> {
        let mut pool = Self::empty(config);
        pool.free.try_reserve_exact(config.pool_size())?;
        for _ in 0..config.pool_size() {
            let buf = pool.try_create()?;
            pool.free.push(buf);
        }
        Ok(pool)
    }

    fn empty(config: PoolConfig) -> Self {
        debug!(
            "creating array pool: pool_size={} initial_capacity={}",
            config.pool_size(),
            config.initial_capacity()
        );
        Self {
            capacity_hint: config.initial_capacity(),
            created: 0,
            free: Vec::new(),
        }
    }

    /// Takes a buffer from the pool, creating one if none is free.
    ///
    /// The returned buffer always has length 0.
    pub fn get(&mut self) -> Vec<T> {
        match self.free.pop() {
            Some(buf) => buf,
            None => self.create(),
        }
    }

    /// Like [`get`](Self::get), but reports allocation failure instead of
    /// aborting. On failure the pool is left unchanged.
    pub fn try_get(&mut self) -> Result<Vec<T>, PoolError> {
        match self.free.pop() {
            Some(buf) => Ok(buf),
            None => self.try_create(),
        }
    }

    /// Returns a buffer to the pool.
    ///
    /// If the buffer grew past the capacity hint, the hint is raised to its
    /// length so later pool misses allocate enough up front. The buffer is
    /// then cleared, keeping its allocation, and pushed on the free list.
    ///
    /// Buffers that did not come from this pool are accepted as is; they do
    /// not count towards [`size`](Self::size).
    pub fn release(&mut self, mut buf: Vec<T>) {
        if buf.len() > self.capacity_hint {
            debug!(
                "raising capacity hint from {} to {}",
                self.capacity_hint,
                buf.len()
            );
            self.capacity_hint = buf.len();
        }
        buf.clear();
        self.free.push(buf);
    }

    /// Borrows a buffer that is released back to the pool when the guard
    /// is dropped.
    ///
    /// ```
    /// use arraypool::ArrayPool;
    ///
    /// let mut pool: ArrayPool<u8> = ArrayPool::default();
    /// {
    ///     let mut buf = pool.scoped();
    ///     buf.extend_from_slice(b"scratch");
    ///     assert_eq!(buf.len(), 7);
    /// }
    /// assert_eq!(pool.available(), 1);
    /// assert_eq!(pool.capacity_hint(), 7);
    /// ```
    pub fn scoped(&mut self) -> Pooled<'_, T> {
        let buf = self.get();
        Pooled::new(self, buf)
    }

    /// Returns the number of buffers this pool has ever created.
    ///
    /// This is a cumulative allocation count, not the number of buffers
    /// currently free or in use. Use it to tune the constructor arguments
    /// at a call site.
    pub fn size(&self) -> usize {
        self.created
    }

    /// Returns the capacity used for buffers created on a pool miss.
    pub fn capacity_hint(&self) -> usize {
        self.capacity_hint
    }

    /// Returns the number of buffers currently on the free list.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    fn create(&mut self) -> Vec<T> {
        self.created += 1;
        trace!(
            "allocating buffer #{} with capacity {}",
            self.created, self.capacity_hint
        );
        Vec::with_capacity(self.capacity_hint)
    }

    fn try_create(&mut self) -> Result<Vec<T>, PoolError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(self.capacity_hint)?;
        self.created += 1;
        trace!(
            "allocating buffer #{} with capacity {}",
            self.created, self.capacity_hint
        );
        Ok(buf)
    }
}

impl<T> Default for ArrayPool<T> {
    fn default() -> Self {
        Self::with_config(PoolConfig::default())
    }
}
