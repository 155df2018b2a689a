//! Scope guard that releases its buffer on drop.

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

use super::ArrayPool;

/// A buffer borrowed from an [`ArrayPool`] for the lifetime of a scope.
///
/// Derefs to `Vec<T>`. When dropped, the buffer goes back to the pool via
/// [`ArrayPool::release`]. Created by [`ArrayPool::scoped`].
pub struct Pooled<'a, T> {
    pool: &'a mut ArrayPool<T>,
    buf: Vec<T>,
}

impl<'a, T> Pooled<'a, T> {
    pub(crate) fn new(pool: &'a mut ArrayPool<T>, buf: Vec<T>) -> Self {
        Self { pool, buf }
    }

    /// Takes the buffer out of the guard without returning it to the pool.
    ///
    /// The buffer still counts towards [`ArrayPool::size`]; hand it back
    /// later with [`ArrayPool::release`] if it should be reused.
    pub fn detach(mut self) -> Vec<T> {
        let buf = mem::take(&mut self.buf);
        // Only an empty, unallocated Vec and a borrow remain.
        mem::forget(self);
        buf
    }
}

impl<T> Deref for Pooled<'_, T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.buf
    }
}

impl<T> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.buf
    }
}

impl<T> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        self.pool.release(mem::take(&mut self.buf));
    }
}

impl<T: fmt::Debug> fmt::Debug for Pooled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pooled").field(&self.buf).finish()
    }
}
