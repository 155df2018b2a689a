//! Buffer pooling.
//!
//! - [`ArrayPool`] - Free-list pool of `Vec<T>` with a high-water-mark
//!   capacity hint
//! - [`Pooled`] - Scope guard returning its buffer to the pool on drop

mod array_pool;
mod scoped;

pub use array_pool::ArrayPool;
pub use scoped::Pooled;
