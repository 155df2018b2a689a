//! Error types for arraypool.

use std::collections::TryReserveError;
use std::fmt;

/// Errors reported by the fallible pool operations.
///
/// The plain `new`/`get`/`release` calls never fail; only the `try_*`
/// variants surface allocation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Backing storage for a buffer could not be reserved.
    Alloc(TryReserveError),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::Alloc(e) => write!(f, "buffer allocation failed: {}", e),
        }
    }
}

impl std::error::Error for PoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PoolError::Alloc(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for PoolError {
    fn from(e: TryReserveError) -> Self {
        PoolError::Alloc(e)
    }
}
