//! Error type shared by the data holder and the coordinator.

use thiserror::Error;

use crate::Value;

/// Errors produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The lower bound of a requested range exceeds its upper bound.
    #[error("invalid range: lower bound {lo} exceeds upper bound {hi}")]
    InvalidRange { lo: Value, hi: Value },

    /// [`Coordinator::start`](crate::Coordinator::start) was called on an
    /// already bound coordinator.
    #[error("coordinator has already been started")]
    AlreadyStarted,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
