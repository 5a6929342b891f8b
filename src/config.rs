//! Range and seeding configuration for the data holder.

use crate::{Error, Result, Value};

/// An inclusive `[lo, hi]` range, validated so that `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    lo: Value,
    hi: Value,
}

impl Bounds {
    /// Lower bound used when none is configured.
    pub const DEFAULT_LO: Value = 1;
    /// Upper bound used when none is configured.
    pub const DEFAULT_HI: Value = 10;

    /// Build a range, rejecting `lo > hi` with [`Error::InvalidRange`].
    ///
    /// ```rust
    /// use passive_view::{Bounds, Error};
    ///
    /// assert!(Bounds::new(5, 5).is_ok());
    /// assert_eq!(Bounds::new(3, 1), Err(Error::InvalidRange { lo: 3, hi: 1 }));
    /// ```
    pub fn new(lo: Value, hi: Value) -> Result<Self> {
        if lo > hi {
            return Err(Error::InvalidRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> Value {
        self.lo
    }

    pub fn hi(&self) -> Value {
        self.hi
    }

    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: Value) -> bool {
        (self.lo..=self.hi).contains(&value)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            lo: Self::DEFAULT_LO,
            hi: Self::DEFAULT_HI,
        }
    }
}

/// Configuration handed to a [`Coordinator`](crate::Coordinator).
///
/// `seed` makes the random source deterministic; `None` seeds it from the
/// operating system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub bounds: Bounds,
    pub seed: Option<u64>,
}

impl Config {
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
