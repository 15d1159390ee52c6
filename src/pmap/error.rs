use thiserror::Error;

/// Failures reported by [`PriorityMap`](super::PriorityMap).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `top()` or `pop()` on a map with no keys.
    #[error("priority map is empty")]
    Empty,

    /// A bucket was found with no keys in it. Only a bug in the bucket
    /// maintenance can produce this.
    #[error("inconsistent state: {0}")]
    Inconsistent(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
