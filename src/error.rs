use std::error;
use std::fmt;
use std::result;

/// The side a rotation promotes a child from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Errors raised by tree restructuring and invariant checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A rotation was requested on a handle that is empty or has no child to promote.
    InvalidRotation { direction: Direction },
    /// An in-order traversal produced a key smaller than its predecessor.
    OrderViolation,
    /// A node has a balance factor outside of `[-1, 1]`.
    Unbalanced { balance: i32 },
    /// A handle caches `(height, balance)` values that disagree with its subtree.
    StaleMetrics { expected: (i32, i32), found: (i32, i32) },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidRotation { direction } => {
                write!(f, "cannot rotate {}: no child to promote", direction)
            },
            Error::OrderViolation => write!(f, "keys are out of order"),
            Error::Unbalanced { balance } => {
                write!(f, "balance factor {} is outside of [-1, 1]", balance)
            },
            Error::StaleMetrics { expected, found } => write!(
                f,
                "cached [height:balance] is [{}:{}], expected [{}:{}]",
                found.0, found.1, expected.0, expected.1,
            ),
        }
    }
}

impl error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = result::Result<T, Error>;
