use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Errors reported by the positional operations of a [`List`].
///
/// [`List`]: crate::List
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A position or a range bound falls outside of what the operation
    /// accepts. Reads accept `1..=len`, insertions accept `1..=len + 1`.
    #[error("position {position} is out of range for a list of length {len}")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("destination holds {capacity} element(s) but the list has {len}")]
    CapacityExceeded { capacity: usize, len: usize },
}
