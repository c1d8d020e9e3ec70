use thiserror::Error;

/// Errors produced by the selection routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested 1-based rank is outside `1..=len`.
    #[error("rank {rank} is out of range for a collection of {len} elements")]
    InvalidRank { rank: usize, len: usize },

    /// A strategy name could not be parsed.
    #[error("unknown selection strategy: {0}")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks that `rank` is a valid 1-based rank for a collection of `len` elements.
pub(crate) fn check_rank(rank: usize, len: usize) -> Result<()> {
    if rank == 0 || rank > len {
        log::debug!("rejecting rank {} for {} elements", rank, len);
        return Err(Error::InvalidRank { rank, len });
    }
    Ok(())
}
