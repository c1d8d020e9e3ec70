use std::fmt;
use std::str::FromStr;

use super::heap_select::heap_select_in_place;
use super::quickselect::quickselect_in_place;
use crate::error::{check_rank, Error, Result};

/// Which selection algorithm to run.
///
/// `Partition` (quickselect) is the default since it is faster on average.
/// `Heap` gives O(len · log n) behaviour independent of input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    #[default]
    Partition,
    Heap,
}

impl Strategy {
    /// Runs this strategy on `arr` in place. See [`quickselect_in_place`] and
    /// [`heap_select_in_place`] for the state of `arr` afterwards.
    pub fn select_in_place(self, arr: &mut [i32], n: usize) -> Result<i32> {
        match self {
            Strategy::Partition => quickselect_in_place(arr, n),
            Strategy::Heap => heap_select_in_place(arr, n),
        }
    }

    /// Runs this strategy on a private copy of `values`.
    pub fn select(self, values: &[i32], n: usize) -> Result<i32> {
        check_rank(n, values.len())?;
        let mut work = values.to_vec();
        self.select_in_place(&mut work, n)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Partition => write!(f, "partition"),
            Strategy::Heap => write!(f, "heap"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "partition" | "quickselect" => Ok(Strategy::Partition),
            "heap" => Ok(Strategy::Heap),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

/// Returns the `n`-th smallest (1-based) value of `values` with the default strategy.
///
/// # Examples
///
/// ```
/// use nth_smallest::select_nth_smallest;
///
/// assert_eq!(select_nth_smallest(&[3, 1, 4, 1, 5, 9, 2, 6], 8), Ok(9));
/// assert!(select_nth_smallest(&[1, 2, 3], 0).is_err());
/// ```
pub fn select_nth_smallest(values: &[i32], n: usize) -> Result<i32> {
    Strategy::default().select(values, n)
}

/// Returns the `n` smallest values of `values`, in unspecified order.
pub fn smallest_n(values: &[i32], n: usize, strategy: Strategy) -> Result<Vec<i32>> {
    check_rank(n, values.len())?;
    let mut work = values.to_vec();
    strategy.select_in_place(&mut work, n)?;
    work.truncate(n);
    Ok(work)
}
