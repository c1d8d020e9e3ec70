use crate::error::{check_rank, Result};

/// Lomuto partition of `arr[low..=high]` around the last element.
///
/// Elements `<=` the pivot are moved to the left, so runs of duplicates never
/// stall the search. Returns the pivot's final index.
pub fn partition(arr: &mut [i32], low: usize, high: usize) -> usize {
    let pivot = arr[high];
    let mut i = low;
    for j in low..high {
        if arr[j] <= pivot {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}

/// Finds the `n`-th smallest (1-based) element of `arr` in place.
///
/// On success the first `n` slots of `arr` hold the `n` smallest values, in
/// no particular order. The pivot is always the last element of the active
/// range, so already sorted or reverse sorted input costs O(len²).
///
/// # Examples
///
/// ```
/// use nth_smallest::cs::select::quickselect_in_place;
///
/// let mut arr = [3, 1, 4, 1, 5, 9, 2, 6];
/// assert_eq!(quickselect_in_place(&mut arr, 4), Ok(3));
/// ```
pub fn quickselect_in_place(arr: &mut [i32], n: usize) -> Result<i32> {
    check_rank(n, arr.len())?;
    let target = n - 1;
    let mut low = 0;
    let mut high = arr.len() - 1;
    let mut steps = 0usize;

    loop {
        let p = partition(arr, low, high);
        steps += 1;
        log::trace!("partition [{}, {}] placed pivot at {}", low, high, p);

        if p == target {
            log::debug!(
                "quickselect found rank {} of {} after {} partitions",
                n,
                arr.len(),
                steps
            );
            return Ok(arr[p]);
        } else if p > target {
            // p > target >= low, so p - 1 cannot underflow
            high = p - 1;
        } else {
            low = p + 1;
        }
    }
}

/// Returns the `n`-th smallest (1-based) value of `values` using quickselect.
///
/// Works on a private copy; `values` itself is left untouched.
pub fn select_partition(values: &[i32], n: usize) -> Result<i32> {
    check_rank(n, values.len())?;
    let mut work = values.to_vec();
    quickselect_in_place(&mut work, n)
}
