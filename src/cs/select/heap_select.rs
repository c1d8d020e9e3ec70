use crate::error::{check_rank, Result};

/// Restores max-heap order for the subtree rooted at `start`, treating
/// `arr[..=end]` as the heap.
pub fn sift_down(arr: &mut [i32], start: usize, end: usize) {
    let mut parent = start;
    let mut child = 2 * parent + 1;

    while child <= end {
        // Pick the larger child
        if child < end && arr[child + 1] > arr[child] {
            child += 1;
        }
        if arr[parent] >= arr[child] {
            break;
        }
        arr.swap(parent, child);
        parent = child;
        child = 2 * parent + 1;
    }
}

/// Finds the `n`-th smallest (1-based) element of `arr` in place using a
/// bounded max-heap over the first `n` slots.
///
/// On success `arr[..n]` holds the `n` smallest values in heap order and
/// `arr[0]` equals the returned value. Runs in O(len · log n) regardless of
/// input order.
///
/// # Examples
///
/// ```
/// use nth_smallest::cs::select::heap_select_in_place;
///
/// let mut arr = [5, 2, 2, 1, 1, 3, 3, 3];
/// assert_eq!(heap_select_in_place(&mut arr, 5), Ok(3));
/// assert_eq!(arr[0], 3);
/// ```
pub fn heap_select_in_place(arr: &mut [i32], n: usize) -> Result<i32> {
    check_rank(n, arr.len())?;
    let last = n - 1;

    for i in (0..=last.saturating_sub(1) / 2).rev() {
        sift_down(arr, i, last);
    }

    let mut replaced = 0usize;
    for i in n..arr.len() {
        if arr[i] < arr[0] {
            arr[0] = arr[i];
            sift_down(arr, 0, last);
            replaced += 1;
        }
    }
    log::debug!(
        "heap select rank {} of {}: {} root replacements",
        n,
        arr.len(),
        replaced
    );

    Ok(arr[0])
}

/// Returns the `n`-th smallest (1-based) value of `values` using a bounded heap.
///
/// Works on a private copy; `values` itself is left untouched.
pub fn select_heap(values: &[i32], n: usize) -> Result<i32> {
    check_rank(n, values.len())?;
    let mut work = values.to_vec();
    heap_select_in_place(&mut work, n)
}
