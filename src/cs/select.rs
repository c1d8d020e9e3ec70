pub mod heap_select;
pub mod quickselect;
pub mod selector;

pub use heap_select::{heap_select_in_place, select_heap, sift_down};
pub use quickselect::{partition, quickselect_in_place, select_partition};
pub use selector::{select_nth_smallest, smallest_n, Strategy};
