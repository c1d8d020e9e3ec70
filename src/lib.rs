pub mod cs;
pub mod error;

pub use cs::select::{
    heap_select_in_place, quickselect_in_place, select_heap, select_nth_smallest,
    select_partition, smallest_n, Strategy,
};
pub use error::{Error, Result};
