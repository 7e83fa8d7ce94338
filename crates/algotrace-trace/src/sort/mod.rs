//! Sorting tracers. Each takes the input by reference and works on a copy.

pub mod bubble;
pub mod counting;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

pub use bubble::generate_bubble_sort_steps;
pub use counting::generate_counting_sort_steps;
pub use insertion::generate_insertion_sort_steps;
pub use merge::generate_merge_sort_steps;
pub use quick::{generate_quick_sort_steps, generate_quick_sort_steps_with_rng};
pub use radix::generate_radix_sort_steps;
pub use selection::generate_selection_sort_steps;
