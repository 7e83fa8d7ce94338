//! Step-trace generators for classic algorithms.
//!
//! Every tracer is a pure function from its inputs to a fully materialized
//! `Vec` of step records (see [`algotrace_core::step`]). Calls share no state
//! and never mutate their input, so the same arguments always give the same
//! trace. The one exception is a random quick-sort pivot, which draws from the
//! RNG the caller passes in.

pub mod error;
pub mod graph;
pub mod request;
pub mod search;
pub mod sort;

pub use error::{TraceError, MAX_COUNT_RANGE, MAX_SORT_INPUT};
pub use graph::bfs::generate_bfs_steps;
pub use graph::dfs::generate_dfs_steps;
pub use request::{generate, generate_with_rng, Trace, TraceRequest};
pub use search::{generate_binary_search_steps, generate_linear_search_steps};
pub use sort::{
    generate_bubble_sort_steps, generate_counting_sort_steps, generate_insertion_sort_steps,
    generate_merge_sort_steps, generate_quick_sort_steps, generate_quick_sort_steps_with_rng,
    generate_radix_sort_steps, generate_selection_sort_steps,
};
