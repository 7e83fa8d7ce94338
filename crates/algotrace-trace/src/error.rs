//! Error types for algotrace-trace.
//!
//! Almost every tracer is infallible. The exceptions are counting sort, which
//! refuses to allocate a counter per value for very wide ranges, and request
//! dispatch, which checks that the arguments an algorithm needs are present
//! and that sort inputs fit within [`MAX_SORT_INPUT`].

use algotrace_core::AlgorithmId;
use thiserror::Error;

/// Widest `max - min + 1` value range counting sort will allocate for.
///
/// Every accumulate step snapshots the whole count array, so trace size grows
/// with the square of this range.
pub const MAX_COUNT_RANGE: u64 = 1 << 10;

/// Longest array [`generate`](crate::generate) will hand to a sorting tracer.
///
/// Sort steps snapshot the whole array and the quadratic sorts emit O(n²)
/// steps, so trace size is cubic in the input length.
pub const MAX_SORT_INPUT: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// The value range would need more than `limit` counters.
    #[error("value range [{min}, {max}] needs more than {limit} counters")]
    CountRangeTooLarge { min: i64, max: i64, limit: u64 },

    /// A sort request's array is longer than `limit`.
    #[error("{algorithm} input has {len} elements, more than the limit of {limit}")]
    InputTooLarge {
        algorithm: AlgorithmId,
        len: usize,
        limit: usize,
    },

    /// A request omitted an argument its algorithm requires.
    #[error("{algorithm} requires a {argument}")]
    MissingArgument {
        algorithm: AlgorithmId,
        argument: &'static str,
    },
}
