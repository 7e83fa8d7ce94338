//! Core error types for algotrace-core.
//!
//! Uses `thiserror` for structured, matchable error variants. None of these
//! are raised by the tracers themselves; they cover graph construction and
//! the string-to-enum parsing that front-ends perform before calling a tracer.

use crate::id::NodeId;
use thiserror::Error;

/// Core errors produced by the algotrace-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A node id was added to a graph twice.
    #[error("duplicate node: '{id}'")]
    DuplicateNode { id: NodeId },

    /// An edge endpoint does not name a node of the graph.
    #[error("unknown node: '{id}'")]
    UnknownNode { id: NodeId },

    /// A preset graph name did not match any known preset.
    #[error("unknown graph preset: '{name}', expected tree/cycle/complex")]
    UnknownPreset { name: String },

    /// An algorithm name did not match any catalog entry.
    #[error("unknown algorithm: '{name}'")]
    UnknownAlgorithm { name: String },

    /// A category name did not match search/sort/graph.
    #[error("unknown category: '{name}', expected search/sort/graph")]
    UnknownCategory { name: String },

    /// A pivot strategy name did not match first/last/random/median.
    #[error("unknown pivot strategy: '{name}', expected first/last/random/median")]
    UnknownPivotStrategy { name: String },
}
