//! Name-based dispatch onto the tracers.
//!
//! [`TraceRequest`] carries an algorithm id and every argument any tracer
//! might need; [`generate`] checks that the ones the chosen algorithm needs are
//! present, bounds sort inputs by [`MAX_SORT_INPUT`], and runs exactly one
//! tracer. [`Trace`] is the matching sum type,
//! serialized as `{"algorithm": "...", "steps": [...]}`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use algotrace_core::step::{
    BfsStep, BinarySearchStep, BubbleSortStep, CountingSortStep, Described, DfsStep,
    InsertionSortStep, LinearSearchStep, MergeSortStep, PivotStrategy, QuickSortStep,
    RadixSortStep, SelectionSortStep,
};
use algotrace_core::{AlgorithmId, Category, Graph, NodeId};

use crate::error::{TraceError, MAX_SORT_INPUT};
use crate::graph::{bfs, dfs};
use crate::search;
use crate::sort;

/// One algorithm plus its arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRequest {
    pub algorithm: AlgorithmId,
    /// Input of the search and sort tracers.
    #[serde(default)]
    pub array: Vec<i64>,
    /// Value sought by the search tracers.
    #[serde(default)]
    pub target: Option<i64>,
    #[serde(default)]
    pub pivot: PivotStrategy,
    /// Graph for the traversal tracers.
    #[serde(default)]
    pub graph: Option<Graph>,
    #[serde(default)]
    pub start: Option<NodeId>,
    /// Node the traversal tracers look for.
    #[serde(default)]
    pub goal: Option<NodeId>,
}

impl TraceRequest {
    pub fn new(algorithm: AlgorithmId) -> Self {
        TraceRequest {
            algorithm,
            array: Vec::new(),
            target: None,
            pivot: PivotStrategy::default(),
            graph: None,
            start: None,
            goal: None,
        }
    }

    pub fn with_array(mut self, array: Vec<i64>) -> Self {
        self.array = array;
        self
    }

    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_pivot(mut self, pivot: PivotStrategy) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_graph(
        mut self,
        graph: Graph,
        start: impl Into<NodeId>,
        goal: impl Into<NodeId>,
    ) -> Self {
        self.graph = Some(graph);
        self.start = Some(start.into());
        self.goal = Some(goal.into());
        self
    }

    fn require<'a, T>(&self, value: &'a Option<T>, argument: &'static str) -> Result<&'a T, TraceError> {
        value.as_ref().ok_or(TraceError::MissingArgument {
            algorithm: self.algorithm,
            argument,
        })
    }
}

/// A generated trace, one variant per algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", content = "steps", rename_all = "kebab-case")]
pub enum Trace {
    LinearSearch(Vec<LinearSearchStep>),
    BinarySearch(Vec<BinarySearchStep>),
    BubbleSort(Vec<BubbleSortStep>),
    InsertionSort(Vec<InsertionSortStep>),
    SelectionSort(Vec<SelectionSortStep>),
    MergeSort(Vec<MergeSortStep>),
    QuickSort(Vec<QuickSortStep>),
    CountingSort(Vec<CountingSortStep>),
    RadixSort(Vec<RadixSortStep>),
    Bfs(Vec<BfsStep>),
    Dfs(Vec<DfsStep>),
}

/// Applies `$body` to the step vector of whichever variant `$trace` holds.
macro_rules! with_steps {
    ($trace:expr, $steps:ident => $body:expr) => {
        match $trace {
            Trace::LinearSearch($steps) => $body,
            Trace::BinarySearch($steps) => $body,
            Trace::BubbleSort($steps) => $body,
            Trace::InsertionSort($steps) => $body,
            Trace::SelectionSort($steps) => $body,
            Trace::MergeSort($steps) => $body,
            Trace::QuickSort($steps) => $body,
            Trace::CountingSort($steps) => $body,
            Trace::RadixSort($steps) => $body,
            Trace::Bfs($steps) => $body,
            Trace::Dfs($steps) => $body,
        }
    };
}

impl Trace {
    pub fn algorithm(&self) -> AlgorithmId {
        match self {
            Trace::LinearSearch(_) => AlgorithmId::LinearSearch,
            Trace::BinarySearch(_) => AlgorithmId::BinarySearch,
            Trace::BubbleSort(_) => AlgorithmId::BubbleSort,
            Trace::InsertionSort(_) => AlgorithmId::InsertionSort,
            Trace::SelectionSort(_) => AlgorithmId::SelectionSort,
            Trace::MergeSort(_) => AlgorithmId::MergeSort,
            Trace::QuickSort(_) => AlgorithmId::QuickSort,
            Trace::CountingSort(_) => AlgorithmId::CountingSort,
            Trace::RadixSort(_) => AlgorithmId::RadixSort,
            Trace::Bfs(_) => AlgorithmId::Bfs,
            Trace::Dfs(_) => AlgorithmId::Dfs,
        }
    }

    pub fn len(&self) -> usize {
        with_steps!(self, steps => steps.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Step descriptions in order.
    pub fn descriptions(&self) -> Vec<&str> {
        with_steps!(self, steps => steps.iter().map(Described::description).collect())
    }

    /// Serializes step `index` alone, `None` past the end.
    pub fn step_json(&self, index: usize) -> Option<serde_json::Result<serde_json::Value>> {
        with_steps!(self, steps => steps.get(index).map(serde_json::to_value))
    }
}

/// Runs the tracer `request` names. Random pivots use the thread RNG.
pub fn generate(request: &TraceRequest) -> Result<Trace, TraceError> {
    generate_with_rng(request, &mut rand::thread_rng())
}

/// Runs the tracer `request` names, drawing random pivots from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    request: &TraceRequest,
    rng: &mut R,
) -> Result<Trace, TraceError> {
    let array = request.array.as_slice();
    if request.algorithm.category() == Category::Sort && array.len() > MAX_SORT_INPUT {
        return Err(TraceError::InputTooLarge {
            algorithm: request.algorithm,
            len: array.len(),
            limit: MAX_SORT_INPUT,
        });
    }
    let trace = match request.algorithm {
        AlgorithmId::LinearSearch => {
            let target = *request.require(&request.target, "target")?;
            Trace::LinearSearch(search::generate_linear_search_steps(array, target))
        }
        AlgorithmId::BinarySearch => {
            let target = *request.require(&request.target, "target")?;
            Trace::BinarySearch(search::generate_binary_search_steps(array, target))
        }
        AlgorithmId::BubbleSort => Trace::BubbleSort(sort::generate_bubble_sort_steps(array)),
        AlgorithmId::InsertionSort => {
            Trace::InsertionSort(sort::generate_insertion_sort_steps(array))
        }
        AlgorithmId::SelectionSort => {
            Trace::SelectionSort(sort::generate_selection_sort_steps(array))
        }
        AlgorithmId::MergeSort => Trace::MergeSort(sort::generate_merge_sort_steps(array)),
        AlgorithmId::QuickSort => Trace::QuickSort(sort::generate_quick_sort_steps_with_rng(
            array,
            request.pivot,
            rng,
        )),
        AlgorithmId::CountingSort => {
            Trace::CountingSort(sort::generate_counting_sort_steps(array)?)
        }
        AlgorithmId::RadixSort => Trace::RadixSort(sort::generate_radix_sort_steps(array)),
        AlgorithmId::Bfs | AlgorithmId::Dfs => {
            let graph = request.require(&request.graph, "graph")?;
            let start = request.require(&request.start, "start node")?;
            let goal = request.require(&request.goal, "goal node")?;
            if request.algorithm == AlgorithmId::Bfs {
                Trace::Bfs(bfs::generate_bfs_steps(graph, start, goal))
            } else {
                Trace::Dfs(dfs::generate_dfs_steps(graph, start, goal))
            }
        }
    };
    Ok(trace)
}
