//! Static catalog of every traced algorithm.
//!
//! Front-ends use this to list algorithms, group them by category and show
//! their complexity without hard-coding the table themselves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identity of a traced algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmId {
    LinearSearch,
    BinarySearch,
    BubbleSort,
    InsertionSort,
    SelectionSort,
    MergeSort,
    QuickSort,
    CountingSort,
    RadixSort,
    Bfs,
    Dfs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Search,
    Sort,
    Graph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Catalog entry for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub id: AlgorithmId,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub stable: bool,
    pub tags: &'static [&'static str],
}

static CATALOG: [AlgorithmInfo; 11] = [
    AlgorithmInfo {
        id: AlgorithmId::LinearSearch,
        title: "Linear Search",
        description: "Sequential scan through every element",
        category: Category::Search,
        difficulty: Difficulty::Beginner,
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        stable: false,
        tags: &["search", "array", "sequential"],
    },
    AlgorithmInfo {
        id: AlgorithmId::BinarySearch,
        title: "Binary Search",
        description: "Halves a sorted array until the target is found",
        category: Category::Search,
        difficulty: Difficulty::Beginner,
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        stable: false,
        tags: &["search", "array", "sorted"],
    },
    AlgorithmInfo {
        id: AlgorithmId::BubbleSort,
        title: "Bubble Sort",
        description: "Repeatedly swaps adjacent out-of-order pairs",
        category: Category::Sort,
        difficulty: Difficulty::Beginner,
        time_complexity: "O(n²)",
        space_complexity: "O(1)",
        stable: true,
        tags: &["sort", "comparison", "in-place"],
    },
    AlgorithmInfo {
        id: AlgorithmId::InsertionSort,
        title: "Insertion Sort",
        description: "Grows a sorted prefix by inserting one element at a time",
        category: Category::Sort,
        difficulty: Difficulty::Beginner,
        time_complexity: "O(n²)",
        space_complexity: "O(1)",
        stable: true,
        tags: &["sort", "comparison", "in-place"],
    },
    AlgorithmInfo {
        id: AlgorithmId::SelectionSort,
        title: "Selection Sort",
        description: "Selects the minimum of the unsorted suffix on every pass",
        category: Category::Sort,
        difficulty: Difficulty::Beginner,
        time_complexity: "O(n²)",
        space_complexity: "O(1)",
        stable: false,
        tags: &["sort", "selection", "simple"],
    },
    AlgorithmInfo {
        id: AlgorithmId::MergeSort,
        title: "Merge Sort",
        description: "Stable divide-and-conquer sort merging sorted halves",
        category: Category::Sort,
        difficulty: Difficulty::Intermediate,
        time_complexity: "O(n log n)",
        space_complexity: "O(n)",
        stable: true,
        tags: &["sort", "divide-and-conquer", "stable"],
    },
    AlgorithmInfo {
        id: AlgorithmId::QuickSort,
        title: "Quick Sort",
        description: "Partitions around a pivot and recurses on both sides",
        category: Category::Sort,
        difficulty: Difficulty::Intermediate,
        time_complexity: "O(n log n)",
        space_complexity: "O(log n)",
        stable: false,
        tags: &["sort", "divide-and-conquer", "recursion"],
    },
    AlgorithmInfo {
        id: AlgorithmId::CountingSort,
        title: "Counting Sort",
        description: "Counts occurrences of each value and places them by prefix sums",
        category: Category::Sort,
        difficulty: Difficulty::Intermediate,
        time_complexity: "O(n + k)",
        space_complexity: "O(n + k)",
        stable: true,
        tags: &["sort", "non-comparison", "integer"],
    },
    AlgorithmInfo {
        id: AlgorithmId::RadixSort,
        title: "Radix Sort",
        description: "Buckets elements digit by digit, least significant first",
        category: Category::Sort,
        difficulty: Difficulty::Advanced,
        time_complexity: "O(d · (n + b))",
        space_complexity: "O(n + b)",
        stable: true,
        tags: &["sort", "non-comparison", "digits"],
    },
    AlgorithmInfo {
        id: AlgorithmId::Bfs,
        title: "Breadth-First Search",
        description: "Explores a graph level by level with a queue",
        category: Category::Graph,
        difficulty: Difficulty::Intermediate,
        time_complexity: "O(V + E)",
        space_complexity: "O(V)",
        stable: false,
        tags: &["graph", "search", "queue"],
    },
    AlgorithmInfo {
        id: AlgorithmId::Dfs,
        title: "Depth-First Search",
        description: "Explores a graph as deep as possible with a stack",
        category: Category::Graph,
        difficulty: Difficulty::Intermediate,
        time_complexity: "O(V + E)",
        space_complexity: "O(V)",
        stable: false,
        tags: &["graph", "search", "stack"],
    },
];

/// Every catalog entry, searches first.
pub fn catalog() -> &'static [AlgorithmInfo] {
    &CATALOG
}

/// Entries belonging to `category`, in catalog order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static AlgorithmInfo> {
    CATALOG.iter().filter(move |info| info.category == category)
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 11] = [
        AlgorithmId::LinearSearch,
        AlgorithmId::BinarySearch,
        AlgorithmId::BubbleSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::MergeSort,
        AlgorithmId::QuickSort,
        AlgorithmId::CountingSort,
        AlgorithmId::RadixSort,
        AlgorithmId::Bfs,
        AlgorithmId::Dfs,
    ];

    pub fn info(self) -> &'static AlgorithmInfo {
        // CATALOG is declared in the same order as ALL.
        &CATALOG[self as usize]
    }

    pub fn category(self) -> Category {
        self.info().category
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmId::LinearSearch => "linear-search",
            AlgorithmId::BinarySearch => "binary-search",
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::InsertionSort => "insertion-sort",
            AlgorithmId::SelectionSort => "selection-sort",
            AlgorithmId::MergeSort => "merge-sort",
            AlgorithmId::QuickSort => "quick-sort",
            AlgorithmId::CountingSort => "counting-sort",
            AlgorithmId::RadixSort => "radix-sort",
            AlgorithmId::Bfs => "bfs",
            AlgorithmId::Dfs => "dfs",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let alias = match normalized.as_str() {
            "quicksort" => "quick-sort",
            "mergesort" => "merge-sort",
            "breadth-first-search" => "bfs",
            "depth-first-search" => "dfs",
            other => other,
        };
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.as_str() == alias)
            .ok_or_else(|| CoreError::UnknownAlgorithm { name: s.to_string() })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Search => "search",
            Category::Sort => "sort",
            Category::Graph => "graph",
        })
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(Category::Search),
            "sort" => Ok(Category::Sort),
            "graph" => Ok(Category::Graph),
            _ => Err(CoreError::UnknownCategory { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_matches_id_for_every_entry() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.info().id, id);
        }
    }

    #[test]
    fn ids_parse_from_display_form_and_aliases() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.to_string().parse::<AlgorithmId>().unwrap(), id);
        }
        assert_eq!("QuickSort".parse::<AlgorithmId>().unwrap(), AlgorithmId::QuickSort);
        assert_eq!("merge_sort".parse::<AlgorithmId>().unwrap(), AlgorithmId::MergeSort);
        assert_eq!(
            "breadth-first-search".parse::<AlgorithmId>().unwrap(),
            AlgorithmId::Bfs
        );
        assert!("dijkstra".parse::<AlgorithmId>().is_err());
    }

    #[test]
    fn by_category_partitions_catalog() {
        assert_eq!(by_category(Category::Search).count(), 2);
        assert_eq!(by_category(Category::Sort).count(), 7);
        assert_eq!(by_category(Category::Graph).count(), 2);
        assert_eq!(catalog().len(), AlgorithmId::ALL.len());
    }

    #[test]
    fn stability_flags_match_known_properties() {
        assert!(AlgorithmId::MergeSort.info().stable);
        assert!(AlgorithmId::CountingSort.info().stable);
        assert!(!AlgorithmId::QuickSort.info().stable);
        assert!(!AlgorithmId::SelectionSort.info().stable);
    }
}
