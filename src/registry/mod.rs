//! Static registry of the built-in algorithms
//!
//! The set of algorithms is closed: every identifier is an enum variant and
//! resolution is a match, so an unknown name can only come from user input
//! and is rejected up front.

use std::fmt;

/// Algorithm family. Selects which dataset generator and which step
/// procedures apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Sorting,
    Tree,
    Graph,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::Sorting => write!(f, "sorting"),
            Family::Tree => write!(f, "tree"),
            Family::Graph => write!(f, "graph"),
        }
    }
}

/// Stable identifier of one registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    Bubble,
    Merge,
    Quick,
    Insertion,
    Selection,
    Inorder,
    Preorder,
    Postorder,
    Bst,
    Bfs,
    Dfs,
    Dijkstra,
}

/// Display metadata for one registry entry.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub complexity: &'static str,
    pub family: Family,
}

impl AlgorithmId {
    /// Every registry entry, in presentation order.
    pub const ALL: [AlgorithmId; 12] = [
        AlgorithmId::Bubble,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Insertion,
        AlgorithmId::Selection,
        AlgorithmId::Inorder,
        AlgorithmId::Preorder,
        AlgorithmId::Postorder,
        AlgorithmId::Bst,
        AlgorithmId::Bfs,
        AlgorithmId::Dfs,
        AlgorithmId::Dijkstra,
    ];

    /// Resolve a textual identifier. Returns `None` for anything outside
    /// the registry.
    pub fn parse(name: &str) -> Option<AlgorithmId> {
        match name {
            "bubble" => Some(AlgorithmId::Bubble),
            "merge" => Some(AlgorithmId::Merge),
            "quick" => Some(AlgorithmId::Quick),
            "insertion" => Some(AlgorithmId::Insertion),
            "selection" => Some(AlgorithmId::Selection),
            "inorder" => Some(AlgorithmId::Inorder),
            "preorder" => Some(AlgorithmId::Preorder),
            "postorder" => Some(AlgorithmId::Postorder),
            "bst" => Some(AlgorithmId::Bst),
            "bfs" => Some(AlgorithmId::Bfs),
            "dfs" => Some(AlgorithmId::Dfs),
            "dijkstra" => Some(AlgorithmId::Dijkstra),
            _ => None,
        }
    }

    /// The textual identifier this entry resolves from.
    pub fn id(&self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Merge => "merge",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Selection => "selection",
            AlgorithmId::Inorder => "inorder",
            AlgorithmId::Preorder => "preorder",
            AlgorithmId::Postorder => "postorder",
            AlgorithmId::Bst => "bst",
            AlgorithmId::Bfs => "bfs",
            AlgorithmId::Dfs => "dfs",
            AlgorithmId::Dijkstra => "dijkstra",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            AlgorithmId::Bubble
            | AlgorithmId::Merge
            | AlgorithmId::Quick
            | AlgorithmId::Insertion
            | AlgorithmId::Selection => Family::Sorting,
            AlgorithmId::Inorder
            | AlgorithmId::Preorder
            | AlgorithmId::Postorder
            | AlgorithmId::Bst => Family::Tree,
            AlgorithmId::Bfs | AlgorithmId::Dfs | AlgorithmId::Dijkstra => Family::Graph,
        }
    }

    /// `bst` is descriptive-only: it carries metadata but has no step
    /// procedure.
    pub fn is_runnable(&self) -> bool {
        !matches!(self, AlgorithmId::Bst)
    }

    pub fn info(&self) -> AlgorithmInfo {
        match self {
            AlgorithmId::Bubble => AlgorithmInfo {
                name: "Bubble Sort",
                description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                complexity: "O(n²)",
                family: Family::Sorting,
            },
            AlgorithmId::Merge => AlgorithmInfo {
                name: "Merge Sort",
                description: "Divides the array into halves, sorts them recursively, then merges the sorted halves.",
                complexity: "O(n log n)",
                family: Family::Sorting,
            },
            AlgorithmId::Quick => AlgorithmInfo {
                name: "Quick Sort",
                description: "Picks a pivot element and partitions the array around it, recursively sorting the partitions.",
                complexity: "O(n log n) avg",
                family: Family::Sorting,
            },
            AlgorithmId::Insertion => AlgorithmInfo {
                name: "Insertion Sort",
                description: "Builds the final sorted array one item at a time by inserting each element into its correct position.",
                complexity: "O(n²)",
                family: Family::Sorting,
            },
            AlgorithmId::Selection => AlgorithmInfo {
                name: "Selection Sort",
                description: "Repeatedly finds the minimum element from the unsorted part and puts it at the beginning.",
                complexity: "O(n²)",
                family: Family::Sorting,
            },
            AlgorithmId::Inorder => AlgorithmInfo {
                name: "In-Order Traversal",
                description: "Visits left subtree, root, then right subtree. Returns sorted order for BSTs.",
                complexity: "O(n)",
                family: Family::Tree,
            },
            AlgorithmId::Preorder => AlgorithmInfo {
                name: "Pre-Order Traversal",
                description: "Visits root first, then left and right subtrees. Useful for copying trees.",
                complexity: "O(n)",
                family: Family::Tree,
            },
            AlgorithmId::Postorder => AlgorithmInfo {
                name: "Post-Order Traversal",
                description: "Visits left and right subtrees before the root. Useful for deleting trees.",
                complexity: "O(n)",
                family: Family::Tree,
            },
            AlgorithmId::Bst => AlgorithmInfo {
                name: "Binary Search Tree",
                description: "A tree where each node's left children are smaller and right children are larger.",
                complexity: "O(log n) avg",
                family: Family::Tree,
            },
            AlgorithmId::Bfs => AlgorithmInfo {
                name: "Breadth-First Search",
                description: "Explores all neighbors at the current depth before moving to nodes at the next depth.",
                complexity: "O(V + E)",
                family: Family::Graph,
            },
            AlgorithmId::Dfs => AlgorithmInfo {
                name: "Depth-First Search",
                description: "Explores as far as possible along each branch before backtracking.",
                complexity: "O(V + E)",
                family: Family::Graph,
            },
            AlgorithmId::Dijkstra => AlgorithmInfo {
                name: "Dijkstra's Algorithm",
                description: "Finds the shortest path from a source node to all other nodes in a weighted graph.",
                complexity: "O(V²)",
                family: Family::Graph,
            },
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for algorithm in AlgorithmId::ALL {
            assert_eq!(AlgorithmId::parse(algorithm.id()), Some(algorithm));
        }
    }

    #[test]
    fn families_partition_the_registry() {
        let sorting = AlgorithmId::ALL
            .iter()
            .filter(|a| a.family() == Family::Sorting)
            .count();
        let tree = AlgorithmId::ALL
            .iter()
            .filter(|a| a.family() == Family::Tree)
            .count();
        let graph = AlgorithmId::ALL
            .iter()
            .filter(|a| a.family() == Family::Graph)
            .count();
        assert_eq!((sorting, tree, graph), (5, 4, 3));
    }
}
