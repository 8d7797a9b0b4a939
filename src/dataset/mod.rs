//! Dataset generators for the three algorithm families

pub mod array;
pub mod graph;
pub mod tree;

pub use array::{generate_array, ArrayElement, ElementStatus, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
pub use graph::{generate_graph, GraphDataset, GraphEdge, GraphNode, GraphStatus, GRAPH_NODE_COUNT};
pub use tree::{generate_bst, NodeStatus, TreeNode, BST_NODE_COUNT};

use crate::engine::errors::EngineError;
use crate::registry::Family;
use crate::snapshot::StructureView;
use rand::rngs::StdRng;

/// The live working structure the engine mutates during a run.
#[derive(Debug, Clone)]
pub enum Dataset {
    Array(Vec<ArrayElement>),
    Tree(TreeNode),
    Graph(GraphDataset),
}

impl Dataset {
    /// Generate a fresh dataset for `family`. `array_size` applies to the
    /// sorting family only.
    pub fn generate(
        family: Family,
        array_size: usize,
        rng: &mut StdRng,
    ) -> Result<Dataset, EngineError> {
        Ok(match family {
            Family::Sorting => Dataset::Array(generate_array(array_size, rng)?),
            Family::Tree => Dataset::Tree(generate_bst(rng)),
            Family::Graph => Dataset::Graph(generate_graph()),
        })
    }

    pub fn family(&self) -> Family {
        match self {
            Dataset::Array(_) => Family::Sorting,
            Dataset::Tree(_) => Family::Tree,
            Dataset::Graph(_) => Family::Graph,
        }
    }

    /// Owned view of the current structure, as the renderer sees it before
    /// any run has recorded a step.
    pub fn view(&self) -> StructureView {
        match self {
            Dataset::Array(elements) => StructureView::Array(elements.clone()),
            Dataset::Tree(root) => StructureView::Tree {
                root: root.clone(),
                order: Vec::new(),
            },
            Dataset::Graph(graph) => StructureView::Graph(graph.nodes.clone()),
        }
    }

    /// Overwrite the mutable state from a recorded view. Used after a
    /// cancelled run so that exactly the last emitted partial state remains
    /// visible. Graph edges are immutable and stay as generated.
    pub fn restore(&mut self, view: &StructureView) {
        match (self, view) {
            (Dataset::Array(elements), StructureView::Array(recorded)) => {
                *elements = recorded.clone();
            }
            (Dataset::Tree(root), StructureView::Tree { root: recorded, .. }) => {
                *root = recorded.clone();
            }
            (Dataset::Graph(graph), StructureView::Graph(recorded)) => {
                graph.nodes = recorded.clone();
            }
            // A trace recorded from this dataset always matches its family.
            _ => {}
        }
    }
}
