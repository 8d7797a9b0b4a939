//! Step engine: runs one algorithm over a working copy, recording a
//! snapshot at every emission point
//!
//! The engine executes synchronously and produces the complete
//! [`StepTrace`]; pacing, cancellation, and navigation live in the
//! controller, which replays the trace. The working copy is borrowed for
//! the duration of the run and holds the terminal state afterwards.

pub mod errors;

mod graph;
mod sorting;
mod tree;

pub use errors::EngineError;

use crate::dataset::{ArrayElement, Dataset, GraphNode, TreeNode};
use crate::registry::AlgorithmId;
use crate::snapshot::{RunMetrics, Snapshot, StepTrace, StructureView};

pub struct StepEngine {
    trace: StepTrace,
    metrics: RunMetrics,
}

impl StepEngine {
    /// Run `algorithm` over `dataset` to completion, mutating the dataset
    /// in place and returning the recorded history.
    pub fn execute(
        algorithm: AlgorithmId,
        dataset: &mut Dataset,
    ) -> Result<StepTrace, EngineError> {
        if !algorithm.is_runnable() {
            return Err(EngineError::NotRunnable { algorithm });
        }
        if algorithm.family() != dataset.family() {
            return Err(EngineError::DatasetMismatch {
                algorithm,
                dataset: dataset.family(),
            });
        }

        let mut engine = StepEngine {
            trace: StepTrace::new(),
            metrics: RunMetrics::default(),
        };

        match dataset {
            Dataset::Array(elements) => match algorithm {
                AlgorithmId::Bubble => engine.bubble_sort(elements),
                AlgorithmId::Insertion => engine.insertion_sort(elements),
                AlgorithmId::Selection => engine.selection_sort(elements),
                AlgorithmId::Merge => engine.merge_sort(elements),
                AlgorithmId::Quick => engine.quick_sort(elements),
                // Family check above keeps non-sorting ids out.
                _ => {}
            },
            Dataset::Tree(root) => {
                engine.traverse(root, algorithm);
            }
            Dataset::Graph(graph) => match algorithm {
                AlgorithmId::Bfs => engine.bfs(graph),
                AlgorithmId::Dfs => engine.dfs(graph),
                AlgorithmId::Dijkstra => engine.dijkstra(graph),
                _ => {}
            },
        }

        Ok(engine.trace)
    }

    // Every record_* call marks one emission point: statuses have been
    // updated and counters incremented, so the snapshot is self-consistent.

    fn record_array(&mut self, elements: &[ArrayElement]) {
        self.trace.push(Snapshot {
            structure: StructureView::Array(elements.to_vec()),
            metrics: self.metrics,
        });
    }

    fn record_tree(&mut self, root: &TreeNode, order: &[i32]) {
        self.trace.push(Snapshot {
            structure: StructureView::Tree {
                root: root.clone(),
                order: order.to_vec(),
            },
            metrics: self.metrics,
        });
    }

    fn record_graph(&mut self, nodes: &[GraphNode]) {
        self.trace.push(Snapshot {
            structure: StructureView::Graph(nodes.to_vec()),
            metrics: self.metrics,
        });
    }
}
