// Snapshot history for step-by-step playback

use crate::dataset::{ArrayElement, GraphNode, TreeNode};

/// Counters accumulated over one run.
///
/// `comparisons` doubles as the visit/step counter for graph runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMetrics {
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed_ms: u64,
}

/// A renderer-safe copy of the working structure at one step. Owns all of
/// its data; mutating a view never affects the live run.
#[derive(Debug, Clone)]
pub enum StructureView {
    Array(Vec<ArrayElement>),
    /// The full tree plus the values recorded so far, in visit order.
    Tree { root: TreeNode, order: Vec<i32> },
    Graph(Vec<GraphNode>),
}

/// One recorded step: the structure as it looked at that point, plus the
/// metrics accumulated up to and including it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub structure: StructureView,
    pub metrics: RunMetrics,
}

/// The complete recorded history of one run.
///
/// Append-only while the engine executes; the controller and TUI then walk
/// it forwards and backwards without re-running anything.
#[derive(Debug, Default)]
pub struct StepTrace {
    snapshots: Vec<Snapshot>,
}

impl StepTrace {
    pub fn new() -> Self {
        StepTrace {
            snapshots: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Metrics of the last recorded step, or zeroed counters for an empty
    /// trace.
    pub fn final_metrics(&self) -> RunMetrics {
        self.snapshots
            .last()
            .map(|s| s.metrics)
            .unwrap_or_default()
    }
}
