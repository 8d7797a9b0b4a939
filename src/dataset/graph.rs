// Fixed weighted digraph for the graph family

/// Visit annotation for one graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphStatus {
    Unvisited,
    Visiting,
    Visited,
}

/// One node of the graph. `x`/`y` are layout coordinates for the renderer
/// and are never read by the algorithms; `distance` is meaningful only for
/// the shortest-path run.
#[derive(Debug, Clone, Copy)]
pub struct GraphNode {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub distance: f64,
    pub status: GraphStatus,
}

/// A directed weighted edge, immutable after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: u32,
    pub to: u32,
    pub weight: u32,
}

/// Node count of the generated topology.
pub const GRAPH_NODE_COUNT: usize = 6;

// Hand-authored topology shared by all three graph algorithms.
const EDGES: [(u32, u32, u32); 9] = [
    (0, 1, 4),
    (0, 2, 2),
    (1, 2, 1),
    (1, 3, 5),
    (2, 3, 8),
    (2, 4, 10),
    (3, 4, 2),
    (3, 5, 6),
    (4, 5, 3),
];

/// The graph-family working structure: nodes plus the immutable edge list.
///
/// Node ids are dense and index the node list directly.
#[derive(Debug, Clone)]
pub struct GraphDataset {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphDataset {
    /// Build a dataset over an arbitrary topology. Node 0 is the source:
    /// its distance starts at zero, every other node at infinity.
    pub fn with_topology(mut nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        for node in &mut nodes {
            node.distance = if node.id == 0 { 0.0 } else { f64::INFINITY };
            node.status = GraphStatus::Unvisited;
        }
        GraphDataset { nodes, edges }
    }

    /// Outgoing edges of `id`, in edge-list order.
    pub fn neighbors(&self, id: u32) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |edge| edge.from == id)
    }
}

/// Generate the fixed 6-node, 9-edge graph with its layout coordinates.
pub fn generate_graph() -> GraphDataset {
    let nodes = (0..GRAPH_NODE_COUNT as u32)
        .map(|i| GraphNode {
            id: i,
            x: 100.0 + f64::from(i % 3) * 150.0,
            y: 100.0 + f64::from(i / 3) * 150.0,
            distance: if i == 0 { 0.0 } else { f64::INFINITY },
            status: GraphStatus::Unvisited,
        })
        .collect();

    let edges = EDGES
        .iter()
        .map(|&(from, to, weight)| GraphEdge { from, to, weight })
        .collect();

    GraphDataset { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_topology_is_fixed() {
        let graph = generate_graph();
        assert_eq!(graph.nodes.len(), GRAPH_NODE_COUNT);
        assert_eq!(graph.edges.len(), 9);
        assert_eq!(graph.nodes[0].distance, 0.0);
        assert!(graph.nodes[1..].iter().all(|n| n.distance.is_infinite()));
    }

    #[test]
    fn neighbors_follow_edge_list_order() {
        let graph = generate_graph();
        let targets: Vec<u32> = graph.neighbors(2).map(|e| e.to).collect();
        assert_eq!(targets, vec![3, 4]);
    }
}
