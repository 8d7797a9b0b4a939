// Graph step procedures
//
// All three searches start from node 0 and report their visit/step counter
// through `RunMetrics::comparisons`. Unreachable nodes are left untouched:
// status stays unvisited and distance stays infinite.

use super::StepEngine;
use crate::dataset::{GraphDataset, GraphStatus};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

impl StepEngine {
    pub(super) fn bfs(&mut self, graph: &mut GraphDataset) {
        let mut queue = VecDeque::new();
        queue.push_back(0u32);
        graph.nodes[0].status = GraphStatus::Visiting;

        while let Some(current) = queue.pop_front() {
            graph.nodes[current as usize].status = GraphStatus::Visited;
            self.metrics.comparisons += 1;
            self.record_graph(&graph.nodes);

            let targets: Vec<u32> = graph.neighbors(current).map(|e| e.to).collect();
            for to in targets {
                if graph.nodes[to as usize].status == GraphStatus::Unvisited {
                    graph.nodes[to as usize].status = GraphStatus::Visiting;
                    queue.push_back(to);
                }
            }
        }
    }

    pub(super) fn dfs(&mut self, graph: &mut GraphDataset) {
        self.dfs_visit(graph, 0);
    }

    fn dfs_visit(&mut self, graph: &mut GraphDataset, id: u32) {
        graph.nodes[id as usize].status = GraphStatus::Visiting;
        self.metrics.comparisons += 1;
        self.record_graph(&graph.nodes);

        graph.nodes[id as usize].status = GraphStatus::Visited;
        self.record_graph(&graph.nodes);

        let targets: Vec<u32> = graph.neighbors(id).map(|e| e.to).collect();
        for to in targets {
            if graph.nodes[to as usize].status == GraphStatus::Unvisited {
                self.dfs_visit(graph, to);
            }
        }
    }

    pub(super) fn dijkstra(&mut self, graph: &mut GraphDataset) {
        let mut visited: FxHashSet<u32> = FxHashSet::default();
        graph.nodes[0].status = GraphStatus::Visiting;
        self.record_graph(&graph.nodes);

        while visited.len() < graph.nodes.len() {
            // Linear scan keeps the declared O(V²). Strict `<` breaks
            // distance ties toward the lowest node id.
            let mut min_node = None;
            let mut min_dist = f64::INFINITY;
            for node in &graph.nodes {
                if !visited.contains(&node.id) && node.distance < min_dist {
                    min_dist = node.distance;
                    min_node = Some(node.id);
                }
            }

            let current = match min_node {
                Some(id) => id,
                // Remaining nodes are unreachable; leave them at infinity.
                None => break,
            };

            visited.insert(current);
            graph.nodes[current as usize].status = GraphStatus::Visited;
            self.metrics.comparisons += 1;
            self.record_graph(&graph.nodes);

            let base = graph.nodes[current as usize].distance;
            let edges: Vec<(u32, u32)> = graph
                .neighbors(current)
                .map(|e| (e.to, e.weight))
                .collect();
            for (to, weight) in edges {
                if !visited.contains(&to) {
                    let candidate = base + f64::from(weight);
                    if candidate < graph.nodes[to as usize].distance {
                        graph.nodes[to as usize].distance = candidate;
                        graph.nodes[to as usize].status = GraphStatus::Visiting;
                    }
                }
            }
            self.record_graph(&graph.nodes);
        }
    }
}
