// Integration tests for the graph step procedures

use algotty::dataset::{generate_graph, Dataset, GraphDataset, GraphEdge, GraphNode, GraphStatus};
use algotty::engine::StepEngine;
use algotty::registry::AlgorithmId;
use algotty::snapshot::{StepTrace, StructureView};

/// Node ids in the order they were first marked visited across the trace.
fn visit_order(trace: &StepTrace) -> Vec<u32> {
    let mut seen = Vec::new();
    for snapshot in trace.snapshots() {
        if let StructureView::Graph(nodes) = &snapshot.structure {
            for node in nodes {
                if node.status == GraphStatus::Visited && !seen.contains(&node.id) {
                    seen.push(node.id);
                }
            }
        }
    }
    seen
}

fn final_distances(dataset: &Dataset) -> Vec<f64> {
    match dataset {
        Dataset::Graph(graph) => graph.nodes.iter().map(|n| n.distance).collect(),
        _ => panic!("expected a graph dataset"),
    }
}

/// Exhaustive simple-path search, as an independent check on Dijkstra.
fn brute_force_shortest(edges: &[GraphEdge], node_count: usize, to: u32) -> f64 {
    fn go(edges: &[GraphEdge], current: u32, to: u32, visited: &mut Vec<bool>) -> f64 {
        if current == to {
            return 0.0;
        }
        let mut best = f64::INFINITY;
        for edge in edges.iter().filter(|e| e.from == current) {
            if !visited[edge.to as usize] {
                visited[edge.to as usize] = true;
                let rest = go(edges, edge.to, to, visited);
                visited[edge.to as usize] = false;
                best = best.min(rest + f64::from(edge.weight));
            }
        }
        best
    }

    let mut visited = vec![false; node_count];
    visited[0] = true;
    go(edges, 0, to, &mut visited)
}

#[test]
fn dijkstra_finds_shortest_distances() {
    let mut dataset = Dataset::Graph(generate_graph());
    StepEngine::execute(AlgorithmId::Dijkstra, &mut dataset).expect("dijkstra failed");

    assert_eq!(
        final_distances(&dataset),
        vec![0.0, 4.0, 2.0, 9.0, 11.0, 14.0]
    );
}

#[test]
fn dijkstra_matches_brute_force() {
    let graph = generate_graph();
    let edges = graph.edges.clone();
    let node_count = graph.nodes.len();

    let mut dataset = Dataset::Graph(graph);
    StepEngine::execute(AlgorithmId::Dijkstra, &mut dataset).expect("dijkstra failed");

    let distances = final_distances(&dataset);
    for id in 0..node_count as u32 {
        assert_eq!(
            distances[id as usize],
            brute_force_shortest(&edges, node_count, id),
            "wrong distance for node {}",
            id
        );
    }
}

#[test]
fn bfs_respects_hop_layering() {
    let graph = generate_graph();
    // Hop counts on the fixed topology: 0 | 1 2 | 3 4 | 5.
    let hops = [0u32, 1, 1, 2, 2, 3];

    let mut dataset = Dataset::Graph(graph);
    let trace = StepEngine::execute(AlgorithmId::Bfs, &mut dataset).expect("bfs failed");

    let order = visit_order(&trace);
    assert_eq!(order.len(), 6);
    assert_eq!(order[0], 0);
    assert!(order
        .windows(2)
        .all(|w| hops[w[0] as usize] <= hops[w[1] as usize]));

    // The visit counter is reported through `comparisons`.
    assert_eq!(trace.final_metrics().comparisons, 6);
}

#[test]
fn dfs_visits_every_reachable_node_once() {
    let mut dataset = Dataset::Graph(generate_graph());
    let trace = StepEngine::execute(AlgorithmId::Dfs, &mut dataset).expect("dfs failed");

    let order = visit_order(&trace);
    assert_eq!(order.len(), 6);
    assert_eq!(order[0], 0);

    if let Dataset::Graph(graph) = &dataset {
        assert!(graph
            .nodes
            .iter()
            .all(|n| n.status == GraphStatus::Visited));
    }
    assert_eq!(trace.final_metrics().comparisons, 6);
}

#[test]
fn unreachable_nodes_stay_at_infinity() {
    let nodes: Vec<GraphNode> = (0..4)
        .map(|i| GraphNode {
            id: i,
            x: f64::from(i) * 100.0,
            y: 100.0,
            distance: 0.0,
            status: GraphStatus::Unvisited,
        })
        .collect();
    let edges = vec![
        GraphEdge {
            from: 0,
            to: 1,
            weight: 4,
        },
        GraphEdge {
            from: 1,
            to: 2,
            weight: 1,
        },
    ];

    let mut dataset = Dataset::Graph(GraphDataset::with_topology(nodes, edges));
    StepEngine::execute(AlgorithmId::Dijkstra, &mut dataset).expect("dijkstra failed");

    if let Dataset::Graph(graph) = &dataset {
        assert_eq!(graph.nodes[1].distance, 4.0);
        assert_eq!(graph.nodes[2].distance, 5.0);
        assert!(graph.nodes[3].distance.is_infinite());
        assert_eq!(graph.nodes[3].status, GraphStatus::Unvisited);
    }
}
