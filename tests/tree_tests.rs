// Integration tests for tree generation and the traversal step procedures

use algotty::dataset::{generate_bst, Dataset, NodeStatus, TreeNode, BST_NODE_COUNT};
use algotty::engine::StepEngine;
use algotty::registry::AlgorithmId;
use algotty::snapshot::StructureView;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn traversal_order(dataset: &mut Dataset, algorithm: AlgorithmId) -> Vec<i32> {
    let trace = StepEngine::execute(algorithm, dataset).expect("traversal failed");
    match &trace.last().expect("empty trace").structure {
        StructureView::Tree { order, .. } => order.clone(),
        _ => panic!("expected a tree snapshot"),
    }
}

fn assert_bst_property(node: &TreeNode, lower: Option<i32>, upper: Option<i32>) {
    if let Some(lower) = lower {
        // Ties go right, so the right subtree may contain equal values.
        assert!(node.value >= lower);
    }
    if let Some(upper) = upper {
        assert!(node.value < upper);
    }
    if let Some(left) = &node.left {
        assert_bst_property(left, lower, Some(node.value));
    }
    if let Some(right) = &node.right {
        assert_bst_property(right, Some(node.value), upper);
    }
}

#[test]
fn generated_tree_is_a_search_tree() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..10 {
        let root = generate_bst(&mut rng);
        assert_bst_property(&root, None, None);
    }
}

#[test]
fn inorder_yields_ascending_values() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut dataset = Dataset::Tree(generate_bst(&mut rng));
    let order = traversal_order(&mut dataset, AlgorithmId::Inorder);

    assert_eq!(order.len(), BST_NODE_COUNT);
    assert!(order.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn preorder_starts_at_the_root() {
    let mut rng = StdRng::seed_from_u64(29);
    let root = generate_bst(&mut rng);
    let root_value = root.value;

    let mut dataset = Dataset::Tree(root);
    let order = traversal_order(&mut dataset, AlgorithmId::Preorder);

    assert_eq!(order.len(), BST_NODE_COUNT);
    assert_eq!(order[0], root_value);
}

#[test]
fn postorder_ends_at_the_root() {
    let mut rng = StdRng::seed_from_u64(31);
    let root = generate_bst(&mut rng);
    let root_value = root.value;

    let mut dataset = Dataset::Tree(root);
    let order = traversal_order(&mut dataset, AlgorithmId::Postorder);

    assert_eq!(order.len(), BST_NODE_COUNT);
    assert_eq!(order[BST_NODE_COUNT - 1], root_value);
}

#[test]
fn traversal_records_one_step_per_node() {
    let mut rng = StdRng::seed_from_u64(37);
    let mut dataset = Dataset::Tree(generate_bst(&mut rng));
    let trace = StepEngine::execute(AlgorithmId::Inorder, &mut dataset).expect("traversal failed");

    assert_eq!(trace.len(), BST_NODE_COUNT);

    // The recorded order grows by exactly one value per step.
    for (i, snapshot) in trace.snapshots().iter().enumerate() {
        match &snapshot.structure {
            StructureView::Tree { order, .. } => assert_eq!(order.len(), i + 1),
            _ => panic!("expected a tree snapshot"),
        }
    }

    // The traversal marks nodes visited without restructuring the tree.
    if let Dataset::Tree(root) = &dataset {
        fn all_visited(node: &TreeNode) -> bool {
            node.status == NodeStatus::Visited
                && node.left.as_deref().map_or(true, all_visited)
                && node.right.as_deref().map_or(true, all_visited)
        }
        assert!(all_visited(root));
        assert_bst_property(root, None, None);
    }
}

#[test]
fn traversals_agree_on_the_visited_set() {
    let mut rng = StdRng::seed_from_u64(41);
    let root = generate_bst(&mut rng);

    let mut inorder = Dataset::Tree(root.clone());
    let mut preorder = Dataset::Tree(root.clone());
    let mut postorder = Dataset::Tree(root);

    let mut a = traversal_order(&mut inorder, AlgorithmId::Inorder);
    let mut b = traversal_order(&mut preorder, AlgorithmId::Preorder);
    let mut c = traversal_order(&mut postorder, AlgorithmId::Postorder);
    a.sort_unstable();
    b.sort_unstable();
    c.sort_unstable();

    assert_eq!(a, b);
    assert_eq!(b, c);
}
