// Tree traversal step procedures
//
// Traversals never restructure the tree. The visit order is computed as a
// list of root-to-node paths first, then replayed so that each recorded
// step shows the whole tree with one more node marked and appended to the
// running order.

use super::StepEngine;
use crate::dataset::{NodeStatus, TreeNode};
use crate::registry::AlgorithmId;

#[derive(Clone, Copy)]
enum Branch {
    Left,
    Right,
}

impl StepEngine {
    pub(super) fn traverse(&mut self, root: &mut TreeNode, algorithm: AlgorithmId) {
        let mut paths = Vec::new();
        collect_paths(root, &mut Vec::new(), &mut paths, algorithm);

        let mut order = Vec::with_capacity(paths.len());
        for path in paths {
            let node = node_at_mut(root, &path);
            node.status = NodeStatus::Visited;
            order.push(node.value);
            self.record_tree(root, &order);
        }
    }
}

fn collect_paths(
    node: &TreeNode,
    path: &mut Vec<Branch>,
    out: &mut Vec<Vec<Branch>>,
    algorithm: AlgorithmId,
) {
    if algorithm == AlgorithmId::Preorder {
        out.push(path.clone());
    }
    if let Some(left) = &node.left {
        path.push(Branch::Left);
        collect_paths(left, path, out, algorithm);
        path.pop();
    }
    if algorithm == AlgorithmId::Inorder {
        out.push(path.clone());
    }
    if let Some(right) = &node.right {
        path.push(Branch::Right);
        collect_paths(right, path, out, algorithm);
        path.pop();
    }
    if algorithm == AlgorithmId::Postorder {
        out.push(path.clone());
    }
}

fn node_at_mut<'a>(mut node: &'a mut TreeNode, path: &[Branch]) -> &'a mut TreeNode {
    for branch in path {
        node = match branch {
            Branch::Left => node.left.as_deref_mut().expect("path follows existing nodes"),
            Branch::Right => node
                .right
                .as_deref_mut()
                .expect("path follows existing nodes"),
        };
    }
    node
}
