// Binary search tree built by repeated insertion

use rand::rngs::StdRng;
use rand::Rng;

/// Number of values inserted into a freshly generated tree.
pub const BST_NODE_COUNT: usize = 10;

/// Traversal annotation for one tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Default,
    Visiting,
    Visited,
}

/// An owned node of the binary search tree.
///
/// The tree is built once per run and never restructured afterwards; the
/// traversals only read values and annotate statuses.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub value: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
    pub status: NodeStatus,
}

impl TreeNode {
    pub fn new(value: i32) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
            status: NodeStatus::Default,
        }
    }

    /// Standard BST insertion: smaller values go left, ties go right.
    pub fn insert(&mut self, value: i32) {
        if value < self.value {
            match &mut self.left {
                Some(node) => node.insert(value),
                None => self.left = Some(Box::new(TreeNode::new(value))),
            }
        } else {
            match &mut self.right {
                Some(node) => node.insert(value),
                None => self.right = Some(Box::new(TreeNode::new(value))),
            }
        }
    }
}

/// Sample a fixed count of values in [1, 100] and insert them one at a time
/// into an initially empty tree. No rebalancing.
pub fn generate_bst(rng: &mut StdRng) -> TreeNode {
    let mut root = TreeNode::new(rng.gen_range(1..=100));
    for _ in 1..BST_NODE_COUNT {
        root.insert(rng.gen_range(1..=100));
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn collect_inorder(node: &TreeNode, out: &mut Vec<i32>) {
        if let Some(left) = &node.left {
            collect_inorder(left, out);
        }
        out.push(node.value);
        if let Some(right) = &node.right {
            collect_inorder(right, out);
        }
    }

    #[test]
    fn insertion_preserves_search_order() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let root = generate_bst(&mut rng);
            let mut values = Vec::new();
            collect_inorder(&root, &mut values);
            assert_eq!(values.len(), BST_NODE_COUNT);
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
