/// One dependent in a dependents tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    full_name: String,
    circular: bool,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: String, full_name: String, children: Vec<TreeNode>) -> Self {
        Self {
            name,
            full_name,
            circular: false,
            children,
        }
    }

    /// A node whose name is already on the ancestor path; it is never expanded
    pub fn circular(name: String, full_name: String) -> Self {
        Self {
            name,
            full_name,
            circular: true,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }
}

/// DependentsTree aggregate: the root targets and the forest of their dependents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentsTree {
    roots: Vec<String>,
    dependents: Vec<TreeNode>,
}

impl DependentsTree {
    pub fn new(roots: Vec<String>, dependents: Vec<TreeNode>) -> Self {
        Self { roots, dependents }
    }

    /// Full names of the query targets, in display order
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn dependents(&self) -> &[TreeNode] {
        &self.dependents
    }

    /// Number of nodes in the forest, circular markers included
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[TreeNode]) -> usize {
            nodes.iter().map(|n| 1 + count(n.children())).sum()
        }
        count(&self.dependents)
    }

    pub fn circular_count(&self) -> usize {
        fn count(nodes: &[TreeNode]) -> usize {
            nodes
                .iter()
                .map(|n| usize::from(n.is_circular()) + count(n.children()))
                .sum()
        }
        count(&self.dependents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> TreeNode {
        TreeNode::new(name.to_string(), name.to_string(), vec![])
    }

    #[test]
    fn test_dependents_tree_counts() {
        let tree = DependentsTree::new(
            vec!["a".to_string()],
            vec![
                TreeNode::new(
                    "b".to_string(),
                    "b".to_string(),
                    vec![TreeNode::circular("a".to_string(), "a".to_string())],
                ),
                leaf("c"),
            ],
        );

        assert_eq!(tree.roots(), &["a".to_string()]);
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.circular_count(), 1);
    }

    #[test]
    fn test_dependents_tree_empty() {
        let tree = DependentsTree::new(vec!["a".to_string()], vec![]);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.circular_count(), 0);
    }

    #[test]
    fn test_circular_node_has_no_children() {
        let node = TreeNode::circular("a".to_string(), "acme/x/a".to_string());
        assert!(node.is_circular());
        assert!(node.children().is_empty());
        assert_eq!(node.full_name(), "acme/x/a");
    }
}
