use crate::application::dto::UsesResponse;
use crate::dependents::domain::TreeNode;
use crate::ports::outbound::DependentsFormatter;
use crate::shared::Result;

const CIRCULAR_MARKER: &str = " (CIRCULAR DEPENDENT)";

/// TreeFormatter adapter rendering a dependents tree with box-drawing glyphs
///
/// Every root is printed on its own line, followed by one shared forest of
/// dependents. Circular nodes carry a marker and have no children.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_level(output: &mut String, nodes: &[TreeNode], prefix: &str) {
        let count = nodes.len();
        for (i, node) in nodes.iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { "└── " } else { "├── " };

            output.push_str(prefix);
            output.push_str(connector);
            output.push_str(node.full_name());
            if node.is_circular() {
                output.push_str(CIRCULAR_MARKER);
            }
            output.push('\n');

            if !node.children().is_empty() {
                let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
                Self::render_level(output, node.children(), &child_prefix);
            }
        }
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependentsFormatter for TreeFormatter {
    fn format(&self, response: &UsesResponse) -> Result<String> {
        let tree = response
            .tree
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Tree output requested but no dependents tree was built"))?;

        let mut output = String::new();
        for root in tree.roots() {
            output.push_str(root);
            output.push('\n');
        }
        Self::render_level(&mut output, tree.dependents(), "");
        Ok(output)
    }
}
