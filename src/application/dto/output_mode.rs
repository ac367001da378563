/// Output mode for a dependents query
///
/// Both the CLI and the formatters need to agree on it, so it lives in the
/// application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Sorted list of full names (default)
    #[default]
    Flat,
    /// Nested dependents tree with cycle markers
    Tree,
}

impl OutputMode {
    pub fn from_tree_flag(tree: bool) -> Self {
        if tree {
            OutputMode::Tree
        } else {
            OutputMode::Flat
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Flat => write!(f, "flat"),
            OutputMode::Tree => write!(f, "tree"),
        }
    }
}
