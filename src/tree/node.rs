//! Tree nodes produced by the scanner

use std::path::{Path, PathBuf};

use serde::Serialize;
use termcolor::Color;

use crate::output::human_readable;

/// Size band used to color an entry. Thresholds are decimal byte counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const MEDIUM_THRESHOLD: u64 = 100_000_000;
    pub const HIGH_THRESHOLD: u64 = 1_000_000_000;

    pub fn classify(bytes: u64) -> Self {
        if bytes >= Self::HIGH_THRESHOLD {
            Self::High
        } else if bytes >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Low => Color::Green,
            Self::Medium => Color::Yellow,
            Self::High => Color::Red,
        }
    }
}

/// One entry of the scanned hierarchy.
///
/// Directory sizes are filled in by the parent scan; the root directory has
/// none because nothing above it sized it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        size_bytes: u64,
    },
    Dir {
        name: String,
        path: PathBuf,
        #[serde(skip_serializing_if = "Option::is_none")]
        size_bytes: Option<u64>,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn file(name: String, path: &Path, size_bytes: u64) -> Self {
        TreeNode::File {
            name,
            path: path.to_path_buf(),
            size_bytes,
        }
    }

    /// An unsized directory with no children.
    pub fn empty_dir(name: String, path: &Path) -> Self {
        TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            size_bytes: None,
            children: Vec::new(),
        }
    }

    /// Attach a computed size to a directory node. Files keep their own size.
    pub fn with_size(mut self, size: u64) -> Self {
        if let TreeNode::Dir { size_bytes, .. } = &mut self {
            *size_bytes = Some(size);
        }
        self
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } | TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } | TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn size_bytes(&self) -> Option<u64> {
        match self {
            TreeNode::File { size_bytes, .. } => Some(*size_bytes),
            TreeNode::Dir { size_bytes, .. } => *size_bytes,
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Display label: `name (size)` when the size is known, otherwise the name.
    pub fn label(&self) -> String {
        match self.size_bytes() {
            Some(size) => format!("{} ({})", self.name(), human_readable(size)),
            None => self.name().to_string(),
        }
    }

    /// Severity band, if the node has a size.
    pub fn severity(&self) -> Option<Severity> {
        self.size_bytes().map(Severity::classify)
    }
}
