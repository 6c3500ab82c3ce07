//! TreeScanner - builds the size-annotated tree and extension totals
//!
//! Scanning is pure: each call returns its subtree and the totals for that
//! subtree, and parents merge what their children return. Nothing is printed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::config::ScanConfig;
use super::extensions::ExtensionTotals;
use super::node::TreeNode;
use super::size::SizeCalculator;
use super::utils::{entry_name, extension_key, is_permission_denied, should_ignore_path};

/// Result of scanning from a root path.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub root: TreeNode,
    pub extensions: ExtensionTotals,
}

/// Tree scanner that builds the full size-annotated tree in memory.
pub struct TreeScanner {
    config: ScanConfig,
}

impl TreeScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan from `root` at depth 0.
    ///
    /// Unlike nested entries, the root must exist: a missing or unstatable
    /// root is reported as an error rather than rendered as an empty tree.
    pub fn scan_root(&self, root: &Path) -> Result<ScanOutcome> {
        let meta = fs::metadata(root).map_err(|e| Error::access(root, e))?;

        let (root_node, extensions) = if meta.is_file() {
            let mut extensions = ExtensionTotals::new();
            extensions.add(extension_key(root), meta.len());
            (TreeNode::file(entry_name(root), root, meta.len()), extensions)
        } else {
            self.scan(root, 0)?
        };

        debug!(
            root = %root.display(),
            extensions = extensions.len(),
            bytes = extensions.total(),
            "scan finished"
        );
        Ok(ScanOutcome {
            root: root_node,
            extensions,
        })
    }

    /// Scan the directory at `path`, which sits at `depth`.
    ///
    /// Children are sized with the same depth as their parent directory, and
    /// directories are only descended into while `depth` is under the limit.
    /// Directories past the limit are left out of the tree entirely.
    pub fn scan(&self, path: &Path, depth: usize) -> Result<(TreeNode, ExtensionTotals)> {
        let name = entry_name(path);
        let mut totals = ExtensionTotals::new();

        if !path.is_dir() {
            return Ok((TreeNode::empty_dir(name, path), totals));
        }

        let Some(children) = self.ranked_children(path, depth)? else {
            return Ok((TreeNode::empty_dir(name, path), totals));
        };
        trace!(path = %path.display(), depth, children = children.len(), "scanning");

        let mut nodes = Vec::with_capacity(children.len());
        for (child, size) in children {
            if child.is_file() {
                totals.add(extension_key(&child), size);
                nodes.push(TreeNode::file(entry_name(&child), &child, size));
            } else if child.is_dir() && !self.config.at_max_depth(depth) {
                let (node, child_totals) = self.scan(&child, depth + 1)?;
                totals.merge(child_totals);
                nodes.push(node.with_size(size));
            }
        }

        let node = TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            size_bytes: None,
            children: nodes,
        };
        Ok((node, totals))
    }

    /// List, size and rank the children of `path`, largest first.
    ///
    /// Returns `None` when the directory cannot be listed for lack of
    /// permission. Ranking uses the same size that is displayed for each
    /// child, so `top_n` keeps exactly the entries that look largest.
    fn ranked_children(&self, path: &Path, depth: usize) -> Result<Option<Vec<(PathBuf, u64)>>> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) if is_permission_denied(&e) => {
                debug!(path = %path.display(), "permission denied, showing no children");
                return Ok(None);
            }
            Err(e) => return Err(Error::access(path, e)),
        };

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(e) if is_permission_denied(&e) => return Ok(None),
                Err(e) => return Err(Error::access(path, e)),
            }
        }

        let sizer = SizeCalculator::new(&self.config);
        let mut ranked = Vec::with_capacity(paths.len());
        for child in paths {
            if should_ignore_path(&child, &self.config.ignore_patterns) {
                continue;
            }
            let size = sizer.size(&child, depth)?;
            ranked.push((child, size));
        }

        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        if let Some(n) = self.config.top_n {
            ranked.truncate(n);
        }
        Ok(Some(ranked))
    }
}
