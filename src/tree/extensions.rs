//! Per-extension byte totals

use std::collections::HashMap;

use serde::Serialize;

/// Bytes consumed per file extension across a scanned subtree.
///
/// Keys carry the leading dot (`".rs"`); files without an extension are
/// collected under the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtensionTotals {
    by_extension: HashMap<String, u64>,
}

impl ExtensionTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, extension: impl Into<String>, bytes: u64) {
        *self.by_extension.entry(extension.into()).or_insert(0) += bytes;
    }

    /// Fold a child's totals into these, summing per key.
    pub fn merge(&mut self, other: ExtensionTotals) {
        for (ext, bytes) in other.by_extension {
            self.add(ext, bytes);
        }
    }

    pub fn get(&self, extension: &str) -> Option<u64> {
        self.by_extension.get(extension).copied()
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }

    /// Sum over all extensions.
    pub fn total(&self) -> u64 {
        self.by_extension.values().sum()
    }

    /// Entries ordered by size descending, ties broken by extension.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .by_extension
            .iter()
            .map(|(ext, bytes)| (ext.as_str(), *bytes))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
