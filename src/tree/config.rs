//! Configuration types for scanning

/// Configuration for size calculation and tree scanning.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Maximum recursion depth. `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Keep only the N largest children per directory. `None` keeps all.
    pub top_n: Option<usize>,
    /// Glob patterns matched against entry names; matches are skipped entirely.
    pub ignore_patterns: Vec<String>,
}

impl ScanConfig {
    /// Check if directories at `depth` are beyond the depth limit
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
