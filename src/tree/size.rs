//! Recursive size calculation with a depth cutoff
//!
//! Directories at or beyond the depth limit contribute nothing: the cutoff
//! truncates the byte count, not just what gets displayed.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

use super::config::ScanConfig;
use super::utils::{is_permission_denied, should_ignore_path};

/// Computes the byte size of a file or directory subtree.
pub struct SizeCalculator<'a> {
    config: &'a ScanConfig,
}

impl<'a> SizeCalculator<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Total bytes under `path`, where `depth` is the depth of `path` itself.
    ///
    /// Files report their length at any depth. Directories past the limit
    /// report 0. Permission errors stop descent and keep the partial sum;
    /// anything that is neither file nor directory counts as 0.
    pub fn size(&self, path: &Path, depth: usize) -> Result<u64> {
        if path.is_file() {
            return fs::metadata(path)
                .map(|meta| meta.len())
                .map_err(|e| Error::access(path, e));
        }
        if !path.is_dir() || self.config.at_max_depth(depth) {
            return Ok(0);
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) if is_permission_denied(&e) => {
                debug!(path = %path.display(), "permission denied, not descending");
                return Ok(0);
            }
            Err(e) => return Err(Error::access(path, e)),
        };

        let mut total = 0;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if is_permission_denied(&e) => {
                    debug!(path = %path.display(), total, "permission denied mid-listing");
                    return Ok(total);
                }
                Err(e) => return Err(Error::access(path, e)),
            };
            let child = entry.path();
            if should_ignore_path(&child, &self.config.ignore_patterns) {
                continue;
            }
            total += self.size(&child, depth + 1)?;
        }
        Ok(total)
    }
}
