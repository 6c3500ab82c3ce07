//! sdu - Smart disk usage: a size-annotated directory tree

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{JsonReport, OutputConfig, Reporter, human_readable, print_json};
pub use tree::{
    ExtensionTotals, ScanConfig, ScanOutcome, Severity, SizeCalculator, TreeNode, TreeScanner,
};
