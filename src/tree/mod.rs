//! Directory scanning logic
//!
//! Two cooperating recursive procedures walk the same directory tree:
//!
//! - `SizeCalculator`: total bytes under an entry, truncated at the depth limit
//! - `TreeScanner`: the renderable hierarchy plus per-extension byte totals

mod config;
mod extensions;
mod node;
mod scanner;
mod size;
mod utils;

// Re-export public types
pub use config::ScanConfig;
pub use extensions::ExtensionTotals;
pub use node::{Severity, TreeNode};
pub use scanner::{ScanOutcome, TreeScanner};
pub use size::SizeCalculator;
pub use utils::{entry_name, extension_key, glob_match, should_ignore_path};
