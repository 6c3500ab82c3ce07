//! JSON output

use serde::Serialize;

use crate::error::Result;
use crate::tree::{ScanOutcome, TreeNode};

use super::utils::human_readable;

/// Machine-readable form of a scan: the tree plus sorted extension totals.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub root: &'a TreeNode,
    pub extensions: Vec<JsonExtension<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonExtension<'a> {
    pub extension: &'a str,
    pub size_bytes: u64,
    pub size_human: String,
}

impl<'a> JsonReport<'a> {
    pub fn new(outcome: &'a ScanOutcome) -> Self {
        let extensions = outcome
            .extensions
            .sorted()
            .into_iter()
            .map(|(extension, size_bytes)| JsonExtension {
                extension,
                size_bytes,
                size_human: human_readable(size_bytes),
            })
            .collect();
        Self {
            root: &outcome.root,
            extensions,
        }
    }
}

pub fn print_json(outcome: &ScanOutcome) -> Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport::new(outcome))?;
    println!("{}", json);
    Ok(())
}
