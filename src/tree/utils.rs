//! Shared path helpers for sizing and scanning

use std::io;
use std::path::Path;

use glob::Pattern;

/// Get the display name of a path, falling back to the path itself for
/// roots like `/` or `.`.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Key used for per-extension totals: the suffix with its leading dot, or
/// the empty string when the file has none.
pub fn extension_key(path: &Path) -> String {
    path.extension()
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Check if a path should be ignored based on its name and ignore patterns.
pub fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    if ignore_patterns.is_empty() {
        return false;
    }
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    ignore_patterns
        .iter()
        .any(|pattern| name == *pattern || glob_match(pattern, &name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Permission errors are recovered locally by sizing and scanning.
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.log", "debug.log"));
        assert!(!glob_match("*.log", "debug.txt"));
        assert!(glob_match("cache?", "cache1"));
        assert!(!glob_match("cache?", "cache12"));
        assert!(glob_match("[ab].bin", "a.bin"));
        assert!(!glob_match("[ab].bin", "c.bin"));
        // Invalid patterns never match
        assert!(!glob_match("[", "["));
    }

    #[test]
    fn test_should_ignore_path() {
        let patterns = vec!["node_modules".to_string(), "*.tmp".to_string()];
        assert!(should_ignore_path(Path::new("a/node_modules"), &patterns));
        assert!(should_ignore_path(Path::new("scratch.tmp"), &patterns));
        assert!(!should_ignore_path(Path::new("src/main.rs"), &patterns));
        assert!(!should_ignore_path(Path::new("node_modules"), &[]));
    }

    #[test]
    fn test_extension_key() {
        assert_eq!(extension_key(Path::new("main.rs")), ".rs");
        assert_eq!(extension_key(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension_key(Path::new("Makefile")), "");
        assert_eq!(extension_key(Path::new(".bashrc")), "");
        assert_eq!(extension_key(Path::new("dir/.config.toml")), ".toml");
        // A trailing dot is not an extension
        assert_eq!(extension_key(Path::new("notes.")), "");
        assert_eq!(extension_key(Path::new("a..")), "");
    }

    #[test]
    fn test_is_permission_denied() {
        assert!(is_permission_denied(&io::Error::from(
            io::ErrorKind::PermissionDenied
        )));
        assert!(!is_permission_denied(&io::Error::from(io::ErrorKind::NotFound)));
    }

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name(Path::new("/var/log/syslog")), "syslog");
        assert_eq!(entry_name(Path::new(".")), ".");
        assert_eq!(entry_name(Path::new("/")), "/");
    }
}
