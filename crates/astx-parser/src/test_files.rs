//! Go test file detection for filtering during directory extraction.

/// Returns `true` if `file_name` follows the Go test file convention
/// (`*_test.go`).
///
/// Comparison is case-sensitive, like the Go toolchain's.
///
/// # Examples
///
/// ```
/// use astx_parser::is_test_file;
/// assert!(is_test_file("widget_test.go"));
/// assert!(!is_test_file("widget.go"));
/// ```
#[must_use]
pub fn is_test_file(file_name: &str) -> bool {
    let name = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    name.len() > "_test.go".len() && name.ends_with("_test.go")
}
