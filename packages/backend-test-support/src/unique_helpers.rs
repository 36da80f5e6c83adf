//! Unique test data built from ULIDs.

use ulid::Ulid;

/// Generate a unique to-do title that still reads like one in test output,
/// in the format `{what} {ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_title;
///
/// let a = unique_title("buy milk");
/// let b = unique_title("buy milk");
/// assert_ne!(a, b);
/// assert!(a.starts_with("buy milk "));
/// ```
pub fn unique_title(what: &str) -> String {
    format!("{what} {}", Ulid::new().to_string().to_lowercase())
}
