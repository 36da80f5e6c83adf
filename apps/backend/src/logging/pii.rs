use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// SQL string literals, e.g. `'buy milk'` in a driver error message.
static SQL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"'(?:[^']|'')*'").unwrap()
});

/// Base64/hex-like runs (>= 24 chars), e.g. blobs echoed back by SQLite.
static OPAQUE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9+/]{24,}={0,2}").unwrap()
});

/// Masks user-supplied content in raw database error text before it is logged.
///
/// To-do titles are free text and may contain anything, so quoted literals
/// are replaced with `'***'` and long opaque runs with `[REDACTED_TOKEN]`.
pub fn redact(input: &str) -> String {
    let literals = SQL_LITERAL.replace_all(input, "'***'");
    OPAQUE_TOKEN
        .replace_all(&literals, "[REDACTED_TOKEN]")
        .to_string()
}

/// Display wrapper that applies [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
