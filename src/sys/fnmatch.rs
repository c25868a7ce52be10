//! Shell-style wildcard matching.

use glob::{MatchOptions, Pattern};

/// Whether `name` matches the shell wildcard `pattern` (`*`, `?`, `[...]`).
///
/// As with `fnmatch(3)` and `FNM_PATHNAME`, wildcards do not cross `/`.
/// An invalid pattern matches nothing.
#[must_use]
pub fn fnmatch(pattern: &str, name: &str) -> bool {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    Pattern::new(pattern).is_ok_and(|pattern| pattern.matches_with(name, options))
}
