//! Token membership checks over raw header values.
//!
//! A header such as `Connection` may arrive on several lines, and each line
//! may itself carry a comma-separated list:
//!
//! ```text
//! Connection: keep-alive , Upgrade
//! Connection: close
//! ```
//!
//! The caller passes every raw line value; no quoted-string or comment
//! parsing is attempted.

use crate::helpers::{split_list, token_eq, trim_ows};

/// Check if a single raw header value lists `token`.
pub fn value_contains_token(value: &str, token: &str) -> bool {
    split_list(value).any(|member| token_eq(trim_ows(member), token))
}

/// Check if any of the raw header values lists `token`.
///
/// Each value is split on `,`, members are trimmed of SP/HTAB and compared
/// ASCII case-insensitively. Returns `false` for an empty iterator.
///
/// # Example
///
/// ```
/// assert!(httplex::contains_token(["keep-alive, Upgrade"], "upgrade"));
/// assert!(!httplex::contains_token(Vec::<String>::new(), "close"));
/// ```
pub fn contains_token<I, S>(values: I, token: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .any(|value| value_contains_token(value.as_ref(), token))
}
