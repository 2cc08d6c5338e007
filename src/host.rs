use crate::compat::{Cow, String};
use crate::error::Result;
use crate::unicode::idna::label_to_ascii;

/// Split a `host[:port]` string at its port separator.
///
/// Returns the host part and the raw text after the separating `:`. When a
/// `]` is present the host runs through the first `]`, so IPv6 literals keep
/// their colons; otherwise the last `:` separates the port. A bare IPv6
/// address without brackets is therefore split at its last colon.
pub fn split_host_port(input: &str) -> (&str, Option<&str>) {
    let bytes = input.as_bytes();

    if let Some(bracket_end) = memchr::memchr(b']', bytes) {
        let host = &input[..=bracket_end];
        let rest = &input[bracket_end + 1..];
        return (host, rest.strip_prefix(':'));
    }

    match memchr::memrchr(b':', bytes) {
        Some(colon_pos) => (&input[..colon_pos], Some(&input[colon_pos + 1..])),
        None => (input, None),
    }
}

/// Rewrite the internationalized labels of a `host[:port]` string into
/// their ASCII-compatible (`xn--`) form.
///
/// The port suffix and bracketed IP literals are never touched, and input
/// whose host is already ASCII is returned borrowed, unchanged. Encoding is
/// therefore idempotent.
///
/// # Errors
///
/// Returns an [`EncodingError`](crate::EncodingError) if a label cannot be
/// Punycode-encoded or the encoded label is longer than 63 bytes. No partial
/// result is produced.
///
/// # Example
///
/// ```
/// assert_eq!(httplex::encode_host_port("bücher.de:8080").unwrap(), "xn--bcher-kva.de:8080");
/// assert_eq!(httplex::encode_host_port("[1::6]:8080").unwrap(), "[1::6]:8080");
/// ```
pub fn encode_host_port(input: &str) -> Result<Cow<'_, str>> {
    let (host, _) = split_host_port(input);

    // Fast path: ASCII hosts and IP literals pass through untouched
    if host.is_ascii() || (host.starts_with('[') && host.ends_with(']')) {
        return Ok(Cow::Borrowed(input));
    }

    // Everything after the host (":port") is copied back verbatim
    let suffix = &input[host.len()..];

    let mut result = String::with_capacity(input.len() + 16);
    for (i, label) in host.split('.').enumerate() {
        if i > 0 {
            result.push('.');
        }
        result.push_str(&label_to_ascii(label)?);
    }
    result.push_str(suffix);

    Ok(Cow::Owned(result))
}
