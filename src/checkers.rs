use crate::character_sets::{is_ctl, is_host_byte, is_ows, is_token_char};

/// Check if a string is a valid header field name (`token` in RFC 7230).
/// Case does not matter; the empty string is never valid.
pub fn is_valid_header_field_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_token_char)
}

/// Check if a string is a valid header field value.
///
/// Rejects controls other than SP and HTAB, so CR and LF can never be
/// smuggled into a header line. obs-text (bytes >= 0x80) is allowed.
pub fn is_valid_header_field_value(value: &str) -> bool {
    !value.bytes().any(|b| is_ctl(b) && !is_ows(b))
}

/// Check if a string is acceptable as a `Host` header value.
///
/// Only validates the byte set; it does not parse the authority. An empty
/// value passes (HTTP/1.0 clients may send one).
pub fn is_valid_host_header(host: &str) -> bool {
    host.bytes().all(is_host_byte)
}
