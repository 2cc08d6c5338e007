/// Trim optional whitespace (SP and HTAB) from both ends.
/// Other whitespace such as CR or NBSP is kept.
pub fn trim_ows(input: &str) -> &str {
    input.trim_matches(|c| matches!(c, ' ' | '\t'))
}

/// Split a comma-separated header value into its raw list members.
/// Members are not trimmed; empty members are yielded as-is.
/// Optimization: Uses SIMD-accelerated memchr to locate commas
pub fn split_list(input: &str) -> impl Iterator<Item = &str> {
    let bytes = input.as_bytes();
    let mut start = 0;
    memchr::memchr_iter(b',', bytes)
        .chain(core::iter::once(bytes.len()))
        .map(move |end| {
            let member = &input[start..end];
            start = end + 1;
            member
        })
}

/// ASCII case-insensitive token comparison.
/// Non-ASCII input never matches, even against itself.
pub fn token_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.is_ascii() && a.eq_ignore_ascii_case(b)
}
