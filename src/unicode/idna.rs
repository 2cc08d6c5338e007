use crate::compat::{Cow, String};
use crate::error::{EncodingError, Result};

/// ACE prefix for Punycode labels (RFC 3490)
const ACE_PREFIX: &str = "xn--";

/// Maximum length of a DNS label in bytes
const MAX_LABEL_LEN: usize = 63;

/// Encode a single host label into its ASCII-compatible form.
///
/// ASCII labels are returned borrowed. Non-ASCII labels are Punycode-encoded
/// and prefixed with `xn--`; no UTS #46 mapping is applied, so the label's
/// code points are encoded exactly as given.
pub fn label_to_ascii(label: &str) -> Result<Cow<'_, str>> {
    if label.is_ascii() {
        return Ok(Cow::Borrowed(label));
    }

    let encoded = idna::punycode::encode_str(label).ok_or(EncodingError::InvalidLabel)?;
    if ACE_PREFIX.len() + encoded.len() > MAX_LABEL_LEN {
        return Err(EncodingError::LabelTooLong);
    }

    let mut result = String::with_capacity(ACE_PREFIX.len() + encoded.len());
    result.push_str(ACE_PREFIX);
    result.push_str(&encoded);
    Ok(Cow::Owned(result))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_label_to_ascii() {
        // ASCII label should pass through
        assert!(matches!(label_to_ascii("example"), Ok(Cow::Borrowed("example"))));

        assert_eq!(label_to_ascii("bücher").unwrap(), "xn--bcher-kva");
        assert_eq!(label_to_ascii("гофер").unwrap(), "xn--c1ae0ajs");
        assert_eq!(label_to_ascii("рф").unwrap(), "xn--p1ai");
        assert!(label_to_ascii("日本").unwrap().starts_with("xn--"));
    }

    #[test]
    fn test_label_to_ascii_too_long() {
        let label = "ü".repeat(64);
        assert_eq!(label_to_ascii(&label), Err(EncodingError::LabelTooLong));
    }

    #[test]
    fn test_label_to_ascii_overflow() {
        // Deltas overflow the Punycode encoder before any length check
        let label = "\u{80}".repeat(5000) + "\u{10FFFF}";
        assert_eq!(label_to_ascii(&label), Err(EncodingError::InvalidLabel));
    }
}
