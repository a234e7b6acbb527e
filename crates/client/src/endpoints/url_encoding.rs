//! URL encoding utilities for constructing safe API paths.
//!
//! Provides percent-encoding for URL path segments to handle special
//! characters in index names that could otherwise cause path traversal or
//! incorrect URL resolution.
//!
//! # Security Considerations
//!
//! Without percent-encoding, special characters in index names could:
//! - Cause path traversal (e.g., `logs/2025` would create a nested path)
//! - Break URL parsing (e.g., `logs?v` would create a query parameter)
//! - Cause double-decode issues (e.g., `logs%20app` might be decoded prematurely)

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus additional characters that have
/// special meaning in OpenSearch REST paths or could cause issues:
/// - Space, quotes, angle brackets: problematic in URLs
/// - Backslash, pipe, caret, backtick: often blocked or problematic
/// - Percent: must be encoded to prevent double-encoding issues
/// - Slash: must be encoded to prevent path traversal
/// - Question mark and hash: have special URL meaning
/// - Comma is left literal: multi-index requests (`a,b/_mapping`) rely on it
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// This function should be used for any caller-provided value that will be
/// interpolated into a URL path, in particular index names and index
/// patterns.
///
/// # Examples
///
/// ```
/// use opensearch_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("logs-2025.08"), "logs-2025.08");
/// assert_eq!(encode_path_segment("my index"), "my%20index");
/// assert_eq!(encode_path_segment("logs/2025"), "logs%2F2025");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_path_segment("logs"), "logs");
        assert_eq!(encode_path_segment("logs-2025.08"), "logs-2025.08");
        assert_eq!(encode_path_segment("my_index"), "my_index");
    }

    #[test]
    fn test_encode_space() {
        assert_eq!(encode_path_segment("my index"), "my%20index");
    }

    #[test]
    fn test_encode_slash() {
        // Critical: prevents path traversal
        assert_eq!(encode_path_segment("logs/2025"), "logs%2F2025");
        assert_eq!(encode_path_segment("a/b/c"), "a%2Fb%2Fc");
    }

    #[test]
    fn test_encode_percent() {
        // Critical: prevents double-encoding issues
        assert_eq!(encode_path_segment("logs%20app"), "logs%2520app");
        assert_eq!(encode_path_segment("100%"), "100%25");
    }

    #[test]
    fn test_encode_question_and_hash() {
        assert_eq!(encode_path_segment("logs?v"), "logs%3Fv");
        assert_eq!(encode_path_segment("logs#1"), "logs%231");
    }

    #[test]
    fn test_wildcard_and_comma_pass_through() {
        // Index patterns and multi-index lists must survive encoding
        assert_eq!(encode_path_segment("logs-*"), "logs-*");
        assert_eq!(encode_path_segment("logs,metrics"), "logs,metrics");
    }

    #[test]
    fn test_encode_unicode() {
        // Non-ASCII characters are percent-encoded as UTF-8 bytes
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_path_segment(""), "");
    }
}
