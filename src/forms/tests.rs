//! Form Parser Tests
//!
//! Validates the decoding of URL-encoded payloads into field mappings.
//!
//! ## Test Scopes
//! - **Decoding**: Plus-as-space, percent-escapes, non-ASCII text.
//! - **Mapping semantics**: Duplicate field names, empty values.
//! - **Rejection**: Segments without `=`, empty payloads, non-UTF-8 bytes.

#[cfg(test)]
mod tests {
    use crate::forms::parser::{FormMessage, parse_form};

    // ============================================================
    // DECODING
    // ============================================================

    #[test]
    fn test_parses_simple_pairs() {
        let parsed = parse_form(b"name=Alice&message=Hello").unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["name"], "Alice");
        assert_eq!(parsed["message"], "Hello");
    }

    #[test]
    fn test_plus_is_decoded_as_space() {
        let parsed = parse_form(b"message=Hi+there").unwrap();

        assert_eq!(parsed["message"], "Hi there");
    }

    #[test]
    fn test_percent_escapes_are_decoded() {
        // "%26" and "%3D" must come back as literal '&' and '=' in the value.
        let parsed = parse_form(b"note=a%26b%3Dc&city=Las%20Palmas").unwrap();

        assert_eq!(parsed["note"], "a&b=c");
        assert_eq!(parsed["city"], "Las Palmas");
    }

    #[test]
    fn test_non_ascii_text_survives_decoding() {
        let parsed = parse_form("name=%D0%9E%D0%BB%D1%8C%D0%B3%D0%B0".as_bytes()).unwrap();

        assert_eq!(parsed["name"], "Ольга");
    }

    // ============================================================
    // MAPPING SEMANTICS
    // ============================================================

    #[test]
    fn test_duplicate_field_keeps_last_occurrence() {
        let parsed = parse_form(b"name=Alice&name=Bob").unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["name"], "Bob");
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let parsed = parse_form(b"name=&message=Hi").unwrap();

        assert_eq!(parsed["name"], "");
        assert_eq!(parsed["message"], "Hi");
    }

    #[test]
    fn test_round_trip_of_encoded_fields() {
        let mut original = FormMessage::new();
        original.insert("name".to_string(), "Grace Hopper".to_string());
        original.insert("message".to_string(), "100% sure: it works!".to_string());
        original.insert("city".to_string(), "Las Palmas".to_string());

        let encoded = original
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let parsed = parse_form(encoded.as_bytes()).unwrap();
        assert_eq!(parsed, original);
    }

    // ============================================================
    // REJECTION
    // ============================================================

    #[test]
    fn test_segment_without_separator_fails_whole_parse() {
        let result = parse_form(b"name=Alice&garbage");

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        assert!(parse_form(b"").is_err());
    }

    #[test]
    fn test_non_utf8_payload_is_rejected() {
        assert!(parse_form(&[0xff, 0xfe, 0x3d]).is_err());
    }
}
