//! Property-based tests for http_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use http_errors::{HttpError, MAX_FIELD_OUTPUT_LEN, StatusCode, sanitized};
use proptest::prelude::*;

// ============================================================================
// CLASSIFICATION PROPERTIES
// ============================================================================

proptest! {
    /// is_client_error is exactly the half-open range [400, 500)
    #[test]
    fn client_error_iff_4xx(code in any::<u16>()) {
        let err = HttpError::new(code, "p", "q", None);
        prop_assert_eq!(err.is_client_error(), (400..500).contains(&code));
        prop_assert_eq!(err.code(), StatusCode::new(code));
    }

    /// checked_new agrees with the documented range
    #[test]
    fn checked_new_range(code in any::<u16>()) {
        prop_assert_eq!(StatusCode::checked_new(code).is_ok(), (100..=999).contains(&code));
    }
}

// ============================================================================
// TRUST BOUNDARY PROPERTIES
// ============================================================================

proptest! {
    /// Display never contains the private message
    #[test]
    fn display_leaks_no_private_message(
        public in "[a-z ]{0,40}",
        private in "[A-Z0-9]{8,64}",
    ) {
        let err = HttpError::unauthorized(public, private.clone(), None);
        let display = err.to_string();
        prop_assert!(!display.contains(&private));
    }

    /// Debug never contains the private message without trusted_debug
    #[test]
    fn debug_leaks_no_private_message(private in "[A-Z0-9]{8,64}") {
        let err = HttpError::login_failed(private.clone(), None);
        let debugged = format!("{:?}", err);
        if !cfg!(all(feature = "trusted_debug", debug_assertions)) {
            prop_assert!(!debugged.contains(&private));
        }
    }
}

// ============================================================================
// DESCRIBE PROPERTIES
// ============================================================================

proptest! {
    /// Errors can be created and described with arbitrary strings
    #[test]
    fn describe_never_panics(
        public in "\\PC{0,2000}",
        private in "\\PC{0,2000}",
    ) {
        let err = HttpError::conflict(public, private, None);
        let described = err.describe();
        prop_assert!(std::str::from_utf8(described.as_bytes()).is_ok());
    }

    /// describe() carries the private message in full
    #[test]
    fn describe_is_lossless(private in "\\PC{0,4000}") {
        let err = HttpError::invalid_parameter("bad", private.clone(), None);
        let expected = format!("Private[{}] Public[bad]", private);
        prop_assert!(err.describe().starts_with(&expected));
    }

    /// The bounded renderer stays bounded regardless of input size
    #[test]
    fn bounded_render_is_bounded(
        public in "\\PC{0,3000}",
        private in "\\PC{0,10000}",
    ) {
        let err = HttpError::invalid_parameter(public, private, None);
        let mut line = String::new();
        err.internal_log().write_bounded_to(&mut line, MAX_FIELD_OUTPUT_LEN).unwrap();
        // 1024 per field + labels + call site
        prop_assert!(line.len() < 4096);
    }

    /// Short fields appear verbatim in fixed order
    #[test]
    fn describe_field_order(
        public in "[a-z]{1,20}",
        private in "[a-z]{1,20}",
    ) {
        let err = HttpError::unauthorized(public.clone(), private.clone(), None);
        let expected_prefix = format!("Private[{}] Public[{}] Code[401] Call[", private, public);
        let described = err.describe();
        prop_assert!(described.starts_with(&expected_prefix));
        prop_assert!(described.ends_with("Err[<nil>]"));
    }
}

// ============================================================================
// SANITIZATION PROPERTIES
// ============================================================================

proptest! {
    /// Sanitized output is valid UTF-8, bounded, and free of control characters
    #[test]
    fn sanitized_macro_properties(s in "\\PC*") {
        let sanitized = sanitized!(s);

        prop_assert!(sanitized.len() <= 256);
        prop_assert!(!sanitized.chars().any(|c| c.is_control()));

        if s.is_empty() {
            prop_assert_eq!(sanitized, "[INVALID_INPUT]");
        } else if s.len() <= 256 {
            prop_assert_eq!(sanitized, s);
        }
    }

    /// Prefixed factories always keep the caller's text after the prefix
    #[test]
    fn not_found_prefix_preserved(msg in "\\PC{0,200}") {
        let err = HttpError::not_found(msg.clone(), "x", None);
        prop_assert_eq!(err.public_message(), format!("NotFound: {}", msg));
    }
}
