//! Convenience macros for creating errors with format strings.
//!
//! # Rules
//!
//! 1. **Public messages MUST be string literals**: dynamic text reaches a
//!    client only through an explicit factory call or `sanitized!()`
//! 2. **Private messages may be formatted freely**: they are log-only
//!
//! # Usage
//!
//! ```rust
//! # use http_errors::{http_error, NOT_FOUND};
//! let id = 42;
//! let err = http_error!(NOT_FOUND, "User not found", "no row in users for id {}", id);
//! assert_eq!(err.public_message(), "User not found");
//! assert_eq!(err.private_message(), "no row in users for id 42");
//! ```
//!
//! ```rust,compile_fail
//! # use http_errors::{http_error, NOT_FOUND};
//! let user_input = String::from("attacker data");
//! // Public message must be a literal
//! let err = http_error!(NOT_FOUND, user_input, "lookup failed");
//! ```
//!
//! The macros expand to a `#[track_caller]` constructor call, so the recorded
//! call site is the line of the macro invocation.
//!
//! ## Sanitization
//!
//! [`sanitize_string`] (and the `sanitized!()` wrapper) bounds caller-supplied
//! text before it is put into a public message:
//! - Truncates to [`MAX_SANITIZED_LEN`] bytes on a UTF-8 boundary
//! - Replaces control characters with `?` and drops the body of ANSI escape
//!   sequences (`ESC [ params letter`)
//! - Returns `[INVALID_INPUT]` when nothing printable remains

// ============================================================================
// Sanitization Utilities
// ============================================================================

/// Maximum length for sanitized strings in error messages.
pub const MAX_SANITIZED_LEN: usize = 256;

const TRUNCATED_SUFFIX: &str = "...[TRUNCATED]";
const INVALID_INPUT: &str = "[INVALID_INPUT]";

/// Sanitize untrusted input for inclusion in a public message.
///
/// # Example
///
/// ```rust
/// # use http_errors::sanitize_string;
/// let long = "A".repeat(300);
/// let san = sanitize_string(&long);
/// assert!(san.len() <= 256);
/// assert!(san.ends_with("[TRUNCATED]"));
/// ```
pub fn sanitize_string(original: &str) -> String {
    let mut s = String::with_capacity(MAX_SANITIZED_LEN.min(original.len()));
    let mut truncated = false;
    let mut saw_non_control = false;
    let mut in_escape = false;

    for c in original.chars() {
        // Parameters and intermediates are skipped; the final letter ends it.
        if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
            continue;
        }

        let replacement = if c == '\u{1b}' {
            in_escape = true;
            '?'
        } else if c.is_control() {
            '?'
        } else {
            saw_non_control = true;
            c
        };

        if s.len() + replacement.len_utf8() > MAX_SANITIZED_LEN {
            truncated = true;
            break;
        }
        s.push(replacement);
    }

    if !saw_non_control {
        return String::from(INVALID_INPUT);
    }

    if truncated {
        let mut new_len = MAX_SANITIZED_LEN.saturating_sub(TRUNCATED_SUFFIX.len());
        while new_len > 0 && !s.is_char_boundary(new_len) {
            new_len -= 1;
        }
        s.truncate(new_len);
        if s.is_empty() {
            return String::from(INVALID_INPUT);
        }
        s.push_str(TRUNCATED_SUFFIX);
    }

    s
}

/// Sanitize any `Display` value for inclusion in a public message.
///
/// ```rust
/// # use http_errors::sanitized;
/// assert_eq!(sanitized!("line\nbreak"), "line?break");
/// assert_eq!(sanitized!(404), "404");
/// ```
#[macro_export]
macro_rules! sanitized {
    ($expr:expr) => {
        $crate::convenience::sanitize_string(&$expr.to_string())
    };
}

// ============================================================================
// Error Creation Macros
// ============================================================================

/// Create an [`HttpError`](crate::HttpError) with no cause.
///
/// # Arguments
/// - `$code`: anything `Into<StatusCode>`
/// - `$public`: public message (string literal)
/// - `$private`: private message literal, or format string plus arguments
///
/// # Example
///
/// ```rust
/// # use http_errors::{http_error, CONFLICT};
/// let name = "alice";
/// let err = http_error!(CONFLICT, "Name already taken", "duplicate key {}", name);
/// assert_eq!(err.code(), CONFLICT);
/// assert_eq!(err.call_site().line(), Some(line!() - 2));
/// ```
#[macro_export]
macro_rules! http_error {
    ($code:expr, $public:literal, $private:literal $(,)?) => {
        $crate::HttpError::new($code, $public, $private, None)
    };
    ($code:expr, $public:literal, $fmt:literal, $($arg:tt)+) => {
        $crate::HttpError::new($code, $public, ::std::format!($fmt, $($arg)+), None)
    };
}

/// Return early with an [`HttpError`](crate::HttpError).
///
/// Takes the same arguments as [`http_error!`]. The error is converted with
/// `.into()`, so it works in functions returning `Result<T, E>` for any
/// `E: From<HttpError>`.
///
/// ```rust
/// # use http_errors::{http_bail, Result, BAD_REQUEST};
/// fn page_size(raw: u32) -> Result<u32> {
///     if raw == 0 {
///         http_bail!(BAD_REQUEST, "Invalid page size", "page size was {}", raw);
///     }
///     Ok(raw)
/// }
/// assert!(page_size(0).is_err());
/// ```
#[macro_export]
macro_rules! http_bail {
    ($($tt:tt)+) => {
        return Err($crate::http_error!($($tt)+).into())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HttpError, Result, BAD_REQUEST, NOT_FOUND};

    #[test]
    fn sanitize_truncates_long_strings() {
        let s = "A".repeat(300);
        let san = sanitize_string(&s);
        assert!(san.len() <= MAX_SANITIZED_LEN);
        assert!(san.ends_with(TRUNCATED_SUFFIX));
    }

    #[test]
    fn sanitize_preserves_short_strings() {
        assert_eq!(sanitize_string("hello"), "hello");
    }

    #[test]
    fn sanitize_respects_utf8_boundaries() {
        let s = "й".repeat(200);
        let san = sanitize_string(&s);
        assert!(std::str::from_utf8(san.as_bytes()).is_ok());
        assert!(san.ends_with(TRUNCATED_SUFFIX));
    }

    #[test]
    fn sanitize_replaces_control_chars() {
        assert_eq!(sanitize_string("a\r\nb\tc"), "a??b?c");
    }

    #[test]
    fn sanitize_strips_ansi_sequences() {
        assert_eq!(sanitize_string("\u{1b}[31mred"), "?red");
        assert_eq!(sanitize_string("\u{1b}[1;32mok\u{1b}[0m"), "?ok?");
    }

    #[test]
    fn sanitize_ends_escape_at_any_final_letter() {
        assert_eq!(sanitize_string("\u{1b}[2J clear all"), "? clear all");
        assert_eq!(sanitize_string("\u{1b}[10;5Hmoved"), "?moved");
        assert_eq!(sanitize_string("\u{1b}[Kline"), "?line");
    }

    #[test]
    fn sanitize_rejects_empty_and_control_only() {
        assert_eq!(sanitize_string(""), INVALID_INPUT);
        assert_eq!(sanitize_string("\n\t\r"), INVALID_INPUT);
    }

    #[test]
    fn sanitized_macro_works_with_numbers() {
        assert_eq!(sanitized!(42), "42");
    }

    #[test]
    fn http_error_with_literal_private() {
        let err = http_error!(NOT_FOUND, "Missing", "row absent");
        assert_eq!(err.code(), NOT_FOUND);
        assert_eq!(err.public_message(), "Missing");
        assert_eq!(err.private_message(), "row absent");
        assert!(err.cause().is_none());
    }

    #[test]
    fn http_error_formats_private() {
        let table = "users";
        let err = http_error!(NOT_FOUND, "Missing", "no row in {} for id {}", table, 7);
        assert_eq!(err.private_message(), "no row in users for id 7");
    }

    #[test]
    fn http_error_records_invocation_line() {
        let err = http_error!(BAD_REQUEST, "Bad", "bad");
        assert_eq!(err.call_site().line(), Some(line!() - 1));
        assert_eq!(err.call_site().file(), Some(file!()));
    }

    #[test]
    fn http_bail_returns_early() {
        fn check(flag: bool) -> Result<&'static str> {
            if flag {
                http_bail!(BAD_REQUEST, "Flag not allowed", "flag was {}", flag);
            }
            Ok("ok")
        }

        assert_eq!(check(false).unwrap(), "ok");
        let err: HttpError = check(true).unwrap_err();
        assert_eq!(err.public_message(), "Flag not allowed");
        assert_eq!(err.private_message(), "flag was true");
    }

    mod shadowed_format {
        use crate::NOT_FOUND;

        macro_rules! format {
            ($($tt:tt)*) => {
                String::from("shadowed")
            };
        }

        #[test]
        fn http_error_ignores_local_format_macro() {
            let local = format!("anything");
            assert_eq!(local, "shadowed");

            let err = http_error!(NOT_FOUND, "Missing", "id {}", 9);
            assert_eq!(err.private_message(), "id 9");
        }
    }

    #[test]
    fn macros_accept_trailing_comma() {
        let err = http_error!(NOT_FOUND, "Missing", "gone",);
        assert_eq!(err.private_message(), "gone");
    }
}
