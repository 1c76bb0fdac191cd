//! Status code namespace - typed HTTP status codes for error values.
//!
//! Handlers compare against named constants instead of bare integers, which
//! keeps the two custom session codes greppable:
//!
//! - **450** [`AGENT_TOKEN_EXPIRED`]: the agent's token is no longer valid
//! - **451** [`LOGIN_TOKEN_EXPIRED`]: the user's login token is no longer valid
//!
//! Both sit inside the 4xx range, so [`StatusCode::is_client_error`] is true
//! for them even though they are not registered HTTP codes.
//!
//! # Copy Semantics
//!
//! `StatusCode` is a `u16` newtype and is `Copy`. It carries no governed
//! identity, only classification data, so duplication is harmless.
//!
//! # Example
//!
//! ```rust
//! use http_errors::{StatusCode, StatusClass, AGENT_TOKEN_EXPIRED};
//!
//! assert!(AGENT_TOKEN_EXPIRED.is_client_error());
//! assert!(AGENT_TOKEN_EXPIRED.is_session_expired());
//! assert_eq!(StatusCode::new(503).class(), StatusClass::ServerError);
//! ```

use std::fmt;

// ============================================================================
// Status Class
// ============================================================================

/// Coarse classification of a status code by its hundreds digit.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum StatusClass {
    /// 100-199
    Informational,
    /// 200-299
    Success,
    /// 300-399
    Redirection,
    /// 400-499, including the custom 450/451 codes.
    ClientError,
    /// 500-599
    ServerError,
    /// Anything outside 100-599.
    Unknown,
}

impl StatusClass {
    /// Classify a raw status value.
    pub const fn from_code(code: u16) -> Self {
        match code {
            100..=199 => Self::Informational,
            200..=299 => Self::Success,
            300..=399 => Self::Redirection,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Short label used in logs.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Informational => "Informational",
            Self::Success => "Success",
            Self::Redirection => "Redirection",
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
            Self::Unknown => "Unknown",
        }
    }
}

// ============================================================================
// Status Code
// ============================================================================

/// HTTP-style status code carried by an [`HttpError`](crate::HttpError).
///
/// Construction through [`StatusCode::new`] accepts any `u16`; the generic
/// error constructor must be able to carry whatever code a caller chooses.
/// Use [`StatusCode::checked_new`] when the value comes from an untrusted
/// source such as configuration or an upstream response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    /// Wrap a raw code without validation.
    #[inline]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Wrap a raw code, rejecting values outside `100..=999`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusCodeError::OutOfRange`] for anything below 100 or
    /// above 999.
    #[inline]
    pub const fn checked_new(code: u16) -> Result<Self, StatusCodeError> {
        if code < 100 || code > 999 {
            return Err(StatusCodeError::OutOfRange { value: code });
        }
        Ok(Self(code))
    }

    /// Get the numeric value.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// True iff `400 <= code < 500`.
    #[inline]
    pub const fn is_client_error(self) -> bool {
        400 <= self.0 && self.0 < 500
    }

    /// True iff `500 <= code < 600`.
    #[inline]
    pub const fn is_server_error(self) -> bool {
        500 <= self.0 && self.0 < 600
    }

    /// True for the two custom session-expiry codes (450, 451).
    #[inline]
    pub const fn is_session_expired(self) -> bool {
        self.0 == AGENT_TOKEN_EXPIRED.0 || self.0 == LOGIN_TOKEN_EXPIRED.0
    }

    /// Get the coarse class.
    #[inline]
    pub const fn class(self) -> StatusClass {
        StatusClass::from_code(self.0)
    }

    /// Reason phrase for the codes this crate constructs, `None` otherwise.
    pub const fn canonical_reason(self) -> Option<&'static str> {
        match self.0 {
            400 => Some("Bad Request"),
            401 => Some("Unauthorized"),
            403 => Some("Forbidden"),
            404 => Some("Not Found"),
            409 => Some("Conflict"),
            450 => Some("Agent Token Expired"),
            451 => Some("Login Token Expired"),
            500 => Some("Internal Server Error"),
            _ => None,
        }
    }
}

impl From<u16> for StatusCode {
    #[inline]
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl From<StatusCode> for u16 {
    #[inline]
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl PartialEq<u16> for StatusCode {
    #[inline]
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for StatusCode {
    /// Writes the bare number, e.g. `404`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "http")]
impl TryFrom<StatusCode> for http::StatusCode {
    type Error = http::status::InvalidStatusCode;

    fn try_from(code: StatusCode) -> Result<Self, Self::Error> {
        http::StatusCode::from_u16(code.0)
    }
}

#[cfg(feature = "http")]
impl From<http::StatusCode> for StatusCode {
    fn from(code: http::StatusCode) -> Self {
        Self(code.as_u16())
    }
}

// ============================================================================
// Validation Errors
// ============================================================================

/// Error returned by [`StatusCode::checked_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCodeError {
    /// Value outside `100..=999`.
    OutOfRange {
        /// The rejected value.
        value: u16,
    },
}

impl fmt::Display for StatusCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { value } => {
                write!(f, "Status code {} out of range (must be 100-999)", value)
            }
        }
    }
}

impl std::error::Error for StatusCodeError {}

// ============================================================================
// Named Constants
// ============================================================================

/// 400 Bad Request.
pub const BAD_REQUEST: StatusCode = StatusCode::new(400);
/// 401 Unauthorized.
pub const UNAUTHORIZED: StatusCode = StatusCode::new(401);
/// 403 Forbidden.
pub const FORBIDDEN: StatusCode = StatusCode::new(403);
/// 404 Not Found.
pub const NOT_FOUND: StatusCode = StatusCode::new(404);
/// 409 Conflict.
pub const CONFLICT: StatusCode = StatusCode::new(409);
/// 450 - custom: agent token expired.
pub const AGENT_TOKEN_EXPIRED: StatusCode = StatusCode::new(450);
/// 451 - custom: login token expired.
///
/// Collides with the registered "Unavailable For Legal Reasons"; callers
/// that forward codes to third parties should map it first.
pub const LOGIN_TOKEN_EXPIRED: StatusCode = StatusCode::new(451);
/// 500 Internal Server Error.
pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode::new(500);

// ============================================================================
// Tests
// ============================================================================
