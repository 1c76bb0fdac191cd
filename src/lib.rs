//! # HTTP Errors
//!
//! Structured error values for HTTP handlers.
//!
//! ## Design Philosophy
//!
//! 1. **Public messages are safe to return** to an external client
//! 2. **Private messages stay in logs** and render as `[REDACTED]` everywhere else
//! 3. **Every error records where it was built** (`file:line` of the factory call)
//! 4. **Causes are wrapped, not flattened**, so the full chain reaches the log
//! 5. **Values are immutable** once a factory returns them
//!
//! ## Quick Start
//!
//! ```rust
//! use http_errors::{HttpError, Result};
//!
//! fn load_user(id: u64) -> Result<String> {
//!     Err(HttpError::not_found("user", format!("no row in users for id {id}"), None))
//! }
//!
//! let err = load_user(7).unwrap_err();
//!
//! // Response layer: code + public message
//! assert_eq!(err.code().as_u16(), 404);
//! assert_eq!(err.to_string(), "NotFound: user (404)");
//!
//! // Log layer: everything
//! let line = err.describe();
//! assert!(line.starts_with("Private[no row in users for id 7] Public[NotFound: user] Code[404]"));
//! ```
//!
//! ## Wrapping a Cause
//!
//! ```rust
//! use http_errors::HttpError;
//! use std::io;
//!
//! let io_err = io::Error::new(io::ErrorKind::TimedOut, "upstream timed out");
//! let err = HttpError::internal_server_error("profile", "avatar fetch", Some(io_err.into()));
//!
//! let cause = err.cause().and_then(|c| c.downcast_ref::<io::Error>()).unwrap();
//! assert_eq!(cause.kind(), io::ErrorKind::TimedOut);
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: unredacted `Debug` output and `InternalLog::format_for_trusted_debug`
//!   (debug builds only)
//! - `http`: conversions between [`StatusCode`] and `http::StatusCode`

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::result;

pub mod call_site;
pub mod codes;
pub mod convenience;
pub mod logging;
pub mod messages;

pub use call_site::*;
pub use codes::*;
pub use convenience::*;
pub use logging::*;
pub use messages::*;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, HttpError>;

/// Boxed underlying failure wrapped by an [`HttpError`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

const NOT_FOUND_PREFIX: &str = "NotFound";
const INTERNAL_SERVER_ERROR_PREFIX: &str = "InternalServerError";
const BAD_ACCESS_TOKEN_MESSAGE: &str = "Bad access token";
const BIND_ERROR_MESSAGE: &str = "Cannot bind body";
const LOGIN_FAILED_MESSAGE: &str = "Login process is failed";
const AGENT_EXPIRED_MESSAGE: &str = "Agent token is expired";
const LOGIN_EXPIRED_MESSAGE: &str = "Login token is expired";

/// Error value returned by HTTP handlers and the layers beneath them.
///
/// # Key Properties
///
/// - Immutable: every accessor takes `&self`, nothing mutates after construction
/// - `Display` renders only the public message and code
/// - `Debug` redacts the private message and cause (see `trusted_debug`)
/// - `source()` exposes the wrapped cause
/// - Owned private-message buffers are zeroized on drop
///
/// # Constructors
///
/// One factory per common failure. Each fixes the status code and any fixed
/// message, and records its caller's location:
///
/// | Factory | Code | Public message |
/// |---|---|---|
/// | [`new`](Self::new) | caller | caller |
/// | [`not_found`](Self::not_found) | 404 | `"NotFound: " + public` |
/// | [`internal_server_error`] | 500 | `"InternalServerError: " + public` |
/// | [`unauthorized_bad_access_token`] | 401 | `"Bad access token"` |
/// | [`bind_error`](Self::bind_error) | 400 | `"Cannot bind body"` |
/// | [`invalid_parameter`](Self::invalid_parameter) | 400 | caller |
/// | [`conflict`](Self::conflict) | 409 | caller |
/// | [`login_failed`](Self::login_failed) | 403 | `"Login process is failed"` |
/// | [`agent_expired`](Self::agent_expired) | 450 | `"Agent token is expired"` |
/// | [`login_expired`](Self::login_expired) | 451 | `"Login token is expired"` |
/// | [`unauthorized`](Self::unauthorized) | 401 | caller |
///
/// [`internal_server_error`]: Self::internal_server_error
/// [`unauthorized_bad_access_token`]: Self::unauthorized_bad_access_token
///
/// Every two-message factory takes `(public, private)` in that order.
#[must_use = "errors should be handled or logged"]
pub struct HttpError {
    code: StatusCode,
    public: PublicMessage,
    private: PrivateMessage,
    cause: Option<BoxError>,
    call: CallSite,
}

impl HttpError {
    #[track_caller]
    #[inline]
    fn build(
        code: StatusCode,
        public: PublicMessage,
        private: PrivateMessage,
        cause: Option<BoxError>,
    ) -> Self {
        Self {
            code,
            public,
            private,
            cause,
            call: CallSite::capture(),
        }
    }

    /// Create an error with a caller-chosen code and messages.
    ///
    /// Any `u16` is accepted, including values outside the HTTP range.
    #[track_caller]
    pub fn new(
        code: impl Into<StatusCode>,
        public_message: impl Into<Cow<'static, str>>,
        private_message: impl Into<Cow<'static, str>>,
        cause: Option<BoxError>,
    ) -> Self {
        Self::build(
            code.into(),
            PublicMessage::new(public_message),
            PrivateMessage::new(private_message),
            cause,
        )
    }

    // Factories. All are #[track_caller] so the recorded site is the
    // handler line that called them.

    /// 404, public message prefixed with `"NotFound: "`.
    #[track_caller]
    pub fn not_found(
        public_message: impl Into<Cow<'static, str>>,
        private_message: impl Into<Cow<'static, str>>,
        cause: Option<BoxError>,
    ) -> Self {
        Self::build(
            NOT_FOUND,
            PublicMessage::prefixed(NOT_FOUND_PREFIX, public_message),
            PrivateMessage::new(private_message),
            cause,
        )
    }

    /// 500, public message prefixed with `"InternalServerError: "`.
    #[track_caller]
    pub fn internal_server_error(
        public_message: impl Into<Cow<'static, str>>,
        private_message: impl Into<Cow<'static, str>>,
        cause: Option<BoxError>,
    ) -> Self {
        Self::build(
            INTERNAL_SERVER_ERROR,
            PublicMessage::prefixed(INTERNAL_SERVER_ERROR_PREFIX, public_message),
            PrivateMessage::new(private_message),
            cause,
        )
    }

    /// 401 with the fixed message `"Bad access token"` on both sides.
    #[track_caller]
    pub fn unauthorized_bad_access_token(cause: Option<BoxError>) -> Self {
        Self::build(
            UNAUTHORIZED,
            PublicMessage::new(BAD_ACCESS_TOKEN_MESSAGE),
            PrivateMessage::new(BAD_ACCESS_TOKEN_MESSAGE),
            cause,
        )
    }

    /// 400 for a request body that could not be deserialized.
    ///
    /// Both messages are the fixed `"Cannot bind body"`; the decoder's error
    /// belongs in `cause`.
    #[track_caller]
    pub fn bind_error(cause: Option<BoxError>) -> Self {
        Self::build(
            BAD_REQUEST,
            PublicMessage::new(BIND_ERROR_MESSAGE),
            PrivateMessage::new(BIND_ERROR_MESSAGE),
            cause,
        )
    }

    /// 400 for a request parameter that failed validation.
    #[track_caller]
    pub fn invalid_parameter(
        public_message: impl Into<Cow<'static, str>>,
        private_message: impl Into<Cow<'static, str>>,
        cause: Option<BoxError>,
    ) -> Self {
        Self::build(
            BAD_REQUEST,
            PublicMessage::new(public_message),
            PrivateMessage::new(private_message),
            cause,
        )
    }

    /// 409 for a write that conflicts with existing state.
    #[track_caller]
    pub fn conflict(
        public_message: impl Into<Cow<'static, str>>,
        private_message: impl Into<Cow<'static, str>>,
        cause: Option<BoxError>,
    ) -> Self {
        Self::build(
            CONFLICT,
            PublicMessage::new(public_message),
            PrivateMessage::new(private_message),
            cause,
        )
    }

    /// 403 with the fixed public message `"Login process is failed"`.
    ///
    /// The reason (unknown user, wrong password, locked account) goes in the
    /// private message so the response does not allow user enumeration.
    #[track_caller]
    pub fn login_failed(
        private_message: impl Into<Cow<'static, str>>,
        cause: Option<BoxError>,
    ) -> Self {
        Self::build(
            FORBIDDEN,
            PublicMessage::new(LOGIN_FAILED_MESSAGE),
            PrivateMessage::new(private_message),
            cause,
        )
    }

    /// 450 (custom) with the fixed public message `"Agent token is expired"`.
    #[track_caller]
    pub fn agent_expired(
        private_message: impl Into<Cow<'static, str>>,
        cause: Option<BoxError>,
    ) -> Self {
        Self::build(
            AGENT_TOKEN_EXPIRED,
            PublicMessage::new(AGENT_EXPIRED_MESSAGE),
            PrivateMessage::new(private_message),
            cause,
        )
    }

    /// 451 (custom) with the fixed public message `"Login token is expired"`.
    #[track_caller]
    pub fn login_expired(
        private_message: impl Into<Cow<'static, str>>,
        cause: Option<BoxError>,
    ) -> Self {
        Self::build(
            LOGIN_TOKEN_EXPIRED,
            PublicMessage::new(LOGIN_EXPIRED_MESSAGE),
            PrivateMessage::new(private_message),
            cause,
        )
    }

    /// 401 with caller-supplied messages.
    #[track_caller]
    pub fn unauthorized(
        public_message: impl Into<Cow<'static, str>>,
        private_message: impl Into<Cow<'static, str>>,
        cause: Option<BoxError>,
    ) -> Self {
        Self::build(
            UNAUTHORIZED,
            PublicMessage::new(public_message),
            PrivateMessage::new(private_message),
            cause,
        )
    }

    /// Get status code
    #[inline]
    pub const fn code(&self) -> StatusCode {
        self.code
    }

    /// Message safe to return to the client.
    #[inline]
    pub fn public_message(&self) -> &str {
        self.public.as_str()
    }

    /// Log-only diagnostic message. Never put this in a response.
    #[inline]
    pub fn private_message(&self) -> &str {
        self.private.expose()
    }

    /// True iff `400 <= code < 500`, custom 450/451 included.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        self.code.is_client_error()
    }

    /// True iff `500 <= code < 600`.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.code.is_server_error()
    }

    /// Coarse class of the status code.
    #[inline]
    pub const fn status_class(&self) -> StatusClass {
        self.code.class()
    }

    /// The wrapped failure, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consume the error and take ownership of its cause.
    #[inline]
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    /// Where the error was constructed.
    #[inline]
    pub const fn call_site(&self) -> &CallSite {
        &self.call
    }

    /// Single-line rendering of every field for logs.
    ///
    /// Format:
    /// `Private[..] Public[..] Code[..] Call[file:line] Err[..]`
    /// with `Err[<nil>]` when there is no cause. A cause renders as its
    /// `source()` chain joined by `": "`, skipping a link whose text the
    /// previous link already ends with.
    ///
    /// Nothing is truncated. Log sinks that need a size cap can use
    /// [`InternalLog::write_bounded_to`] instead.
    pub fn describe(&self) -> String {
        self.internal_log().to_string()
    }

    /// Create structured internal log entry with explicit lifetime.
    ///
    /// The returned `InternalLog` borrows from `self` and cannot outlive it.
    ///
    /// ```rust
    /// # use http_errors::HttpError;
    /// let err = HttpError::login_failed("password mismatch for uid 12", None);
    /// let log = err.internal_log();
    /// assert_eq!(log.public_message(), "Login process is failed");
    /// assert_eq!(log.private_message(), "password mismatch for uid 12");
    /// ```
    #[inline]
    pub fn internal_log(&self) -> InternalLog<'_> {
        InternalLog {
            code: self.code,
            public_message: self.public.as_str(),
            private_message: self.private.expose(),
            call_site: &self.call,
            cause: self.cause(),
        }
    }

    /// Callback-style access to the internal log view.
    ///
    /// ```rust
    /// # use http_errors::HttpError;
    /// # let err = HttpError::bind_error(None);
    /// let line = err.with_internal_log(|log| log.to_string());
    /// assert!(line.contains("Code[400]"));
    /// ```
    #[inline]
    pub fn with_internal_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InternalLog<'_>) -> R,
    {
        let log = self.internal_log();
        f(&log)
    }
}

impl fmt::Debug for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("HttpError");
        s.field("code", &self.code)
            .field("public", &self.public)
            .field("call", &self.call);

        #[cfg(all(feature = "trusted_debug", debug_assertions))]
        {
            s.field("private", &self.private.expose())
                .field("cause", &self.cause);
        }

        #[cfg(not(all(feature = "trusted_debug", debug_assertions)))]
        {
            s.field("private", &self.private)
                .field("cause", &self.cause.as_ref().map(|_| "<PRESENT>"));
        }

        s.finish()
    }
}

impl fmt::Display for HttpError {
    /// External display: `"{public message} ({code})"`.
    ///
    /// Never includes the private message, the call site or the cause.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.public, self.code)
    }
}

impl Error for HttpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}
