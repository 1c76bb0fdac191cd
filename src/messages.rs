//! Public and private message types with a type-enforced trust boundary.
//!
//! # Architecture
//!
//! An [`HttpError`](crate::HttpError) carries two messages that must never be
//! confused:
//!
//! - [`PublicMessage`]: safe to return to an external client
//! - [`PrivateMessage`]: diagnostic text for internal logs only
//!
//! # Trust Boundary Enforcement
//!
//! - `PublicMessage` implements `Display` as its text
//! - `PrivateMessage` implements `Display` and `Debug` as `[REDACTED]`
//! - No conversions exist between the two types
//!
//! Formatting a private message into a response body with `{}` therefore
//! yields a placeholder rather than the payload. Reading it requires the
//! explicit [`PrivateMessage::expose`] call, which is easy to grep for.
//!
//! # Memory Model
//!
//! Both types store `Cow<'static, str>`, so string literals cost no allocation.
//! Owned private buffers are zeroized on drop. Borrowed data is assumed to be a
//! literal embedded in the binary and is left alone.

use std::borrow::Cow;
use std::fmt;
use zeroize::Zeroize;

/// Placeholder written wherever a private message would otherwise be rendered.
pub const REDACTED: &str = "[REDACTED]";

// ============================================================================
// Public Message
// ============================================================================

/// Message safe for external display (HTTP bodies, client-facing APIs).
#[derive(Clone, PartialEq, Eq)]
pub struct PublicMessage(Cow<'static, str>);

impl PublicMessage {
    /// Wrap a message for external display.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }

    /// Wrap `message` behind a fixed `"<prefix>: "` label.
    ///
    /// Used by factories that tag the caller's text with the failure kind,
    /// e.g. `"NotFound: user"`.
    pub fn prefixed(prefix: &str, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        let mut out = String::with_capacity(prefix.len() + 2 + message.len());
        out.push_str(prefix);
        out.push_str(": ");
        out.push_str(&message);
        Self(Cow::Owned(out))
    }

    /// Borrow the message text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl fmt::Display for PublicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for PublicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicMessage({:?})", self.as_str())
    }
}

// ============================================================================
// Private Message
// ============================================================================

/// Diagnostic message restricted to internal logs.
///
/// # No Clone Policy
///
/// Single ownership keeps the diagnostic text in one buffer, which is the
/// buffer that gets zeroized.
pub struct PrivateMessage(Cow<'static, str>);

impl PrivateMessage {
    /// Wrap a log-only message.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }

    /// Borrow the raw diagnostic text.
    ///
    /// Only call this on logging paths. Never feed the result into a
    /// response body.
    #[inline]
    pub fn expose(&self) -> &str {
        self.0.as_ref()
    }

    /// Whether the message is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Zeroize for PrivateMessage {
    fn zeroize(&mut self) {
        if let Cow::Owned(s) = &mut self.0 {
            s.zeroize();
        }
    }
}

impl Drop for PrivateMessage {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Display for PrivateMessage {
    /// Always renders the placeholder, never the payload.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Debug for PrivateMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateMessage({})", REDACTED)
    }
}
