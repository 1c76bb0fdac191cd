//! Call-site capture for error values.
//!
//! Every constructor in this crate is `#[track_caller]`. The compiler threads
//! the caller's location through each such frame, so `Location::caller()`
//! inside [`CallSite::capture`] resolves to the first frame that is *not*
//! `#[track_caller]`: the handler code that invoked the factory. No runtime
//! stack walking is involved and capture cannot fail.
//!
//! Wrapper functions in application code become transparent the same way:
//!
//! ```rust
//! use http_errors::{HttpError, CallSite};
//!
//! #[track_caller]
//! fn missing_user(id: u64) -> HttpError {
//!     HttpError::not_found("user", format!("user {id} not in store"), None)
//! }
//!
//! let err = missing_user(7); // recorded here, not inside `missing_user`
//! assert_eq!(err.call_site().line(), Some(line!() - 1));
//! ```

use std::fmt;
use std::panic::Location;

/// Sentinel rendered when no location is available.
pub const UNKNOWN_CALL_SITE: &str = "unknown:unknown";

/// Source location where an error value was constructed.
///
/// Renders as `"path:line"`. [`CallSite::unknown`] renders the
/// `"unknown:unknown"` sentinel and is the `Default`; it exists for values
/// rebuilt from sources that carry no location.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CallSite {
    /// Location recorded by the compiler.
    Known(&'static Location<'static>),
    /// No location available.
    #[default]
    Unknown,
}

impl CallSite {
    /// Record the location of the nearest non-`#[track_caller]` frame.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Self::Known(Location::caller())
    }

    /// The `"unknown:unknown"` call site.
    #[inline]
    pub const fn unknown() -> Self {
        Self::Unknown
    }

    /// Whether a real location was recorded.
    #[inline]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Source file path as given to the compiler.
    #[inline]
    pub fn file(&self) -> Option<&'static str> {
        match self {
            Self::Known(loc) => Some(loc.file()),
            Self::Unknown => None,
        }
    }

    /// 1-based line number.
    #[inline]
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::Known(loc) => Some(loc.line()),
            Self::Unknown => None,
        }
    }

    /// 1-based column number.
    #[inline]
    pub fn column(&self) -> Option<u32> {
        match self {
            Self::Known(loc) => Some(loc.column()),
            Self::Unknown => None,
        }
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(loc: &'static Location<'static>) -> Self {
        Self::Known(loc)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(loc) => write!(f, "{}:{}", loc.file(), loc.line()),
            Self::Unknown => f.write_str(UNKNOWN_CALL_SITE),
        }
    }
}

impl fmt::Debug for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallSite({})", self)
    }
}
