//! Structured log view for internal diagnostics.
//!
//! # Properties
//!
//! - Borrows from an `HttpError` with an explicit lifetime
//! - CANNOT outlive the error that created it
//! - NO heap allocations in accessors
//! - Fields are written in full by `write_to`; `write_bounded_to` caps them
//!
//! The crate itself never logs. This view is what a logging layer consumes,
//! either field by field (structured loggers) or through [`InternalLog::write_to`]
//! for a single line in the fixed `describe()` layout:
//!
//! ```text
//! Private[<private>] Public[<public>] Code[<code>] Call[<file:line>] Err[<cause>]
//! ```

use crate::{CallSite, StatusCode};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Default per-field cap for [`InternalLog::write_bounded_to`].
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Rendered in the `Err[...]` segment when there is no cause.
const NO_CAUSE: &str = "<nil>";

/// Separator between links of a rendered cause chain.
const CHAIN_SEPARATOR: &str = ": ";

/// A cause and its `source()` links, outermost first.
///
/// Chains deeper than four links spill to the heap.
pub type CauseChain<'a> = SmallVec<[&'a (dyn Error + 'static); 4]>;

/// Structured log entry borrowing from an `HttpError`.
///
/// # Example
///
/// ```rust
/// # use http_errors::HttpError;
/// let err = HttpError::conflict("Name taken", "unique index users_name", None);
/// let log = err.internal_log();
/// assert_eq!(log.code().as_u16(), 409);
/// assert_eq!(log.private_message(), "unique index users_name");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InternalLog<'a> {
    pub(crate) code: StatusCode,
    pub(crate) public_message: &'a str,
    pub(crate) private_message: &'a str,
    pub(crate) call_site: &'a CallSite,
    pub(crate) cause: Option<&'a (dyn Error + Send + Sync + 'static)>,
}

impl<'a> InternalLog<'a> {
    /// Format every field without truncation or redaction.
    ///
    /// Only available with BOTH the `trusted_debug` feature flag AND debug
    /// assertions enabled, so it cannot reach a release build.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = format!(
            "code={} public='{}' private='{}' call='{}'",
            self.code, self.public_message, self.private_message, self.call_site
        );

        for (depth, link) in self.cause_chain().iter().enumerate() {
            output.push_str(&format!(" cause[{}]='{}'", depth, link));
        }

        output
    }

    /// Write the single-line `describe()` layout to any `fmt::Write`.
    ///
    /// Every field is written in full. Use [`InternalLog::write_bounded_to`]
    /// when the sink cannot take unbounded input.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        self.render(f, None)
    }

    /// Write the `describe()` layout with each field capped at `max_field_len`
    /// bytes.
    ///
    /// A capped field ends in `...[TRUNCATED]` and is cut on a UTF-8 boundary.
    /// Fields at or under the cap are written unchanged.
    ///
    /// ```rust
    /// # use http_errors::{HttpError, MAX_FIELD_OUTPUT_LEN};
    /// let err = HttpError::internal_server_error("db", "q".repeat(5000), None);
    ///
    /// let mut line = String::new();
    /// err.internal_log().write_bounded_to(&mut line, MAX_FIELD_OUTPUT_LEN).unwrap();
    /// assert!(line.contains("...[TRUNCATED]"));
    /// assert!(line.len() < 5000);
    /// ```
    pub fn write_bounded_to(&self, f: &mut impl fmt::Write, max_field_len: usize) -> fmt::Result {
        self.render(f, Some(max_field_len))
    }

    fn render(&self, f: &mut impl fmt::Write, limit: Option<usize>) -> fmt::Result {
        write!(
            f,
            "Private[{}] Public[{}] Code[{}] Call[{}] Err[",
            bounded(self.private_message, limit),
            bounded(self.public_message, limit),
            self.code,
            self.call_site,
        )?;

        if self.cause.is_some() {
            let rendered = self.render_cause_chain();
            f.write_str(&bounded(&rendered, limit))?;
        } else {
            f.write_str(NO_CAUSE)?;
        }

        f.write_char(']')
    }

    /// The cause followed by each of its `source()` links, outermost first.
    pub fn cause_chain(&self) -> CauseChain<'a> {
        let mut chain = CauseChain::new();
        let mut next = self.cause.map(|c| c as &'a (dyn Error + 'static));
        while let Some(link) = next {
            chain.push(link);
            next = link.source();
        }
        chain
    }

    // A link whose text already ends the last written link is skipped, so
    // wrappers that print their source as "outer: inner" don't repeat it.
    fn render_cause_chain(&self) -> String {
        let mut out = String::new();
        let mut last = String::new();
        for link in self.cause_chain() {
            let text = link.to_string();
            if !last.is_empty() && last.ends_with(text.as_str()) {
                continue;
            }
            if !out.is_empty() {
                out.push_str(CHAIN_SEPARATOR);
            }
            out.push_str(&text);
            last = text;
        }
        out
    }

    // Structured accessors. Not truncated: truncation belongs to whatever
    // serializes them.

    /// Status code.
    #[inline]
    pub const fn code(&self) -> StatusCode {
        self.code
    }

    /// Client-facing message.
    #[inline]
    pub const fn public_message(&self) -> &'a str {
        self.public_message
    }

    /// Log-only message, unredacted.
    #[inline]
    pub const fn private_message(&self) -> &'a str {
        self.private_message
    }

    /// Where the error was built.
    #[inline]
    pub const fn call_site(&self) -> &'a CallSite {
        self.call_site
    }

    /// Wrapped failure, if any.
    #[inline]
    pub const fn cause(&self) -> Option<&'a (dyn Error + Send + Sync + 'static)> {
        self.cause
    }
}

impl fmt::Display for InternalLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Cap `s` at `limit` bytes, indicator included.
///
/// Borrows when no cap applies. A cap smaller than the indicator yields the
/// indicator alone.
fn bounded(s: &str, limit: Option<usize>) -> Cow<'_, str> {
    let max = match limit {
        Some(max) if s.len() > max => max,
        _ => return Cow::Borrowed(s),
    };

    let budget = max.saturating_sub(TRUNCATION_INDICATOR.len());
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= budget)
        .last()
        .unwrap_or(0);

    if cut == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut out = String::with_capacity(cut + TRUNCATION_INDICATOR.len());
    out.push_str(&s[..cut]);
    out.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(out)
}
