//! The error envelope — built once from an [`ErrorSource`], immutable after.

use std::error::Error;
use std::fmt;

use rand::Rng;

use crate::site::Origin;
use crate::source::ErrorSource;

// ── Fixed texts ───────────────────────────────────────────────────

/// Public message substituted when a source discloses no public error.
pub const GENERIC_MESSAGE: &str = "Internal Error";

/// Context substituted when a source withholds context.
pub const CONTEXT_WITHHELD: &str = "request context withheld";

/// Context of the degraded envelope built from a source with no private
/// error.
pub const MISSING_PRIVATE_ERROR: &str = "failed to pass private error";

/// Rendered in place of the private error's text when none was recorded.
pub const ERROR_NOT_RECORDED: &str = "error not recorded";

/// Status code assigned to every non-degraded envelope.
pub const DEFAULT_STATUS: u16 = 400;

/// A response-safe error value built from an [`ErrorSource`].
///
/// The envelope owns its source and resolves everything a caller may see
/// at construction time: the public message (reviewed text or the generic
/// message plus correlation code), the context (supplied or the withheld
/// fallback), the status code, and the correlation code that ties the
/// client-visible failure to the server-side log line. The private error
/// is never part of that surface — it is reachable only through
/// [`private_error`](Envelope::private_error) and the render path.
///
/// Non-degraded envelopes always carry a non-empty public message and a
/// non-empty context, even when the source supplies neither.
pub struct Envelope {
    source:         Box<dyn ErrorSource>,
    origin:         Option<Origin>,
    status_code:    u16,
    public_message: String,
    context:        String,
    app_code:       i64,
}

// ── Construction ──────────────────────────────────────────────────

impl Envelope {
    /// Build an envelope from a source and an explicit construction site.
    ///
    /// Prefer [`new_error!`](crate::new_error) and
    /// [`std_err!`](crate::std_err), which capture the caller's [`Origin`]
    /// for you.
    pub fn from_source<S>(source: S, origin: Origin) -> Self
    where
        S: ErrorSource + 'static,
    {
        Self::build(Box::new(source), origin, GENERIC_MESSAGE)
    }

    /// Like [`from_source`](Self::from_source) with a caller-supplied
    /// generic message in place of [`GENERIC_MESSAGE`].
    pub fn from_source_with<S>(source: S, origin: Origin, generic: &str) -> Self
    where
        S: ErrorSource + 'static,
    {
        Self::build(Box::new(source), origin, generic)
    }

    fn build(source: Box<dyn ErrorSource>, origin: Origin, generic: &str) -> Self {
        // Degraded path: nothing to diagnose, nothing to disclose.
        if source.private_error().is_none() {
            return Self {
                source,
                origin:         None,
                status_code:    0,
                public_message: String::new(),
                context:        MISSING_PRIVATE_ERROR.to_owned(),
                app_code:       0,
            };
        }

        let app_code = next_app_code();

        let context = match source.public_context() {
            Some(context) => context.to_owned(),
            None => CONTEXT_WITHHELD.to_owned(),
        };

        let public_message = match source.public_error() {
            Some(public) => public.to_string(),
            None => format!("{} - ErrorCode: {}", generic, app_code),
        };

        Self {
            source,
            origin: Some(origin),
            status_code: DEFAULT_STATUS,
            public_message,
            context,
            app_code,
        }
    }

    /// Replace the status code. Consumes the envelope; there is no in-place
    /// mutation after construction.
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }
}

/// Non-negative 63-bit correlation code from the thread-local generator.
fn next_app_code() -> i64 {
    (rand::thread_rng().gen::<u64>() >> 1) as i64
}

// ── Accessors ─────────────────────────────────────────────────────

impl Envelope {
    /// The source this envelope was built from.
    pub fn error_source(&self) -> &dyn ErrorSource {
        self.source.as_ref()
    }

    /// The full-detail internal cause, if recorded.
    pub fn private_error(&self) -> Option<&(dyn Error + 'static)> {
        self.source.private_error()
    }

    /// The caller-approved public error, if the source supplied one.
    pub fn public_error(&self) -> Option<&(dyn Error + 'static)> {
        self.source.public_error()
    }

    /// The captured construction site. `None` for degraded envelopes.
    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }

    /// HTTP-style status code. [`DEFAULT_STATUS`] unless overridden.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The resolved caller-visible message.
    pub fn public_message(&self) -> &str {
        &self.public_message
    }

    /// The resolved disclosure-safe context.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Correlation code tying the client-visible failure to the log line.
    pub fn app_code(&self) -> i64 {
        self.app_code
    }
}

// ── Rendering ─────────────────────────────────────────────────────

impl Envelope {
    /// Render the log line for this envelope. Pure; the manager decides
    /// where it goes.
    ///
    /// Debug output names the construction site. Production output omits
    /// function, file and line so internal topology never reaches shared
    /// logs.
    pub fn render(&self, debug: bool) -> String {
        let details = match self.private_error() {
            Some(err) => err.to_string(),
            None => ERROR_NOT_RECORDED.to_owned(),
        };
        if debug {
            let origin = self.origin.unwrap_or(Origin::UNKNOWN);
            format!(
                "\n  -- Function: {}\n  -- SourceFile: {}\n  -- LineNumber: {}\n  -- ErrorDetails: {}\n  -- Context: {}\n  -- ErrorCode: {}\n",
                origin.function(),
                origin.file(),
                origin.line(),
                details,
                self.context,
                self.app_code,
            )
        } else {
            format!(
                "\n  -- ErrorDetails: {}\n  -- Context: {}\n  -- ErrorCode: {}\n",
                details, self.context, self.app_code,
            )
        }
    }
}

// ── std traits ────────────────────────────────────────────────────

impl fmt::Display for Envelope {
    /// The private error's text, verbatim; empty when none was recorded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.private_error() {
            Some(err) => write!(f, "{}", err),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("private_error", &self.private_error().map(|e| e.to_string()))
            .field("origin", &self.origin)
            .field("status_code", &self.status_code)
            .field("public_message", &self.public_message)
            .field("context", &self.context)
            .field("app_code", &self.app_code)
            .finish()
    }
}

impl Error for Envelope {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.private_error()
    }
}
