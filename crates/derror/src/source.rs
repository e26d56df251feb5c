//! Error sources — the dual-channel contract and its built-in adapters.

use std::error::Error;
use std::fmt;

/// The dual-channel error contract.
///
/// Anything that can say what actually failed (private), what a caller may
/// be told (public), and under which circumstances (context) can be wrapped
/// into an [`Envelope`](crate::Envelope).
///
/// Repeated calls must return stable results with no side effects — the
/// envelope constructor reads each channel exactly once, but renderers may
/// read the private channel again later.
pub trait ErrorSource: Send + Sync {
    /// The underlying cause. `None` only on a degenerate construction path.
    fn private_error(&self) -> Option<&(dyn Error + 'static)>;

    /// An error whose text is safe to disclose to a caller. `None` means
    /// the generic message is substituted.
    fn public_error(&self) -> Option<&(dyn Error + 'static)>;

    /// Short description of the circumstances, safe to disclose.
    fn public_context(&self) -> Option<&str>;
}

/// A free-standing error carrying only disclosure-safe text.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct PublicText(pub String);

// ── BareError ─────────────────────────────────────────────────────

/// Minimal adapter: a private error with no public counterpart.
///
/// The caller gets the generic message and a correlation code; the full
/// cause stays in the server-side logs. Prefer the
/// [`std_err!`](crate::std_err) macro, which also captures the call site.
pub struct BareError {
    inner: Box<dyn Error + Send + Sync>,
}

impl BareError {
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { inner: Box::new(err) }
    }
}

impl ErrorSource for BareError {
    fn private_error(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner)
    }

    fn public_error(&self) -> Option<&(dyn Error + 'static)> {
        None
    }

    fn public_context(&self) -> Option<&str> {
        None
    }
}

impl fmt::Debug for BareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BareError")
            .field("inner", &self.inner.to_string())
            .finish()
    }
}

// ── SplitError ────────────────────────────────────────────────────

/// Ready-made three-channel source.
///
/// Carries a private cause plus optional reviewed public text and context,
/// so the common case needs no hand-written [`ErrorSource`] impl.
///
/// ```rust
/// use derror::{new_error, SplitError};
/// use std::io;
///
/// let source = SplitError::new(io::Error::new(io::ErrorKind::Other, "fk violation"))
///     .public("please retry")
///     .context("checkout");
/// let env = new_error!(source);
/// assert_eq!(env.public_message(), "please retry");
/// assert_eq!(env.context(), "checkout");
/// ```
pub struct SplitError {
    private: Box<dyn Error + Send + Sync>,
    public: Option<PublicText>,
    context: Option<String>,
}

impl SplitError {
    pub fn new<E>(private: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            private: Box::new(private),
            public: None,
            context: None,
        }
    }

    /// Reviewed text the caller may see verbatim.
    pub fn public(mut self, text: impl Into<String>) -> Self {
        self.public = Some(PublicText(text.into()));
        self
    }

    /// Disclosure-safe circumstances, e.g. the operation name.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl ErrorSource for SplitError {
    fn private_error(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.private)
    }

    fn public_error(&self) -> Option<&(dyn Error + 'static)> {
        self.public.as_ref().map(|text| text as &(dyn Error + 'static))
    }

    fn public_context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl fmt::Debug for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitError")
            .field("private", &self.private.to_string())
            .field("public", &self.public)
            .field("context", &self.context)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn db_timeout() -> io::Error {
        io::Error::new(io::ErrorKind::TimedOut, "db timeout")
    }

    #[test]
    fn bare_error_withholds_public_channel() {
        let source = BareError::new(db_timeout());
        assert_eq!(source.private_error().unwrap().to_string(), "db timeout");
        assert!(source.public_error().is_none());
        assert!(source.public_context().is_none());
    }

    #[test]
    fn split_error_carries_all_channels() {
        let source = SplitError::new(db_timeout())
            .public("please retry")
            .context("checkout");
        assert_eq!(source.private_error().unwrap().to_string(), "db timeout");
        assert_eq!(source.public_error().unwrap().to_string(), "please retry");
        assert_eq!(source.public_context(), Some("checkout"));
    }

    #[test]
    fn split_error_channels_default_absent() {
        let source = SplitError::new(db_timeout());
        assert!(source.public_error().is_none());
        assert!(source.public_context().is_none());
    }

    #[test]
    fn repeated_calls_are_stable() {
        let source = SplitError::new(db_timeout()).public("please retry");
        let first = source.public_error().unwrap().to_string();
        let second = source.public_error().unwrap().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn public_text_displays_verbatim() {
        let text = PublicText("please retry".to_string());
        assert_eq!(text.to_string(), "please retry");
    }

    #[test]
    fn sources_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BareError>();
        assert_send_sync::<SplitError>();
    }
}
