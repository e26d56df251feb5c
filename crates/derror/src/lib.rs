//! # derror — Dual-channel Error
//!
//! A structured error envelope for request-serving code: handlers record a
//! full-detail private error while callers receive a safe, minimal public
//! one.
//!
//! ## Design
//!
//! Every failure travels on two channels:
//!
//! - **Private**: the underlying cause, verbatim. Rendered into server-side
//!   logs, never serialized toward a client.
//! - **Public**: optional reviewed text plus an opaque correlation code.
//!   This is all a client ever sees.
//!
//! An [`Envelope`] is built once from any [`ErrorSource`] and is immutable
//! afterward: it owns the source, the construction-site [`Origin`], an
//! HTTP-style status code, the resolved public message and context, and a
//! correlation code that ties the client-visible failure to the matching
//! server log line. Even a developer who forgets to supply public text
//! cannot leak the private channel — the generic message is substituted.
//!
//! ## Quick Start
//!
//! ```rust
//! use derror::{new_error, std_err, ErrManager, SplitError};
//! use std::io;
//!
//! // Wrap an internal failure; the caller sees only the generic message.
//! let env = std_err!(io::Error::new(io::ErrorKind::TimedOut, "db timeout"));
//! assert!(env.public_message().starts_with("Internal Error - ErrorCode: "));
//!
//! // Disclose reviewed text and context alongside the private cause.
//! let env = new_error!(SplitError::new(io::Error::new(io::ErrorKind::Other, "fk violation"))
//!     .public("please retry")
//!     .context("checkout"));
//! assert_eq!(env.public_message(), "please retry");
//! assert_eq!(env.context(), "checkout");
//!
//! // Client-safe JSON: {"error": ..., "context": ..., "code": ...}
//! let body = env.to_wire().unwrap();
//! assert!(!String::from_utf8(body).unwrap().contains("fk violation"));
//!
//! // Server-side logging, debug-rich or production-terse.
//! let em = ErrManager::new().debug(true);
//! em.println(&env);
//! ```
//!
//! ## Dependencies
//!
//! `serde`/`serde_json` for the wire format, `thiserror` for typed failure
//! values, `rand` for correlation codes.

mod source;
mod site;
mod envelope;
mod wire;
mod manager;
#[macro_use]
mod macros;

// ── Public API ────────────────────────────────────────────────────

pub use envelope::{
    Envelope, CONTEXT_WITHHELD, DEFAULT_STATUS, ERROR_NOT_RECORDED, GENERIC_MESSAGE,
    MISSING_PRIVATE_ERROR,
};
pub use manager::ErrManager;
pub use site::Origin;
pub use source::{BareError, ErrorSource, PublicText, SplitError};
pub use wire::SerializationError;

/// Convenience Result alias for handler plumbing.
pub type EnvResult<T> = Result<T, Envelope>;

/// Expected shape of a request handler that surfaces failures as envelopes
/// instead of writing them to the response itself. The surrounding
/// framework owns routing, serialization of the returned envelope, and the
/// actual response write.
///
/// ```rust
/// use derror::{std_err, Envelope, ErrorHandler};
/// use std::io;
///
/// struct Request;
/// struct Response(Vec<u8>);
///
/// fn lookup(res: &mut Response, _req: &Request) -> Option<Envelope> {
///     let env = std_err!(io::Error::new(io::ErrorKind::NotFound, "row missing"));
///     if let Ok(body) = env.to_wire() {
///         res.0 = body;
///     }
///     Some(env)
/// }
///
/// let handler: ErrorHandler<Response, Request> = lookup;
/// let mut res = Response(Vec::new());
/// assert!(handler(&mut res, &Request).is_some());
/// ```
pub type ErrorHandler<Res, Req> = fn(&mut Res, &Req) -> Option<Envelope>;
