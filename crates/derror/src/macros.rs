//! Construction macros.
//!
//! These are the preferred entry points for building envelopes: they expand
//! at the caller's frame, so the captured [`Origin`](crate::Origin) names
//! the handler that wrapped the failure rather than a helper inside this
//! crate.

/// Wrap an [`ErrorSource`](crate::ErrorSource) into an
/// [`Envelope`](crate::Envelope), capturing the caller's function, file and
/// line.
///
/// ```rust
/// use derror::{new_error, SplitError};
/// use std::io;
///
/// let env = new_error!(SplitError::new(io::Error::new(io::ErrorKind::Other, "fk violation"))
///     .public("please retry"));
/// assert_eq!(env.public_message(), "please retry");
/// assert!(env.origin().is_some());
/// ```
#[macro_export]
macro_rules! new_error {
    ($source:expr) => {{
        $crate::Envelope::from_source(
            $source,
            $crate::Origin::new($crate::__fn_path!(), file!(), line!()),
        )
    }};
}

/// Wrap a plain error with no public counterpart. The caller sees only the
/// generic message and a correlation code.
///
/// ```rust
/// use derror::std_err;
/// use std::io;
///
/// let env = std_err!(io::Error::new(io::ErrorKind::TimedOut, "db timeout"));
/// assert!(env.public_message().starts_with("Internal Error"));
/// ```
#[macro_export]
macro_rules! std_err {
    ($err:expr) => {{
        $crate::Envelope::from_source(
            $crate::BareError::new($err),
            $crate::Origin::new($crate::__fn_path!(), file!(), line!()),
        )
    }};
}

/// Full path of the enclosing function, e.g. `"api::checkout"`.
#[doc(hidden)]
#[macro_export]
macro_rules! __fn_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // name ends with "::f"
        &name[..name.len() - 3]
    }};
}
