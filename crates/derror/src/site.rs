//! Construction-site diagnostics.
//!
//! An [`Origin`] pins an envelope to the code that wrapped the private
//! error: function path, source file, line number. The construction macros
//! expand the capture at the caller's frame, so debug output attributes a
//! failure to handler code rather than to helpers inside this crate.

/// Captured construction site: function path, source file, line number.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    function: &'static str,
    file:     &'static str,
    line:     u32,
}

impl Origin {
    /// No site captured.
    pub const UNKNOWN: Origin = Origin {
        function: "unknown",
        file:     "unknown",
        line:     0,
    };

    /// Build an origin from explicit parts.
    ///
    /// Frameworks integrating their own capture call this directly; handler
    /// code goes through [`new_error!`](crate::new_error) /
    /// [`std_err!`](crate::std_err) instead.
    ///
    /// ```
    /// use derror::Origin;
    /// let origin = Origin::new("api::checkout", "src/api.rs", 42);
    /// assert_eq!(origin.function(), "api::checkout");
    /// assert_eq!(origin.line(), 42);
    /// ```
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self { function, file, line }
    }

    /// Full path of the function that built the envelope.
    #[inline]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Source file of the construction site.
    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Line number of the construction site.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// True if no site was captured.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl core::fmt::Display for Origin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_unknown() {
            write!(f, "unknown site")
        } else {
            write!(f, "{} ({}:{})", self.function, self.file, self.line)
        }
    }
}

impl core::fmt::Debug for Origin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Origin")
            .field("function", &self.function)
            .field("file", &self.file)
            .field("line", &self.line)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_parts() {
        let origin = Origin::new("api::checkout", "src/api.rs", 42);
        assert_eq!(origin.function(), "api::checkout");
        assert_eq!(origin.file(), "src/api.rs");
        assert_eq!(origin.line(), 42);
        assert!(!origin.is_unknown());
    }

    #[test]
    fn unknown_sentinel() {
        assert!(Origin::UNKNOWN.is_unknown());
        assert_eq!(Origin::UNKNOWN.line(), 0);
    }

    #[test]
    fn display_format() {
        let origin = Origin::new("api::checkout", "src/api.rs", 42);
        assert_eq!(format!("{}", origin), "api::checkout (src/api.rs:42)");
        assert_eq!(format!("{}", Origin::UNKNOWN), "unknown site");
    }

    #[test]
    fn copy_semantics() {
        let a = Origin::new("f", "g.rs", 1);
        let b = a;
        assert_eq!(a, b);
    }
}
