//! Client-facing serialization.
//!
//! Only the public channel crosses the wire: message, context, correlation
//! code. The private error, the captured origin, and the status code never
//! do.

use serde::Serialize;

use crate::envelope::Envelope;

/// The encoder failed. Not expected in normal operation — every wire field
/// is a plain string or integer.
#[derive(Debug, thiserror::Error)]
#[error("encoding error envelope: {0}")]
pub struct SerializationError(#[from] serde_json::Error);

/// Client-facing shape: `{"error", "context"?, "code"?}`.
#[derive(Serialize)]
struct Wire<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<i64>,
}

impl Envelope {
    /// Serialize the public-facing fields to a JSON body.
    ///
    /// `context` is omitted when empty and `code` when zero, so even the
    /// degraded envelope produces a well-formed body.
    pub fn to_wire(&self) -> Result<Vec<u8>, SerializationError> {
        let wire = Wire {
            error: self.public_message(),
            context: Some(self.context()).filter(|context| !context.is_empty()),
            code: (self.app_code() != 0).then_some(self.app_code()),
        };
        Ok(serde_json::to_vec(&wire)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{ErrorSource, SplitError};
    use crate::{new_error, std_err};
    use serde_json::Value;
    use std::error::Error;
    use std::io;

    fn db_timeout() -> io::Error {
        io::Error::new(io::ErrorKind::TimedOut, "db timeout")
    }

    #[test]
    fn wire_has_only_public_fields() {
        let env = new_error!(SplitError::new(db_timeout())
            .public("please retry")
            .context("checkout"));
        let text = String::from_utf8(env.to_wire().unwrap()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(value["error"], "please retry");
        assert_eq!(value["context"], "checkout");
        assert_eq!(value["code"].as_i64().unwrap(), env.app_code());
    }

    #[test]
    fn wire_never_leaks_private_details() {
        let env = std_err!(db_timeout());
        let text = String::from_utf8(env.to_wire().unwrap()).unwrap();
        assert!(!text.contains("db timeout"));
        assert!(!text.contains("wire.rs"));
        let value: Value = serde_json::from_str(&text).unwrap();
        let object = value.as_object().unwrap();
        for key in object.keys() {
            assert!(matches!(key.as_str(), "error" | "context" | "code"), "unexpected key {}", key);
        }
    }

    struct EmptySource;

    impl ErrorSource for EmptySource {
        fn private_error(&self) -> Option<&(dyn Error + 'static)> {
            None
        }
        fn public_error(&self) -> Option<&(dyn Error + 'static)> {
            None
        }
        fn public_context(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn degraded_envelope_omits_zero_code() {
        let env = new_error!(EmptySource);
        let text = String::from_utf8(env.to_wire().unwrap()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(value["error"], "");
        assert_eq!(value["context"], crate::MISSING_PRIVATE_ERROR);
        assert!(!object.contains_key("code"));
    }
}
