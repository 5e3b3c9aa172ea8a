//! Validation error types and the required-field check

use std::fmt;

/// Validation error for request payloads and query strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent, null, empty or zero.
    ///
    /// `usage` is prepended to the message when the payload has several
    /// required fields, so the client sees the whole expected shape.
    Missing {
        field: &'static str,
        usage: Option<&'static str>,
    },

    /// Query string carries a key outside the allowed set
    UnknownParam { param: String, allowed: &'static str },

    /// Value present but unusable (e.g., non-numeric path id)
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Body is not JSON, has fields of the wrong type, or the query string is unparseable
    Malformed(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field, usage: None } => write!(f, "Please provide a {}.", field),
            Self::Missing {
                field,
                usage: Some(usage),
            } => write!(f, "{} Please provide {}.", usage, field),
            Self::UnknownParam { param, allowed } => write!(
                f,
                "'{}' is the only valid query parameter. {} is invalid.",
                allowed, param
            ),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::Malformed(reason) => write!(f, "Malformed request: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Values that can be "filled in" for a required field.
///
/// Mirrors truthiness: an empty string and the integer zero both count as
/// missing. A `project_id` of 0 is therefore rejected as missing.
pub trait Filled {
    fn is_filled(&self) -> bool;
}

impl Filled for String {
    fn is_filled(&self) -> bool {
        !self.is_empty()
    }
}

impl Filled for i64 {
    fn is_filled(&self) -> bool {
        *self != 0
    }
}

/// Take a required field out of a payload, failing with `Missing` when it is
/// absent or not filled.
pub fn require<T: Filled>(
    value: Option<T>,
    field: &'static str,
    usage: Option<&'static str>,
) -> Result<T, ValidationError> {
    match value {
        Some(v) if v.is_filled() => Ok(v),
        _ => Err(ValidationError::Missing { field, usage }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_without_usage() {
        let err = ValidationError::Missing {
            field: "name",
            usage: None,
        };
        assert_eq!(err.to_string(), "Please provide a name.");
    }

    #[test]
    fn missing_with_usage() {
        let err = ValidationError::Missing {
            field: "color3",
            usage: Some("Body needs colours."),
        };
        assert_eq!(err.to_string(), "Body needs colours. Please provide color3.");
    }

    #[test]
    fn unknown_param_display() {
        let err = ValidationError::UnknownParam {
            param: "color".into(),
            allowed: "name",
        };
        assert_eq!(
            err.to_string(),
            "'name' is the only valid query parameter. color is invalid."
        );
    }

    #[test]
    fn require_rejects_empty_and_zero() {
        assert!(require(Some(String::new()), "name", None).is_err());
        assert!(require(None::<String>, "name", None).is_err());
        assert!(require(Some(0_i64), "project_id", None).is_err());
        assert_eq!(require(Some(7_i64), "project_id", None), Ok(7));
        assert_eq!(
            require(Some("a".to_string()), "name", None),
            Ok("a".to_string())
        );
    }
}
