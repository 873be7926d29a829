//! Error types for parameter resolution and retrieval.

use thiserror::Error;

/// Errors produced while resolving raw input against declared parameters or
/// retrieving typed values from a resolved set.
///
/// Every variant names the parameter it concerns, so dispatch layers can
/// report failures against the declaration without parsing the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// A required parameter's name was absent from the raw input.
    #[error("Missing required parameter: {name}")]
    MissingParameter {
        /// The declared parameter name.
        name: String,
    },

    /// Raw text was present but does not parse as the declared type.
    #[error("Invalid value '{raw}' for parameter '{name}': expected {type_name}")]
    Decode {
        /// The declared parameter name.
        name: String,
        /// The offending raw text.
        raw: String,
        /// Canonical name of the declared type.
        type_name: &'static str,
    },

    /// A stored value's type disagrees with the declaration used to retrieve
    /// it. Reachable only when resolution and retrieval run against
    /// different declarations that share a name.
    #[error("Parameter '{name}' holds {actual}, requested as {expected}")]
    TypeMismatch {
        /// The declared parameter name.
        name: String,
        /// Type requested at the retrieval site.
        expected: &'static str,
        /// Type recorded at resolution time.
        actual: &'static str,
    },

    /// Two declarations in one parameter set share a name.
    #[error("Duplicate parameter name: {name}")]
    DuplicateParameter {
        /// The name declared more than once.
        name: String,
    },
}

impl ParameterError {
    /// Creates a missing-parameter error.
    pub fn missing<S: Into<String>>(name: S) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Creates a decode error.
    pub fn decode<S: Into<String>, R: Into<String>>(
        name: S,
        raw: R,
        type_name: &'static str,
    ) -> Self {
        Self::Decode {
            name: name.into(),
            raw: raw.into(),
            type_name,
        }
    }

    /// Creates a type-mismatch error.
    pub fn type_mismatch<S: Into<String>>(
        name: S,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Creates a duplicate-name error.
    pub fn duplicate<S: Into<String>>(name: S) -> Self {
        Self::DuplicateParameter { name: name.into() }
    }

    /// The name of the parameter this error concerns.
    pub fn parameter_name(&self) -> &str {
        match self {
            Self::MissingParameter { name }
            | Self::Decode { name, .. }
            | Self::TypeMismatch { name, .. }
            | Self::DuplicateParameter { name } => name,
        }
    }
}

/// Result type for parameter operations.
pub type ParameterResult<T> = std::result::Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let missing = ParameterError::missing("count");
        assert_eq!(missing.to_string(), "Missing required parameter: count");

        let decode = ParameterError::decode("count", "ten", "i64");
        assert_eq!(
            decode.to_string(),
            "Invalid value 'ten' for parameter 'count': expected i64"
        );

        let mismatch = ParameterError::type_mismatch("count", "u64", "i64");
        assert_eq!(
            mismatch.to_string(),
            "Parameter 'count' holds i64, requested as u64"
        );

        let duplicate = ParameterError::duplicate("count");
        assert_eq!(duplicate.to_string(), "Duplicate parameter name: count");
    }

    #[test]
    fn test_errors_expose_the_offending_name() {
        let errors = [
            ParameterError::missing("alpha"),
            ParameterError::decode("alpha", "x", "bool"),
            ParameterError::type_mismatch("alpha", "bool", "string"),
            ParameterError::duplicate("alpha"),
        ];
        for error in &errors {
            assert_eq!(error.parameter_name(), "alpha");
        }
    }

    #[test]
    fn test_errors_are_comparable_and_cloneable() {
        let original = ParameterError::decode("n", "abc", "i64");
        let copy = original.clone();
        assert_eq!(original, copy);
        assert_ne!(original, ParameterError::missing("n"));
    }
}
