//! Fetch error taxonomy

/// Errors that can occur while fetching and normalizing a dataset.
///
/// Each stage of the pipeline has its own variant so callers (and error
/// messages) can tell a malformed response body apart from a malformed
/// value inside a double-encoded field. All variants carry human-readable
/// `Display` text; the fetch controller surfaces that text to the display
/// layer and nothing propagates past it.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The base URL did not parse as an absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-2xx HTTP status response.
    #[error("HTTP error: status {status}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, possibly empty.
        message: String,
    },

    /// Transport failure (DNS, connection refused, closed socket).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The response body was JSON, but not a non-empty array.
    #[error("Invalid API response: expected a non-empty array")]
    Shape,

    /// The selected field was missing or falsy in the first element.
    #[error("Field \"{field}\" does not exist in API response")]
    FieldNotFound {
        /// Name of the field that was looked up.
        field: String,
    },

    /// A string-valued field failed to re-parse as JSON.
    ///
    /// Distinct from [`Parse`](Self::Parse): the outer body was fine, the
    /// double-encoded payload inside it was not.
    #[error("Failed to parse JSON in field \"{field}\": {message}")]
    NestedParse {
        /// Name of the field whose value failed to parse.
        field: String,
        /// Description of the parse error.
        message: String,
    },
}

impl FetchError {
    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates a new field-not-found error.
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
        }
    }

    /// Creates a new nested parse error.
    pub fn nested_parse(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NestedParse {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_message_names_status() {
        let err = FetchError::Http {
            status: 500,
            message: String::new(),
        };
        assert!(err.to_string().contains("500"));
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_field_not_found_names_field() {
        let err = FetchError::field_not_found("users");
        assert!(err.to_string().contains("\"users\""));
        assert_eq!(err.status_code(), None);
    }
}
