//! Fetch request model and URL generation

use url::Url;

use crate::error::FetchError;

/// A filter parameter value: a string or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Text value. Empty text is dropped before transmission.
    Text(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
}

impl ParamValue {
    /// Renders the value as it would appear in the query string
    /// (before percent-encoding).
    pub fn render(&self) -> String {
        match self {
            ParamValue::Text(s) => s.clone(),
            ParamValue::Int(n) => n.to_string(),
            ParamValue::Float(n) => n.to_string(),
        }
    }

    /// Returns `true` if this value renders to an empty string.
    pub fn is_empty(&self) -> bool {
        matches!(self, ParamValue::Text(s) if s.is_empty())
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

/// One fetch: which endpoint to call, which filters to apply, and which
/// key of the first response element holds the dataset.
///
/// Parameters keep their insertion order; that order is the transmission
/// order. A fresh request is built on every submit, nothing is reused.
///
/// # Example
///
/// ```
/// use datascope_lib::request::FetchRequest;
///
/// let request = FetchRequest::new("https://api.example.com/items", "data")
///     .param("status", "active")
///     .param("limit", 25i64);
///
/// assert_eq!(
///     request.url().unwrap(),
///     "https://api.example.com/items?status=active&limit=25"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    base_url: String,
    params: Vec<(String, ParamValue)>,
    selected_field: String,
}

impl FetchRequest {
    /// Creates a new request for the given endpoint and selected field.
    pub fn new(base_url: impl Into<String>, selected_field: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            params: Vec::new(),
            selected_field: selected_field.into(),
        }
    }

    /// Appends a query parameter.
    ///
    /// Empty-string values are kept here but dropped when the URL is
    /// built, so unfilled form inputs can be passed through untouched.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Returns the endpoint base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the query parameters, in insertion order.
    pub fn params(&self) -> &[(String, ParamValue)] {
        &self.params
    }

    /// Returns the name of the field to extract from the first element.
    pub fn selected_field(&self) -> &str {
        &self.selected_field
    }

    /// Builds the full request URL. See [`build_request_url`].
    pub fn url(&self) -> Result<String, FetchError> {
        build_request_url(&self.base_url, &self.params)
    }
}

/// Builds a request URL from a base URL and query parameters.
///
/// Pure function, independently testable without any network context.
/// Each parameter whose rendered value is non-empty is appended as a
/// percent-encoded query pair, in insertion order, after any query pairs
/// already present on the base URL. Parameters with empty values are
/// omitted entirely rather than sent as empty query args.
///
/// Fails with [`FetchError::InvalidUrl`] when the base is not a valid
/// absolute URL.
pub fn build_request_url(
    base_url: &str,
    params: &[(String, ParamValue)],
) -> Result<String, FetchError> {
    let mut url = Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            if value.is_empty() {
                continue;
            }
            pairs.append_pair(key, &value.render());
        }
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_params_in_order() {
        let url = build_request_url(
            "https://api.example.com/items",
            &[
                ("b".into(), "2".into()),
                ("a".into(), "1".into()),
                ("c".into(), 3i64.into()),
            ],
        )
        .unwrap();
        assert_eq!(url, "https://api.example.com/items?b=2&a=1&c=3");
    }

    #[test]
    fn test_omits_empty_values() {
        let url = build_request_url(
            "https://api.example.com/items",
            &[
                ("keep".into(), "yes".into()),
                ("drop".into(), "".into()),
                ("also".into(), "ok".into()),
            ],
        )
        .unwrap();
        assert_eq!(url, "https://api.example.com/items?keep=yes&also=ok");
    }

    #[test]
    fn test_no_params_leaves_base_untouched() {
        let url = build_request_url("https://api.example.com/items", &[]).unwrap();
        assert_eq!(url, "https://api.example.com/items");
    }

    #[test]
    fn test_percent_encodes_values() {
        let url = build_request_url(
            "https://api.example.com/search",
            &[("q".into(), "a b&c".into())],
        )
        .unwrap();
        assert_eq!(url, "https://api.example.com/search?q=a+b%26c");
    }

    #[test]
    fn test_preserves_existing_query() {
        let url = build_request_url(
            "https://api.example.com/items?fixed=1",
            &[("extra".into(), "2".into())],
        )
        .unwrap();
        assert_eq!(url, "https://api.example.com/items?fixed=1&extra=2");
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = build_request_url("/items", &[]).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn test_number_params_render_plainly() {
        let url = build_request_url(
            "https://api.example.com/items",
            &[("limit".into(), 25i64.into()), ("ratio".into(), 1.5.into())],
        )
        .unwrap();
        assert_eq!(url, "https://api.example.com/items?limit=25&ratio=1.5");
    }

    #[test]
    fn test_request_builder() {
        let request = FetchRequest::new("https://api.example.com/items", "data")
            .param("status", "active")
            .param("owner", "");
        assert_eq!(request.selected_field(), "data");
        assert_eq!(
            request.url().unwrap(),
            "https://api.example.com/items?status=active"
        );
    }
}
