//! Response decoding and dataset normalization
//!
//! Pure functions over the response status and body text, so the whole
//! pipeline is testable without a network. The contract, stage by stage:
//!
//! 1. non-2xx status fails with `Http`;
//! 2. the body must parse as JSON (`Parse`);
//! 3. the body must be a non-empty array (`Shape`);
//! 4. `body[0][selected_field]` must exist and be truthy (`FieldNotFound`);
//! 5. a string value is re-parsed as JSON, for APIs that double-encode a
//!    payload field (`NestedParse` on failure, distinct from stage 2);
//! 6. an array result is the dataset verbatim, anything else is wrapped in
//!    a one-element array.

use crate::error::FetchError;
use crate::model::Value;

/// Decodes a response into a normalized dataset.
///
/// On success the returned vector is never empty by construction of
/// stage 6, but its elements can be any JSON value; the renderer deals
/// with non-object rows.
pub fn decode_body(status: u16, body: &str, selected_field: &str) -> Result<Vec<Value>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            status,
            message: body.to_string(),
        });
    }

    let parsed: Value = serde_json::from_str(body).map_err(|e| FetchError::parse(e.to_string()))?;

    let Value::Array(elements) = parsed else {
        return Err(FetchError::Shape);
    };
    let Some(first) = elements.first() else {
        return Err(FetchError::Shape);
    };

    let extracted = extract_field(first, selected_field)?;
    let normalized = reparse_if_string(extracted, selected_field)?;

    Ok(match normalized {
        Value::Array(items) => items,
        single => vec![single],
    })
}

/// Looks up the selected field in the first element.
///
/// Missing fields, non-object elements and falsy values all count as "not
/// found": a field holding `null`, `0`, `false` or `""` carries no dataset.
fn extract_field(first: &Value, selected_field: &str) -> Result<Value, FetchError> {
    let value = match first {
        Value::Object(record) => record.get(selected_field).cloned().unwrap_or(Value::Null),
        _ => Value::Null,
    };
    if value.is_falsy() {
        return Err(FetchError::field_not_found(selected_field));
    }
    Ok(value)
}

/// Re-parses a string value as JSON.
///
/// Supports APIs that encode a payload field as a JSON string. This is a
/// deliberate, named stage with its own error kind rather than a silent
/// try-parse fallback: a plain prose string in the selected field is an
/// error here, exactly like a broken double-encoded payload.
fn reparse_if_string(value: Value, selected_field: &str) -> Result<Value, FetchError> {
    match value {
        Value::String(text) => serde_json::from_str(&text)
            .map_err(|e| FetchError::nested_parse(selected_field, e.to_string())),
        other => Ok(other),
    }
}
