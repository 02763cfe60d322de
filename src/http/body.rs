//! Book payload decoding
//!
//! A request without a JSON content type, or with an empty body, carries no fields.
//! Only syntactically broken JSON and bare scalars are rejected.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde_json::Value;

use crate::errors::AppError;
use crate::library::BookFields;

#[derive(Debug)]
pub struct BookBody(pub BookFields);

impl<S> FromRequest<S> for BookBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(request.headers());
        let bytes = Bytes::from_request(request, state).await?;

        if !is_json || bytes.is_empty() {
            return Ok(Self(BookFields::default()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|err| {
            AppError::bad_request(format!("Failed to parse the request body as JSON: {err}"))
        })?;

        match value {
            Value::Object(_) | Value::Array(_) => Ok(Self(BookFields::from_value(&value))),
            _ => Err(AppError::bad_request(
                "request body must be a JSON object or array",
            )),
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence
            .rsplit_once('+')
            .is_some_and(|(_, suffix)| suffix.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(content_type).expect("valid header"),
        );
        headers
    }

    #[test]
    fn json_content_types_are_recognised() {
        assert!(has_json_content_type(&headers_with("application/json")));
        assert!(has_json_content_type(&headers_with(
            "application/json; charset=utf-8"
        )));
        assert!(has_json_content_type(&headers_with("application/ld+json")));
    }

    #[test]
    fn other_content_types_are_not_json() {
        assert!(!has_json_content_type(&HeaderMap::new()));
        assert!(!has_json_content_type(&headers_with("text/plain")));
        assert!(!has_json_content_type(&headers_with(
            "application/x-www-form-urlencoded"
        )));
    }
}
