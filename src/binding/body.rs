//! Structured request bodies
//!
//! Content-type gating and decoding for the two body formats the
//! binder understands: form-encoded key/value pairs and JSON.

use serde::de::DeserializeOwned;

use super::error::BindError;
use super::params::ParamMap;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Media type of a request with any parameters (`; charset=...`) stripped.
pub fn media_type(content_type: Option<&str>) -> Option<String> {
    content_type.map(|value| {
        value
            .split(';')
            .next()
            .unwrap_or(value)
            .trim()
            .to_ascii_lowercase()
    })
}

/// Whether the request body is form-encoded key/value pairs.
pub fn is_form(content_type: Option<&str>) -> bool {
    media_type(content_type).as_deref() == Some(FORM_CONTENT_TYPE)
}

/// Parse a form-encoded body into request parameters.
///
/// A body with any other content type contributes no parameters; the
/// caller decides whether that matters (a JSON-target handler rejects
/// the request, parameter binding just ends up with defaults).
pub fn form_params(content_type: Option<&str>, body: &[u8]) -> Result<ParamMap, BindError> {
    if !is_form(content_type) {
        return Ok(ParamMap::new());
    }
    let text =
        std::str::from_utf8(body).map_err(|e| BindError::InvalidEncoding(e.to_string()))?;
    ParamMap::parse(text)
}

/// Decode a JSON body into `T`.
///
/// Any content type other than `application/json` is rejected as
/// unsupported; a JSON body that fails to decode is malformed.
pub fn json_body<T: DeserializeOwned>(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<T, BindError> {
    match media_type(content_type) {
        Some(media) if media == JSON_CONTENT_TYPE => {
            serde_json::from_slice(body).map_err(|e| BindError::MalformedBody(e.to_string()))
        }
        Some(media) => Err(BindError::UnsupportedMediaType(media)),
        None => Err(BindError::UnsupportedMediaType("(none)".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserDto;

    #[test]
    fn test_media_type_strips_parameters() {
        assert_eq!(
            media_type(Some("application/json; charset=utf-8")).as_deref(),
            Some("application/json")
        );
        assert_eq!(
            media_type(Some("Application/JSON")).as_deref(),
            Some("application/json")
        );
        assert_eq!(media_type(None), None);
    }

    #[test]
    fn test_is_form() {
        assert!(is_form(Some("application/x-www-form-urlencoded")));
        assert!(is_form(Some(
            "application/x-www-form-urlencoded; charset=utf-8"
        )));
        assert!(!is_form(Some("application/json")));
        assert!(!is_form(None));
    }

    #[test]
    fn test_form_params_parses_form_bodies() {
        let params = form_params(Some(FORM_CONTENT_TYPE), b"name=Alice&age=10").unwrap();
        assert_eq!(params.get("name"), Some("Alice"));
        assert_eq!(params.get("age"), Some("10"));
    }

    #[test]
    fn test_form_params_ignores_other_content_types() {
        let params = form_params(Some("application/json"), br#"{"name":"Alice"}"#).unwrap();
        assert!(params.is_empty());

        let params = form_params(None, b"").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_json_body_decodes_partial_records() {
        let dto: UserDto =
            json_body(Some("application/json"), br#"{"name":"Alice"}"#).unwrap();
        assert_eq!(dto.name.as_deref(), Some("Alice"));
        assert_eq!(dto.age, 0);
    }

    #[test]
    fn test_json_body_rejects_other_content_types() {
        let result: Result<UserDto, _> = json_body(Some(FORM_CONTENT_TYPE), b"name=Alice");
        assert!(matches!(result, Err(BindError::UnsupportedMediaType(_))));

        let result: Result<UserDto, _> = json_body(None, b"{}");
        assert!(matches!(result, Err(BindError::UnsupportedMediaType(_))));
    }

    #[test]
    fn test_json_body_rejects_malformed_json() {
        let result: Result<UserDto, _> =
            json_body(Some("application/json"), b"{\"name\":");
        assert!(matches!(result, Err(BindError::MalformedBody(_))));
    }
}
