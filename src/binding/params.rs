//! Request parameter access
//!
//! A `ParamMap` holds named string values collected from the query
//! string, a form body, or captured path segments, and provides the
//! required/optional typed lookups handlers declare.

use std::str::FromStr;

use super::error::BindError;

/// Ordered multimap of request parameters.
///
/// Lookups return the first value bound to a name, so when query and
/// form pairs are merged (query first) the query value wins.
#[derive(Debug, Default, Clone)]
pub struct ParamMap {
    pairs: Vec<(String, String)>,
}

impl ParamMap {
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Decode a query string or form-encoded body into a map.
    pub fn parse(input: &str) -> Result<Self, BindError> {
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(input)
            .map_err(|e| BindError::InvalidEncoding(e.to_string()))?;
        Ok(Self { pairs })
    }

    pub fn push(&mut self, key: String, value: String) {
        self.pairs.push((key, value));
    }

    /// Append all pairs from another source behind the existing ones.
    pub fn extend(&mut self, other: Self) {
        self.pairs.extend(other.pairs);
    }

    /// First value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Required string parameter; absence is a binding failure.
    pub fn required(&self, name: &'static str) -> Result<&str, BindError> {
        self.get(name).ok_or(BindError::MissingParam(name))
    }

    /// Required parameter parsed as `T`.
    pub fn required_as<T: FromStr>(&self, name: &'static str) -> Result<T, BindError> {
        let raw = self.required(name)?;
        raw.parse().map_err(|_| BindError::InvalidParam {
            name,
            value: raw.to_string(),
        })
    }

    /// Optional parameter parsed as `T`. Absence is `None`; a value
    /// that is present but unparseable is still a failure.
    pub fn optional_as<T: FromStr>(&self, name: &'static str) -> Result<Option<T>, BindError> {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| BindError::InvalidParam {
                name,
                value: raw.to_string(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_string() {
        let params = ParamMap::parse("name=Alice&age=10").unwrap();
        assert_eq!(params.get("name"), Some("Alice"));
        assert_eq!(params.get("age"), Some("10"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_parse_percent_decoding() {
        let params = ParamMap::parse("name=Kim%20Minji&note=a%2Bb").unwrap();
        assert_eq!(params.get("name"), Some("Kim Minji"));
        assert_eq!(params.get("note"), Some("a+b"));
    }

    #[test]
    fn test_parse_empty_input() {
        let params = ParamMap::parse("").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_required_present_and_absent() {
        let params = ParamMap::parse("name=Alice").unwrap();
        assert_eq!(params.required("name").unwrap(), "Alice");
        assert!(matches!(
            params.required("age"),
            Err(BindError::MissingParam("age"))
        ));
    }

    #[test]
    fn test_required_as_parses_integers() {
        let params = ParamMap::parse("age=10").unwrap();
        assert_eq!(params.required_as::<i32>("age").unwrap(), 10);
    }

    #[test]
    fn test_required_as_rejects_non_numeric() {
        let params = ParamMap::parse("age=ten").unwrap();
        assert!(matches!(
            params.required_as::<i32>("age"),
            Err(BindError::InvalidParam { name: "age", .. })
        ));
    }

    #[test]
    fn test_optional_as_absent_is_none() {
        let params = ParamMap::parse("name=Alice").unwrap();
        assert_eq!(params.optional_as::<i32>("age").unwrap(), None);
    }

    #[test]
    fn test_optional_as_present_but_invalid_fails() {
        let params = ParamMap::parse("age=ten").unwrap();
        assert!(params.optional_as::<i32>("age").is_err());
    }

    #[test]
    fn test_merge_keeps_first_value() {
        let mut params = ParamMap::parse("name=query").unwrap();
        params.extend(ParamMap::parse("name=form&age=10").unwrap());
        assert_eq!(params.get("name"), Some("query"));
        assert_eq!(params.get("age"), Some("10"));
    }
}
