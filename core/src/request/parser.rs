use crate::errors::CoreError;
use crate::request::types::RequestBody;
use crate::routing::HttpMethod;
use std::collections::HashMap;

/// Decodes an `application/x-www-form-urlencoded` pair list. Keys without a
/// value decode to the empty string; pairs that fail percent-decoding are
/// skipped.
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((
                urlencoding::decode(key).ok()?.into_owned(),
                urlencoding::decode(value).ok()?.into_owned(),
            ))
        })
        .collect()
}

pub fn parse_json_body(data: &[u8]) -> Result<serde_json::Value, CoreError> {
    serde_json::from_slice(data).map_err(|e| CoreError::Parse {
        message: format!("invalid JSON body: {e}"),
    })
}

pub fn parse_form_body(data: &[u8]) -> Result<HashMap<String, String>, CoreError> {
    let body = std::str::from_utf8(data).map_err(|e| CoreError::Parse {
        message: format!("invalid UTF-8 in form body: {e}"),
    })?;
    Ok(parse_query_string(body))
}

/// Splits a request target into its path and decoded query parameters.
pub fn split_target(target: &str) -> (String, HashMap<String, String>) {
    match target.split_once('?') {
        Some((path, query)) => (path.to_string(), parse_query_string(query)),
        None => (target.to_string(), HashMap::new()),
    }
}

/// Method emulation: a POST carrying `_method` in its query or form body is
/// reported as that method. Anything else keeps the declared method.
pub fn emulated_method(
    declared: HttpMethod,
    query: &HashMap<String, String>,
    body: &RequestBody,
) -> HttpMethod {
    if declared != HttpMethod::POST {
        return declared;
    }
    let requested = query.get("_method").or(match body {
        RequestBody::Form(fields) => fields.get("_method"),
        _ => None,
    });
    match requested {
        Some(name) => HttpMethod::parse(name).unwrap_or(declared),
        None => declared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_string_simple() {
        let result = parse_query_string("key1=value1&key2=value2");
        assert_eq!(result.get("key1"), Some(&"value1".to_string()));
        assert_eq!(result.get("key2"), Some(&"value2".to_string()));
    }

    #[test]
    fn test_parse_query_string_encoded() {
        let result = parse_query_string("name=John%20Doe&city=New%20York");
        assert_eq!(result.get("name"), Some(&"John Doe".to_string()));
        assert_eq!(result.get("city"), Some(&"New York".to_string()));
    }

    #[test]
    fn test_parse_query_string_valueless_key() {
        let result = parse_query_string("flag&key=1");
        assert_eq!(result.get("flag"), Some(&String::new()));
        assert_eq!(result.get("key"), Some(&"1".to_string()));
    }

    #[test]
    fn test_parse_query_string_empty() {
        assert!(parse_query_string("").is_empty());
    }

    #[test]
    fn test_parse_json_body_valid() {
        let result = parse_json_body(br#"{"name": "test", "value": 42}"#).unwrap();
        assert_eq!(result["name"], "test");
        assert_eq!(result["value"], 42);
    }

    #[test]
    fn test_parse_json_body_invalid() {
        assert!(matches!(
            parse_json_body(br#"{"name": oops}"#),
            Err(CoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_form_body() {
        let result = parse_form_body(b"a=1&b=two").unwrap();
        assert_eq!(result.get("a"), Some(&"1".to_string()));
        assert_eq!(result.get("b"), Some(&"two".to_string()));
    }

    #[test]
    fn test_split_target() {
        let (path, query) = split_target("/widgets/5?sort=name&dir=asc");
        assert_eq!(path, "/widgets/5");
        assert_eq!(query.get("sort"), Some(&"name".to_string()));
        assert_eq!(query.get("dir"), Some(&"asc".to_string()));

        let (path, query) = split_target("/widgets");
        assert_eq!(path, "/widgets");
        assert!(query.is_empty());
    }

    #[test]
    fn test_emulated_method_from_form() {
        let body = RequestBody::Form(HashMap::from([(
            "_method".to_string(),
            "PUT".to_string(),
        )]));
        assert_eq!(
            emulated_method(HttpMethod::POST, &HashMap::new(), &body),
            HttpMethod::PUT
        );
    }

    #[test]
    fn test_emulated_method_from_query() {
        let query = HashMap::from([("_method".to_string(), "delete".to_string())]);
        assert_eq!(
            emulated_method(HttpMethod::POST, &query, &RequestBody::Empty),
            HttpMethod::DELETE
        );
    }

    #[test]
    fn test_emulation_only_applies_to_post() {
        let query = HashMap::from([("_method".to_string(), "DELETE".to_string())]);
        assert_eq!(
            emulated_method(HttpMethod::GET, &query, &RequestBody::Empty),
            HttpMethod::GET
        );
    }

    #[test]
    fn test_invalid_emulated_method_keeps_declared() {
        let query = HashMap::from([("_method".to_string(), "TELEPORT".to_string())]);
        assert_eq!(
            emulated_method(HttpMethod::POST, &query, &RequestBody::Empty),
            HttpMethod::POST
        );
    }
}
