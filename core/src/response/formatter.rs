use crate::response::types::{HttpResponse, ResponseBody};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::warn;

/// Response-formatting collaborator.
pub struct Response;

impl Response {
    pub fn new() -> Self {
        Self
    }

    /// Formats a handler's return value as the final response.
    pub fn output(&self, value: Value) -> HttpResponse {
        create_response(200, ResponseBody::Json(value))
    }

    /// Emits an error response; from the dispatcher's point of view this is
    /// terminal for the request.
    pub fn error(&self, status: u16, message: &str) -> HttpResponse {
        warn!(status, message, "request aborted");
        create_response(status, ResponseBody::Json(json!({ "error": message })))
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_response(status: u16, body: ResponseBody) -> HttpResponse {
    let mut headers = HashMap::new();

    match &body {
        ResponseBody::Json(_) => {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        ResponseBody::Text(_) => {
            headers.insert("Content-Type".to_string(), "text/plain".to_string());
        }
        ResponseBody::Binary(_) => {
            headers.insert(
                "Content-Type".to_string(),
                "application/octet-stream".to_string(),
            );
        }
        ResponseBody::Empty => {}
    }

    HttpResponse {
        status_code: status,
        headers,
        body,
    }
}

pub fn serialize_json_response(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap_or_default()
}

pub fn serialize_response_body(body: &ResponseBody) -> Vec<u8> {
    match body {
        ResponseBody::Empty => vec![],
        ResponseBody::Json(value) => serialize_json_response(value),
        ResponseBody::Text(text) => text.as_bytes().to_vec(),
        ResponseBody::Binary(data) => data.clone(),
    }
}
