use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl HttpMethod {
    pub fn parse(method: &str) -> Result<Self, CoreError> {
        match method.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::GET),
            "POST" => Ok(HttpMethod::POST),
            "PUT" => Ok(HttpMethod::PUT),
            "DELETE" => Ok(HttpMethod::DELETE),
            "PATCH" => Ok(HttpMethod::PATCH),
            "HEAD" => Ok(HttpMethod::HEAD),
            "OPTIONS" => Ok(HttpMethod::OPTIONS),
            _ => Err(CoreError::Parse {
                message: format!("invalid HTTP method: {method}"),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }
}

/// What a route binds: handler type name, optional model type name, and the
/// handler method to invoke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSpec {
    pub handler: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub method: String,
}

impl ActionSpec {
    pub fn new(handler: &str, method: &str) -> Self {
        Self {
            handler: handler.to_string(),
            model: None,
            method: method.to_string(),
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }
}

/// A registered route: compiled pattern plus the action it binds.
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: String,
    pub verb: HttpMethod,
    pub spec: ActionSpec,
    pub path_regex: regex::Regex,
    pub param_names: Vec<String>,
}

/// A resolved route action, ready for dispatch. Parameters are the path
/// captures in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub handler: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
}
