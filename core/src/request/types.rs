use crate::app::App;
use crate::request::parser::{emulated_method, split_target};
use crate::routing::HttpMethod;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Form(HashMap<String, String>),
    Raw(Vec<u8>),
}

#[derive(Debug)]
struct RequestState {
    method: HttpMethod,
    path: String,
    query: HashMap<String, String>,
    body: RequestBody,
}

/// Current-request collaborator.
///
/// The host feeds one request at a time into this shared service; the
/// dispatcher and controllers read it back through the accessors.
pub struct Request {
    app: App,
    state: RwLock<RequestState>,
}

impl Request {
    pub fn new(app: App) -> Self {
        Self {
            app,
            state: RwLock::new(RequestState {
                method: HttpMethod::GET,
                path: "/".to_string(),
                query: HashMap::new(),
                body: RequestBody::Empty,
            }),
        }
    }

    /// Loads the current request: `target` is the request path with an
    /// optional query string.
    pub fn feed(&self, method: HttpMethod, target: &str, body: RequestBody) {
        let (path, query) = split_target(target);
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = RequestState {
            method,
            path,
            query,
            body,
        };
    }

    /// Current request URL (path component).
    pub fn url(&self) -> String {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .path
            .clone()
    }

    /// Request method, with `_method` emulation applied when the
    /// `request.emulate` setting is enabled.
    pub fn method(&self) -> HttpMethod {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        if self.emulation_enabled() {
            emulated_method(state.method, &state.query, &state.body)
        } else {
            state.method
        }
    }

    pub fn query(&self, name: &str) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .query
            .get(name)
            .cloned()
    }

    /// Reads a named field from the request body (JSON object member or form
    /// field).
    pub fn input(&self, name: &str) -> Option<Value> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        match &state.body {
            RequestBody::Json(value) => value.get(name).cloned(),
            RequestBody::Form(fields) => fields.get(name).cloned().map(Value::from),
            _ => None,
        }
    }

    fn emulation_enabled(&self) -> bool {
        matches!(self.app.config("request.emulate"), Some(Value::Bool(true)))
    }
}
