use crate::app::App;
use crate::errors::CoreError;
use crate::routing::parser::parse_route_pattern;
use crate::routing::types::{Action, ActionSpec, HttpMethod, Route};
use serde_json::Value;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Routing-table collaborator: maps the current request to a route action.
pub struct Router {
    app: App,
    routes: RwLock<Vec<Route>>,
}

impl Router {
    pub fn new(app: App) -> Self {
        Self {
            app,
            routes: RwLock::new(Vec::new()),
        }
    }

    /// Registers a route; first registered match wins at lookup time.
    pub fn add(&self, verb: HttpMethod, pattern: &str, spec: ActionSpec) -> Result<(), CoreError> {
        let route = parse_route_pattern(pattern, verb, spec)?;
        self.routes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
        Ok(())
    }

    /// Resolves the action bound to `url` for the current request method,
    /// or `None` when no route matches.
    pub fn get_action(&self, url: &str) -> Option<Action> {
        let verb = match self.app.request() {
            Ok(request) => request.method(),
            Err(_) => return None,
        };

        let routes = self.routes.read().unwrap_or_else(PoisonError::into_inner);
        for route in routes.iter() {
            if route.verb != verb {
                continue;
            }
            if let Some(captures) = route.path_regex.captures(url) {
                let params = (1..captures.len())
                    .filter_map(|i| captures.get(i))
                    .map(|capture| param_value(capture.as_str()))
                    .collect();
                debug!(pattern = %route.pattern, verb = route.verb.as_str(), url, "route matched");
                return Some(Action {
                    handler: route.spec.handler.clone(),
                    model: route.spec.model.clone(),
                    method: route.spec.method.clone(),
                    params,
                });
            }
        }
        None
    }
}

/// Purely numeric captures become JSON numbers; everything else stays a
/// string.
fn param_value(raw: &str) -> Value {
    raw.parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw))
}
