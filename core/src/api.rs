pub use crate::app::App;
pub use crate::config::Settings;
pub use crate::container::ServiceRegistry;
pub use crate::database::{Database, Dsn};
pub use crate::dependencies::{Construct, Handler, Wiring};
pub use crate::errors::CoreError;
pub use crate::request::{parse_query_string, Request, RequestBody};
pub use crate::response::{create_response, serialize_response_body, HttpResponse, Response, ResponseBody};
pub use crate::routing::{parse_route_pattern, Action, ActionSpec, HttpMethod, Router};
