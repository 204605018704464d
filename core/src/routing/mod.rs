pub mod parser;
pub mod router;
pub mod types;

pub use parser::parse_route_pattern;
pub use router::Router;
pub use types::{Action, ActionSpec, HttpMethod, Route};
