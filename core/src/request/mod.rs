pub mod parser;
pub mod types;

pub use parser::{emulated_method, parse_form_body, parse_json_body, parse_query_string};
pub use types::{Request, RequestBody};
