pub mod formatter;
pub mod types;

pub use formatter::{create_response, serialize_json_response, serialize_response_body, Response};
pub use types::{HttpResponse, ResponseBody};
