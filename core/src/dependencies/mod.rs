pub mod registry;
pub mod resolver;
pub mod types;

pub use registry::ConstructorRegistry;
pub use resolver::Wiring;
pub use types::{Construct, Handler, HandlerCtor, ModelCtor};
