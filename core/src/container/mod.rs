pub mod registry;
pub mod types;

pub use registry::ServiceRegistry;
pub use types::{ServiceFactory, Shared};
