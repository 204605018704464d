use crate::app::App;
use std::any::Any;
use std::sync::{Arc, OnceLock};

/// A memoized service instance, shared for the lifetime of the container.
pub type Shared = Arc<dyn Any + Send + Sync>;

/// Builds a service instance given the owning application.
pub type ServiceFactory = Box<dyn Fn(&App) -> Shared + Send + Sync>;

/// One registration: factory plus its memoization cell. Replacing the
/// registration replaces the cell, which is what invalidates a previously
/// memoized instance.
pub(crate) struct ServiceEntry {
    pub(crate) name: &'static str,
    pub(crate) factory: ServiceFactory,
    pub(crate) cell: OnceLock<Shared>,
}
