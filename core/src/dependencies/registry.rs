use crate::app::App;
use crate::dependencies::types::{Construct, Handler, HandlerCtor, ModelCtor};
use crate::errors::CoreError;
use std::any::Any;
use std::collections::HashMap;

/// Closed set of constructible types known at startup.
///
/// Route actions carry handler and model *names*; this registry maps each
/// name to a monomorphized constructor that runs through the auto-wiring
/// resolver. Looking up a name that was never bound fails with
/// [`CoreError::TypeNotFound`] — the dispatcher checks existence first to
/// turn that condition into a 404.
pub struct ConstructorRegistry {
    handlers: HashMap<String, HandlerCtor>,
    models: HashMap<String, ModelCtor>,
}

impl ConstructorRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            models: HashMap::new(),
        }
    }

    pub fn bind_handler<T: Construct + Handler>(&mut self, name: &str) {
        self.handlers.insert(name.to_string(), construct_handler::<T>);
    }

    pub fn bind_model<T: Construct>(&mut self, name: &str) {
        self.models.insert(name.to_string(), construct_model::<T>);
    }

    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn has_model(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    pub fn handler(&self, name: &str) -> Result<HandlerCtor, CoreError> {
        self.handlers
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::TypeNotFound {
                type_name: name.to_string(),
            })
    }

    pub fn model(&self, name: &str) -> Result<ModelCtor, CoreError> {
        self.models
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::TypeNotFound {
                type_name: name.to_string(),
            })
    }
}

impl Default for ConstructorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn construct_handler<T: Construct + Handler>(app: &App) -> Result<Box<dyn Handler>, CoreError> {
    Ok(Box::new(app.make::<T>()?))
}

fn construct_model<T: Construct>(app: &App) -> Result<Box<dyn Any + Send>, CoreError> {
    Ok(Box::new(app.make::<T>()?))
}
