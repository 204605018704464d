use crate::app::App;
use crate::dependencies::types::Construct;
use crate::errors::CoreError;
use std::any::{type_name, TypeId};
use tracing::trace;

/// Per-call auto-wiring context.
///
/// Created fresh by [`App::make`]; holds the application handle for the
/// container short-circuit and the in-flight construction stack used to
/// detect dependency cycles. Every call builds a brand-new object graph —
/// nothing is memoized here, which is the defining contrast with the
/// shared-service container.
pub struct Wiring<'a> {
    app: &'a App,
    stack: Vec<(TypeId, &'static str)>,
}

impl<'a> Wiring<'a> {
    pub(crate) fn new(app: &'a App) -> Self {
        Self {
            app,
            stack: Vec::new(),
        }
    }

    /// The container short-circuit: a dependency on the application itself
    /// binds the *current* instance instead of recursing.
    pub fn app(&self) -> App {
        self.app.clone()
    }

    /// Recursively constructs a declared dependency.
    ///
    /// Fails with [`CoreError::ConstructionCycle`] when `T` is already being
    /// constructed higher up the stack.
    pub fn make<T: Construct>(&mut self) -> Result<T, CoreError> {
        let id = TypeId::of::<T>();
        let name = type_name::<T>();

        if self.stack.iter().any(|(seen, _)| *seen == id) {
            let chain = self
                .stack
                .iter()
                .map(|(_, seen)| *seen)
                .chain([name])
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(CoreError::ConstructionCycle { chain });
        }

        trace!(built = name, depth = self.stack.len(), "auto-wiring");
        self.stack.push((id, name));
        let built = T::construct(self);
        self.stack.pop();
        built
    }

    /// Placeholder for a constructor parameter with no declared type:
    /// always resolves to `None`.
    pub fn unset<T>(&self) -> Option<T> {
        None
    }
}
