use crate::app::App;
use crate::container::types::{ServiceEntry, Shared};
use crate::errors::CoreError;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

/// Lazy shared-service container.
///
/// Services are registered as factories and resolved to singletons on first
/// access: a given type resolves to the same instance for the lifetime of the
/// container, and its factory runs at most once even when first access races
/// across threads.
pub struct ServiceRegistry {
    entries: RwLock<HashMap<TypeId, Arc<ServiceEntry>>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a factory for `T`.
    ///
    /// Registering a type that already has an entry replaces the factory and
    /// discards any memoized instance.
    pub fn register<T, F>(&self, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&App) -> Arc<T> + Send + Sync + 'static,
    {
        let entry = ServiceEntry {
            name: type_name::<T>(),
            factory: Box::new(move |app: &App| -> Shared { factory(app) }),
            cell: OnceLock::new(),
        };
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), Arc::new(entry));
    }

    /// Resolves `T` to its shared instance, running the factory on first
    /// access only.
    pub fn resolve<T>(&self, app: &App) -> Result<Arc<T>, CoreError>
    where
        T: Any + Send + Sync + 'static,
    {
        let entry = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<T>())
            .cloned()
            .ok_or(CoreError::ServiceNotFound {
                service: type_name::<T>(),
            })?;

        // The map lock is released here: factories may resolve other
        // services re-entrantly. The per-entry cell still guarantees
        // at-most-once execution.
        let shared = entry
            .cell
            .get_or_init(|| {
                debug!(service = entry.name, "constructing shared service");
                (entry.factory)(app)
            })
            .clone();

        shared
            .downcast::<T>()
            .map_err(|_| CoreError::ServiceNotFound {
                service: entry.name,
            })
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::errors::CoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counter {
        value: usize,
    }

    #[test]
    fn test_resolve_returns_same_instance() {
        let app = App::new();
        app.register(|_| Arc::new(Counter { value: 7 }));

        let first = app.resolve::<Counter>().unwrap();
        let second = app.resolve::<Counter>().unwrap();
        assert_eq!(first.value, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_factory_runs_at_most_once() {
        let app = App::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        app.register(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Arc::new(Counter { value: 0 })
        });

        for _ in 0..5 {
            app.resolve::<Counter>().unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_access_runs_factory_once() {
        let app = App::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        app.register(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Arc::new(Counter { value: 1 })
        });

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let app = app.clone();
                std::thread::spawn(move || app.resolve::<Counter>().unwrap().value)
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reregistration_invalidates_memoized_instance() {
        let app = App::new();
        app.register(|_| Arc::new(Counter { value: 1 }));
        let first = app.resolve::<Counter>().unwrap();

        app.register(|_| Arc::new(Counter { value: 2 }));
        let second = app.resolve::<Counter>().unwrap();

        assert_eq!(first.value, 1);
        assert_eq!(second.value, 2);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_unregistered_service_fails() {
        struct Never;
        let app = App::new();
        let result = app.resolve::<Never>();
        assert!(matches!(
            result,
            Err(CoreError::ServiceNotFound { .. })
        ));
    }

    #[test]
    fn test_factory_may_resolve_other_services() {
        struct Inner {
            value: usize,
        }
        struct Outer {
            inner: usize,
        }

        let app = App::new();
        app.register(|_| Arc::new(Inner { value: 11 }));
        app.register(|app: &App| {
            let inner = app.resolve::<Inner>().unwrap();
            Arc::new(Outer { inner: inner.value })
        });

        assert_eq!(app.resolve::<Outer>().unwrap().inner, 11);
    }
}
