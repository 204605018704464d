use crate::config::Settings;
use crate::container::ServiceRegistry;
use crate::database::{Database, Dsn};
use crate::dependencies::{Construct, ConstructorRegistry, Handler, Wiring};
use crate::errors::CoreError;
use crate::request::Request;
use crate::response::{HttpResponse, Response};
use crate::routing::Router;
use serde_json::Value;
use std::any::Any;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// The application: configuration store, shared-service container,
/// auto-wiring factory and request dispatcher behind one cheap-to-clone
/// handle.
///
/// Cloning an `App` clones the handle, not the application — every clone
/// shares the same settings, service instances and bindings, which is what
/// lets the container inject itself as a dependency.
#[derive(Clone)]
pub struct App {
    inner: Arc<AppInner>,
}

struct AppInner {
    settings: RwLock<Settings>,
    services: ServiceRegistry,
    constructors: RwLock<ConstructorRegistry>,
}

impl App {
    pub fn new() -> Self {
        Self::with_settings(std::iter::empty::<(String, Value)>())
    }

    /// Builds an application with user overrides applied over the default
    /// settings, and the framework services registered.
    pub fn with_settings<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let app = Self {
            inner: Arc::new(AppInner {
                settings: RwLock::new(Settings::with_overrides(overrides)),
                services: ServiceRegistry::new(),
                constructors: RwLock::new(ConstructorRegistry::new()),
            }),
        };
        app.register_defaults();
        app
    }

    fn register_defaults(&self) {
        self.register(|app: &App| Arc::new(Request::new(app.clone())));
        self.register(|app: &App| Arc::new(Router::new(app.clone())));
        self.register(|_: &App| Arc::new(Response::new()));
        self.register(|app: &App| Arc::new(Dsn::from_config(app)));
        self.register(|app: &App| Arc::new(Database::new(app)));
    }

    /// Whether two handles refer to the same application instance.
    pub fn ptr_eq(&self, other: &App) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ---- configuration ----------------------------------------------------

    /// Current value of a setting, or `None` when unset.
    pub fn config(&self, name: &str) -> Option<Value> {
        self.inner
            .settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
    }

    /// Sets a single setting; returns the written value.
    pub fn config_set(&self, name: &str, value: impl Into<Value>) -> Value {
        self.inner
            .settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(name, value)
    }

    /// Applies a batch of settings in iteration order.
    pub fn configure<I, K>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.inner
            .settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(entries);
    }

    // ---- service container ------------------------------------------------

    /// Registers a lazy shared service; replaces (and un-memoizes) any
    /// previous registration for `T`.
    pub fn register<T, F>(&self, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&App) -> Arc<T> + Send + Sync + 'static,
    {
        self.inner.services.register(factory);
    }

    /// Resolves a shared service, constructing it on first access.
    pub fn resolve<T>(&self) -> Result<Arc<T>, CoreError>
    where
        T: Any + Send + Sync + 'static,
    {
        self.inner.services.resolve(self)
    }

    pub fn request(&self) -> Result<Arc<Request>, CoreError> {
        self.resolve()
    }

    pub fn router(&self) -> Result<Arc<Router>, CoreError> {
        self.resolve()
    }

    pub fn response(&self) -> Result<Arc<Response>, CoreError> {
        self.resolve()
    }

    pub fn db(&self) -> Result<Arc<Database>, CoreError> {
        self.resolve()
    }

    // ---- auto-wiring ------------------------------------------------------

    /// Builds a fresh, fully-wired instance of `T`.
    ///
    /// Unlike [`App::resolve`], nothing is shared: every call produces a new
    /// object graph, with this application injected wherever a constructor
    /// declares it.
    pub fn make<T: Construct>(&self) -> Result<T, CoreError> {
        Wiring::new(self).make::<T>()
    }

    /// Binds a controller type to the name the router knows it by.
    pub fn bind_handler<T: Construct + Handler>(&self, name: &str) {
        self.inner
            .constructors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .bind_handler::<T>(name);
    }

    /// Binds a model type to the name the router knows it by.
    pub fn bind_model<T: Construct>(&self, name: &str) {
        self.inner
            .constructors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .bind_model::<T>(name);
    }

    pub fn has_handler(&self, name: &str) -> bool {
        self.inner
            .constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .has_handler(name)
    }

    pub fn has_model(&self, name: &str) -> bool {
        self.inner
            .constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .has_model(name)
    }

    pub fn build_handler(&self, name: &str) -> Result<Box<dyn Handler>, CoreError> {
        let ctor = self
            .inner
            .constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .handler(name)?;
        ctor(self)
    }

    pub fn build_model(&self, name: &str) -> Result<Box<dyn Any + Send>, CoreError> {
        let ctor = self
            .inner
            .constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .model(name)?;
        ctor(self)
    }

    // ---- dispatch ---------------------------------------------------------

    /// Runs one request: resolve the URL, resolve the route, build the
    /// action's model and controller, invoke the action method, format the
    /// result.
    ///
    /// Missing routes, unbound handler names and unbound model names come
    /// back as 404 responses; infrastructure failures propagate as errors.
    pub fn run(&self) -> Result<HttpResponse, CoreError> {
        let request = self.request()?;
        let router = self.router()?;
        let response = self.response()?;

        let url = request.url();
        debug!(%url, "dispatching request");

        let action = match router.get_action(&url) {
            Some(action) if self.has_handler(&action.handler) => action,
            _ => return Ok(response.error(404, "Controller not found")),
        };

        if let Some(model) = &action.model {
            if !self.has_model(model) {
                return Ok(response.error(404, "Model not found"));
            }
            // Constructed for its wiring effects only; the instance is not
            // handed to the controller.
            self.build_model(model)?;
        }

        let controller = self.build_handler(&action.handler)?;
        debug!(handler = %action.handler, method = %action.method, "invoking action");
        let result = controller.invoke(&action.method, &action.params)?;

        Ok(response.output(result))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// A constructor parameter declared as the application type binds the
/// current instance, never a fresh one.
impl Construct for App {
    fn construct(wiring: &mut Wiring<'_>) -> Result<Self, CoreError> {
        Ok(wiring.app())
    }
}
