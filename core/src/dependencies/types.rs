use crate::app::App;
use crate::dependencies::resolver::Wiring;
use crate::errors::CoreError;
use serde_json::Value;
use std::any::Any;

/// A type the auto-wiring resolver knows how to build.
///
/// The implementation *is* the constructor parameter list: each declared
/// dependency is obtained from the wiring context in declaration order.
///
/// ```
/// use armature::app::App;
/// use armature::dependencies::{Construct, Wiring};
/// use armature::errors::CoreError;
///
/// struct Mailer;
///
/// impl Construct for Mailer {
///     fn construct(_wiring: &mut Wiring<'_>) -> Result<Self, CoreError> {
///         Ok(Mailer)
///     }
/// }
///
/// struct Notifier {
///     app: App,
///     mailer: Mailer,
///     channel: Option<String>,
/// }
///
/// impl Construct for Notifier {
///     fn construct(wiring: &mut Wiring<'_>) -> Result<Self, CoreError> {
///         Ok(Notifier {
///             app: wiring.app(),
///             mailer: wiring.make()?,
///             channel: wiring.unset(),
///         })
///     }
/// }
/// ```
pub trait Construct: Sized + Send + Sync + 'static {
    fn construct(wiring: &mut Wiring<'_>) -> Result<Self, CoreError>;
}

/// Implements [`Construct`] through `Default` for types with no declared
/// dependencies. No wiring inspection is performed.
#[macro_export]
macro_rules! default_construct {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::dependencies::Construct for $ty {
            fn construct(
                _wiring: &mut $crate::dependencies::Wiring<'_>,
            ) -> Result<Self, $crate::errors::CoreError> {
                Ok(<$ty as Default>::default())
            }
        }
    )+};
}

/// The surface the dispatcher invokes on a routed controller.
pub trait Handler: Send + Sync {
    /// Calls the named action method with the route's ordered parameters.
    fn invoke(&self, method: &str, params: &[Value]) -> Result<Value, CoreError>;
}

/// Monomorphized handler constructor stored in the registry.
pub type HandlerCtor = fn(&App) -> Result<Box<dyn Handler>, CoreError>;

/// Monomorphized model constructor stored in the registry.
pub type ModelCtor = fn(&App) -> Result<Box<dyn Any + Send>, CoreError>;
