//! Error types for the injector.

use crate::mode::Mode;

/// Injection errors
///
/// Returned by the `try_*` resolution path. The panicking path
/// ([`Resolver::extract`](crate::Resolver::extract)) reports the same
/// condition through a panic carrying this error's message, and the optional
/// path ([`Resolver::extract_optional`](crate::Resolver::extract_optional))
/// turns it into `None`.
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::{Injector, InjectorError, Mode, Resolver};
///
/// let injector = Injector::new();
/// match injector.try_extract::<String>(Mode::Singleton) {
///     Err(InjectorError::TypeNotFound { type_name, mode }) => {
///         assert_eq!(type_name, "alloc::string::String");
///         assert_eq!(mode, Mode::Singleton);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InjectorError {
    /// Nothing registered for the type in the store(s) the mode selects
    #[error("type not found: {type_name} (mode: {mode})")]
    TypeNotFound {
        type_name: &'static str,
        mode: Mode,
    },
    /// A stored value did not downcast to the requested type
    #[error("type mismatch for: {0}")]
    TypeMismatch(&'static str),
}

/// Result type for injector operations
pub type InjectorResult<T> = Result<T, InjectorError>;
