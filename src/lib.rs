//! # ferrous-inject
//!
//! Type-keyed dependency injection with two lifecycle stores, in a blocking
//! and an async flavor.
//!
//! ## Features
//!
//! - **Singleton and factory stores**: register a pre-built instance, a
//!   builder invoked on every extraction, or both under the same type
//! - **Consistent fallback**: `Mode::Both` extraction prefers the singleton
//!   and falls back to the factory
//! - **Three miss policies**: panic (`extract`), error (`try_extract`) or
//!   `None` (`extract_optional`) over one lookup
//! - **Thread-safe**: [`Injector`] uses a readers/writer lock, and builders
//!   may re-enter the injector that runs them
//! - **Serialized async**: [`AsyncInjector`] runs one operation at a time, in
//!   arrival order
//! - **Ambient access**: [`ambient()`] holds a process-wide injector for code
//!   that cannot receive one explicitly
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrous_inject::{Injector, Mode, Resolver};
//! use std::sync::Arc;
//!
//! // Define your services
//! struct Database {
//!     connection_string: String,
//! }
//!
//! struct UserService {
//!     db: Arc<Database>,
//! }
//!
//! // Register them
//! let injector = Injector::new();
//! injector.inject(Mode::Singleton, |_| Database {
//!     connection_string: "postgres://localhost".to_string(),
//! });
//! injector.inject(Mode::Factory, |r| UserService {
//!     db: r.extract::<Database>(Mode::Singleton),
//! });
//!
//! // Extract them
//! let users = injector.extract::<UserService>(Mode::default());
//! assert_eq!(users.db.connection_string, "postgres://localhost");
//! ```
//!
//! ## Modes
//!
//! - **Singleton**: built once at injection and shared
//! - **Factory**: built fresh on every extraction
//! - **Both**: both of the above under one type; extraction prefers the singleton
//!
//! ## Miss handling
//!
//! ```rust
//! use ferrous_inject::{Injector, InjectorError, Mode, Resolver};
//!
//! struct NotRegistered;
//!
//! let injector = Injector::new();
//! assert!(matches!(
//!     injector.try_extract::<NotRegistered>(Mode::Both),
//!     Err(InjectorError::TypeNotFound { .. })
//! ));
//! assert!(injector.extract_optional::<NotRegistered>(Mode::Both).is_none());
//! ```

// Module declarations
pub mod accessor;
pub mod ambient;
pub mod config;
pub mod error;
pub mod injector;
pub mod key;
pub mod mode;
pub mod traits;

#[cfg(feature = "async")]
pub mod async_injector;

// Internal modules
mod registration;

// Re-export core types
pub use accessor::{Injected, InjectedOptional};
pub use ambient::{ambient, AmbientRegistry};
pub use config::InjectorConfig;
pub use error::{InjectorError, InjectorResult};
pub use injector::{Injector, ResolverContext};
pub use key::{key_of_type, Key};
pub use mode::Mode;
pub use traits::{Resolver, ResolverCore};

#[cfg(feature = "async")]
pub use async_injector::AsyncInjector;
