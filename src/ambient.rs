//! Process-wide injector slots.
//!
//! Code far from where the injector is built can reach it through
//! [`ambient()`] instead of threading it through every call. The registry
//! starts empty, holds at most one [`Injector`] and one
//! [`AsyncInjector`](crate::AsyncInjector), and the last registration wins.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::injector::Injector;

#[cfg(feature = "async")]
use crate::async_injector::AsyncInjector;

// Created on first access, never torn down.
static AMBIENT: Lazy<AmbientRegistry> = Lazy::new(AmbientRegistry::new);

/// Provides a reference to the process-wide registry.
///
/// # Examples
///
/// ```
/// use ferrous_inject::{ambient, Injector, Mode, Resolver};
/// use std::sync::Arc;
///
/// let injector = Arc::new(Injector::new());
/// injector.inject(Mode::Singleton, |_| "shared".to_string());
/// ambient().register(injector);
///
/// // elsewhere
/// let injector = ambient().resolve().expect("registered at startup");
/// assert_eq!(*injector.extract::<String>(Mode::Both), "shared");
/// # ambient().reset();
/// ```
pub fn ambient() -> &'static AmbientRegistry {
    &AMBIENT
}

/// Holder for at most one blocking and one async injector.
///
/// The two slots are independent: registering or resetting one never touches
/// the other. Usually accessed through [`ambient()`]; standalone instances are
/// useful in tests.
pub struct AmbientRegistry {
    injector: RwLock<Option<Arc<Injector>>>,
    #[cfg(feature = "async")]
    async_injector: tokio::sync::RwLock<Option<Arc<AsyncInjector>>>,
}

impl AmbientRegistry {
    /// Creates a registry with both slots empty.
    pub fn new() -> Self {
        Self {
            injector: RwLock::new(None),
            #[cfg(feature = "async")]
            async_injector: tokio::sync::RwLock::new(None),
        }
    }

    /// Makes `injector` the current blocking injector, replacing any previous one.
    pub fn register(&self, injector: Arc<Injector>) {
        tracing::debug!(injector = %injector.config().name, "register ambient injector");
        *self.injector.write() = Some(injector);
    }

    /// The current blocking injector, or `None` if none was registered.
    pub fn resolve(&self) -> Option<Arc<Injector>> {
        self.injector.read().clone()
    }

    /// Empties the blocking slot.
    pub fn reset(&self) {
        *self.injector.write() = None;
    }

    /// Makes `injector` the current async injector, replacing any previous one.
    #[cfg(feature = "async")]
    pub async fn register_async(&self, injector: Arc<AsyncInjector>) {
        tracing::debug!(injector = %injector.config().name, "register ambient async injector");
        *self.async_injector.write().await = Some(injector);
    }

    /// The current async injector, or `None` if none was registered.
    #[cfg(feature = "async")]
    pub async fn resolve_async(&self) -> Option<Arc<AsyncInjector>> {
        self.async_injector.read().await.clone()
    }

    /// Empties the async slot.
    #[cfg(feature = "async")]
    pub async fn reset_async(&self) {
        *self.async_injector.write().await = None;
    }
}

impl Default for AmbientRegistry {
    fn default() -> Self {
        Self::new()
    }
}
