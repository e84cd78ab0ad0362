//! Blocking injector.
//!
//! [`Injector`] may be shared between threads (usually behind an `Arc`) and
//! called concurrently. Extractions run in parallel with each other; inject,
//! eject and clear are exclusive.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::InjectorConfig;
use crate::key::Key;
use crate::mode::Mode;
use crate::registration::{erase, Stores};
use crate::traits::ResolverCore;

pub mod context;
pub use context::ResolverContext;

/// Thread-safe dependency injection container.
///
/// Holds a singleton store and a factory store keyed by type. Both live
/// behind a single `RwLock`, so an operation touching both stores (a `Both`
/// injection, for instance) is seen by other threads as one step.
///
/// Builders never run while the lock is held: singleton builders run before
/// the write lock is taken and factory builders are cloned out of the store
/// and invoked after the read lock is released. A builder is therefore free
/// to extract other types from the same injector.
///
/// # Examples
///
/// ```
/// use ferrous_inject::{Injector, Mode, Resolver};
/// use std::sync::Arc;
/// use std::thread;
///
/// struct Settings { retries: u32 }
///
/// let injector = Arc::new(Injector::new());
/// injector.inject(Mode::Singleton, |_| Settings { retries: 3 });
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let injector = injector.clone();
///         thread::spawn(move || injector.extract::<Settings>(Mode::Both).retries)
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 3);
/// }
/// ```
pub struct Injector {
    stores: RwLock<Stores>,
    config: InjectorConfig,
}

impl Injector {
    /// Creates an empty injector with the default configuration.
    pub fn new() -> Self {
        Self::with_config(InjectorConfig::default())
    }

    /// Creates an empty injector with the given configuration.
    pub fn with_config(config: InjectorConfig) -> Self {
        Self {
            stores: RwLock::new(Stores::new()),
            config,
        }
    }

    /// The configuration this injector was built with.
    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// Registers `builder` as the way to produce `T`.
    ///
    /// - `Singleton`: calls the builder now and stores the result.
    /// - `Factory`: stores the builder; every factory extraction calls it.
    /// - `Both`: does both. The builder runs once now for the singleton and
    ///   again on each factory extraction.
    ///
    /// An existing registration for `T` in the selected store(s) is replaced.
    /// A panic inside the builder propagates to the caller and leaves the
    /// stores untouched.
    pub fn inject<T, F>(&self, mode: Mode, builder: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&ResolverContext<'_>) -> T + Send + Sync + 'static,
    {
        let key = Key::of::<T>();
        let builder = erase(builder);
        let singleton = mode
            .includes_singleton()
            .then(|| builder(&ResolverContext::new(self)));

        self.stores.write().insert(key, mode, singleton, builder);
        tracing::debug!(injector = %self.config.name, key = key.display_name(), %mode, "inject");
    }

    /// Stores an already-built value as the singleton for `T`.
    pub fn inject_instance<T: Send + Sync + 'static>(&self, value: T) {
        let key = Key::of::<T>();
        self.stores.write().insert_singleton(key, Arc::new(value));
        tracing::debug!(injector = %self.config.name, key = key.display_name(), "inject instance");
    }

    /// Removes `T` from the store(s) selected by `mode`.
    ///
    /// Ejecting a type that is not registered does nothing.
    pub fn eject<T: ?Sized + 'static>(&self, mode: Mode) {
        self.eject_key(&Key::of::<T>(), mode);
    }

    /// Removes `key` from the store(s) selected by `mode`.
    pub fn eject_key(&self, key: &Key, mode: Mode) {
        self.stores.write().remove(key, mode);
        tracing::debug!(injector = %self.config.name, key = key.display_name(), %mode, "eject");
    }

    /// Number of distinct types registered in either store.
    pub fn len(&self) -> usize {
        self.stores.read().len()
    }

    /// True when neither store holds anything.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every registration from both stores.
    pub fn clear(&self) {
        self.stores.write().clear();
        tracing::debug!(injector = %self.config.name, "clear");
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injector")
            .field("name", &self.config.name)
            .field("registrations", &self.len())
            .finish()
    }
}

impl ResolverCore for Injector {
    fn singleton_any(&self, key: &Key) -> Option<Arc<dyn Any + Send + Sync>> {
        self.stores.read().singleton(key)
    }

    fn build_any(&self, key: &Key) -> Option<Arc<dyn Any + Send + Sync>> {
        let builder = self.stores.read().builder(key)?;
        Some(builder(&ResolverContext::new(self)))
    }

    fn contains_key(&self, key: &Key, mode: Mode) -> bool {
        self.stores.read().contains(key, mode)
    }

    // One read section for the whole lookup; the builder runs after it ends.
    fn resolve_any(&self, key: &Key, mode: Mode) -> Option<Arc<dyn Any + Send + Sync>> {
        let builder = {
            let stores = self.stores.read();
            if mode.includes_singleton() {
                if let Some(value) = stores.singleton(key) {
                    return Some(value);
                }
            }
            if !mode.includes_factory() {
                return None;
            }
            stores.builder(key)?
        };
        Some(builder(&ResolverContext::new(self)))
    }
}
