//! Async/await injector.
//!
//! [`AsyncInjector`] runs every operation as one uninterrupted turn over its
//! stores. Callers queue on a fair Tokio mutex, so operations complete in
//! arrival order and never interleave. Nothing inside a turn awaits: once a
//! caller holds the turn it finishes without yielding, and dropping a
//! pending future only gives up a place in the queue.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::InjectorConfig;
use crate::error::InjectorResult;
use crate::injector::ResolverContext;
use crate::key::Key;
use crate::mode::Mode;
use crate::registration::{erase, Stores};
use crate::traits::{Resolver, ResolverCore};

/// Serialized dependency injection container for async code.
///
/// Offers the same operations as [`Injector`](crate::Injector), as `async`
/// methods. A builder that runs during a turn (singleton injection or factory
/// extraction) receives a [`ResolverContext`] over the stores held by that
/// turn, so it resolves its own dependencies synchronously inside the turn.
/// A slow builder holds up every other queued operation on the same injector.
///
/// # Examples
///
/// ```
/// use ferrous_inject::{AsyncInjector, Mode, Resolver};
/// use std::sync::Arc;
///
/// struct Pool { size: usize }
/// struct Repo { pool: Arc<Pool> }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let injector = AsyncInjector::new();
/// injector.inject(Mode::Singleton, |_| Pool { size: 8 }).await;
/// injector.inject(Mode::Factory, |r| Repo { pool: r.extract::<Pool>(Mode::Both) }).await;
///
/// let repo = injector.extract::<Repo>(Mode::default()).await;
/// assert_eq!(repo.pool.size, 8);
/// # }
/// ```
pub struct AsyncInjector {
    stores: Mutex<Stores>,
    config: InjectorConfig,
}

/// The stores as seen from inside one turn.
struct Turn<'a> {
    stores: &'a Stores,
}

impl ResolverCore for Turn<'_> {
    fn singleton_any(&self, key: &Key) -> Option<Arc<dyn Any + Send + Sync>> {
        self.stores.singleton(key)
    }

    fn build_any(&self, key: &Key) -> Option<Arc<dyn Any + Send + Sync>> {
        let builder = self.stores.builder(key)?;
        Some(builder(&ResolverContext::new(self)))
    }

    fn contains_key(&self, key: &Key, mode: Mode) -> bool {
        self.stores.contains(key, mode)
    }
}

impl AsyncInjector {
    /// Creates an empty injector with the default configuration.
    pub fn new() -> Self {
        Self::with_config(InjectorConfig::default())
    }

    /// Creates an empty injector with the given configuration.
    pub fn with_config(config: InjectorConfig) -> Self {
        Self {
            stores: Mutex::new(Stores::new()),
            config,
        }
    }

    /// The configuration this injector was built with.
    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// Registers `builder` as the way to produce `T`.
    ///
    /// Same semantics as [`Injector::inject`](crate::Injector::inject); the
    /// singleton half is built inside the turn.
    pub async fn inject<T, F>(&self, mode: Mode, builder: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&ResolverContext<'_>) -> T + Send + Sync + 'static,
    {
        let key = Key::of::<T>();
        let builder = erase(builder);

        let mut stores = self.stores.lock().await;
        let singleton = mode.includes_singleton().then(|| {
            let turn = Turn { stores: &stores };
            builder(&ResolverContext::new(&turn))
        });
        stores.insert(key, mode, singleton, builder);
        drop(stores);

        tracing::debug!(injector = %self.config.name, key = key.display_name(), %mode, "inject");
    }

    /// Stores an already-built value as the singleton for `T`.
    pub async fn inject_instance<T: Send + Sync + 'static>(&self, value: T) {
        let key = Key::of::<T>();
        self.stores.lock().await.insert_singleton(key, Arc::new(value));
        tracing::debug!(injector = %self.config.name, key = key.display_name(), "inject instance");
    }

    /// Removes `T` from the store(s) selected by `mode`. Absent types are a no-op.
    pub async fn eject<T: ?Sized + 'static>(&self, mode: Mode) {
        self.eject_key(&Key::of::<T>(), mode).await;
    }

    /// Removes `key` from the store(s) selected by `mode`.
    pub async fn eject_key(&self, key: &Key, mode: Mode) {
        self.stores.lock().await.remove(key, mode);
        tracing::debug!(injector = %self.config.name, key = key.display_name(), %mode, "eject");
    }

    /// Extracts `T`, panicking when nothing is registered.
    ///
    /// # Panics
    ///
    /// Panics if `T` is not registered in the store(s) `mode` selects.
    pub async fn extract<T: Send + Sync + 'static>(&self, mode: Mode) -> Arc<T> {
        let stores = self.stores.lock().await;
        Turn { stores: &stores }.extract::<T>(mode)
    }

    /// Extracts `T`, returning an error when nothing is registered.
    ///
    /// # Errors
    ///
    /// [`InjectorError::TypeNotFound`](crate::InjectorError::TypeNotFound)
    /// when the lookup misses.
    pub async fn try_extract<T: Send + Sync + 'static>(&self, mode: Mode) -> InjectorResult<Arc<T>> {
        let stores = self.stores.lock().await;
        Turn { stores: &stores }.try_extract::<T>(mode)
    }

    /// Extracts `T`, returning `None` when nothing is registered.
    pub async fn extract_optional<T: Send + Sync + 'static>(&self, mode: Mode) -> Option<Arc<T>> {
        let stores = self.stores.lock().await;
        Turn { stores: &stores }.extract_optional::<T>(mode)
    }

    /// Whether `T` is registered in the store(s) `mode` selects.
    pub async fn contains<T: ?Sized + 'static>(&self, mode: Mode) -> bool {
        self.stores.lock().await.contains(&Key::of::<T>(), mode)
    }

    /// Number of distinct types registered in either store.
    pub async fn len(&self) -> usize {
        self.stores.lock().await.len()
    }

    /// True when neither store holds anything.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Removes every registration from both stores.
    pub async fn clear(&self) {
        self.stores.lock().await.clear();
        tracing::debug!(injector = %self.config.name, "clear");
    }
}

impl Default for AsyncInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AsyncInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncInjector")
            .field("name", &self.config.name)
            .finish_non_exhaustive()
    }
}
