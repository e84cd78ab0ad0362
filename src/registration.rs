//! Store types shared by both injectors.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::injector::ResolverContext;
use crate::key::Key;
use crate::mode::Mode;

// Type-erased Arc for storage
pub(crate) type AnyArc = Arc<dyn Any + Send + Sync>;

/// Type-erased builder stored in the factory store.
pub(crate) type Builder = Arc<dyn for<'a> Fn(&ResolverContext<'a>) -> AnyArc + Send + Sync>;

#[cfg(feature = "ahash")]
type StoreMap<V> = HashMap<Key, V, ahash::RandomState>;
#[cfg(not(feature = "ahash"))]
type StoreMap<V> = HashMap<Key, V>;

/// Erases a typed builder into a [`Builder`].
pub(crate) fn erase<T, F>(builder: F) -> Builder
where
    T: Send + Sync + 'static,
    F: Fn(&ResolverContext<'_>) -> T + Send + Sync + 'static,
{
    let erased: Builder = Arc::new(move |ctx| Arc::new(builder(ctx)) as AnyArc);
    erased
}

/// The two lifecycle stores owned by one injector.
///
/// Entries under the same key are independent: a `Both` registration lands in
/// both maps and ejecting one half leaves the other untouched.
#[derive(Default)]
pub(crate) struct Stores {
    singletons: StoreMap<AnyArc>,
    factories: StoreMap<Builder>,
}

impl Stores {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Commits a registration. `singleton` must be `Some` when the mode
    /// includes the singleton store.
    pub(crate) fn insert(&mut self, key: Key, mode: Mode, singleton: Option<AnyArc>, builder: Builder) {
        if let Some(value) = singleton.filter(|_| mode.includes_singleton()) {
            self.singletons.insert(key, value);
        }
        if mode.includes_factory() {
            self.factories.insert(key, builder);
        }
    }

    pub(crate) fn insert_singleton(&mut self, key: Key, value: AnyArc) {
        self.singletons.insert(key, value);
    }

    /// Removes `key` from the selected store(s). Absent keys are a no-op.
    pub(crate) fn remove(&mut self, key: &Key, mode: Mode) {
        if mode.includes_singleton() {
            self.singletons.remove(key);
        }
        if mode.includes_factory() {
            self.factories.remove(key);
        }
    }

    #[inline]
    pub(crate) fn singleton(&self, key: &Key) -> Option<AnyArc> {
        self.singletons.get(key).cloned()
    }

    #[inline]
    pub(crate) fn builder(&self, key: &Key) -> Option<Builder> {
        self.factories.get(key).cloned()
    }

    pub(crate) fn contains(&self, key: &Key, mode: Mode) -> bool {
        (mode.includes_singleton() && self.singletons.contains_key(key))
            || (mode.includes_factory() && self.factories.contains_key(key))
    }

    /// Number of distinct keys across both stores.
    pub(crate) fn len(&self) -> usize {
        self.singletons.len()
            + self
                .factories
                .keys()
                .filter(|key| !self.singletons.contains_key(key))
                .count()
    }

    pub(crate) fn clear(&mut self) {
        self.singletons.clear();
        self.factories.clear();
    }
}
