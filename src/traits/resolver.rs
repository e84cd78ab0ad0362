//! Resolver traits for extraction.

use std::any::Any;
use std::sync::Arc;

use crate::error::{InjectorError, InjectorResult};
use crate::key::Key;
use crate::mode::Mode;

/// Core resolver trait for object-safe lookup.
///
/// Implementors expose the two stores; the lookup order across them lives in
/// [`resolve_any`](Self::resolve_any) so that every resolver, blocking or
/// async, falls back the same way.
///
/// Most users should use the [`Resolver`] trait instead, which is implemented
/// for every `ResolverCore` and adds the typed extraction methods.
pub trait ResolverCore: Send + Sync {
    /// Returns the cached singleton for `key`, if any.
    fn singleton_any(&self, key: &Key) -> Option<Arc<dyn Any + Send + Sync>>;

    /// Invokes the stored builder for `key`, if any, and returns the fresh
    /// instance.
    fn build_any(&self, key: &Key) -> Option<Arc<dyn Any + Send + Sync>>;

    /// Whether the store(s) selected by `mode` hold `key`.
    fn contains_key(&self, key: &Key, mode: Mode) -> bool;

    /// Looks `key` up in the store(s) selected by `mode`.
    ///
    /// `Both` tries the singleton store first and only falls back to the
    /// factory store when no singleton is registered.
    fn resolve_any(&self, key: &Key, mode: Mode) -> Option<Arc<dyn Any + Send + Sync>> {
        match mode {
            Mode::Singleton => self.singleton_any(key),
            Mode::Factory => self.build_any(key),
            Mode::Both => self.singleton_any(key).or_else(|| self.build_any(key)),
        }
    }
}

/// High-level resolver interface with generic methods for typed extraction.
///
/// The three extraction methods share one lookup and differ only in how a
/// miss is reported:
///
/// | method | miss |
/// |---|---|
/// | [`extract`](Self::extract) | panic |
/// | [`try_extract`](Self::try_extract) | `Err(InjectorError::TypeNotFound)` |
/// | [`extract_optional`](Self::extract_optional) | `None` |
///
/// Both [`Injector`](crate::Injector) and the
/// [`ResolverContext`](crate::ResolverContext) handed to builders implement
/// this trait, so a builder resolves its own dependencies exactly like
/// application code does.
///
/// # Examples
///
/// ```
/// use ferrous_inject::{Injector, Mode, Resolver};
/// use std::sync::Arc;
///
/// struct Database { url: String }
/// struct UserService { db: Arc<Database> }
///
/// let injector = Injector::new();
/// injector.inject(Mode::Singleton, |_| Database { url: "postgres://localhost".to_string() });
/// injector.inject(Mode::Factory, |r| UserService { db: r.extract::<Database>(Mode::Singleton) });
///
/// let users = injector.extract::<UserService>(Mode::default());
/// assert_eq!(users.db.url, "postgres://localhost");
/// assert!(injector.extract_optional::<String>(Mode::Both).is_none());
/// ```
pub trait Resolver: ResolverCore {
    /// Extracts `T`, returning an error when nothing is registered.
    ///
    /// # Errors
    ///
    /// [`InjectorError::TypeNotFound`] names the type and the mode that
    /// was searched.
    fn try_extract<T: Send + Sync + 'static>(&self, mode: Mode) -> InjectorResult<Arc<T>> {
        let key = Key::of::<T>();
        let Some(any) = self.resolve_any(&key, mode) else {
            tracing::trace!(key = key.display_name(), %mode, "extract miss");
            return Err(InjectorError::TypeNotFound {
                type_name: key.display_name(),
                mode,
            });
        };
        any.downcast::<T>()
            .map_err(|_| InjectorError::TypeMismatch(key.display_name()))
    }

    /// Extracts `T`, panicking when nothing is registered.
    ///
    /// Use this where registration is guaranteed by construction; a miss is
    /// a wiring bug.
    ///
    /// # Panics
    ///
    /// Panics if `T` is not registered in the store(s) `mode` selects.
    /// `Option<U>` is an ordinary type key here and panics like any other
    /// miss; request an optional target with
    /// [`extract_optional::<U>`](Self::extract_optional) instead.
    fn extract<T: Send + Sync + 'static>(&self, mode: Mode) -> Arc<T> {
        self.try_extract::<T>(mode)
            .unwrap_or_else(|e| panic!("Failed to extract {}: {}", std::any::type_name::<T>(), e))
    }

    /// Extracts `T`, returning `None` when nothing is registered.
    ///
    /// This is the lookup for an optional target: the request is keyed by
    /// `T` itself, so a value registered as `T` is found here without a
    /// separate `Option<T>` registration. Never panics on a miss.
    fn extract_optional<T: Send + Sync + 'static>(&self, mode: Mode) -> Option<Arc<T>> {
        let key = Key::of::<T>();
        let found = self.resolve_any(&key, mode);
        if found.is_none() {
            tracing::trace!(key = key.display_name(), %mode, "optional extract miss");
        }
        found?.downcast::<T>().ok()
    }

    /// Whether `T` is registered in the store(s) `mode` selects.
    fn contains<T: ?Sized + 'static>(&self, mode: Mode) -> bool {
        self.contains_key(&Key::of::<T>(), mode)
    }
}

impl<R: ResolverCore + ?Sized> Resolver for R {}
