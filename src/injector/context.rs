//! Resolver context handed to builders.

use std::any::Any;
use std::sync::Arc;

use crate::key::Key;
use crate::mode::Mode;
use crate::traits::ResolverCore;

/// Context passed to builders for resolving dependencies.
///
/// ResolverContext wraps whichever container invoked the builder: the
/// [`Injector`](crate::Injector) itself, or the stores an
/// [`AsyncInjector`](crate::AsyncInjector) is holding for the current
/// operation. Builders therefore work unchanged with both containers.
///
/// # Examples
///
/// ```
/// use ferrous_inject::{Injector, Mode, Resolver};
/// use std::sync::Arc;
///
/// struct Config { port: u16 }
/// struct Server { config: Arc<Config> }
///
/// let injector = Injector::new();
/// injector.inject(Mode::Singleton, |_| Config { port: 8080 });
/// injector.inject(Mode::Factory, |resolver| {
///     // resolver is a ResolverContext over `injector`
///     Server { config: resolver.extract::<Config>(Mode::Both) }
/// });
///
/// assert_eq!(injector.extract::<Server>(Mode::Factory).config.port, 8080);
/// ```
pub struct ResolverContext<'a> {
    resolver: &'a dyn ResolverCore,
}

impl<'a> ResolverContext<'a> {
    /// Creates a new ResolverContext wrapping the given resolver.
    pub(crate) fn new<T>(resolver: &'a T) -> Self
    where
        T: ResolverCore,
    {
        Self { resolver }
    }
}

impl<'a> ResolverCore for ResolverContext<'a> {
    fn singleton_any(&self, key: &Key) -> Option<Arc<dyn Any + Send + Sync>> {
        self.resolver.singleton_any(key)
    }

    fn build_any(&self, key: &Key) -> Option<Arc<dyn Any + Send + Sync>> {
        self.resolver.build_any(key)
    }

    fn contains_key(&self, key: &Key, mode: Mode) -> bool {
        self.resolver.contains_key(key, mode)
    }

    fn resolve_any(&self, key: &Key, mode: Mode) -> Option<Arc<dyn Any + Send + Sync>> {
        self.resolver.resolve_any(key, mode)
    }
}
