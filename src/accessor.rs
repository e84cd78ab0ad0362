//! Typed accessors over the ambient injector.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::ambient::ambient;
use crate::injector::Injector;
use crate::mode::Mode;
use crate::traits::Resolver;

fn current_injector<T: ?Sized>() -> Arc<Injector> {
    ambient().resolve().unwrap_or_else(|| {
        panic!(
            "No ambient injector registered while resolving {}",
            std::any::type_name::<T>()
        )
    })
}

/// Handle that pulls `T` from the ambient [`Injector`] in `Both` mode.
///
/// Nothing is cached: every [`get`](Self::get) asks [`ambient()`] for the
/// current injector, so swapping the registered injector is visible on the
/// next access.
///
/// # Examples
///
/// ```
/// use ferrous_inject::{ambient, Injected, Injector, Mode};
/// use std::sync::Arc;
///
/// struct Clock { offset: i64 }
///
/// struct Scheduler {
///     clock: Injected<Clock>,
/// }
///
/// let injector = Arc::new(Injector::new());
/// injector.inject(Mode::Singleton, |_| Clock { offset: 5 });
/// ambient().register(injector);
///
/// let scheduler = Scheduler { clock: Injected::new() };
/// assert_eq!(scheduler.clock.get().offset, 5);
/// # ambient().reset();
/// ```
pub struct Injected<T: ?Sized> {
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<T: Send + Sync + 'static> Injected<T> {
    /// Creates the handle. Does not touch the registry.
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }

    /// Resolves `T` from the current ambient injector.
    ///
    /// # Panics
    ///
    /// Panics if no injector is registered or `T` is not registered in it.
    pub fn get(&self) -> Arc<T> {
        current_injector::<T>().extract::<T>(Mode::Both)
    }
}

/// Like [`Injected`], but a missing registration yields `None`.
///
/// The lookup is keyed by `T`, so a value registered as `T` is found without
/// registering an `Option<T>`.
pub struct InjectedOptional<T: ?Sized> {
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<T: Send + Sync + 'static> InjectedOptional<T> {
    /// Creates the handle. Does not touch the registry.
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }

    /// Resolves `T` from the current ambient injector, if registered.
    ///
    /// # Panics
    ///
    /// Panics if no injector is registered at all.
    pub fn get(&self) -> Option<Arc<T>> {
        current_injector::<T>().extract_optional::<T>(Mode::Both)
    }
}

macro_rules! accessor_impls {
    ($name:ident) => {
        impl<T: Send + Sync + 'static> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized> Copy for $name<T> {}

        impl<T: ?Sized> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), std::any::type_name::<T>())
            }
        }
    };
}

accessor_impls!(Injected);
accessor_impls!(InjectedOptional);
