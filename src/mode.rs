//! Registration modes.

use std::fmt;

/// Which lifecycle store(s) an operation targets.
///
/// The same enum drives all three operation families:
///
/// - **inject**: `Singleton` builds once and caches, `Factory` stores the
///   builder, `Both` does both under the same key.
/// - **eject**: removes the key from the selected store(s).
/// - **extract**: `Both` looks in the singleton store first and falls back to
///   the factory store. A registered singleton always wins over a factory.
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::{Injector, Mode, Resolver};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// let injector = Injector::new();
/// let calls = Arc::new(AtomicU32::new(0));
/// let counter = calls.clone();
///
/// injector.inject(Mode::Both, move |_| counter.fetch_add(1, Ordering::SeqCst) + 1);
/// assert_eq!(calls.load(Ordering::SeqCst), 1); // singleton half built eagerly
///
/// let cached = injector.extract::<u32>(Mode::default());
/// let fresh = injector.extract::<u32>(Mode::Factory);
/// assert_eq!(*cached, 1);
/// assert_eq!(*fresh, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// One pre-built instance per type, shared by every resolution.
    Singleton,
    /// A builder per type, invoked fresh on every resolution.
    Factory,
    /// Both stores at once; resolution prefers the singleton.
    #[default]
    Both,
}

impl Mode {
    /// True for `Singleton` and `Both`.
    #[inline]
    pub fn includes_singleton(self) -> bool {
        matches!(self, Mode::Singleton | Mode::Both)
    }

    /// True for `Factory` and `Both`.
    #[inline]
    pub fn includes_factory(self) -> bool {
        matches!(self, Mode::Factory | Mode::Both)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Singleton => "singleton",
            Mode::Factory => "factory",
            Mode::Both => "both",
        })
    }
}
