//! Type keys for the singleton and factory stores.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Key for store lookup.
///
/// A key identifies a requested type by its [`TypeId`]. The type name is
/// carried along for error messages and tracing only; equality, ordering and
/// hashing look at the `TypeId` alone, so two keys for the same type are always
/// equal no matter how they were produced.
///
/// # Examples
///
/// ```rust
/// use ferrous_inject::{Key, key_of_type};
///
/// let a = key_of_type::<String>();
/// let b = Key::of::<String>();
/// assert_eq!(a, b);
/// assert_eq!(a.display_name(), "alloc::string::String");
///
/// // `Option<u32>` and `u32` are different types and never share a key
/// assert_ne!(key_of_type::<Option<u32>>(), key_of_type::<u32>());
/// ```
#[derive(Clone, Copy)]
pub struct Key {
    id: TypeId,
    name: &'static str,
}

impl Key {
    /// Builds the key for `T`.
    #[inline(always)]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The `TypeId` this key stands for.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Human-readable type name (`std::any::type_name`) for diagnostics.
    #[inline]
    pub fn display_name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.name).finish()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// TypeId-only comparison; the name is diagnostic
impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Key {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Shorthand for [`Key::of`].
#[inline(always)]
pub fn key_of_type<T: ?Sized + 'static>() -> Key {
    Key::of::<T>()
}
