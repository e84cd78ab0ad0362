//! Injector configuration.

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Per-injector settings.
///
/// The name tags every `tracing` event an injector emits, which is how two
/// injectors living in one process are told apart in logs.
///
/// # Examples
///
/// ```
/// use ferrous_inject::{Injector, InjectorConfig};
///
/// let injector = Injector::with_config(InjectorConfig::default().with_name("billing"));
/// assert_eq!(injector.config().name, "billing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct InjectorConfig {
    /// Label attached to log events.
    pub name: String,
}

impl InjectorConfig {
    /// Replaces the label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            name: "injector".to_string(),
        }
    }
}
