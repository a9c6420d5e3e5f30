//! Thread-safe handle over a [`StyleRegistry`].
//!
//! Registration takes the write lock briefly; readers take a [`snapshot`](SharedStyleRegistry::snapshot) (a cheap
//! clone of the copy-on-write registry) and query it without holding any lock. [`StyleRegistry::register`]
//! validates a whole batch before appending it, so a writer that panics mid-batch leaves the list as it was and a
//! poisoned lock is recovered rather than propagated.

use std::sync::{PoisonError, RwLock};

use stylesniffer_core::StyleRef;

use crate::registry::StyleRegistry;

/// A [`StyleRegistry`] shared between threads.
#[derive(Debug, Default)]
pub struct SharedStyleRegistry {
    inner: RwLock<StyleRegistry>,
}

impl SharedStyleRegistry {
    pub fn new(registry: StyleRegistry) -> Self {
        Self {
            inner: RwLock::new(registry),
        }
    }

    /// Append styles; see [`StyleRegistry::register`].
    ///
    /// ## Returns
    /// - The number of styles actually registered.
    pub fn register<I>(&self, styles: I) -> usize
    where
        I: IntoIterator<Item = StyleRef>,
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.register(styles)
    }

    /// Immutable view of the registry as of now. Later registrations don't affect it.
    pub fn snapshot(&self) -> StyleRegistry {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl From<StyleRegistry> for SharedStyleRegistry {
    fn from(registry: StyleRegistry) -> Self {
        Self::new(registry)
    }
}
