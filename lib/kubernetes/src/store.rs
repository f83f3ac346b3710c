use std::sync::Arc;

use dashmap::DashMap;

use crate::{Object, ObjectMeta};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("store has not been synced yet")]
    NotSynced,

    #[error("store lookup failed, {0}")]
    Lookup(String),
}

/// A keyed index of watched objects.
///
/// Implementations must allow concurrent reads while the watcher that feeds
/// them keeps writing.
pub trait Store: Send + Sync {
    /// Returns the object stored under `key`, `Ok(None)` if there is no such
    /// object.
    fn get_by_key(&self, key: &str) -> Result<Option<Object>, Error>;
}

/// Returns the key an object is stored under, `namespace/name` for namespaced
/// objects and `name` for cluster scoped ones.
pub fn store_key(meta: &ObjectMeta) -> String {
    if meta.namespace.is_empty() {
        meta.name.clone()
    } else {
        format!("{}/{}", meta.namespace, meta.name)
    }
}

/// In-memory [`Store`], cloning it yields a handle to the same index.
#[derive(Clone, Default)]
pub struct MemoryStore {
    cache: Arc<DashMap<String, Object>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the object under its [`store_key`].
    pub fn apply(&self, obj: impl Into<Object>) {
        let obj = obj.into();
        let key = store_key(obj.metadata());

        self.cache.insert(key, obj);
    }

    pub fn delete(&self, key: &str) -> Option<Object> {
        self.cache.remove(key).map(|(_key, obj)| obj)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Store for MemoryStore {
    fn get_by_key(&self, key: &str) -> Result<Option<Object>, Error> {
        Ok(self.cache.get(key).map(|entry| entry.value().clone()))
    }
}
