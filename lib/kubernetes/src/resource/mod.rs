pub mod metadata;
pub mod namespace;
pub mod service;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use metadata::{ListMeta, ObjectMeta};

/// An accessor trait for a kubernetes Resource.
pub trait Resource: DeserializeOwned {
    /// The kind of the resource, e.g. `Service`.
    const KIND: &'static str;

    /// Standard object's metadata.
    fn metadata(&self) -> &ObjectMeta;
}

/// A generic Kubernetes object list
///
/// This is used instead of a full struct for `ServiceList`, `NamespaceList`, etc.
/// and is generally produced from list queries on a [`Resource`].
#[derive(Deserialize)]
pub struct ObjectList<T> {
    /// ListMeta - only really used for its `resourceVersion`
    pub metadata: ListMeta,

    /// These items we are actually interested in.
    pub items: Vec<T>,
}
