use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// ListMeta describes metadata that synthetic resources must have, including lists.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListMeta {
    /// String that identifies the server's internal version of this object that can
    /// be used by clients to determine when objects have changed.
    #[serde(default, rename = "resourceVersion")]
    pub resource_version: String,
}

/// OwnerReference contains enough information to let you identify an owning object.
///
/// See https://kubernetes.io/docs/reference/generated/kubernetes-api/v1.31/#ownerreference-v1-meta
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OwnerReference {
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Kind of the referent, e.g. `ReplicaSet`.
    pub kind: String,

    /// Name of the referent.
    pub name: String,

    /// UID of the referent.
    pub uid: String,

    /// If true, this reference points to the managing controller.
    #[serde(default)]
    pub controller: Option<bool>,
}

/// ObjectMeta is metadata that all persisted resources must have, which
/// includes all objects users must create.
///
/// See https://kubernetes.io/docs/reference/generated/kubernetes-api/v1.31/#objectmeta-v1-meta
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ObjectMeta {
    /// Name must be unique within a namespace.
    pub name: String,

    /// Namespace defines the space within which each name must be unique. An
    /// empty namespace is equivalent to the "default" namespace, but "default"
    /// is the canonical representation. Cluster scoped objects have no namespace.
    #[serde(default)]
    pub namespace: String,

    /// UID is the unique in time and space value for this object.
    #[serde(default)]
    pub uid: String,

    #[serde(default, rename = "resourceVersion")]
    pub resource_version: String,

    /// CreationTimestamp is a timestamp representing the server time when this
    /// object was created.
    #[serde(default, rename = "creationTimestamp")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    /// Map of string keys and values that can be used to organize and categorize
    /// (scope and select) objects.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    /// Annotations is an unstructured key value map stored with a resource that
    /// may be set by external tools to store and retrieve arbitrary metadata.
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,

    /// List of objects depended by this object.
    #[serde(default, rename = "ownerReferences")]
    pub owner_references: Vec<OwnerReference>,
}

impl ObjectMeta {
    /// Returns the owner reference of the managing controller, if any.
    pub fn controller(&self) -> Option<&OwnerReference> {
        self.owner_references
            .iter()
            .find(|owner| owner.controller.unwrap_or_default())
    }
}
