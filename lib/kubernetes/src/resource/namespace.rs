use serde::Deserialize;

use super::{ObjectMeta, Resource};

/// Namespace provides a scope for Names.
///
/// See https://kubernetes.io/docs/reference/generated/kubernetes-api/v1.31/#namespace-v1-core
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Namespace {
    pub metadata: ObjectMeta,
}

impl Resource for Namespace {
    const KIND: &'static str = "Namespace";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ObjectList;

    #[test]
    fn deserialize() {
        let input = r#"{
  "kind": "NamespaceList",
  "apiVersion": "v1",
  "metadata": {
    "resourceVersion": "1190"
  },
  "items": [
    {
      "metadata": {
        "name": "kube-system",
        "uid": "f2e0e5d4-8c5d-4a8e-9a5b-3d1c0f2e1a7b",
        "resourceVersion": "4",
        "creationTimestamp": "2020-03-16T20:44:22Z",
        "labels": {
          "kubernetes.io/metadata.name": "kube-system"
        }
      },
      "spec": {
        "finalizers": ["kubernetes"]
      },
      "status": {
        "phase": "Active"
      }
    }
  ]
}"#;

        let list = serde_json::from_str::<ObjectList<Namespace>>(input).unwrap();
        let ns = &list.items[0];
        assert_eq!(ns.metadata().name, "kube-system");
        assert!(ns.metadata.namespace.is_empty());
        assert_eq!(Namespace::KIND, "Namespace");
    }
}
