use std::collections::BTreeMap;
use std::sync::Arc;

use kubernetes::Object;
use value::Value;

use super::map::{generate_map, generate_map_subset};
use super::{FieldOption, MetaGen};
use crate::config::Config;

/// Generates the fields every kind of object shares. Kind specific
/// generators wrap it and add their own fields on top.
pub struct ResourceMetadataGenerator {
    config: Config,
    namespace: Option<Arc<dyn MetaGen>>,
}

impl ResourceMetadataGenerator {
    /// `namespace` is used to add metadata of the namespace an object lives in.
    pub fn new(config: Config, namespace: Option<Arc<dyn MetaGen>>) -> Self {
        Self { config, namespace }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// ECS fields, which only describe the cluster, so the object is not
    /// inspected at all.
    pub fn generate_ecs(&self, _obj: &Object) -> Value {
        let mut ecs = Value::object();

        if let Some(name) = &self.config.cluster.name {
            ecs.insert("orchestrator.cluster.name", name);
        }
        if let Some(url) = &self.config.cluster.url {
            ecs.insert("orchestrator.cluster.url", url);
        }

        ecs
    }

    /// Generates the common Kubernetes fields of `obj`, with the object's own
    /// fields under the lowercased `kind`.
    pub fn generate_k8s(&self, kind: &str, obj: &Object, opts: &[FieldOption]) -> Value {
        let meta = obj.metadata();

        let mut fields = BTreeMap::from([
            ("name".to_string(), Value::from(&meta.name)),
            ("uid".to_string(), Value::from(&meta.uid)),
        ]);
        if let Some(ts) = meta.creation_timestamp {
            fields.insert("creation_timestamp".to_string(), ts.into());
        }

        let mut out = Value::Object(BTreeMap::from([(
            kind.to_lowercase(),
            Value::Object(fields),
        )]));

        if !meta.namespace.is_empty() {
            out.put_safe("namespace", &meta.namespace);
        }

        if let Some(owner) = meta.controller() {
            match owner.kind.as_str() {
                "Deployment" | "ReplicaSet" | "StatefulSet" | "DaemonSet" | "Job" | "CronJob" => {
                    out.put_safe(&format!("{}.name", owner.kind.to_lowercase()), &owner.name);
                }
                _ => {}
            }
        }

        let labels = self.labels(&meta.labels);
        if !labels.is_empty() {
            out.put_safe("labels", labels);
        }

        let annotations = generate_map_subset(
            &meta.annotations,
            &self.config.include_annotations,
            self.config.annotations.dedot,
        );
        if !annotations.is_empty() {
            out.put_safe("annotations", annotations);
        }

        if let Some(namespace) = &self.namespace {
            if !meta.namespace.is_empty() {
                if let Some(namespace_meta) = namespace.generate_from_name(&meta.namespace, &[]) {
                    out.deep_update(namespace_meta);
                }
            }
        }

        for opt in opts {
            opt.apply(&mut out);
        }

        out
    }

    fn labels(&self, input: &BTreeMap<String, String>) -> Value {
        let dedot = self.config.labels.dedot;
        let mut labels = if self.config.include_labels.is_empty() {
            generate_map(input, dedot)
        } else {
            generate_map_subset(input, &self.config.include_labels, dedot)
        };

        for key in &self.config.exclude_labels {
            if dedot {
                if let Value::Object(map) = &mut labels {
                    map.remove(&value::dedot(key));
                }
            } else {
                labels.remove(key);
            }
        }

        labels
    }
}
