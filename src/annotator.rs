//! Annotates telemetry records with Kubernetes metadata.

use kubernetes::Object;
use value::Value;

use crate::metadata::{FieldOption, Generators, KUBERNETES_KEY, MetaGen};

/// Merges generated metadata into records, a log event or the tags of a
/// metric represented as a [`Value::Object`].
pub struct Annotator {
    generators: Generators,
}

impl Annotator {
    pub fn new(generators: Generators) -> Self {
        Self { generators }
    }

    /// Annotates the record with the metadata of `obj`.
    ///
    /// Returns false, and leaves the record untouched, if there is no
    /// generator for the kind of `obj`.
    pub fn annotate(&self, record: &mut Value, obj: &Object, opts: &[FieldOption]) -> bool {
        match self.generators.generate(obj, opts) {
            Some(meta) => {
                merge_into(record, meta);
                true
            }
            None => false,
        }
    }

    /// Annotates the record with the Kubernetes fields of the Service stored
    /// under `key`, e.g. `default/frontend`.
    ///
    /// Returns false, and leaves the record untouched, if the Service cannot
    /// be resolved.
    pub fn annotate_service(&self, record: &mut Value, key: &str, opts: &[FieldOption]) -> bool {
        match self.generators.service().generate_from_name(key, opts) {
            Some(k8s) => {
                let mut meta = Value::object();
                meta.insert(KUBERNETES_KEY, k8s);
                merge_into(record, meta);
                true
            }
            None => false,
        }
    }
}

fn merge_into(record: &mut Value, meta: Value) {
    let base = std::mem::take(record);
    *record = base.merged(meta);
}
