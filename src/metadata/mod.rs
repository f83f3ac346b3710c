mod map;
mod resource;
mod service;

use kubernetes::Object;
use value::Value;

pub use map::{generate_map, generate_map_subset};
pub use resource::ResourceMetadataGenerator;
pub use service::ServiceMetadataGenerator;

/// Top level key of the Kubernetes specific fields in a generated document.
pub const KUBERNETES_KEY: &str = "kubernetes";

/// Extra fields applied, in order, after the common fields are generated.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldOption {
    /// Put `value` at the dotted `key`, without overwriting existing fields.
    Field { key: String, value: Value },

    /// Copy the generated `labels` and `annotations` to `<kind>.labels` and
    /// `<kind>.annotations`, with the kind lowercased.
    Metadata(String),
}

impl FieldOption {
    pub fn field(key: impl Into<String>, value: impl Into<Value>) -> Self {
        FieldOption::Field {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn metadata(kind: impl Into<String>) -> Self {
        FieldOption::Metadata(kind.into())
    }

    pub(crate) fn apply(&self, meta: &mut Value) {
        match self {
            FieldOption::Field { key, value } => {
                meta.put_safe(key, value.clone());
            }
            FieldOption::Metadata(kind) => {
                let kind = kind.to_lowercase();
                for field in ["labels", "annotations"] {
                    if let Some(value) = meta.get(field).cloned() {
                        meta.put_safe(&format!("{kind}.{field}"), value);
                    }
                }
            }
        }
    }
}

/// Generates metadata documents for one kind of object.
///
/// Every method is best effort. An object of another kind, or one that
/// can't be resolved, yields no Kubernetes fields instead of an error.
pub trait MetaGen: Send + Sync {
    /// Generates the whole document, Kubernetes fields under [`KUBERNETES_KEY`]
    /// and ECS fields at the top level.
    ///
    /// ```text
    /// {
    ///   "kubernetes": {},
    ///   "some.ecs.field": "asdf"
    /// }
    /// ```
    fn generate(&self, obj: &Object, opts: &[FieldOption]) -> Value {
        let ecs = self.generate_ecs(obj);

        let mut meta = Value::object();
        if let Some(k8s) = self.generate_k8s(obj, opts) {
            meta.insert(KUBERNETES_KEY, k8s);
        }

        meta.merged(ecs)
    }

    /// Generates the ECS fields of the object.
    fn generate_ecs(&self, obj: &Object) -> Value;

    /// Generates the fields stored under [`KUBERNETES_KEY`], `None` if the
    /// object is not of the kind this generator handles.
    fn generate_k8s(&self, obj: &Object, opts: &[FieldOption]) -> Option<Value>;

    /// Resolves the object by its store key and generates its Kubernetes
    /// fields.
    fn generate_from_name(&self, name: &str, opts: &[FieldOption]) -> Option<Value>;
}

/// Routes objects to the generator of their kind.
pub struct Generators {
    service: ServiceMetadataGenerator,
}

impl Generators {
    pub fn new(service: ServiceMetadataGenerator) -> Self {
        Self { service }
    }

    #[inline]
    pub fn service(&self) -> &ServiceMetadataGenerator {
        &self.service
    }

    /// Returns the generator for the kind of `obj`, if there is one.
    pub fn generator_for(&self, obj: &Object) -> Option<&dyn MetaGen> {
        match obj {
            Object::Service(_) => Some(&self.service),
            Object::Namespace(_) => None,
        }
    }

    /// Generates the document of `obj` with the generator of its kind.
    pub fn generate(&self, obj: &Object, opts: &[FieldOption]) -> Option<Value> {
        self.generator_for(obj)
            .map(|generator| generator.generate(obj, opts))
    }
}
