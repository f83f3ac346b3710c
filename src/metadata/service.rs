use std::sync::Arc;

use kubernetes::{Object, Resource, Service, Store};
use tracing::{debug, warn};
use value::Value;

use super::map::generate_map;
use super::resource::ResourceMetadataGenerator;
use super::{FieldOption, MetaGen};
use crate::config::Config;

/// Generates metadata for Services, the common resource fields plus the
/// `selectors` of the Service.
pub struct ServiceMetadataGenerator {
    resource: ResourceMetadataGenerator,
    store: Option<Arc<dyn Store>>,
}

impl ServiceMetadataGenerator {
    /// Without a `store`, [`MetaGen::generate_from_name`] always returns `None`.
    pub fn new(
        config: Config,
        store: Option<Arc<dyn Store>>,
        namespace: Option<Arc<dyn MetaGen>>,
    ) -> Self {
        Self {
            resource: ResourceMetadataGenerator::new(config, namespace),
            store,
        }
    }

    fn generate_service(&self, obj: &Object, svc: &Service, opts: &[FieldOption]) -> Value {
        let mut out = self.resource.generate_k8s(Service::KIND, obj, opts);

        if svc.spec.selector.is_empty() {
            return out;
        }

        let selectors = generate_map(&svc.spec.selector, self.resource.config().labels.dedot);
        if !selectors.is_empty() {
            out.put_safe("selectors", selectors);
        }

        out
    }
}

impl MetaGen for ServiceMetadataGenerator {
    fn generate_ecs(&self, obj: &Object) -> Value {
        self.resource.generate_ecs(obj)
    }

    fn generate_k8s(&self, obj: &Object, opts: &[FieldOption]) -> Option<Value> {
        match obj {
            Object::Service(svc) => Some(self.generate_service(obj, svc, opts)),
            _ => None,
        }
    }

    fn generate_from_name(&self, name: &str, opts: &[FieldOption]) -> Option<Value> {
        let store = self.store.as_ref()?;

        match store.get_by_key(name) {
            Ok(Some(obj)) => {
                if obj.as_service().is_none() {
                    debug!(
                        message = "Object in the service store is not a service",
                        key = name,
                        kind = obj.kind(),
                    );
                    return None;
                }

                self.generate_k8s(&obj, opts)
            }
            Ok(None) => None,
            Err(err) => {
                warn!(
                    message = "Failed to look up service",
                    key = name,
                    %err,
                    internal_log_rate_limit = true
                );
                None
            }
        }
    }
}
