use std::sync::Arc;

use crate::resource::Resource;
use crate::{Namespace, ObjectMeta, Service};

/// Every kind of object that can be watched and cached.
///
/// The set is closed, so code routing on the kind of an object can match
/// exhaustively instead of probing with downcasts.
#[derive(Clone, Debug)]
pub enum Object {
    Service(Arc<Service>),
    Namespace(Arc<Namespace>),
}

impl Object {
    /// Standard object's metadata.
    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Object::Service(svc) => svc.metadata(),
            Object::Namespace(ns) => ns.metadata(),
        }
    }

    /// The kind of the object, e.g. `Service`
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Service(_) => Service::KIND,
            Object::Namespace(_) => Namespace::KIND,
        }
    }

    #[inline]
    pub fn as_service(&self) -> Option<&Service> {
        match self {
            Object::Service(svc) => Some(svc.as_ref()),
            _ => None,
        }
    }
}

impl From<Service> for Object {
    fn from(svc: Service) -> Self {
        Object::Service(Arc::new(svc))
    }
}

impl From<Namespace> for Object {
    fn from(ns: Namespace) -> Self {
        Object::Namespace(Arc::new(ns))
    }
}
