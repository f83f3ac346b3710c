mod object;
mod resource;
mod store;

pub use object::Object;
pub use resource::metadata::{ListMeta, ObjectMeta, OwnerReference};
pub use resource::namespace::Namespace;
pub use resource::service::{Service, ServicePort, ServiceSpec};
pub use resource::{ObjectList, Resource};
pub use store::{Error, MemoryStore, Store, store_key};
