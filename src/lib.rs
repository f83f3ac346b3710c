//! Metadata generators for Kubernetes objects.
//!
//! A generator turns a watched object into a document that can be attached
//! to logs and metrics, with the Kubernetes specific fields under
//! `kubernetes` and ECS fields at the top level.

pub mod annotator;
pub mod config;
pub mod metadata;

pub use annotator::Annotator;
pub use config::Config;
pub use metadata::{
    FieldOption, Generators, MetaGen, ResourceMetadataGenerator, ServiceMetadataGenerator,
};
