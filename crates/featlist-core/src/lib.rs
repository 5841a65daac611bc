//! featlist-core - Core types and the storage trait for featlist servers
//!
//! This crate provides the domain model and the `ListStore` abstraction that
//! allows different storage backends (in-memory, or a durable store) to serve
//! the featlist API.

pub mod error;
pub mod model;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use model::{Feature, FeatureList, FeaturePatch, ListPatch, NewFeature, NewList};
pub use store::ListStore;
