//! Featlist Client Library
//!
//! Provides a typed HTTP client for the featlist REST API.
//!
//! # Example
//!
//! ```rust,no_run
//! use featlist_client::{FeatlistClient, NewFeature, NewList};
//!
//! #[tokio::main]
//! async fn main() -> featlist_client::Result<()> {
//!     let client = FeatlistClient::new("http://localhost:8080")?;
//!
//!     // Create a list with an initial feature
//!     let list = client
//!         .create_list(&NewList::new("auth").with_feature(NewFeature::new("f1", "Login")))
//!         .await?;
//!
//!     // Read everything back
//!     let lists = client.list_lists().await?;
//!     println!("{} lists, first is {}", lists.len(), list.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module provides utilities for integration testing:
//!
//! ```rust,ignore
//! use featlist_client::testing::TestServer;
//! use featlist_api::{create_router, AppState};
//!
//! let server = TestServer::start(create_router(state)).await?;
//! let lists = server.client.list_lists().await?;
//! ```

mod client;
mod error;
pub mod testing;

pub use client::FeatlistClient;
pub use error::{FeatlistClientError, Result};

// Re-export the wire types for convenience
pub use featlist_core::{Feature, FeatureList, FeaturePatch, ListPatch, NewFeature, NewList};
