//! ListStore trait - the storage abstraction for featlist servers

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::{Feature, FeatureList, FeaturePatch, ListPatch, NewFeature, NewList};

/// Storage backend for lists and their features.
///
/// Each method is one atomic unit of work against the store: either the whole
/// operation takes effect or none of it does. Implementations must enforce
/// the composite-key invariant (`(list_id, feature_id)` unique) and the
/// cascade rule (deleting a list deletes its features).
#[async_trait]
pub trait ListStore: Send + Sync {
    // =========================================================================
    // List operations
    // =========================================================================

    /// Return all lists with their features, ordered by id
    async fn list_all(&self) -> StoreResult<Vec<FeatureList>>;

    /// Return one list with its features
    async fn get_list(&self, list_id: i64) -> StoreResult<FeatureList>;

    /// Create a list together with its initial features.
    ///
    /// Fails with `DuplicateFeature` if the initial features repeat a
    /// `feature_id`; in that case nothing is persisted.
    async fn create_list(&self, new_list: NewList) -> StoreResult<FeatureList>;

    /// Apply a partial update to a list, returning the updated entity
    async fn update_list(&self, list_id: i64, patch: ListPatch) -> StoreResult<FeatureList>;

    /// Delete a list and, in the same step, all of its features
    async fn delete_list(&self, list_id: i64) -> StoreResult<()>;

    // =========================================================================
    // Feature operations
    // =========================================================================

    /// Create a feature under an existing list
    async fn add_feature(&self, list_id: i64, new_feature: NewFeature) -> StoreResult<Feature>;

    /// Apply a partial update to a feature, returning the updated entity
    async fn update_feature(
        &self,
        list_id: i64,
        feature_id: &str,
        patch: FeaturePatch,
    ) -> StoreResult<Feature>;

    /// Delete a single feature
    async fn delete_feature(&self, list_id: i64, feature_id: &str) -> StoreResult<()>;
}
