//! In-memory list store
//!
//! The reference storage backend: all data lives in process memory behind a
//! single lock and is gone on restart. Each trait method holds the lock for
//! its whole critical section, so an operation either fully applies or
//! leaves the store untouched.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;

use featlist_core::{
    Feature, FeatureList, FeaturePatch, ListPatch, ListStore, NewFeature, NewList, StoreError,
    StoreResult,
};

/// Stored form of a feature; the owning list id is implied by its location
#[derive(Debug, Clone)]
struct FeatureRow {
    feature_id: String,
    feature_name: String,
    remarks: String,
}

/// Stored form of a list with its child rows
#[derive(Debug, Clone)]
struct ListRow {
    name: String,
    remarks: String,
    /// Child features in insertion order
    features: Vec<FeatureRow>,
}

/// Mutable store state, guarded as one unit
#[derive(Debug)]
struct StoreInner {
    /// Next list id to hand out; ids are never reused
    next_id: i64,
    /// Lists keyed by id; BTreeMap iteration yields them in id order
    lists: BTreeMap<i64, ListRow>,
}

/// In-memory implementation of [`ListStore`]
///
/// Concurrent requests serialize on the interior lock, giving each store
/// call a consistent snapshot. Reads return deep clones; no references
/// escape the lock.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

impl MemoryStore {
    /// Create an empty store; the first list created gets id 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                next_id: 1,
                lists: BTreeMap::new(),
            }),
        }
    }

    /// Number of lists currently stored
    pub fn len(&self) -> usize {
        self.inner.read().lists.len()
    }

    /// Check if the store holds no lists
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn to_feature(list_id: i64, row: &FeatureRow) -> Feature {
    Feature {
        list_id,
        feature_id: row.feature_id.clone(),
        feature_name: row.feature_name.clone(),
        remarks: row.remarks.clone(),
    }
}

fn to_list(list_id: i64, row: &ListRow) -> FeatureList {
    FeatureList {
        id: list_id,
        name: row.name.clone(),
        remarks: row.remarks.clone(),
        features: row
            .features
            .iter()
            .map(|f| to_feature(list_id, f))
            .collect(),
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn list_all(&self) -> StoreResult<Vec<FeatureList>> {
        let inner = self.inner.read();
        Ok(inner
            .lists
            .iter()
            .map(|(&id, row)| to_list(id, row))
            .collect())
    }

    async fn get_list(&self, list_id: i64) -> StoreResult<FeatureList> {
        let inner = self.inner.read();
        inner
            .lists
            .get(&list_id)
            .map(|row| to_list(list_id, row))
            .ok_or(StoreError::ListNotFound(list_id))
    }

    async fn create_list(&self, new_list: NewList) -> StoreResult<FeatureList> {
        let mut inner = self.inner.write();
        let list_id = inner.next_id;

        // Validate the initial features before inserting anything, so a bad
        // request leaves no trace
        let mut seen: HashSet<&str> = HashSet::new();
        for feature in &new_list.features {
            if !seen.insert(feature.feature_id.as_str()) {
                return Err(StoreError::DuplicateFeature {
                    list_id,
                    feature_id: feature.feature_id.clone(),
                });
            }
        }

        let row = ListRow {
            name: new_list.name,
            remarks: new_list.remarks,
            features: new_list
                .features
                .into_iter()
                .map(|f| FeatureRow {
                    feature_id: f.feature_id,
                    feature_name: f.feature_name,
                    remarks: f.remarks,
                })
                .collect(),
        };
        let created = to_list(list_id, &row);

        inner.next_id += 1;
        inner.lists.insert(list_id, row);
        Ok(created)
    }

    async fn update_list(&self, list_id: i64, patch: ListPatch) -> StoreResult<FeatureList> {
        let mut inner = self.inner.write();
        let row = inner
            .lists
            .get_mut(&list_id)
            .ok_or(StoreError::ListNotFound(list_id))?;

        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = remarks;
        }
        Ok(to_list(list_id, row))
    }

    async fn delete_list(&self, list_id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write();
        // Removing the row drops its child features with it (cascade)
        inner
            .lists
            .remove(&list_id)
            .map(|_| ())
            .ok_or(StoreError::ListNotFound(list_id))
    }

    async fn add_feature(&self, list_id: i64, new_feature: NewFeature) -> StoreResult<Feature> {
        let mut inner = self.inner.write();
        let row = inner
            .lists
            .get_mut(&list_id)
            .ok_or(StoreError::ListNotFound(list_id))?;

        if row
            .features
            .iter()
            .any(|f| f.feature_id == new_feature.feature_id)
        {
            return Err(StoreError::DuplicateFeature {
                list_id,
                feature_id: new_feature.feature_id,
            });
        }

        let feature = FeatureRow {
            feature_id: new_feature.feature_id,
            feature_name: new_feature.feature_name,
            remarks: new_feature.remarks,
        };
        let created = to_feature(list_id, &feature);
        row.features.push(feature);
        Ok(created)
    }

    async fn update_feature(
        &self,
        list_id: i64,
        feature_id: &str,
        patch: FeaturePatch,
    ) -> StoreResult<Feature> {
        let mut inner = self.inner.write();
        // An absent list means the composite key cannot exist either
        let missing = || StoreError::FeatureNotFound {
            list_id,
            feature_id: feature_id.to_string(),
        };
        let row = inner.lists.get_mut(&list_id).ok_or_else(missing)?;
        let feature = row
            .features
            .iter_mut()
            .find(|f| f.feature_id == feature_id)
            .ok_or_else(missing)?;

        if let Some(feature_name) = patch.feature_name {
            feature.feature_name = feature_name;
        }
        if let Some(remarks) = patch.remarks {
            feature.remarks = remarks;
        }
        Ok(to_feature(list_id, feature))
    }

    async fn delete_feature(&self, list_id: i64, feature_id: &str) -> StoreResult<()> {
        let mut inner = self.inner.write();
        let missing = || StoreError::FeatureNotFound {
            list_id,
            feature_id: feature_id.to_string(),
        };
        let row = inner.lists.get_mut(&list_id).ok_or_else(missing)?;
        let pos = row
            .features
            .iter()
            .position(|f| f.feature_id == feature_id)
            .ok_or_else(missing)?;
        row.features.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_list() -> NewList {
        NewList::new("auth")
            .with_remarks("login flows")
            .with_feature(NewFeature::new("f1", "Login"))
            .with_feature(NewFeature::new("f2", "Logout").with_remarks("incl. token revoke"))
    }

    #[tokio::test]
    async fn test_create_and_get_roundtrip() {
        let store = MemoryStore::new();

        let created = store.create_list(sample_list()).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = store.get_list(1).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "auth");
        assert_eq!(fetched.remarks, "login flows");
        assert_eq!(fetched.features.len(), 2);
        assert_eq!(fetched.features[0].list_id, 1);
        assert_eq!(fetched.features[0].feature_id, "f1");
        assert_eq!(fetched.features[1].remarks, "incl. token revoke");
    }

    #[tokio::test]
    async fn test_list_all_ordered_by_id() {
        let store = MemoryStore::new();
        store.create_list(NewList::new("one")).await.unwrap();
        store.create_list(NewList::new("two")).await.unwrap();
        store.create_list(NewList::new("three")).await.unwrap();

        let lists = store.list_all().await.unwrap();
        let ids: Vec<i64> = lists.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(lists[2].name, "three");
    }

    #[tokio::test]
    async fn test_get_missing_list() {
        let store = MemoryStore::new();
        let err = store.get_list(42).await.unwrap_err();
        assert!(matches!(err, StoreError::ListNotFound(42)));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_initial_features() {
        let store = MemoryStore::new();
        let new_list = NewList::new("dup")
            .with_feature(NewFeature::new("f1", "First"))
            .with_feature(NewFeature::new("f1", "Second"));

        let err = store.create_list(new_list).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateFeature { ref feature_id, .. } if feature_id == "f1"
        ));

        // Nothing persisted
        assert!(store.is_empty());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_list_partial() {
        let store = MemoryStore::new();
        store.create_list(sample_list()).await.unwrap();

        let updated = store
            .update_list(
                1,
                ListPatch {
                    remarks: Some("revised".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "auth");
        assert_eq!(updated.remarks, "revised");

        let updated = store
            .update_list(
                1,
                ListPatch {
                    name: Some("authn".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "authn");
        assert_eq!(updated.remarks, "revised");
        // Features untouched by list updates
        assert_eq!(updated.features.len(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_list() {
        let store = MemoryStore::new();
        let err = store.update_list(7, ListPatch::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::ListNotFound(7)));
    }

    #[tokio::test]
    async fn test_delete_list_cascades() {
        let store = MemoryStore::new();
        store.create_list(sample_list()).await.unwrap();

        store.delete_list(1).await.unwrap();

        assert!(matches!(
            store.get_list(1).await.unwrap_err(),
            StoreError::ListNotFound(1)
        ));
        // Children went with the parent
        assert!(matches!(
            store.delete_feature(1, "f1").await.unwrap_err(),
            StoreError::FeatureNotFound { .. }
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_list() {
        let store = MemoryStore::new();
        let err = store.delete_list(9).await.unwrap_err();
        assert!(matches!(err, StoreError::ListNotFound(9)));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = MemoryStore::new();
        store.create_list(NewList::new("a")).await.unwrap();
        store.create_list(NewList::new("b")).await.unwrap();

        store.delete_list(1).await.unwrap();

        let third = store.create_list(NewList::new("c")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_add_feature_appends_in_order() {
        let store = MemoryStore::new();
        store.create_list(sample_list()).await.unwrap();

        let added = store
            .add_feature(1, NewFeature::new("f3", "Password reset"))
            .await
            .unwrap();
        assert_eq!(added.list_id, 1);
        assert_eq!(added.feature_id, "f3");
        assert_eq!(added.remarks, "");

        let list = store.get_list(1).await.unwrap();
        let ids: Vec<&str> = list.features.iter().map(|f| f.feature_id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f2", "f3"]);
    }

    #[tokio::test]
    async fn test_add_feature_missing_list() {
        let store = MemoryStore::new();
        let err = store
            .add_feature(5, NewFeature::new("f1", "Login"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ListNotFound(5)));
    }

    #[tokio::test]
    async fn test_add_duplicate_feature() {
        let store = MemoryStore::new();
        store.create_list(sample_list()).await.unwrap();

        let err = store
            .add_feature(1, NewFeature::new("f1", "Shadow login"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateFeature { list_id: 1, ref feature_id } if feature_id == "f1"
        ));

        // Original feature left untouched
        let list = store.get_list(1).await.unwrap();
        assert_eq!(list.features.len(), 2);
        assert_eq!(list.features[0].feature_name, "Login");
    }

    #[tokio::test]
    async fn test_update_feature_partial() {
        let store = MemoryStore::new();
        store.create_list(sample_list()).await.unwrap();

        let updated = store
            .update_feature(
                1,
                "f1",
                FeaturePatch {
                    remarks: Some("SSO only".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.feature_name, "Login");
        assert_eq!(updated.remarks, "SSO only");

        let updated = store
            .update_feature(
                1,
                "f1",
                FeaturePatch {
                    feature_name: Some("Sign in".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.feature_name, "Sign in");
        assert_eq!(updated.remarks, "SSO only");
    }

    #[tokio::test]
    async fn test_update_feature_missing() {
        let store = MemoryStore::new();
        store.create_list(NewList::new("empty")).await.unwrap();

        let err = store
            .update_feature(1, "nope", FeaturePatch::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::FeatureNotFound { list_id: 1, ref feature_id } if feature_id == "nope"
        ));

        // Same answer when the whole list is absent
        let err = store
            .update_feature(99, "nope", FeaturePatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::FeatureNotFound { list_id: 99, .. }));
    }

    #[tokio::test]
    async fn test_delete_feature_leaves_siblings() {
        let store = MemoryStore::new();
        let new_list = sample_list().with_feature(NewFeature::new("f3", "Password reset"));
        store.create_list(new_list).await.unwrap();

        store.delete_feature(1, "f2").await.unwrap();

        let list = store.get_list(1).await.unwrap();
        let ids: Vec<&str> = list.features.iter().map(|f| f.feature_id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f3"]);
    }

    #[tokio::test]
    async fn test_delete_feature_missing() {
        let store = MemoryStore::new();
        store.create_list(NewList::new("empty")).await.unwrap();

        let err = store.delete_feature(1, "ghost").await.unwrap_err();
        assert!(matches!(err, StoreError::FeatureNotFound { .. }));
    }
}
