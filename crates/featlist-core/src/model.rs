//! Domain and wire models for lists and features
//!
//! These types are shared between the server and the client: the serialized
//! field names are the wire contract of the REST API.

use serde::{Deserialize, Serialize};

/// A named list of features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureList {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form remarks (empty string when unset)
    #[serde(default)]
    pub remarks: String,
    /// Owned features, in insertion order
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single feature within a list
///
/// Identified by the composite key `(list_id, feature_id)`; the `feature_id`
/// is caller-supplied and unique only within its owning list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Owning list id
    pub list_id: i64,
    /// Caller-supplied identifier, unique within the list
    pub feature_id: String,
    /// Display name
    pub feature_name: String,
    /// Free-form remarks (empty string when unset)
    #[serde(default)]
    pub remarks: String,
}

/// Input for creating a list, optionally with initial features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewList {
    pub name: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub features: Vec<NewFeature>,
}

impl NewList {
    /// Create a new list input with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remarks: String::new(),
            features: Vec::new(),
        }
    }

    /// Set the remarks
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Append an initial feature
    pub fn with_feature(mut self, feature: NewFeature) -> Self {
        self.features.push(feature);
        self
    }
}

/// Input for creating a feature under a list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewFeature {
    pub feature_id: String,
    pub feature_name: String,
    #[serde(default)]
    pub remarks: String,
}

impl NewFeature {
    /// Create a new feature input with the given composite-key id and name
    pub fn new(feature_id: impl Into<String>, feature_name: impl Into<String>) -> Self {
        Self {
            feature_id: feature_id.into(),
            feature_name: feature_name.into(),
            remarks: String::new(),
        }
    }

    /// Set the remarks
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }
}

/// Partial update for a list: `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Partial update for a feature: `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_wire_format() {
        let list = FeatureList {
            id: 3,
            name: "auth".to_string(),
            remarks: "login flows".to_string(),
            features: vec![Feature {
                list_id: 3,
                feature_id: "f1".to_string(),
                feature_name: "Login".to_string(),
                remarks: String::new(),
            }],
        };

        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "auth",
                "remarks": "login flows",
                "features": [{
                    "list_id": 3,
                    "feature_id": "f1",
                    "feature_name": "Login",
                    "remarks": ""
                }]
            })
        );
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = ListPatch {
            remarks: Some("updated".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({"remarks": "updated"}));
    }

    #[test]
    fn test_new_list_builder() {
        let new_list = NewList::new("payments")
            .with_remarks("checkout work")
            .with_feature(NewFeature::new("f1", "Card entry"))
            .with_feature(NewFeature::new("f2", "Refunds").with_remarks("phase 2"));

        assert_eq!(new_list.name, "payments");
        assert_eq!(new_list.features.len(), 2);
        assert_eq!(new_list.features[1].remarks, "phase 2");
    }

    #[test]
    fn test_new_list_defaults_on_deserialize() {
        let new_list: NewList = serde_json::from_value(json!({"name": "bare"})).unwrap();
        assert_eq!(new_list.remarks, "");
        assert!(new_list.features.is_empty());
    }
}
