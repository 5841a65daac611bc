//! List handlers: collection listing plus CRUD on single lists

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use featlist_core::{FeatureList, ListPatch, NewFeature, NewList};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Request to create a list, optionally with initial features
#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    /// Required; absence is rejected before the store is touched
    pub name: Option<String>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub features: Vec<NewFeatureRequest>,
}

/// Feature payload inside create and add requests
#[derive(Debug, Deserialize)]
pub struct NewFeatureRequest {
    pub feature_id: Option<String>,
    pub feature_name: Option<String>,
    pub remarks: Option<String>,
}

impl NewFeatureRequest {
    /// Validate required fields, defaulting remarks to an empty string
    pub(crate) fn into_new_feature(self) -> Result<NewFeature, ApiError> {
        let feature_id = self
            .feature_id
            .ok_or_else(|| ApiError::BadRequest("feature_id is required".to_string()))?;
        let feature_name = self
            .feature_name
            .ok_or_else(|| ApiError::BadRequest("feature_name is required".to_string()))?;
        Ok(NewFeature {
            feature_id,
            feature_name,
            remarks: self.remarks.unwrap_or_default(),
        })
    }
}

/// Request to update a list; absent fields stay unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateListRequest {
    pub name: Option<String>,
    pub remarks: Option<String>,
}

/// GET /api/lists
/// List all lists with their features
pub async fn list_lists(State(state): State<AppState>) -> Result<Json<Vec<FeatureList>>, ApiError> {
    let lists = state.store().list_all().await.map_err(ApiError::from)?;
    Ok(Json(lists))
}

/// GET /api/lists/{list_id}
/// Get a single list with its features
pub async fn get_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
) -> Result<Json<FeatureList>, ApiError> {
    let list = state
        .store()
        .get_list(list_id)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(list))
}

/// POST /api/lists
/// Create a list together with any initial features
pub async fn create_list(
    State(state): State<AppState>,
    Json(request): Json<CreateListRequest>,
) -> Result<(StatusCode, Json<FeatureList>), ApiError> {
    let name = request
        .name
        .ok_or_else(|| ApiError::BadRequest("name is required".to_string()))?;

    let mut features = Vec::with_capacity(request.features.len());
    for feature in request.features {
        features.push(feature.into_new_feature()?);
    }

    let new_list = NewList {
        name,
        remarks: request.remarks.unwrap_or_default(),
        features,
    };

    let list = state
        .store()
        .create_list(new_list)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(
        list_id = list.id,
        name = %list.name,
        features = list.features.len(),
        "List created"
    );

    Ok((StatusCode::CREATED, Json(list)))
}

/// PUT /api/lists/{list_id}
/// Partially update a list; absent fields keep their values
pub async fn update_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    Json(request): Json<UpdateListRequest>,
) -> Result<Json<FeatureList>, ApiError> {
    let patch = ListPatch {
        name: request.name,
        remarks: request.remarks,
    };

    let list = state
        .store()
        .update_list(list_id, patch)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(list_id, "List updated");

    Ok(Json(list))
}

/// DELETE /api/lists/{list_id}
/// Delete a list and all of its features
pub async fn delete_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .store()
        .delete_list(list_id)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(list_id, "List deleted");

    Ok(StatusCode::NO_CONTENT)
}
