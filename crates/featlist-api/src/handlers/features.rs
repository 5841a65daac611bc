//! Feature handlers: create, update, and delete features within a list

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use featlist_core::{Feature, FeaturePatch};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::lists::NewFeatureRequest;
use crate::state::AppState;

/// Request to update a feature; absent fields stay unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateFeatureRequest {
    pub feature_name: Option<String>,
    pub remarks: Option<String>,
}

/// POST /api/lists/{list_id}/features
/// Add a feature to an existing list
pub async fn add_feature(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    Json(request): Json<NewFeatureRequest>,
) -> Result<(StatusCode, Json<Feature>), ApiError> {
    let new_feature = request.into_new_feature()?;

    let feature = state
        .store()
        .add_feature(list_id, new_feature)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(list_id, feature_id = %feature.feature_id, "Feature added");

    Ok((StatusCode::CREATED, Json(feature)))
}

/// PUT /api/lists/{list_id}/features/{feature_id}
/// Partially update a feature; absent fields keep their values
pub async fn update_feature(
    State(state): State<AppState>,
    Path((list_id, feature_id)): Path<(i64, String)>,
    Json(request): Json<UpdateFeatureRequest>,
) -> Result<Json<Feature>, ApiError> {
    let patch = FeaturePatch {
        feature_name: request.feature_name,
        remarks: request.remarks,
    };

    let feature = state
        .store()
        .update_feature(list_id, &feature_id, patch)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(list_id, feature_id = %feature_id, "Feature updated");

    Ok(Json(feature))
}

/// DELETE /api/lists/{list_id}/features/{feature_id}
/// Delete a single feature
pub async fn delete_feature(
    State(state): State<AppState>,
    Path((list_id, feature_id)): Path<(i64, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .store()
        .delete_feature(list_id, &feature_id)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(list_id, feature_id = %feature_id, "Feature deleted");

    Ok(StatusCode::NO_CONTENT)
}
