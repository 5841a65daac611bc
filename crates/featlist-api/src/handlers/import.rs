//! Bulk import: build a whole list from an uploaded text file
//!
//! The file format is one feature per line, `feature_id,feature_name`,
//! with any extra comma-separated fields ignored.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use featlist_core::{FeatureList, NewFeature, NewList};

use crate::error::ApiError;
use crate::state::AppState;

/// Remarks applied to every imported list
const IMPORT_REMARKS: &str = "Imported from file";

/// POST /api/import
/// Create a list from an uploaded feature file (multipart field `file`)
pub async fn import_list(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<FeatureList>), ApiError> {
    // Find the `file` field; other form fields are ignored
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        // The filename must be captured before the field is consumed
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
        upload = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) =
        upload.ok_or_else(|| ApiError::BadRequest("No file provided".to_string()))?;
    if filename.is_empty() {
        return Err(ApiError::BadRequest("No file selected".to_string()));
    }

    let content = String::from_utf8(data)
        .map_err(|e| ApiError::BadRequest(format!("File is not valid UTF-8: {}", e)))?;

    let features = parse_features(&content);
    let feature_count = features.len();

    let new_list = NewList {
        name: strip_extension(&filename).to_string(),
        remarks: IMPORT_REMARKS.to_string(),
        features,
    };

    // One atomic create: a failure here persists nothing
    let list = state
        .store()
        .create_list(new_list)
        .await
        .map_err(|e| ApiError::BadRequest(format!("Import failed: {}", e)))?;

    tracing::info!(
        list_id = list.id,
        name = %list.name,
        features = feature_count,
        "List imported"
    );

    Ok((StatusCode::CREATED, Json(list)))
}

/// Strip the final extension from a filename (`myfeatures.txt` becomes
/// `myfeatures`).
///
/// A name without a dot is returned unchanged, and leading dots alone do
/// not count as an extension (`.env` stays `.env`).
fn strip_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) if stem.chars().any(|c| c != '.') => stem,
        _ => filename,
    }
}

/// Parse uploaded text into feature inputs.
///
/// One feature per line: `feature_id,feature_name`. Lines are trimmed,
/// empty lines and lines with fewer than two fields are skipped, fields
/// past the second are ignored, and both kept fields are trimmed.
fn parse_features(content: &str) -> Vec<NewFeature> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let mut parts = line.split(',');
            let feature_id = parts.next()?.trim();
            let feature_name = parts.next()?.trim();
            Some(NewFeature::new(feature_id, feature_name))
        })
        .collect()
}
