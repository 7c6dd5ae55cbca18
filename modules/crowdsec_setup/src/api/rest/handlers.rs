//! HTTP request handlers - thin layer that delegates to domain service

use super::{dto::*, error::Problem};
use crate::contract::SUPPORTED_BATCH_SIZES;
use crate::domain::Service;
use axum::Json;
use std::sync::Arc;

/// Current settings for the form
pub async fn get_settings(service: Arc<Service>) -> Json<SettingsResponse> {
    let mut settings: SettingsDto = service.load_settings().await.into();
    settings.api_key = None;

    Json(SettingsResponse {
        settings,
        api_key_configured: service.api_key_configured().await,
        supported_batch_sizes: SUPPORTED_BATCH_SIZES.to_vec(),
    })
}

/// Merge an uploaded config file over the form state
pub async fn import_config(
    service: Arc<Service>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<SettingsDto>, Problem> {
    let merged = service
        .import_config(&req.current.into(), &req.document)
        .map_err(Problem::from)?;

    Ok(Json(merged.into()))
}

/// Apply one form edit
pub async fn apply_action(
    service: Arc<Service>,
    Json(req): Json<ActionRequest>,
) -> Json<SettingsDto> {
    let next = service.apply(&req.current.into(), req.action.into());
    Json(next.into())
}

/// Save settings and finalize setup
pub async fn submit_settings(
    service: Arc<Service>,
    Json(req): Json<SettingsDto>,
) -> Result<Json<SubmitResponse>, Problem> {
    let outcome = service.submit(req.into()).await.map_err(Problem::from)?;
    Ok(Json(outcome.into()))
}
