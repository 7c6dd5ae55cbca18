//! Route registration

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Base path of the setup API
pub const BASE_PATH: &str = "/crowdsec/v1";

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            &format!("{}/settings", BASE_PATH),
            get(get_settings_handler).put(submit_settings_handler),
        )
        .route(
            &format!("{}/settings/import", BASE_PATH),
            post(import_config_handler),
        )
        .route(
            &format!("{}/settings/actions", BASE_PATH),
            post(apply_action_handler),
        )
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_settings_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Json<SettingsResponse> {
    handlers::get_settings(service).await
}

async fn import_config_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<ImportRequest>,
) -> Result<Json<SettingsDto>, Problem> {
    handlers::import_config(service, json).await
}

async fn apply_action_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<ActionRequest>,
) -> Json<SettingsDto> {
    handlers::apply_action(service, json).await
}

async fn submit_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<SettingsDto>,
) -> Result<Json<SubmitResponse>, Problem> {
    handlers::submit_settings(service, json).await
}
