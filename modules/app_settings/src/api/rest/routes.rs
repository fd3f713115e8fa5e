//! Route registration

use super::{auth::RequestActor, dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    extract::Path,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register app settings REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            "/apps/{app_id}/settings",
            get(get_app_settings_values_handler).patch(update_app_settings_handler),
        )
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_app_settings_values_handler(
    Extension(service): Extension<Arc<Service>>,
    actor: RequestActor,
    path: Path<String>,
) -> Result<Json<AppSettingsValuesDto>, Problem> {
    handlers::get_app_settings_values(service, actor, path).await
}

async fn update_app_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    actor: RequestActor,
    path: Path<String>,
    json: Json<UpdateAppSettingsRequest>,
) -> Result<Json<AppSettingsDto>, Problem> {
    handlers::update_app_settings(service, actor, path, json).await
}
