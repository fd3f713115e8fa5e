//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    auth::RequestActor,
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::domain::Service;
use axum::{extract::Path, Json};
use std::sync::Arc;

/// Get the flattened settings values of an application
pub async fn get_app_settings_values(
    service: Arc<Service>,
    RequestActor(actor): RequestActor,
    Path(app_id): Path<String>,
) -> Result<Json<AppSettingsValuesDto>, Problem> {
    let values = service
        .get_app_settings_values(&app_id, &actor)
        .await
        .map_err(|e| map_domain_error(e).with_instance(settings_path(&app_id)))?;

    Ok(Json(values.into()))
}

/// Apply a partial update to the settings of an application
pub async fn update_app_settings(
    service: Arc<Service>,
    RequestActor(actor): RequestActor,
    Path(app_id): Path<String>,
    Json(req): Json<UpdateAppSettingsRequest>,
) -> Result<Json<AppSettingsDto>, Problem> {
    let settings = service
        .update_app_settings(&app_id, req.into(), &actor)
        .await
        .map_err(|e| map_domain_error(e).with_instance(settings_path(&app_id)))?;

    Ok(Json(settings.into()))
}

fn settings_path(app_id: &str) -> String {
    format!("/apps/{}/settings", app_id)
}
