//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::AuthProvider> for AuthProviderDto {
    fn from(provider: contract::AuthProvider) -> Self {
        match provider {
            contract::AuthProvider::Http => Self::Http,
            contract::AuthProvider::Jwt => Self::Jwt,
        }
    }
}

impl From<AuthProviderDto> for contract::AuthProvider {
    fn from(dto: AuthProviderDto) -> Self {
        match dto {
            AuthProviderDto::Http => Self::Http,
            AuthProviderDto::Jwt => Self::Jwt,
        }
    }
}

impl From<contract::AppSettingsValues> for AppSettingsValuesDto {
    fn from(values: contract::AppSettingsValues) -> Self {
        Self {
            app_id: values.app_id,
            db_host: values.db_host,
            db_name: values.db_name,
            db_password: values.db_password,
            db_port: values.db_port,
            db_user: values.db_user,
            auth_provider: values.auth_provider.into(),
            generate_admin_ui: values.generate_admin_ui,
            generate_graphql: values.generate_graphql,
            generate_rest_api: values.generate_rest_api,
            generate_root_files: values.generate_root_files,
        }
    }
}

impl From<contract::AppSettings> for AppSettingsDto {
    fn from(settings: contract::AppSettings) -> Self {
        Self {
            id: settings.id,
            created_at: settings.created_at,
            updated_at: settings.updated_at,
            values: contract::AppSettingsValues::from(settings).into(),
        }
    }
}

impl From<UpdateAppSettingsRequest> for contract::UpdateAppSettings {
    fn from(req: UpdateAppSettingsRequest) -> Self {
        Self {
            db_host: req.db_host,
            db_name: req.db_name,
            db_user: req.db_user,
            db_password: req.db_password,
            db_port: req.db_port,
            auth_provider: req.auth_provider.map(Into::into),
            generate_admin_ui: req.generate_admin_ui,
            generate_graphql: req.generate_graphql,
            generate_rest_api: req.generate_rest_api,
            generate_root_files: req.generate_root_files,
        }
    }
}
