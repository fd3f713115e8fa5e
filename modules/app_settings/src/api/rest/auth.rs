//! Actor extraction from request headers

use super::error::Problem;
use crate::contract::Actor;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const WORKSPACE_ID_HEADER: &str = "x-workspace-id";

/// Actor of the current request, read from `x-user-id` and `x-workspace-id`
#[derive(Debug, Clone, Copy)]
pub struct RequestActor(pub Actor);

impl<S> FromRequestParts<S> for RequestActor
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_uuid(parts, USER_ID_HEADER)?;
        let workspace_id = header_uuid(parts, WORKSPACE_ID_HEADER)?;
        Ok(Self(Actor::new(user_id, workspace_id)))
    }
}

fn header_uuid(parts: &Parts, name: &str) -> Result<Uuid, Problem> {
    let value = parts
        .headers
        .get(name)
        .ok_or_else(|| unauthorized(format!("missing '{}' header", name)))?;

    value
        .to_str()
        .ok()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| unauthorized(format!("'{}' header must be a UUID", name)))
}

fn unauthorized(detail: String) -> Problem {
    Problem::new(StatusCode::UNAUTHORIZED, "Unauthorized").with_detail(detail)
}
