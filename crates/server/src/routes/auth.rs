use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{Json, extract::FromRequestParts, http::request::Parts};
use database::{entities::users, services::user::UserService};
use serde::Serialize;
use tower_oauth2_resource_server::claims::DefaultClaims;
use utoipa::ToSchema;
use uuid::Uuid;

/// The user behind the bearer token, registered on first request
pub struct CurrentUser(pub users::Model);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> ApiResult<Self> {
        let subject = parts
            .extensions
            .get::<DefaultClaims>()
            .and_then(|claims| claims.sub.clone())
            .ok_or(ApiError::Unauthorized)?;

        let user = UserService::get_or_create_by_subject(&state.db, &subject).await?;
        Ok(Self(user))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub subject: String,
}

/// Returns the authenticated user
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Successfully authenticated", body = UserResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Authentication"
)]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.id,
        subject: user.subject,
    })
}
