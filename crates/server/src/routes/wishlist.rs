use super::{auth::CurrentUser, course::resolve_course};
use crate::{
    dtos::wishlist::{AddWishlistRequest, NotifyRequest, WishlistItemResponse},
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::wishlist::WishlistService;

/// The user's wishlist, oldest entry first
#[utoipa::path(
    get,
    path = "/wishlist",
    responses(
        (status = 200, description = "Wishlisted courses", body = Vec<WishlistItemResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Wishlist"
)]
pub async fn list_wishlist(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<WishlistItemResponse>>> {
    let items = WishlistService::list(&state.db, user.id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Add a course to the wishlist; adding it again is a no-op
#[utoipa::path(
    post,
    path = "/wishlist",
    request_body = AddWishlistRequest,
    responses(
        (status = 200, description = "Course is on the wishlist", body = WishlistItemResponse),
        (status = 400, description = "Malformed course code"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Course not found")
    ),
    security(("jwt" = [])),
    tag = "Wishlist"
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<AddWishlistRequest>,
) -> ApiResult<Json<WishlistItemResponse>> {
    let course = resolve_course(&state.db, &request.course).await?;
    let item = WishlistService::add(&state.db, user.id, course.id)
        .await?
        .ok_or(ApiError::NotFound("course"))?;

    Ok(Json((item, course).into()))
}

/// Remove a course from the wishlist
#[utoipa::path(
    delete,
    path = "/wishlist/{code}",
    params(
        ("code" = String, Path, description = "Course code, e.g. EECS132")
    ),
    responses(
        (status = 204, description = "Removed from wishlist"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Course not on the wishlist")
    ),
    security(("jwt" = [])),
    tag = "Wishlist"
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(code): Path<String>,
) -> ApiResult<StatusCode> {
    let course = resolve_course(&state.db, &code).await?;
    let result = WishlistService::remove(&state.db, user.id, course.id).await?;

    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("wishlist item"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Turn notifications for a wishlisted course on or off
#[utoipa::path(
    put,
    path = "/wishlist/{code}/notify",
    params(
        ("code" = String, Path, description = "Course code, e.g. EECS132")
    ),
    request_body = NotifyRequest,
    responses(
        (status = 200, description = "Notification setting updated", body = WishlistItemResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Course not on the wishlist")
    ),
    security(("jwt" = [])),
    tag = "Wishlist"
)]
pub async fn set_notify(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(code): Path<String>,
    Json(request): Json<NotifyRequest>,
) -> ApiResult<Json<WishlistItemResponse>> {
    let course = resolve_course(&state.db, &code).await?;
    let item = WishlistService::set_notify(&state.db, user.id, course.id, request.notify)
        .await?
        .ok_or(ApiError::NotFound("wishlist item"))?;

    Ok(Json((item, course).into()))
}
