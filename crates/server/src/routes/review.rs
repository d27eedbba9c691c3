use super::{auth::CurrentUser, course::resolve_course};
use crate::{
    dtos::review::{CreateReviewRequest, ReviewResponse, VoteRequest, VoteResponse},
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::{
    professor::ProfessorService,
    review::{RatedReview, ReviewService},
    vote::VoteService,
};
use log::info;
use uuid::Uuid;

/// Reviews of a course, most helpful first
#[utoipa::path(
    get,
    path = "/courses/{code}/reviews",
    params(
        ("code" = String, Path, description = "Course code, e.g. EECS132")
    ),
    responses(
        (status = 200, description = "Reviews ordered by helpfulness", body = Vec<ReviewResponse>),
        (status = 404, description = "Course not found")
    ),
    tag = "Reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<Vec<ReviewResponse>>> {
    let course = resolve_course(&state.db, &code).await?;
    let reviews = ReviewService::for_course(&state.db, course.id).await?;

    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

/// Review a course
#[utoipa::path(
    post,
    path = "/courses/{code}/reviews",
    params(
        ("code" = String, Path, description = "Course code, e.g. EECS132")
    ),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Empty body or unknown professor"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Course not found")
    ),
    security(("jwt" = [])),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(code): Path<String>,
    Json(request): Json<CreateReviewRequest>,
) -> ApiResult<(StatusCode, Json<ReviewResponse>)> {
    let body = request.body.trim();
    if body.is_empty() {
        return Err(ApiError::BadRequest("review body is empty".to_string()));
    }

    let course = resolve_course(&state.db, &code).await?;
    if ProfessorService::find(&state.db, request.professor_id)
        .await?
        .is_none()
    {
        return Err(ApiError::BadRequest("unknown professor".to_string()));
    }

    let review =
        ReviewService::create(&state.db, user.id, course.id, request.professor_id, body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse::from(RatedReview {
            review,
            helpfulness: 0,
        })),
    ))
}

/// Vote a review up or down, replacing any earlier vote by the same user
#[utoipa::path(
    post,
    path = "/reviews/{id}/vote",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote recorded", body = VoteResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Review not found")
    ),
    security(("jwt" = [])),
    tag = "Reviews"
)]
pub async fn vote(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(review_id): Path<Uuid>,
    Json(request): Json<VoteRequest>,
) -> ApiResult<Json<VoteResponse>> {
    VoteService::record(&state.db, review_id, user.id, request.vote)
        .await?
        .ok_or(ApiError::NotFound("review"))?;

    Ok(Json(VoteResponse {
        review_id,
        vote: Some(request.vote),
        helpfulness: ReviewService::helpfulness(&state.db, review_id).await?,
    }))
}

/// Withdraw the user's vote on a review
#[utoipa::path(
    delete,
    path = "/reviews/{id}/vote",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Vote withdrawn", body = VoteResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Review not found")
    ),
    security(("jwt" = [])),
    tag = "Reviews"
)]
pub async fn clear_vote(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(review_id): Path<Uuid>,
) -> ApiResult<Json<VoteResponse>> {
    if ReviewService::find(&state.db, review_id).await?.is_none() {
        return Err(ApiError::NotFound("review"));
    }

    if VoteService::clear(&state.db, review_id, user.id).await? {
        info!("User {} withdrew vote on review {review_id}", user.id);
    }

    Ok(Json(VoteResponse {
        review_id,
        vote: None,
        helpfulness: ReviewService::helpfulness(&state.db, review_id).await?,
    }))
}
