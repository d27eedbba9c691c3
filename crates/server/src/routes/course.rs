use crate::{
    dtos::course::{CourseDetailResponse, CourseQuery, CourseSummary},
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use database::{
    entities::courses,
    services::{course::CourseService, prerequisite::PrerequisiteService},
};
use futures::try_join;
use models::course::CourseCode;
use sea_orm::ConnectionTrait;

/// Resolves a course from its URL form, e.g. "EECS132"
pub async fn resolve_course<C: ConnectionTrait>(db: &C, code: &str) -> ApiResult<courses::Model> {
    let code: CourseCode = code.parse()?;
    CourseService::find_by_code(db, &code)
        .await?
        .ok_or(ApiError::NotFound("course"))
}

/// List courses, narrowed by any combination of filters
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQuery),
    responses(
        (status = 200, description = "Matching courses, best name match first", body = Vec<CourseSummary>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> ApiResult<Json<Vec<CourseSummary>>> {
    let filter = query.into_filter()?;
    let courses = CourseService::search(&state.db, &state.search, filter).await?;

    Ok(Json(courses.into_iter().map(CourseSummary::from).collect()))
}

/// Get a course by its code
#[utoipa::path(
    get,
    path = "/courses/{code}",
    params(
        ("code" = String, Path, description = "Course code, e.g. EECS132")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseDetailResponse),
        (status = 400, description = "Malformed course code"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<CourseDetailResponse>> {
    let db = &state.db;
    let course = resolve_course(db, &code).await?;

    let (professors, schedulable, prerequisites, postrequisites) = try_join!(
        CourseService::real_professors(db, course.id),
        CourseService::is_schedulable(db, course.id),
        PrerequisiteService::prerequisites(db, course.id),
        PrerequisiteService::postrequisites(db, course.id),
    )?;

    Ok(Json(CourseDetailResponse {
        long_name: course.long_string(),
        course: course.into(),
        professors: professors.into_iter().map(Into::into).collect(),
        schedulable,
        prerequisites: prerequisites
            .into_iter()
            .map(|group| group.into_iter().map(Into::into).collect())
            .collect(),
        postrequisites: postrequisites.into_iter().map(Into::into).collect(),
    }))
}
