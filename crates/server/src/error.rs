use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use models::{course::ParseCourseCodeError, semester::ParseSemesterError};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("missing or invalid subject claim")]
    Unauthorized,

    #[error(transparent)]
    Database(#[from] DbErr),
}

impl From<ParseCourseCodeError> for ApiError {
    fn from(err: ParseCourseCodeError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ParseSemesterError> for ApiError {
    fn from(err: ParseSemesterError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Database(err) => {
                error!("Database error: {err}");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use models::course::CourseCode;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotFound("course").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::BadRequest("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::from(DbErr::Custom("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_parse_errors_are_bad_requests() {
        let err: ApiError = "132 EECS".parse::<CourseCode>().unwrap_err().into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::NotFound("review").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
