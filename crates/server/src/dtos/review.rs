use chrono::NaiveDateTime;
use database::services::review::RatedReview;
use models::helpfulness::Vote;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub professor_id: Uuid,
    pub body: String,
    pub created_at: NaiveDateTime,
    /// Upvotes minus downvotes
    pub helpfulness: i32,
}

impl From<RatedReview> for ReviewResponse {
    fn from(rated: RatedReview) -> Self {
        let review = rated.review;
        Self {
            id: review.id,
            user_id: review.user_id,
            professor_id: review.professor_id,
            body: review.body,
            created_at: review.created_at,
            helpfulness: rated.helpfulness,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub professor_id: Uuid,
    pub body: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    #[schema(value_type = String, example = "up")]
    pub vote: Vote,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VoteResponse {
    pub review_id: Uuid,
    #[schema(value_type = Option<String>)]
    pub vote: Option<Vote>,
    pub helpfulness: i32,
}
