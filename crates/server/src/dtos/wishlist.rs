use super::course::CourseSummary;
use chrono::NaiveDateTime;
use database::entities::{courses, wishlist_items};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistItemResponse {
    pub course: CourseSummary,
    pub notify: bool,
    pub created_at: NaiveDateTime,
}

impl From<(wishlist_items::Model, courses::Model)> for WishlistItemResponse {
    fn from((item, course): (wishlist_items::Model, courses::Model)) -> Self {
        Self {
            course: course.into(),
            notify: item.notify,
            created_at: item.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddWishlistRequest {
    /// Course code, e.g. "EECS132" or "EECS 132"
    pub course: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NotifyRequest {
    pub notify: bool,
}
