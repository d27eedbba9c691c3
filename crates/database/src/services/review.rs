use crate::entities::{review_votes, reviews};
use chrono::Utc;
use log::info;
use models::helpfulness::{helpfulness, order_by_helpfulness};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
    TransactionTrait,
};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// A review together with its helpfulness at the time it was read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedReview {
    pub review: reviews::Model,
    pub helpfulness: i32,
}

pub struct ReviewService;

impl ReviewService {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        course_id: Uuid,
        professor_id: Uuid,
        body: &str,
    ) -> Result<reviews::Model, DbErr> {
        let review = reviews::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            course_id: Set(course_id),
            professor_id: Set(professor_id),
            body: Set(body.to_string()),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(db)
        .await?;

        info!("User {user_id} reviewed course {course_id}");
        Ok(review)
    }

    pub async fn find<C: ConnectionTrait>(
        db: &C,
        review_id: Uuid,
    ) -> Result<Option<reviews::Model>, DbErr> {
        reviews::Entity::find_by_id(review_id).one(db).await
    }

    /// Sum of the review's current vote scores
    pub async fn helpfulness<C: ConnectionTrait>(db: &C, review_id: Uuid) -> Result<i32, DbErr> {
        let scores = review_votes::Entity::find()
            .select_only()
            .column(review_votes::Column::Score)
            .filter(review_votes::Column::ReviewId.eq(review_id))
            .into_tuple::<i32>()
            .all(db)
            .await?;

        Ok(helpfulness(scores))
    }

    /// Helpfulness of each review, computed from the vote rows in one query
    ///
    /// Reviews without votes are reported with a helpfulness of 0.
    pub async fn helpfulness_by_review<C: ConnectionTrait>(
        db: &C,
        review_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i32>, DbErr> {
        if review_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let votes: Vec<(Uuid, i32)> = review_votes::Entity::find()
            .select_only()
            .column(review_votes::Column::ReviewId)
            .column(review_votes::Column::Score)
            .filter(review_votes::Column::ReviewId.is_in(review_ids.to_vec()))
            .into_tuple()
            .all(db)
            .await?;

        let mut scores_by_review: HashMap<Uuid, Vec<i32>> = review_ids
            .iter()
            .map(|id| (*id, Vec::new()))
            .collect();
        for (review_id, score) in votes {
            scores_by_review.entry(review_id).or_default().push(score);
        }

        Ok(scores_by_review
            .into_iter()
            .map(|(review_id, scores)| (review_id, helpfulness(scores)))
            .collect())
    }

    /// Reviews of a course, most helpful first
    pub async fn for_course<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
    ) -> Result<Vec<RatedReview>, DbErr> {
        let reviews = reviews::Entity::find()
            .filter(reviews::Column::CourseId.eq(course_id))
            .order_by_desc(reviews::Column::CreatedAt)
            .all(db)
            .await?;

        let review_ids: Vec<Uuid> = reviews.iter().map(|r| r.id).collect();
        let helpfulness = Self::helpfulness_by_review(db, &review_ids).await?;

        let mut rated: Vec<RatedReview> = reviews
            .into_iter()
            .map(|review| RatedReview {
                helpfulness: helpfulness.get(&review.id).copied().unwrap_or_default(),
                review,
            })
            .collect();

        order_by_helpfulness(&mut rated, |r| r.helpfulness);
        Ok(rated)
    }

    /// Number of reviews written for a course
    pub async fn count_for_course<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
    ) -> Result<u64, DbErr> {
        reviews::Entity::find()
            .filter(reviews::Column::CourseId.eq(course_id))
            .count(db)
            .await
    }

    /// Deletes a review and its votes
    ///
    /// Returns OK regardless of the review existing, to confirm the deletion
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(db: &DatabaseConnection, review_id: Uuid) -> Result<DeleteResult, DbErr> {
        let txn = db.begin().await?;

        review_votes::Entity::delete_many()
            .filter(review_votes::Column::ReviewId.eq(review_id))
            .exec(&txn)
            .await?;
        let result = reviews::Entity::delete_by_id(review_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result)
    }

    /// Deletes every review of a course along with their votes
    pub async fn delete_for_course(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> Result<u64, DbErr> {
        let txn = db.begin().await?;

        let course_reviews = reviews::Entity::find()
            .select_only()
            .column(reviews::Column::Id)
            .filter(reviews::Column::CourseId.eq(course_id))
            .into_query();

        review_votes::Entity::delete_many()
            .filter(review_votes::Column::ReviewId.in_subquery(course_reviews))
            .exec(&txn)
            .await?;
        let result = reviews::Entity::delete_many()
            .filter(reviews::Column::CourseId.eq(course_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        info!(
            "Deleted {} reviews of course {course_id}",
            result.rows_affected
        );

        Ok(result.rows_affected)
    }
}
