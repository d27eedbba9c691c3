use crate::{
    db::is_unique_violation,
    entities::{review_votes, reviews},
};
use chrono::Utc;
use log::{debug, info};
use models::helpfulness::Vote;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

pub struct VoteService;

impl VoteService {
    /// The user's current vote on a review, if any
    pub async fn find<C: ConnectionTrait>(
        db: &C,
        review_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<review_votes::Model>, DbErr> {
        review_votes::Entity::find()
            .filter(review_votes::Column::ReviewId.eq(review_id))
            .filter(review_votes::Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    /// Records `vote` for (review, user)
    ///
    /// Inserts a row the first time the user votes on the review and updates
    /// the existing row afterwards; voting the same way twice changes nothing.
    /// Returns `Ok(None)` when the review does not exist.
    ///
    /// Takes a plain connection: the insert may fail on the unique
    /// (review, user) index, which would abort an enclosing transaction.
    pub async fn record(
        db: &DatabaseConnection,
        review_id: Uuid,
        user_id: Uuid,
        vote: Vote,
    ) -> Result<Option<review_votes::Model>, DbErr> {
        if reviews::Entity::find_by_id(review_id).one(db).await?.is_none() {
            return Ok(None);
        }

        let now = Utc::now().naive_utc();
        let model = review_votes::ActiveModel {
            id: Set(Uuid::new_v4()),
            review_id: Set(review_id),
            user_id: Set(user_id),
            score: Set(vote.score()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match model.insert(db).await {
            Ok(model) => {
                info!("User {user_id} voted {vote:?} on review {review_id}");
                Ok(Some(model))
            }
            Err(err) if is_unique_violation(&err) => {
                debug!("User {user_id} already voted on review {review_id}, updating");
                match Self::find(db, review_id, user_id).await? {
                    Some(existing) => Self::set_score(db, existing, vote).await.map(Some),
                    None => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }

    async fn set_score<C: ConnectionTrait>(
        db: &C,
        existing: review_votes::Model,
        vote: Vote,
    ) -> Result<review_votes::Model, DbErr> {
        if existing.score == vote.score() {
            debug!("Vote on review {} unchanged", existing.review_id);
            return Ok(existing);
        }

        let mut active = existing.into_active_model();
        active.score = Set(vote.score());
        active.updated_at = Set(Utc::now().naive_utc());

        let model = active.update(db).await?;
        info!(
            "User {} changed vote to {vote:?} on review {}",
            model.user_id, model.review_id
        );

        Ok(model)
    }

    /// Removes the user's vote on a review; `true` when a vote was removed
    pub async fn clear<C: ConnectionTrait>(
        db: &C,
        review_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, DbErr> {
        let result = review_votes::Entity::delete_many()
            .filter(review_votes::Column::ReviewId.eq(review_id))
            .filter(review_votes::Column::UserId.eq(user_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
