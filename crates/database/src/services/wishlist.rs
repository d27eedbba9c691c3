use crate::{
    db::is_unique_violation,
    entities::{courses, users, wishlist_items},
};
use chrono::Utc;
use log::{debug, info};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};
use uuid::Uuid;

pub struct WishlistService;

impl WishlistService {
    pub async fn find<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<wishlist_items::Model>, DbErr> {
        wishlist_items::Entity::find()
            .filter(wishlist_items::Column::UserId.eq(user_id))
            .filter(wishlist_items::Column::CourseId.eq(course_id))
            .one(db)
            .await
    }

    /// Adds a course to the user's wishlist, with notifications off
    ///
    /// Adding a course that is already wishlisted returns the existing item
    /// untouched. Returns `Ok(None)` when the course does not exist.
    pub async fn add(
        db: &DatabaseConnection,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<wishlist_items::Model>, DbErr> {
        if courses::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Ok(None);
        }

        let item = wishlist_items::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            course_id: Set(course_id),
            notify: Set(false),
            created_at: Set(Utc::now().naive_utc()),
        };

        match item.insert(db).await {
            Ok(item) => {
                info!("User {user_id} wishlisted course {course_id}");
                Ok(Some(item))
            }
            Err(err) if is_unique_violation(&err) => {
                debug!("Course {course_id} already on wishlist of user {user_id}");
                match Self::find(db, user_id, course_id).await? {
                    Some(existing) => Ok(Some(existing)),
                    None => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Removes a course from the user's wishlist
    ///
    /// Returns OK regardless of the item existing, to confirm the deletion
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn remove<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<DeleteResult, DbErr> {
        wishlist_items::Entity::delete_many()
            .filter(wishlist_items::Column::UserId.eq(user_id))
            .filter(wishlist_items::Column::CourseId.eq(course_id))
            .exec(db)
            .await
    }

    /// Turns notifications for a wishlisted course on or off
    ///
    /// Returns `Ok(None)` when the course is not on the user's wishlist.
    pub async fn set_notify<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        course_id: Uuid,
        notify: bool,
    ) -> Result<Option<wishlist_items::Model>, DbErr> {
        let Some(item) = Self::find(db, user_id, course_id).await? else {
            return Ok(None);
        };

        if item.notify == notify {
            return Ok(Some(item));
        }

        let mut active = item.into_active_model();
        active.notify = Set(notify);
        active.update(db).await.map(Some)
    }

    /// The user's wishlist with the courses it refers to, oldest first
    pub async fn list<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
    ) -> Result<Vec<(wishlist_items::Model, courses::Model)>, DbErr> {
        Ok(wishlist_items::Entity::find()
            .filter(wishlist_items::Column::UserId.eq(user_id))
            .order_by_asc(wishlist_items::Column::CreatedAt)
            .find_also_related(courses::Entity)
            .all(db)
            .await?
            .into_iter()
            .filter_map(|(item, course)| course.map(|c| (item, c)))
            .collect())
    }

    /// Users who asked to be notified about `course_id`
    pub async fn subscribers<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
    ) -> Result<Vec<users::Model>, DbErr> {
        let notified = wishlist_items::Entity::find()
            .select_only()
            .column(wishlist_items::Column::UserId)
            .filter(wishlist_items::Column::CourseId.eq(course_id))
            .filter(wishlist_items::Column::Notify.eq(true))
            .into_query();

        users::Entity::find()
            .filter(users::Column::Id.in_subquery(notified))
            .order_by_asc(users::Column::CreatedAt)
            .all(db)
            .await
    }
}
