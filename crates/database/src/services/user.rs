use crate::{db::is_unique_violation, entities::users};
use chrono::Utc;
use log::{info, warn};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};
use uuid::Uuid;

pub struct UserService;

impl UserService {
    pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_subject<C: ConnectionTrait>(
        db: &C,
        subject: &str,
    ) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Subject.eq(subject))
            .one(db)
            .await
    }

    /// The user owning `subject`, registered on first sight
    pub async fn get_or_create_by_subject(
        db: &DatabaseConnection,
        subject: &str,
    ) -> Result<users::Model, DbErr> {
        match Self::find_by_subject(db, subject).await? {
            Some(user) => Ok(user),
            None => Self::create_by_subject(db, subject).await,
        }
    }

    /// Registers a user for `subject`
    ///
    /// Returns the existing user when the subject is already registered,
    /// e.g. by a concurrent first request of the same user.
    pub async fn create_by_subject(
        db: &DatabaseConnection,
        subject: &str,
    ) -> Result<users::Model, DbErr> {
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            subject: Set(subject.to_string()),
            created_at: Set(Utc::now().naive_utc()),
        };

        match user.insert(db).await {
            Ok(user) => {
                info!("Registered user {}", user.id);
                Ok(user)
            }
            Err(err) if is_unique_violation(&err) => {
                warn!("User with subject {subject} already registered");
                match Self::find_by_subject(db, subject).await? {
                    Some(user) => Ok(user),
                    None => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }
}
