mod common;

use database::services::user::UserService;
use database::entities::users;
use sea_orm::{DbErr, EntityTrait};

#[tokio::test]
async fn test_get_or_create_by_subject() -> Result<(), DbErr> {
    let db = common::setup().await?;

    let created = UserService::get_or_create_by_subject(&db, "oidc|1234").await?;
    let again = UserService::get_or_create_by_subject(&db, "oidc|1234").await?;
    let other = UserService::get_or_create_by_subject(&db, "oidc|5678").await?;

    assert_eq!(created, again);
    assert_ne!(created.id, other.id);
    assert_eq!(UserService::find(&db, created.id).await?, Some(created));
    Ok(())
}

#[tokio::test]
async fn test_create_registered_subject_returns_user() -> Result<(), DbErr> {
    let db = common::setup().await?;

    let registered = UserService::get_or_create_by_subject(&db, "oidc|1234").await?;
    let created = UserService::create_by_subject(&db, "oidc|1234").await?;

    assert_eq!(created, registered);
    assert_eq!(users::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}
