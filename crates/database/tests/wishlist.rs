mod common;

use database::services::wishlist::WishlistService;
use sea_orm::DbErr;
use uuid::Uuid;

#[tokio::test]
async fn test_add_is_idempotent() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let user = common::user(&db, "student").await?;
    let course = common::course(&db, "EECS", 132, "Intro to Java").await?;

    let first = WishlistService::add(&db, user.id, course.id)
        .await?
        .expect("course exists");
    let second = WishlistService::add(&db, user.id, course.id).await?;

    assert!(!first.notify);
    assert_eq!(second, Some(first));
    assert_eq!(WishlistService::list(&db, user.id).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_add_missing_course() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let user = common::user(&db, "student").await?;

    assert!(WishlistService::add(&db, user.id, Uuid::new_v4()).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_notify_and_subscribers() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let eager = common::user(&db, "eager").await?;
    let quiet = common::user(&db, "quiet").await?;
    let course = common::course(&db, "EECS", 132, "Intro to Java").await?;

    WishlistService::add(&db, eager.id, course.id).await?;
    WishlistService::add(&db, quiet.id, course.id).await?;
    assert!(WishlistService::subscribers(&db, course.id).await?.is_empty());

    let item = WishlistService::set_notify(&db, eager.id, course.id, true)
        .await?
        .expect("wishlisted");
    assert!(item.notify);
    assert_eq!(WishlistService::subscribers(&db, course.id).await?, vec![eager.clone()]);

    WishlistService::set_notify(&db, eager.id, course.id, false).await?;
    assert!(WishlistService::subscribers(&db, course.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_set_notify_on_missing_item() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let user = common::user(&db, "student").await?;
    let course = common::course(&db, "EECS", 132, "Intro to Java").await?;

    let item = WishlistService::set_notify(&db, user.id, course.id, true).await?;
    assert!(item.is_none());
    Ok(())
}

#[tokio::test]
async fn test_remove() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let user = common::user(&db, "student").await?;
    let java = common::course(&db, "EECS", 132, "Intro to Java").await?;
    let theory = common::course(&db, "EECS", 343, "Theoretical Computer Science").await?;

    WishlistService::add(&db, user.id, java.id).await?;
    WishlistService::add(&db, user.id, theory.id).await?;

    assert_eq!(WishlistService::remove(&db, user.id, java.id).await?.rows_affected, 1);
    assert_eq!(WishlistService::remove(&db, user.id, java.id).await?.rows_affected, 0);

    let remaining: Vec<Uuid> = WishlistService::list(&db, user.id)
        .await?
        .into_iter()
        .map(|(_, course)| course.id)
        .collect();
    assert_eq!(remaining, vec![theory.id]);
    Ok(())
}
