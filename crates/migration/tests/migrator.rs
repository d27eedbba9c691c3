use migration::Migrator;
use sea_orm_migration::{
    MigratorTrait,
    sea_orm::{Database, DbErr},
};

#[tokio::test]
async fn test_up_and_down() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;
    let manager = sea_orm_migration::SchemaManager::new(&db);
    for table in [
        "users",
        "courses",
        "professors",
        "course_instances",
        "reviews",
        "review_votes",
        "prerequisites",
        "prerequisite_courses",
        "wishlist_items",
    ] {
        assert!(manager.has_table(table).await?, "missing table {table}");
    }

    Migrator::down(&db, None).await?;
    assert!(!manager.has_table("courses").await?);
    Ok(())
}
