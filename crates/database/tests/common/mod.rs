#![allow(dead_code)]

use chrono::{Days, NaiveDate, Utc};
use database::{
    entities::{
        course_instances, courses, prerequisite_courses, prerequisites, professors, review_votes,
        reviews, users, wishlist_items,
    },
    services::{course::CourseService, professor::ProfessorService, user::UserService},
};
use models::{course::CourseCode, semester::Semester};
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema,
    sea_query::{Index, IndexCreateStatement},
};

/// Fresh in-memory database with every table and unique index created
pub async fn setup() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    let backend = db.get_database_backend();
    let schema = Schema::new(DbBackend::Sqlite);

    // Parents before children so foreign keys resolve
    let tables = vec![
        schema.create_table_from_entity(users::Entity),
        schema.create_table_from_entity(courses::Entity),
        schema.create_table_from_entity(professors::Entity),
        schema.create_table_from_entity(course_instances::Entity),
        schema.create_table_from_entity(reviews::Entity),
        schema.create_table_from_entity(review_votes::Entity),
        schema.create_table_from_entity(prerequisites::Entity),
        schema.create_table_from_entity(prerequisite_courses::Entity),
        schema.create_table_from_entity(wishlist_items::Entity),
    ];
    for stmt in tables {
        db.execute(backend.build(&stmt)).await?;
    }

    for stmt in unique_indexes() {
        db.execute(backend.build(&stmt)).await?;
    }

    Ok(db)
}

fn unique_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx_review_votes_review_user")
            .table(review_votes::Entity)
            .col(review_votes::Column::ReviewId)
            .col(review_votes::Column::UserId)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx_wishlist_items_user_course")
            .table(wishlist_items::Entity)
            .col(wishlist_items::Column::UserId)
            .col(wishlist_items::Column::CourseId)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx_courses_department_number")
            .table(courses::Entity)
            .col(courses::Column::Department)
            .col(courses::Column::Number)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx_professors_name")
            .table(professors::Entity)
            .col(professors::Column::Name)
            .unique()
            .to_owned(),
    ]
}

pub async fn user(db: &DatabaseConnection, subject: &str) -> Result<users::Model, DbErr> {
    UserService::get_or_create_by_subject(db, subject).await
}

pub async fn course(
    db: &DatabaseConnection,
    department: &str,
    number: i32,
    title: &str,
) -> Result<courses::Model, DbErr> {
    CourseService::find_or_create(db, &CourseCode::new(department, number), title).await
}

pub async fn professor(db: &DatabaseConnection, name: &str) -> Result<professors::Model, DbErr> {
    ProfessorService::find_or_create(db, name).await
}

pub fn semester(text: &str) -> Semester {
    text.parse().expect("valid semester")
}

pub fn days_from_today(days: i64) -> NaiveDate {
    let today = Utc::now().date_naive();
    if days >= 0 {
        today + Days::new(days as u64)
    } else {
        today - Days::new(days.unsigned_abs())
    }
}

/// Offering of `course` that ends a month from now
pub async fn offering(
    db: &DatabaseConnection,
    course: &courses::Model,
    professor: Option<&professors::Model>,
    term: &str,
) -> Result<course_instances::Model, DbErr> {
    CourseService::add_instance(
        db,
        course.id,
        professor.map(|p| p.id),
        semester(term),
        days_from_today(30),
    )
    .await
}
