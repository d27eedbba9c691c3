use crate::m20250801_create_all_tables::{
    CourseInstances, Courses, PrerequisiteCourses, Prerequisites, Professors, ReviewVotes,
    Reviews, WishlistItems,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Natural key of a course
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_department_number")
                    .table(Courses::Table)
                    .col(Courses::Department)
                    .col(Courses::Number)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_professors_name")
                    .table(Professors::Table)
                    .col(Professors::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // One vote per user per review
        manager
            .create_index(
                Index::create()
                    .name("idx_review_votes_review_user")
                    .table(ReviewVotes::Table)
                    .col(ReviewVotes::ReviewId)
                    .col(ReviewVotes::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // One wishlist entry per user per course
        manager
            .create_index(
                Index::create()
                    .name("idx_wishlist_items_user_course")
                    .table(WishlistItems::Table)
                    .col(WishlistItems::UserId)
                    .col(WishlistItems::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Indexes for the course filters
        manager
            .create_index(
                Index::create()
                    .name("idx_course_instances_season_year")
                    .table(CourseInstances::Table)
                    .col(CourseInstances::Season)
                    .col(CourseInstances::Year)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_instances_course_id")
                    .table(CourseInstances::Table)
                    .col(CourseInstances::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_instances_professor_id")
                    .table(CourseInstances::Table)
                    .col(CourseInstances::ProfessorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_course_id")
                    .table(Reviews::Table)
                    .col(Reviews::CourseId)
                    .to_owned(),
            )
            .await?;

        // Both directions of the prerequisite graph
        manager
            .create_index(
                Index::create()
                    .name("idx_prerequisites_course_id")
                    .table(Prerequisites::Table)
                    .col(Prerequisites::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prerequisite_courses_course_id")
                    .table(PrerequisiteCourses::Table)
                    .col(PrerequisiteCourses::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wishlist_items_course_notify")
                    .table(WishlistItems::Table)
                    .col(WishlistItems::CourseId)
                    .col(WishlistItems::Notify)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        let indexes = [
            "idx_wishlist_items_course_notify",
            "idx_prerequisite_courses_course_id",
            "idx_prerequisites_course_id",
            "idx_reviews_course_id",
            "idx_course_instances_professor_id",
            "idx_course_instances_course_id",
            "idx_course_instances_season_year",
            "idx_wishlist_items_user_course",
            "idx_review_votes_review_user",
            "idx_professors_name",
            "idx_courses_department_number",
        ];

        for name in indexes {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}
