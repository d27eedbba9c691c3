use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Subject)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Department).string().not_null())
                    .col(ColumnDef::new(Courses::Number).integer().not_null())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create professors table
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .col(ColumnDef::new(Professors::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create course_instances table, the junction between courses and professors
        manager
            .create_table(
                Table::create()
                    .table(CourseInstances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseInstances::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseInstances::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseInstances::ProfessorId).uuid())
                    .col(ColumnDef::new(CourseInstances::Season).string().not_null())
                    .col(ColumnDef::new(CourseInstances::Year).small_integer().not_null())
                    .col(ColumnDef::new(CourseInstances::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(CourseInstances::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_instances-course_id")
                            .from(CourseInstances::Table, CourseInstances::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_instances-professor_id")
                            .from(CourseInstances::Table, CourseInstances::ProfessorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create reviews table
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Reviews::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Reviews::UserId).uuid().not_null())
                    .col(ColumnDef::new(Reviews::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Reviews::ProfessorId).uuid().not_null())
                    .col(ColumnDef::new(Reviews::Body).text().not_null())
                    .col(ColumnDef::new(Reviews::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-user_id")
                            .from(Reviews::Table, Reviews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-course_id")
                            .from(Reviews::Table, Reviews::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-professor_id")
                            .from(Reviews::Table, Reviews::ProfessorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create review_votes table
        manager
            .create_table(
                Table::create()
                    .table(ReviewVotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReviewVotes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ReviewVotes::ReviewId).uuid().not_null())
                    .col(ColumnDef::new(ReviewVotes::UserId).uuid().not_null())
                    .col(ColumnDef::new(ReviewVotes::Score).integer().not_null())
                    .col(ColumnDef::new(ReviewVotes::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(ReviewVotes::UpdatedAt).timestamp().not_null())
                    .check(Expr::col(ReviewVotes::Score).is_in([1, -1]))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-review_votes-review_id")
                            .from(ReviewVotes::Table, ReviewVotes::ReviewId)
                            .to(Reviews::Table, Reviews::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-review_votes-user_id")
                            .from(ReviewVotes::Table, ReviewVotes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create prerequisites table, one row per group
        manager
            .create_table(
                Table::create()
                    .table(Prerequisites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prerequisites::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prerequisites::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Prerequisites::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prerequisites-course_id")
                            .from(Prerequisites::Table, Prerequisites::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create prerequisite_courses junction table (group members)
        manager
            .create_table(
                Table::create()
                    .table(PrerequisiteCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrerequisiteCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PrerequisiteCourses::PrerequisiteId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrerequisiteCourses::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrerequisiteCourses::Position)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prerequisite_courses-prerequisite_id")
                            .from(
                                PrerequisiteCourses::Table,
                                PrerequisiteCourses::PrerequisiteId,
                            )
                            .to(Prerequisites::Table, Prerequisites::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prerequisite_courses-course_id")
                            .from(PrerequisiteCourses::Table, PrerequisiteCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create wishlist_items table
        manager
            .create_table(
                Table::create()
                    .table(WishlistItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WishlistItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WishlistItems::UserId).uuid().not_null())
                    .col(ColumnDef::new(WishlistItems::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(WishlistItems::Notify)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(WishlistItems::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-wishlist_items-user_id")
                            .from(WishlistItems::Table, WishlistItems::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-wishlist_items-course_id")
                            .from(WishlistItems::Table, WishlistItems::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(WishlistItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PrerequisiteCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prerequisites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReviewVotes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseInstances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Subject,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    Id,
    Department,
    Number,
    Title,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Professors {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum CourseInstances {
    Table,
    Id,
    CourseId,
    ProfessorId,
    Season,
    Year,
    EndDate,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    Id,
    UserId,
    CourseId,
    ProfessorId,
    Body,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum ReviewVotes {
    Table,
    Id,
    ReviewId,
    UserId,
    Score,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Prerequisites {
    Table,
    Id,
    CourseId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum PrerequisiteCourses {
    Table,
    Id,
    PrerequisiteId,
    CourseId,
    Position,
}

#[derive(DeriveIden)]
pub enum WishlistItems {
    Table,
    Id,
    UserId,
    CourseId,
    Notify,
    CreatedAt,
}
