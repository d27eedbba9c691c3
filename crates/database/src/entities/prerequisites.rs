use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One prerequisite group of a course
///
/// `course_id` is the course being unlocked; the group's members live in
/// `prerequisite_courses`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prerequisites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(has_many = "super::prerequisite_courses::Entity")]
    PrerequisiteCourses,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::prerequisite_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrerequisiteCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
