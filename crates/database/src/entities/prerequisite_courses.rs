use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table listing the member courses of a prerequisite group
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prerequisite_courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub prerequisite_id: Uuid,
    pub course_id: Uuid,
    /// Order of the member within its group
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::prerequisites::Entity",
        from = "Column::PrerequisiteId",
        to = "super::prerequisites::Column::Id",
        on_delete = "Cascade"
    )]
    Prerequisite,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::prerequisites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prerequisite.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
