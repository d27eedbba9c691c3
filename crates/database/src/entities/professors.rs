use models::professor::HasProfessorName;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_instances::Entity")]
    CourseInstances,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::course_instances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseInstances.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_instances::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_instances::Relation::Professor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl HasProfessorName for Model {
    fn professor_name(&self) -> &str {
        &self.name
    }
}
