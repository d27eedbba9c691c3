use models::course::CourseCode;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub department: String,
    pub number: i32,
    pub title: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_instances::Entity")]
    CourseInstances,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::wishlist_items::Entity")]
    WishlistItems,
    #[sea_orm(has_many = "super::prerequisites::Entity")]
    Prerequisites,
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

impl Related<super::wishlist_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WishlistItems.def()
    }
}

impl Related<super::prerequisites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prerequisites.def()
    }
}

// Many-to-many relationship with professors
impl Related<super::professors::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_instances::Relation::Professor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_instances::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn code(&self) -> CourseCode {
        CourseCode::new(self.department.clone(), self.number)
    }

    /// e.g. "EECS 132: Intro to Java"
    pub fn long_string(&self) -> String {
        self.code().long_string(&self.title)
    }
}
