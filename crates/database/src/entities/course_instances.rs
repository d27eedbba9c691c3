use chrono::Utc;
use models::{
    course::Schedulable,
    semester::{Season, Semester, Year},
};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A time-bounded offering of a course; joins courses and professors
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_instances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub professor_id: Option<Uuid>,
    pub season: String, // F, S, M
    pub year: i16,
    pub end_date: Date,
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
    #[sea_orm(
        belongs_to = "super::professors::Entity",
        from = "Column::ProfessorId",
        to = "super::professors::Column::Id",
        on_delete = "SetNull"
    )]
    Professor,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// `None` when the stored season code is not recognised
    pub fn semester(&self) -> Option<Semester> {
        Season::from_str(&self.season).ok().map(|season| Semester {
            season,
            year: Year(self.year),
        })
    }

    /// Offerings can be scheduled until their last day
    pub fn is_schedulable_on(&self, today: Date) -> bool {
        self.end_date >= today
    }
}

impl Schedulable for Model {
    fn is_schedulable(&self) -> bool {
        self.is_schedulable_on(Utc::now().date_naive())
    }
}
