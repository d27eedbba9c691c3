use crate::error::ApiError;
use database::{
    entities::{courses, professors},
    services::course::CourseFilter,
};
use models::semester::{Season, Semester};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CourseSummary {
    pub id: Uuid,
    /// e.g. "EECS 132"
    pub code: String,
    /// e.g. "EECS132", used in URLs
    pub param: String,
    pub title: String,
}

impl From<courses::Model> for CourseSummary {
    fn from(course: courses::Model) -> Self {
        let code = course.code();
        Self {
            id: course.id,
            code: code.to_string(),
            param: code.to_param(),
            title: course.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfessorResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<professors::Model> for ProfessorResponse {
    fn from(professor: professors::Model) -> Self {
        Self {
            id: professor.id,
            name: professor.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetailResponse {
    #[serde(flatten)]
    pub course: CourseSummary,
    /// e.g. "EECS 132: Intro to Java"
    pub long_name: String,
    /// Professors teaching the course, placeholders left out
    pub professors: Vec<ProfessorResponse>,
    pub schedulable: bool,
    /// Each inner list is one group of courses taken together
    pub prerequisites: Vec<Vec<CourseSummary>>,
    pub postrequisites: Vec<CourseSummary>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseQuery {
    /// Words matched against department, number and title
    pub name: Option<String>,
    /// "F", "S", "M" or the full season name; requires `year`
    pub season: Option<String>,
    pub year: Option<i16>,
    pub professor: Option<Uuid>,
}

impl CourseQuery {
    pub fn into_filter(self) -> Result<CourseFilter, ApiError> {
        let semester = match (self.season, self.year) {
            (None, None) => None,
            (Some(season), Some(year)) => {
                let season = Season::parse_loose(&season)
                    .ok_or_else(|| ApiError::BadRequest(format!("unknown season {season:?}")))?;
                Some(Semester::new(season, year))
            }
            _ => {
                return Err(ApiError::BadRequest(
                    "season and year must be given together".to_string(),
                ));
            }
        };

        Ok(CourseFilter {
            name: self.name,
            semester,
            professor: self.professor,
        })
    }
}
