use crate::{
    db::is_unique_violation,
    entities::{course_instances, courses, professors},
    services::search::CourseSearch,
};
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use models::{
    course::{self, CourseCode},
    professor,
    semester::Semester,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Optional criteria for narrowing the course list
///
/// Every missing criterion leaves the list untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub name: Option<String>,
    pub semester: Option<Semester>,
    pub professor: Option<Uuid>,
}

pub struct CourseService;

impl CourseService {
    /// Look up a course by its natural key
    pub async fn find_by_code<C: ConnectionTrait>(
        db: &C,
        code: &CourseCode,
    ) -> Result<Option<courses::Model>, DbErr> {
        courses::Entity::find()
            .filter(courses::Column::Department.eq(code.department.as_str()))
            .filter(courses::Column::Number.eq(code.number))
            .one(db)
            .await
    }

    /// Look up a course by its natural key, creating it when missing
    ///
    /// An existing course keeps its title.
    pub async fn find_or_create(
        db: &DatabaseConnection,
        code: &CourseCode,
        title: &str,
    ) -> Result<courses::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let course = courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            department: Set(code.department.clone()),
            number: Set(code.number),
            title: Set(title.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match course.insert(db).await {
            Ok(course) => {
                info!("Created course {}", course.code());
                Ok(course)
            }
            Err(err) if is_unique_violation(&err) => {
                debug!("Course {code} already exists, reusing it");
                match Self::find_by_code(db, code).await? {
                    Some(course) => Ok(course),
                    None => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Every course, ordered by department then number
    pub async fn all<C: ConnectionTrait>(db: &C) -> Result<Vec<courses::Model>, DbErr> {
        Self::ordered(courses::Entity::find()).all(db).await
    }

    fn ordered(query: Select<courses::Entity>) -> Select<courses::Entity> {
        query
            .order_by_asc(courses::Column::Department)
            .order_by_asc(courses::Column::Number)
    }

    fn restrict_to(query: Select<courses::Entity>, ids: Vec<Uuid>) -> Select<courses::Entity> {
        query.filter(courses::Column::Id.is_in(ids))
    }

    /// Keep courses matched by `search`; no-op when `name` is missing or blank
    pub async fn filter_by_name<C, S>(
        db: &C,
        search: &S,
        query: Select<courses::Entity>,
        name: Option<&str>,
    ) -> Result<Select<courses::Entity>, DbErr>
    where
        C: ConnectionTrait,
        S: CourseSearch,
    {
        match name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => Ok(Self::restrict_to(query, search.search(db, name).await?)),
            None => Ok(query),
        }
    }

    /// Keep courses offered in `semester`; no-op when missing
    pub fn filter_by_semester(
        query: Select<courses::Entity>,
        semester: Option<Semester>,
    ) -> Select<courses::Entity> {
        let Some(semester) = semester else {
            return query;
        };

        let offered = course_instances::Entity::find()
            .select_only()
            .column(course_instances::Column::CourseId)
            .filter(
                Condition::all()
                    .add(course_instances::Column::Season.eq(semester.season.as_str()))
                    .add(course_instances::Column::Year.eq(*semester.year)),
            )
            .into_query();

        query.filter(courses::Column::Id.in_subquery(offered))
    }

    /// Keep courses with an instance taught by `professor_id`; no-op when missing
    pub fn filter_by_professor(
        query: Select<courses::Entity>,
        professor_id: Option<Uuid>,
    ) -> Select<courses::Entity> {
        let Some(professor_id) = professor_id else {
            return query;
        };

        let taught = course_instances::Entity::find()
            .select_only()
            .column(course_instances::Column::CourseId)
            .filter(course_instances::Column::ProfessorId.eq(professor_id))
            .into_query();

        query.filter(courses::Column::Id.in_subquery(taught))
    }

    /// Run every filter in `filter`, narrowing the result at each step
    ///
    /// Name matches come back best first; otherwise courses are ordered by code.
    pub async fn search<C, S>(
        db: &C,
        search: &S,
        filter: CourseFilter,
    ) -> Result<Vec<courses::Model>, DbErr>
    where
        C: ConnectionTrait,
        S: CourseSearch,
    {
        let ranked = match filter.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(search.search(db, name).await?),
            _ => None,
        };

        let mut query = courses::Entity::find();
        if let Some(ids) = &ranked {
            query = Self::restrict_to(query, ids.clone());
        }
        query = Self::filter_by_semester(query, filter.semester);
        query = Self::filter_by_professor(query, filter.professor);

        let mut courses = Self::ordered(query).all(db).await?;
        debug!("Course search {filter:?} matched {} courses", courses.len());

        if let Some(ids) = ranked {
            let rank: HashMap<Uuid, usize> =
                ids.into_iter().enumerate().map(|(i, id)| (id, i)).collect();
            courses.sort_by_key(|course| rank.get(&course.id).copied().unwrap_or(usize::MAX));
        }

        Ok(courses)
    }

    /// Offerings of a course, newest first
    pub async fn instances<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
    ) -> Result<Vec<course_instances::Model>, DbErr> {
        course_instances::Entity::find()
            .filter(course_instances::Column::CourseId.eq(course_id))
            .order_by_desc(course_instances::Column::EndDate)
            .all(db)
            .await
    }

    /// Records an offering of a course
    pub async fn add_instance<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
        professor_id: Option<Uuid>,
        semester: Semester,
        end_date: NaiveDate,
    ) -> Result<course_instances::Model, DbErr> {
        course_instances::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            professor_id: Set(professor_id),
            season: Set(semester.season.as_str().to_owned()),
            year: Set(*semester.year),
            end_date: Set(end_date),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(db)
        .await
    }

    /// True when at least one offering of the course can still be scheduled
    pub async fn is_schedulable<C: ConnectionTrait>(db: &C, course_id: Uuid) -> Result<bool, DbErr> {
        let instances = Self::instances(db, course_id).await?;
        Ok(course::is_schedulable(&instances))
    }

    /// Distinct professors teaching any offering of the course
    pub async fn professors<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
    ) -> Result<Vec<professors::Model>, DbErr> {
        let teaching = course_instances::Entity::find()
            .select_only()
            .column(course_instances::Column::ProfessorId)
            .filter(course_instances::Column::CourseId.eq(course_id))
            .into_query();

        professors::Entity::find()
            .filter(professors::Column::Id.in_subquery(teaching))
            .order_by_asc(professors::Column::Name)
            .all(db)
            .await
    }

    /// Professors of the course, leaving out "Staff"/"TBA" placeholders
    pub async fn real_professors<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
    ) -> Result<Vec<professors::Model>, DbErr> {
        Ok(professor::real_professors(
            Self::professors(db, course_id).await?,
        ))
    }
}
