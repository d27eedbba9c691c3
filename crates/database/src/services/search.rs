use crate::entities::courses;
use models::matcher::{self, CourseText};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, prelude::Uuid};
use std::future::Future;

/// Full text search over course names
///
/// Implementations return the ids of matching courses, best match first.
/// Courses that do not match at all must be left out.
pub trait CourseSearch {
    fn search<C: ConnectionTrait>(
        &self,
        db: &C,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Uuid>, DbErr>> + Send;
}

/// Ranks every course by whole-word matches against its code and title
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSearch;

fn course_text(course: &courses::Model) -> CourseText<'_> {
    CourseText {
        department: &course.department,
        number: course.number,
        title: &course.title,
    }
}

impl CourseSearch for TokenSearch {
    async fn search<C: ConnectionTrait>(&self, db: &C, name: &str) -> Result<Vec<Uuid>, DbErr> {
        let courses = courses::Entity::find().all(db).await?;

        Ok(matcher::rank(courses, Some(name), course_text)
            .into_iter()
            .map(|course| course.id)
            .collect())
    }
}
