use crate::entities::{courses, prerequisite_courses, prerequisites};
use chrono::Utc;
use log::info;
use models::prerequisite::{PrerequisiteEdge, PrerequisiteGraph};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

pub struct PrerequisiteService;

impl PrerequisiteService {
    /// Adds a prerequisite group: `course_id` requires every course in `members`
    ///
    /// An empty group is rejected, since it would count as already completed.
    pub async fn add_group(
        db: &DatabaseConnection,
        course_id: Uuid,
        members: &[Uuid],
    ) -> Result<prerequisites::Model, DbErr> {
        if members.is_empty() {
            return Err(DbErr::Custom(format!(
                "empty prerequisite group for course {course_id}"
            )));
        }

        let txn = db.begin().await?;

        let edge = prerequisites::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(&txn)
        .await?;

        let rows = members
            .iter()
            .enumerate()
            .map(|(position, member)| prerequisite_courses::ActiveModel {
                id: Set(Uuid::new_v4()),
                prerequisite_id: Set(edge.id),
                course_id: Set(*member),
                position: Set(position as i32),
            });

        prerequisite_courses::Entity::insert_many(rows)
            .exec_without_returning(&txn)
            .await?;

        txn.commit().await?;
        info!(
            "Added prerequisite group of {} courses to {course_id}",
            members.len()
        );

        Ok(edge)
    }

    /// Prerequisite groups of a course, one inner list per edge record
    pub async fn prerequisites<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
    ) -> Result<Vec<Vec<courses::Model>>, DbErr> {
        let edges = prerequisites::Entity::find()
            .filter(prerequisites::Column::CourseId.eq(course_id))
            .order_by_asc(prerequisites::Column::CreatedAt)
            .order_by_asc(prerequisites::Column::Id)
            .all(db)
            .await?;

        if edges.is_empty() {
            return Ok(vec![]);
        }

        let edge_ids: Vec<Uuid> = edges.iter().map(|e| e.id).collect();

        // Batch fetch all group members with their courses
        let members: Vec<(prerequisite_courses::Model, courses::Model)> =
            prerequisite_courses::Entity::find()
                .filter(prerequisite_courses::Column::PrerequisiteId.is_in(edge_ids))
                .order_by_asc(prerequisite_courses::Column::Position)
                .find_also_related(courses::Entity)
                .all(db)
                .await?
                .into_iter()
                .filter_map(|(member, course)| course.map(|c| (member, c)))
                .collect();

        let mut members_by_edge: HashMap<Uuid, Vec<courses::Model>> = HashMap::new();
        for (member, course) in members {
            members_by_edge
                .entry(member.prerequisite_id)
                .or_default()
                .push(course);
        }

        // Edges without members are not requirements
        Ok(edges
            .into_iter()
            .filter_map(|edge| members_by_edge.remove(&edge.id))
            .collect())
    }

    /// Distinct courses that list `course_id` in one of their groups
    pub async fn postrequisites<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
    ) -> Result<Vec<courses::Model>, DbErr> {
        let edges_listing_course = prerequisite_courses::Entity::find()
            .select_only()
            .column(prerequisite_courses::Column::PrerequisiteId)
            .filter(prerequisite_courses::Column::CourseId.eq(course_id))
            .into_query();

        let unlocked = prerequisites::Entity::find()
            .select_only()
            .column(prerequisites::Column::CourseId)
            .filter(prerequisites::Column::Id.in_subquery(edges_listing_course))
            .into_query();

        courses::Entity::find()
            .filter(courses::Column::Id.in_subquery(unlocked))
            .order_by_asc(courses::Column::Department)
            .order_by_asc(courses::Column::Number)
            .all(db)
            .await
    }

    /// Loads every edge record into an in-memory graph
    pub async fn graph<C: ConnectionTrait>(db: &C) -> Result<PrerequisiteGraph<Uuid>, DbErr> {
        let edges = prerequisites::Entity::find()
            .order_by_asc(prerequisites::Column::CreatedAt)
            .order_by_asc(prerequisites::Column::Id)
            .all(db)
            .await?;

        let mut members_by_edge: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for member in prerequisite_courses::Entity::find()
            .order_by_asc(prerequisite_courses::Column::Position)
            .all(db)
            .await?
        {
            members_by_edge
                .entry(member.prerequisite_id)
                .or_default()
                .push(member.course_id);
        }

        Ok(PrerequisiteGraph::from_edges(edges.into_iter().map(
            |edge| PrerequisiteEdge {
                course: edge.course_id,
                group: members_by_edge.remove(&edge.id).unwrap_or_default(),
            },
        )))
    }
}
