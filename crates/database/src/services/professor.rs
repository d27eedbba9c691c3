use crate::entities::professors;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, sea_query::OnConflict,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

pub struct ProfessorService;

impl ProfessorService {
    pub async fn find<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<professors::Model>, DbErr> {
        professors::Entity::find_by_id(id).one(db).await
    }

    /// Resolve professor names to ids, creating the ones that don't exist yet
    ///
    /// Placeholder names such as "Staff" are stored like any other name; they
    /// are filtered out when listing a course's real professors. Names that
    /// already exist, including ones created concurrently, keep their id.
    pub async fn find_or_create_many(
        db: &DatabaseConnection,
        names: impl IntoIterator<Item = String>,
    ) -> Result<HashMap<String, Uuid>, DbErr> {
        let names: HashSet<String> = names.into_iter().collect();
        if names.is_empty() {
            return Ok(HashMap::new());
        }

        let now = Utc::now().naive_utc();
        let candidates = names.iter().map(|name| professors::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.clone()),
            created_at: Set(now),
        });

        // Existing names are skipped by the unique name index
        let created = professors::Entity::insert_many(candidates)
            .on_conflict(
                OnConflict::column(professors::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
        if created > 0 {
            info!("Created {created} new professors");
        }

        Ok(professors::Entity::find()
            .filter(professors::Column::Name.is_in(names))
            .all(db)
            .await?
            .into_iter()
            .map(|professor| (professor.name, professor.id))
            .collect())
    }

    pub async fn find_or_create(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<professors::Model, DbErr> {
        let ids = Self::find_or_create_many(db, [name.to_string()]).await?;
        let id = ids
            .get(name)
            .copied()
            .ok_or_else(|| DbErr::RecordNotFound(name.to_string()))?;

        professors::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(name.to_string()))
    }
}
