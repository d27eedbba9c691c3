mod common;

use chrono::Utc;
use database::{entities::prerequisites, services::prerequisite::PrerequisiteService};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DbErr, EntityTrait};
use uuid::Uuid;

fn sorted(mut groups: Vec<Vec<Uuid>>) -> Vec<Vec<Uuid>> {
    groups.sort();
    groups
}

#[tokio::test]
async fn test_groups_keep_their_nesting() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let java = common::course(&db, "EECS", 132, "Intro to Java").await?;
    let discrete = common::course(&db, "MATH", 304, "Discrete Mathematics").await?;
    let structures = common::course(&db, "EECS", 233, "Data Structures").await?;
    let algorithms = common::course(&db, "EECS", 340, "Algorithms").await?;

    PrerequisiteService::add_group(&db, algorithms.id, &[structures.id, discrete.id]).await?;
    PrerequisiteService::add_group(&db, algorithms.id, &[java.id]).await?;

    let groups: Vec<Vec<Uuid>> = PrerequisiteService::prerequisites(&db, algorithms.id)
        .await?
        .into_iter()
        .map(|group| group.into_iter().map(|c| c.id).collect())
        .collect();

    assert_eq!(
        sorted(groups),
        sorted(vec![vec![structures.id, discrete.id], vec![java.id]])
    );
    Ok(())
}

#[tokio::test]
async fn test_postrequisites_are_distinct() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let java = common::course(&db, "EECS", 132, "Intro to Java").await?;
    let structures = common::course(&db, "EECS", 233, "Data Structures").await?;
    let algorithms = common::course(&db, "EECS", 340, "Algorithms").await?;

    PrerequisiteService::add_group(&db, structures.id, &[java.id]).await?;
    PrerequisiteService::add_group(&db, algorithms.id, &[java.id, structures.id]).await?;
    PrerequisiteService::add_group(&db, algorithms.id, &[java.id]).await?;

    let unlocked: Vec<Uuid> = PrerequisiteService::postrequisites(&db, java.id)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(unlocked, vec![structures.id, algorithms.id]);

    assert!(PrerequisiteService::postrequisites(&db, algorithms.id).await?.is_empty());
    assert!(PrerequisiteService::prerequisites(&db, java.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_graph_matches_stored_edges() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let java = common::course(&db, "EECS", 132, "Intro to Java").await?;
    let discrete = common::course(&db, "MATH", 304, "Discrete Mathematics").await?;
    let structures = common::course(&db, "EECS", 233, "Data Structures").await?;
    let algorithms = common::course(&db, "EECS", 340, "Algorithms").await?;

    PrerequisiteService::add_group(&db, structures.id, &[java.id]).await?;
    PrerequisiteService::add_group(&db, algorithms.id, &[structures.id, discrete.id]).await?;

    let graph = PrerequisiteService::graph(&db).await?;
    assert_eq!(
        graph.prerequisites(&algorithms.id),
        &[vec![structures.id, discrete.id]]
    );
    assert_eq!(graph.postrequisites(&java.id), &[structures.id]);

    assert!(graph.is_satisfied_by(&algorithms.id, &[structures.id, discrete.id]));
    assert!(!graph.is_satisfied_by(&algorithms.id, &[structures.id]));
    assert!(graph.is_satisfied_by(&java.id, &[]));
    Ok(())
}

#[tokio::test]
async fn test_empty_group_is_rejected() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let java = common::course(&db, "EECS", 132, "Intro to Java").await?;
    let algorithms = common::course(&db, "EECS", 340, "Algorithms").await?;

    PrerequisiteService::add_group(&db, algorithms.id, &[java.id]).await?;
    assert!(PrerequisiteService::add_group(&db, algorithms.id, &[]).await.is_err());

    assert_eq!(prerequisites::Entity::find().all(&db).await?.len(), 1);
    let groups = PrerequisiteService::prerequisites(&db, algorithms.id).await?;
    assert_eq!(groups.len(), 1);

    let graph = PrerequisiteService::graph(&db).await?;
    assert!(!graph.is_satisfied_by(&algorithms.id, &[]));
    Ok(())
}

#[tokio::test]
async fn test_edge_without_members_is_ignored() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let java = common::course(&db, "EECS", 132, "Intro to Java").await?;
    let algorithms = common::course(&db, "EECS", 340, "Algorithms").await?;

    PrerequisiteService::add_group(&db, algorithms.id, &[java.id]).await?;
    prerequisites::ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(algorithms.id),
        created_at: Set(Utc::now().naive_utc()),
    }
    .insert(&db)
    .await?;

    let groups: Vec<Vec<Uuid>> = PrerequisiteService::prerequisites(&db, algorithms.id)
        .await?
        .into_iter()
        .map(|group| group.into_iter().map(|c| c.id).collect())
        .collect();
    assert_eq!(groups, vec![vec![java.id]]);

    let graph = PrerequisiteService::graph(&db).await?;
    assert_eq!(graph.prerequisites(&algorithms.id), &[vec![java.id]]);
    assert!(!graph.is_satisfied_by(&algorithms.id, &[]));
    Ok(())
}
