mod common;

use database::services::{
    course::{CourseFilter, CourseService},
    search::{CourseSearch, TokenSearch},
};
use models::course::CourseCode;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

/// Search double returning a fixed ranking
struct FixedSearch(Vec<Uuid>);

impl CourseSearch for FixedSearch {
    async fn search<C: ConnectionTrait>(&self, _db: &C, _name: &str) -> Result<Vec<Uuid>, DbErr> {
        Ok(self.0.clone())
    }
}

struct Catalog {
    java: database::entities::courses::Model,
    theory: database::entities::courses::Model,
    algorithms: database::entities::courses::Model,
    lovelace: database::entities::professors::Model,
    turing: database::entities::professors::Model,
}

/// Java: Fall 2024 Lovelace, Spring 2025 Turing
/// Theory: Fall 2024 Turing
/// Algorithms: Spring 2025 Lovelace
async fn catalog(db: &DatabaseConnection) -> Result<Catalog, DbErr> {
    let java = common::course(db, "EECS", 132, "Intro to Java").await?;
    let theory = common::course(db, "EECS", 343, "Theoretical Computer Science").await?;
    let algorithms = common::course(db, "EECS", 340, "Algorithms").await?;
    let lovelace = common::professor(db, "Ada Lovelace").await?;
    let turing = common::professor(db, "Alan Turing").await?;

    common::offering(db, &java, Some(&lovelace), "F2024").await?;
    common::offering(db, &java, Some(&turing), "S2025").await?;
    common::offering(db, &theory, Some(&turing), "F2024").await?;
    common::offering(db, &algorithms, Some(&lovelace), "S2025").await?;

    Ok(Catalog {
        java,
        theory,
        algorithms,
        lovelace,
        turing,
    })
}

fn ids(courses: &[database::entities::courses::Model]) -> Vec<Uuid> {
    courses.iter().map(|c| c.id).collect()
}

#[tokio::test]
async fn test_empty_filter_returns_all() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let catalog = catalog(&db).await?;

    let courses = CourseService::search(&db, &TokenSearch, CourseFilter::default()).await?;
    assert_eq!(
        ids(&courses),
        vec![catalog.java.id, catalog.algorithms.id, catalog.theory.id]
    );
    assert_eq!(courses, CourseService::all(&db).await?);
    Ok(())
}

#[tokio::test]
async fn test_blank_name_is_ignored() -> Result<(), DbErr> {
    let db = common::setup().await?;
    catalog(&db).await?;

    let filter = CourseFilter {
        name: Some("   ".to_string()),
        ..Default::default()
    };
    let courses = CourseService::search(&db, &FixedSearch(vec![]), filter).await?;
    assert_eq!(courses.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_filter_by_semester() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let catalog = catalog(&db).await?;

    let filter = CourseFilter {
        semester: Some(common::semester("F2024")),
        ..Default::default()
    };
    let courses = CourseService::search(&db, &TokenSearch, filter).await?;
    assert_eq!(ids(&courses), vec![catalog.java.id, catalog.theory.id]);

    let filter = CourseFilter {
        semester: Some(common::semester("M2024")),
        ..Default::default()
    };
    assert!(CourseService::search(&db, &TokenSearch, filter).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_filter_by_professor() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let catalog = catalog(&db).await?;

    let filter = CourseFilter {
        professor: Some(catalog.turing.id),
        ..Default::default()
    };
    let courses = CourseService::search(&db, &TokenSearch, filter).await?;
    assert_eq!(ids(&courses), vec![catalog.java.id, catalog.theory.id]);
    Ok(())
}

#[tokio::test]
async fn test_filters_intersect() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let catalog = catalog(&db).await?;

    let filter = CourseFilter {
        semester: Some(common::semester("F2024")),
        professor: Some(catalog.lovelace.id),
        ..Default::default()
    };
    let courses = CourseService::search(&db, &TokenSearch, filter).await?;
    assert_eq!(ids(&courses), vec![catalog.java.id]);

    let filter = CourseFilter {
        name: Some("anything".to_string()),
        semester: Some(common::semester("S2025")),
        professor: Some(catalog.turing.id),
    };
    let search = FixedSearch(vec![catalog.theory.id, catalog.algorithms.id]);
    let courses = CourseService::search(&db, &search, filter).await?;
    assert!(courses.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_name_filter_keeps_search_order() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let catalog = catalog(&db).await?;

    let filter = CourseFilter {
        name: Some("whatever".to_string()),
        ..Default::default()
    };
    let search = FixedSearch(vec![catalog.theory.id, catalog.java.id]);
    let courses = CourseService::search(&db, &search, filter).await?;
    assert_eq!(ids(&courses), vec![catalog.theory.id, catalog.java.id]);
    Ok(())
}

#[tokio::test]
async fn test_token_search_ranks_matches() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let catalog = catalog(&db).await?;

    let ranked = TokenSearch.search(&db, "eecs java").await?;
    assert_eq!(ranked.first(), Some(&catalog.java.id));
    assert_eq!(ranked.len(), 3);

    assert!(TokenSearch.search(&db, "jav").await?.is_empty());

    let filter = CourseFilter {
        name: Some("algorithms".to_string()),
        ..Default::default()
    };
    let courses = CourseService::search(&db, &TokenSearch, filter).await?;
    assert_eq!(ids(&courses), vec![catalog.algorithms.id]);
    Ok(())
}

#[tokio::test]
async fn test_filter_by_name_composes_with_query() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let catalog = catalog(&db).await?;

    let query = database::entities::courses::Entity::find();
    let query = CourseService::filter_by_semester(query, Some(common::semester("F2024")));
    let query = CourseService::filter_by_name(&db, &TokenSearch, query, Some("java")).await?;
    let courses = query.all(&db).await?;
    assert_eq!(ids(&courses), vec![catalog.java.id]);

    let query = database::entities::courses::Entity::find();
    let query = CourseService::filter_by_name(&db, &TokenSearch, query, None).await?;
    assert_eq!(query.all(&db).await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_find_or_create_reuses_course() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let code = CourseCode::new("EECS", 132);

    let created = CourseService::find_or_create(&db, &code, "Intro to Java").await?;
    let found = CourseService::find_or_create(&db, &code, "Other title").await?;
    assert_eq!(created, found);
    assert_eq!(found.long_string(), "EECS 132: Intro to Java");
    assert_eq!(found.code().to_param(), "EECS132");

    let by_code = CourseService::find_by_code(&db, &"eecs132".parse().expect("valid code")).await?;
    assert_eq!(by_code, Some(created));
    Ok(())
}

#[tokio::test]
async fn test_real_professors_skip_placeholders() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let course = common::course(&db, "EECS", 132, "Intro to Java").await?;
    let staff = common::professor(&db, "Staff").await?;
    let tba = common::professor(&db, "TBA").await?;
    let lovelace = common::professor(&db, "Ada Lovelace").await?;

    common::offering(&db, &course, Some(&staff), "F2024").await?;
    common::offering(&db, &course, Some(&tba), "S2025").await?;
    common::offering(&db, &course, Some(&lovelace), "F2025").await?;
    common::offering(&db, &course, None, "S2026").await?;

    assert_eq!(CourseService::professors(&db, course.id).await?.len(), 3);
    assert_eq!(
        CourseService::real_professors(&db, course.id).await?,
        vec![lovelace]
    );
    Ok(())
}

#[tokio::test]
async fn test_real_professors_all_placeholders() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let course = common::course(&db, "EECS", 132, "Intro to Java").await?;
    let staff = common::professor(&db, "Staff").await?;
    common::offering(&db, &course, Some(&staff), "F2024").await?;

    assert!(CourseService::real_professors(&db, course.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_schedulable() -> Result<(), DbErr> {
    let db = common::setup().await?;
    let upcoming = common::course(&db, "EECS", 132, "Intro to Java").await?;
    let past = common::course(&db, "EECS", 233, "Data Structures").await?;
    let never = common::course(&db, "EECS", 281, "Logic Design").await?;
    let term = common::semester("F2024");

    CourseService::add_instance(&db, upcoming.id, None, term, common::days_from_today(-200)).await?;
    CourseService::add_instance(&db, upcoming.id, None, term, common::days_from_today(10)).await?;
    CourseService::add_instance(&db, past.id, None, term, common::days_from_today(-1)).await?;

    assert!(CourseService::is_schedulable(&db, upcoming.id).await?);
    assert!(!CourseService::is_schedulable(&db, past.id).await?);
    assert!(!CourseService::is_schedulable(&db, never.id).await?);
    Ok(())
}
