//! Unit tests for the work item resolver

use std::sync::Arc;

use olc_application::{WorkItemResolver, parse_sharing_target_names};
use olc_domain::Error;
use olc_domain::value_objects::{QueryHandle, QueryPage, SharingTarget};

use crate::test_utils::{FakeRepository, PROJECT_AREA, QUERY, project_area, work_item};

fn shared_repository() -> FakeRepository {
    let mut repository = FakeRepository::with_query(vec![work_item(1)]);
    repository.process_areas = vec![
        SharingTarget {
            item_id: "_pa1".to_string(),
            name: PROJECT_AREA.to_string(),
        },
        SharingTarget {
            item_id: "_ta1".to_string(),
            name: format!("{PROJECT_AREA}/Business Recovery Matters"),
        },
    ];
    repository.shared_queries = vec![(
        QueryHandle {
            item_id: "_sq1".to_string(),
            name: "Team Defects".to_string(),
        },
        vec!["_ta1".to_string()],
    )];
    repository
}

#[test]
fn test_parse_sharing_target_names() {
    assert_eq!(
        parse_sharing_target_names("JKE Banking (Change Management), JKE Banking (Change Management)/Business Recovery Matters"),
        vec![
            "JKE Banking (Change Management)",
            "JKE Banking (Change Management)/Business Recovery Matters"
        ]
    );
    assert_eq!(parse_sharing_target_names(" a ,, b ,"), vec!["a", "b"]);
    assert!(parse_sharing_target_names(" , ").is_empty());
}

#[tokio::test]
async fn test_resolve_project_area_trims_name() {
    let resolver = WorkItemResolver::new(Arc::new(FakeRepository::with_query(vec![])));
    let area = resolver
        .resolve_project_area(&format!("  {PROJECT_AREA} "))
        .await
        .unwrap();
    assert_eq!(area, project_area());
}

#[tokio::test]
async fn test_unknown_project_area_is_not_found() {
    let resolver = WorkItemResolver::new(Arc::new(FakeRepository::with_query(vec![])));
    let err = resolver.resolve_project_area("Nope").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { ref resource } if resource.contains("Project Area not found: Nope")));
}

#[tokio::test]
async fn test_resolve_personal_query() {
    let resolver = WorkItemResolver::new(Arc::new(FakeRepository::with_query(vec![])));
    let query = resolver
        .resolve_query(&project_area(), QUERY, None)
        .await
        .unwrap();
    assert_eq!(query.name, QUERY);
}

#[tokio::test]
async fn test_missing_personal_query_is_not_found() {
    let resolver = WorkItemResolver::new(Arc::new(FakeRepository::with_query(vec![])));
    let err = resolver
        .resolve_query(&project_area(), "Unknown", None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_empty_query_name_is_rejected() {
    let resolver = WorkItemResolver::new(Arc::new(FakeRepository::with_query(vec![])));
    let err = resolver
        .resolve_query(&project_area(), "  ", None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_resolve_shared_query() {
    let resolver = WorkItemResolver::new(Arc::new(shared_repository()));
    let query = resolver
        .resolve_query(
            &project_area(),
            "Team Defects",
            Some(&format!("{PROJECT_AREA},{PROJECT_AREA}/Business Recovery Matters")),
        )
        .await
        .unwrap();
    assert_eq!(query.item_id, "_sq1");
}

#[tokio::test]
async fn test_shared_scope_does_not_see_personal_queries() {
    let resolver = WorkItemResolver::new(Arc::new(shared_repository()));
    let err = resolver
        .resolve_query(&project_area(), QUERY, Some(PROJECT_AREA))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_unresolvable_sharing_target_fails() {
    let resolver = WorkItemResolver::new(Arc::new(shared_repository()));
    let err = resolver
        .resolve_query(
            &project_area(),
            "Team Defects",
            Some(&format!("{PROJECT_AREA},Ghost Team")),
        )
        .await
        .unwrap_err();
    match err {
        Error::NotFound { resource } => assert!(resource.contains("Ghost Team")),
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_streams_all_pages_in_order() {
    let mut repository = FakeRepository::with_query(vec![]);
    repository.pages.insert(
        String::new(),
        QueryPage {
            total: 3,
            work_items: vec![work_item(1), work_item(2)],
            next_page: Some("p2".to_string()),
        },
    );
    repository.pages.insert(
        "p2".to_string(),
        QueryPage {
            total: 3,
            work_items: vec![work_item(3)],
            next_page: None,
        },
    );
    let repository = Arc::new(repository);
    let resolver = WorkItemResolver::new(repository.clone());
    let query = resolver
        .resolve_query(&project_area(), QUERY, None)
        .await
        .unwrap();

    let mut results = resolver.execute(&query).await.unwrap();
    assert_eq!(results.total(), 3);
    // Only the first page is fetched up front
    assert_eq!(repository.page_fetches.lock().unwrap().len(), 1);

    let mut ids = Vec::new();
    while let Some(item) = results.next().await.unwrap() {
        ids.push(item.id);
    }
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(
        *repository.page_fetches.lock().unwrap(),
        vec![None, Some("p2".to_string())]
    );
    assert!(results.next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_execute_empty_result_set() {
    let resolver = WorkItemResolver::new(Arc::new(FakeRepository::with_query(vec![])));
    let query = resolver
        .resolve_query(&project_area(), QUERY, None)
        .await
        .unwrap();
    let mut results = resolver.execute(&query).await.unwrap();
    assert_eq!(results.total(), 0);
    assert!(results.next().await.unwrap().is_none());
}
