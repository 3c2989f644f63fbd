//! Remote directory: reports and dashboards served from the REST services,
//! and how their failures reach the client.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use server::directory::HttpDirectory;
use shared_types::{PageBreakPolicy, Role};
use std::collections::HashMap;
use std::time::Duration;

use crate::common::{app_over, fixture_dataset, get_as, get_raw_as};

/// Listing that honours one optional id filter, like the real services.
fn listing(items: Value, param: &'static str, field: &'static str) -> MethodRouter {
    get(move |Query(query): Query<HashMap<String, String>>| {
        let items = items.as_array().cloned().unwrap_or_default();
        async move {
            let selected: Vec<Value> = match query.get(param).and_then(|v| v.parse::<i64>().ok()) {
                Some(id) => items.into_iter().filter(|item| item[field] == id).collect(),
                None => items,
            };
            Json(selected)
        }
    })
}

/// Directory services over the fixture dataset; `/tasks` answers 500 when `tasks_down`.
fn backend(tasks_down: bool) -> Router {
    let data = fixture_dataset();
    let users = data["users"].as_array().cloned().unwrap_or_default();
    let activities = data["activities"].clone();

    let tasks = if tasks_down {
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database is down") })
    } else {
        listing(data["tasks"].clone(), "userId", "assignedTo")
    };

    Router::new()
        .route(
            "/api/interns",
            listing(data["interns"].clone(), "encadreurUserId", "encadreurUserId"),
        )
        .route(
            "/api/projects",
            listing(data["projects"].clone(), "encadreurId", "encadreurId"),
        )
        .route("/api/tasks", tasks)
        .route(
            "/api/activities/recent",
            get(move || {
                let activities = activities.clone();
                async move { Json(activities) }
            }),
        )
        .route(
            "/api/users/{id}",
            get(move |Path(id): Path<i64>| {
                let found = users.iter().find(|u| u["userId"] == id).cloned();
                async move { found.map(Json).ok_or(StatusCode::NOT_FOUND) }
            }),
        )
}

/// Serve `router` on an ephemeral port and return its `/api` root.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

async fn remote_app(tasks_down: bool) -> Router {
    let base_url = spawn(backend(tasks_down)).await;
    let directory = HttpDirectory::new(&base_url, Duration::from_secs(5)).unwrap();
    app_over(directory, PageBreakPolicy::default())
}

#[tokio::test]
async fn remote_directory_feeds_the_overview() {
    let app = remote_app(false).await;

    let (status, body) = get_as(&app, "/api/reports/overview", Role::Admin, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success_rate"], 33);
    assert_eq!(body["task_completion_rate"], 50);
    assert_eq!(body["intern_count"], 3);

    let (status, body) = get_as(&app, "/api/reports/overview", Role::Encadreur, 900).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intern_count"], 2);
    assert_eq!(body["total_projects"], 2);
    assert_eq!(body["total_tasks"], 3);
}

#[tokio::test]
async fn remote_directory_resolves_feed_authors_and_profiles() {
    let app = remote_app(false).await;

    let (status, feed) = get_as(&app, "/api/dashboard/activity", Role::Admin, 1).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = feed
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["user_name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Utilisateur", "Awa Diallo", "Awa Diallo", "Jean Rakoto", "Marie Dupont"]
    );

    let (status, profile) = get_as(&app, "/api/profile", Role::Stagiaire, 20).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["lastName"], "Rakoto");

    let (status, _) = get_as(&app, "/api/profile", Role::Stagiaire, 4242).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn failing_service_answers_bad_gateway() {
    let app = remote_app(true).await;

    for uri in [
        "/api/reports/overview",
        "/api/dashboard/summary",
        "/api/dashboard/charts/role",
    ] {
        let (status, body) = get_as(&app, uri, Role::Admin, 1).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY, "{uri}");
        assert_eq!(body["kind"], "UpstreamError");
        assert!(body["message"].as_str().unwrap().contains("500"), "{uri}");
    }

    let (status, _, _) = get_raw_as(&app, "/api/reports/global", Role::Admin, 1).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unreachable_directory_answers_bad_gateway() {
    // Nothing listens on port 1.
    let directory = HttpDirectory::new("http://127.0.0.1:1/api", Duration::from_secs(2)).unwrap();
    let app = app_over(directory, PageBreakPolicy::default());

    let (status, body) = get_as(&app, "/api/reports/overview", Role::Stagiaire, 10).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "UpstreamError");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Directory unreachable"));
}
