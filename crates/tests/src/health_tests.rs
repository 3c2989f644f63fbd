use axum::http::StatusCode;
use server::directory::HttpDirectory;
use shared_types::PageBreakPolicy;
use std::time::Duration;

use crate::common::{app_over, get_with_headers, test_app};

#[tokio::test]
async fn health_reports_local_directory() {
    let app = test_app();

    let (status, body) = get_with_headers(&app, "/health", &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["directory"]["backend"], "memory");
    assert_eq!(body["directory"]["records"], 10);
    assert_eq!(body["page_breaks"], "measured");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_does_not_need_a_reachable_remote_directory() {
    let directory = HttpDirectory::new("http://127.0.0.1:1/api", Duration::from_secs(1)).unwrap();
    let app = app_over(directory, PageBreakPolicy::Heuristic);

    let (status, body) = get_with_headers(&app, "/health", &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["directory"]["backend"], "http");
    assert!(body["directory"].get("records").is_none());
    assert_eq!(body["page_breaks"], "heuristic");
}

#[tokio::test]
async fn api_docs_are_served() {
    let app = test_app();

    let (status, _) = get_with_headers(&app, "/docs", &[]).await;

    assert_eq!(status, StatusCode::OK);
}
