use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::Role;

use crate::common::{get_as, test_app};

const OVERVIEW: &str = "/api/reports/overview";

#[tokio::test]
async fn admin_sees_every_record() {
    let app = test_app();

    let (status, body) = get_as(&app, OVERVIEW, Role::Admin, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "ADMIN");
    assert_eq!(body["total_projects"], 3);
    assert_eq!(body["total_tasks"], 4);
    // one of three projects completed, two of four tasks done
    assert_eq!(body["success_rate"], 33);
    assert_eq!(body["task_completion_rate"], 50);
    assert_eq!(body["intern_count"], 3);
    assert_eq!(
        body["sections"],
        json!([
            "header",
            "global_summary",
            "intern_details",
            "project_details",
            "task_statistics",
            "conclusion"
        ])
    );
}

#[tokio::test]
async fn supervisor_sees_only_supervised_records() {
    let app = test_app();

    let (status, body) = get_as(&app, OVERVIEW, Role::Encadreur, 900).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intern_count"], 2);
    assert_eq!(body["total_projects"], 2);
    assert_eq!(body["total_tasks"], 3);
    assert_eq!(body["success_rate"], 50);
    assert_eq!(body["task_completion_rate"], 67);
}

#[tokio::test]
async fn intern_overview_hides_intern_details() {
    let app = test_app();

    let (status, body) = get_as(&app, OVERVIEW, Role::Stagiaire, 10).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "STAGIAIRE");
    assert_eq!(body["total_projects"], 1);
    assert_eq!(body["total_tasks"], 2);
    assert_eq!(body["success_rate"], 0);
    assert_eq!(body["task_completion_rate"], 50);
    assert!(body.get("intern_count").is_none());

    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 5);
    assert!(!sections.contains(&json!("intern_details")));
    assert_eq!(body["section_labels"][0], "En-tête du rapport");
}

#[tokio::test]
async fn unknown_supervisor_gets_zero_rates() {
    let app = test_app();

    let (status, body) = get_as(&app, OVERVIEW, Role::Encadreur, 555).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intern_count"], 0);
    assert_eq!(body["total_projects"], 0);
    assert_eq!(body["success_rate"], 0);
    assert_eq!(body["task_completion_rate"], 0);
}
