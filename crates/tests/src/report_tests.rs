use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;
use shared_types::{PageBreakPolicy, Role};

use crate::common::{fixture_dataset, get_as, get_raw_as, test_app, test_app_with};

const REPORT: &str = "/api/reports/global";

#[tokio::test]
async fn admin_report_downloads_as_pdf() {
    let app = test_app();

    let (status, headers, bytes) = get_raw_as(&app, REPORT, Role::Admin, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").unwrap().to_str().unwrap(),
        "application/pdf"
    );
    assert!(
        bytes.starts_with(b"%PDF-"),
        "Response should start with PDF magic bytes"
    );
}

#[tokio::test]
async fn report_is_named_after_role_and_date() {
    let app = test_app();
    let today = Utc::now().format("%Y-%m-%d").to_string();

    let (status, headers, _) = get_raw_as(&app, REPORT, Role::Encadreur, 900).await;

    assert_eq!(status, StatusCode::OK);
    let disposition = headers
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(disposition.starts_with("attachment; filename=\"Rapport_ENCADREUR_"));
    assert!(disposition.ends_with(".pdf\""));
    // Day may roll over between the request and this assertion.
    let yesterday = (Utc::now() - chrono::Duration::days(1))
        .format("%Y-%m-%d")
        .to_string();
    assert!(disposition.contains(&today) || disposition.contains(&yesterday));
}

#[tokio::test]
async fn intern_report_renders() {
    let app = test_app();

    let (status, headers, bytes) = get_raw_as(&app, REPORT, Role::Stagiaire, 10).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("Rapport_STAGIAIRE_"));
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn intern_without_record_gets_empty_report() {
    let app = test_app();

    let (status, _, bytes) = get_raw_as(&app, REPORT, Role::Stagiaire, 4242).await;

    assert_eq!(status, StatusCode::OK);
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn empty_directory_still_renders() {
    let app = test_app_with(json!({}), PageBreakPolicy::Heuristic);

    let (status, _, bytes) = get_raw_as(&app, REPORT, Role::Admin, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn measured_page_breaks_render_long_reports() {
    let mut dataset = fixture_dataset();
    let projects: Vec<_> = (0..25)
        .map(|i| {
            json!({
                "id": 500 + i, "title": format!("Projet {i}"),
                "description": "Étude ".repeat(30),
                "status": "IN_PROGRESS", "progress": 50, "department": "Informatique",
                "startDate": "2024-02-01", "endDate": "2024-06-30",
                "stagiaireId": 1, "encadreurId": 900
            })
        })
        .collect();
    dataset["projects"] = json!(projects);
    let app = test_app_with(dataset, PageBreakPolicy::Measured);

    let (status, _, bytes) = get_raw_as(&app, REPORT, Role::Admin, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn invalid_records_are_rejected_before_rendering() {
    let mut dataset = fixture_dataset();
    dataset["projects"][0]["title"] = json!("");
    let app = test_app_with(dataset, PageBreakPolicy::Heuristic);

    let (status, body) = get_as(&app, REPORT, Role::Admin, 1).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    assert!(body["field_errors"]
        .as_object()
        .unwrap()
        .keys()
        .any(|k| k.starts_with("projects[0]")));
}

#[tokio::test]
async fn out_of_range_progress_is_rejected() {
    let mut dataset = fixture_dataset();
    dataset["projects"][1]["progress"] = json!(140);
    let app = test_app_with(dataset, PageBreakPolicy::Heuristic);

    let (status, body) = get_as(&app, REPORT, Role::Admin, 1).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
}
