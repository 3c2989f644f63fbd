use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::Role;

use crate::common::{get_as, test_app};

fn points(chart: &Value) -> Vec<(String, u64)> {
    chart["points"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["label"].as_str().unwrap().to_string(),
                p["value"].as_u64().unwrap(),
            )
        })
        .collect()
}

#[tokio::test]
async fn admin_summary_metrics() {
    let app = test_app();

    let (status, body) = get_as(&app, "/api/dashboard/summary", Role::Admin, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "ADMIN");
    assert_eq!(body["role_label"], "Responsable RH");
    assert_eq!(body["user_name"], "Utilisateur");
    assert_eq!(
        body["metrics"],
        json!({
            "total_interns": 3,
            "active_projects": 1,
            "completed_tasks": 2,
            "success_rate": 33
        })
    );
    let greeting = body["greeting"].as_str().unwrap();
    assert!(["Bonjour", "Bon après-midi", "Bonsoir"].contains(&greeting));
}

#[tokio::test]
async fn intern_summary_hides_intern_count() {
    let app = test_app();

    let (status, body) = get_as(&app, "/api/dashboard/summary", Role::Stagiaire, 10).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metrics"]["total_interns"], 0);
    assert_eq!(body["metrics"]["active_projects"], 1);
    assert_eq!(body["metrics"]["completed_tasks"], 1);
    assert_eq!(
        body["welcome_message"],
        "Consultez vos projets et suivez vos progressions."
    );
}

#[tokio::test]
async fn project_status_chart_follows_first_appearance() {
    let app = test_app();

    let (status, body) =
        get_as(&app, "/api/dashboard/charts/project-status", Role::Admin, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Répartition des Statuts de Projets");
    assert_eq!(body["kind"], "pie");
    assert_eq!(
        points(&body),
        vec![
            ("En cours".to_string(), 1),
            ("Terminé".to_string(), 1),
            ("Planification".to_string(), 1),
        ]
    );
}

#[tokio::test]
async fn admin_role_chart_groups_departments() {
    let app = test_app();

    let (status, body) = get_as(&app, "/api/dashboard/charts/role", Role::Admin, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Stagiaires par Département");
    assert_eq!(body["kind"], "bar");
    assert_eq!(
        points(&body),
        vec![("Informatique".to_string(), 2), ("Marketing".to_string(), 1)]
    );
}

#[tokio::test]
async fn supervisor_role_chart_uses_supervised_projects() {
    let app = test_app();

    let (status, body) = get_as(&app, "/api/dashboard/charts/role", Role::Encadreur, 901).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Mes Projets par Statut");
    assert_eq!(body["kind"], "pie");
    assert_eq!(points(&body), vec![("Planification".to_string(), 1)]);
    assert_eq!(body["points"][0]["color"], "#6b7280");
}

#[tokio::test]
async fn intern_role_chart_shows_progress() {
    let app = test_app();

    let (status, body) = get_as(&app, "/api/dashboard/charts/role", Role::Stagiaire, 20).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Progression de Mes Projets");
    assert_eq!(body["series_name"], "Progression (%)");
    assert_eq!(points(&body), vec![("Application mobile".to_string(), 100)]);
}
