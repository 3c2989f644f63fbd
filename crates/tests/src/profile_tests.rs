use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::Role;

use crate::common::{get_as, get_with_headers, send_json_as, test_app};

#[tokio::test]
async fn current_profile_is_returned() {
    let app = test_app();

    let (status, body) = get_as(&app, "/api/profile", Role::Stagiaire, 10).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "userId": 10,
            "firstName": "Awa",
            "lastName": "Diallo",
            "email": "awa.diallo@example.com",
            "phone": "06 12 34 56 78",
            "department": "Informatique"
        })
    );
}

#[tokio::test]
async fn unknown_account_is_not_found() {
    let app = test_app();

    let (status, body) = get_as(&app, "/api/profile", Role::Admin, 4242).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
async fn profile_requires_identity() {
    let app = test_app();

    let (status, body) = get_with_headers(&app, "/api/profile", &[]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing X-User-Role header");
}

#[tokio::test]
async fn update_is_trimmed_and_persisted() {
    let app = test_app();

    let (status, body) = send_json_as(
        &app,
        "PUT",
        "/api/profile",
        Role::Encadreur,
        900,
        json!({
            "firstName": "  Marie-Claire ",
            "lastName": "Dupont",
            "phone": "+33 (0)6 11 22 33 44",
            "department": "  "
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Marie-Claire");
    assert_eq!(body["phone"], "+33 (0)6 11 22 33 44");
    assert!(body["department"].is_null());

    let (_, reread) = get_as(&app, "/api/profile", Role::Encadreur, 900).await;
    assert_eq!(reread, body);

    // The activity feed picks up the new name.
    let (_, feed) = get_as(&app, "/api/dashboard/activity", Role::Admin, 1).await;
    let authored: Vec<&str> = feed
        .as_array()
        .unwrap()
        .iter()
        .filter(|item| item["id"] == 5)
        .map(|item| item["user_name"].as_str().unwrap())
        .collect();
    assert_eq!(authored, vec!["Marie-Claire Dupont"]);
}

#[tokio::test]
async fn invalid_fields_are_rejected_with_details() {
    let app = test_app();

    let (status, body) = send_json_as(
        &app,
        "PUT",
        "/api/profile",
        Role::Stagiaire,
        10,
        json!({ "firstName": "", "lastName": "Diallo", "phone": "appelle-moi" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    let fields = body["field_errors"].as_object().unwrap();
    assert!(fields.contains_key("first_name"));
    assert_eq!(fields["phone"], "Numéro de téléphone invalide");
    assert!(!fields.contains_key("last_name"));

    let (_, unchanged) = get_as(&app, "/api/profile", Role::Stagiaire, 10).await;
    assert_eq!(unchanged["firstName"], "Awa");
}

#[tokio::test]
async fn updating_unknown_account_is_not_found() {
    let app = test_app();

    let (status, body) = send_json_as(
        &app,
        "PUT",
        "/api/profile",
        Role::Stagiaire,
        4242,
        json!({ "firstName": "Paul", "lastName": "Martin" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}
