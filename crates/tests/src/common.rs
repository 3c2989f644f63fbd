use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use server::directory::{DirectoryBackend, InMemoryDirectory};
use server::state::AppState;
use shared_types::{PageBreakPolicy, ReportSettings, Role};
use tower::ServiceExt;

/// Three interns across two supervisors, one project each, four tasks and
/// six activities (one by an account with no profile).
pub fn fixture_dataset() -> Value {
    json!({
        "interns": [
            {
                "id": 1, "firstName": "Awa", "lastName": "Diallo",
                "email": "awa.diallo@example.com", "department": "Informatique",
                "status": "ACTIF", "userId": 10, "encadreurUserId": 900
            },
            {
                "id": 2, "firstName": "Jean", "lastName": "Rakoto",
                "email": "jean.rakoto@example.com", "department": "Marketing",
                "status": "ACTIF", "userId": 20, "encadreurUserId": 900
            },
            {
                "id": 3, "firstName": "Lina", "lastName": "Haddad",
                "email": "lina.haddad@example.com", "department": "Informatique",
                "status": "ACTIF", "userId": 30, "encadreurUserId": 901
            }
        ],
        "projects": [
            {
                "id": 100, "title": "Portail RH", "description": "Refonte du portail interne",
                "status": "IN_PROGRESS", "progress": 40, "department": "Informatique",
                "startDate": "2024-02-01", "endDate": "2024-06-30",
                "stagiaireId": 1, "encadreurId": 900
            },
            {
                "id": 101, "title": "Application mobile", "description": "Suivi des congés",
                "status": "COMPLETED", "progress": 100, "department": "Marketing",
                "startDate": "2024-01-15", "endDate": "2024-05-31",
                "stagiaireId": 2, "encadreurId": 900
            },
            {
                "id": 102, "title": "Tableau de bord", "description": "Indicateurs RH",
                "status": "PLANNING", "progress": 0, "department": "Informatique",
                "startDate": "2024-03-01", "endDate": "2024-08-31",
                "stagiaireId": 3, "encadreurId": 901
            }
        ],
        "tasks": [
            { "id": 1, "projectId": 100, "title": "Maquettes", "assignedTo": 10, "status": "DONE", "priority": "HIGH" },
            { "id": 2, "projectId": 100, "title": "API", "assignedTo": 10, "status": "TODO", "priority": "MEDIUM" },
            { "id": 3, "projectId": 101, "title": "Publication", "assignedTo": 20, "status": "DONE", "priority": "LOW" },
            { "id": 4, "projectId": 102, "title": "Cadrage", "assignedTo": 30, "status": "IN_PROGRESS", "priority": "HIGH" }
        ],
        "activities": [
            { "id": 1, "userId": 900, "entityType": "PROJECT", "description": "Projet créé", "createdAt": "2024-03-01T08:00:00Z" },
            { "id": 2, "userId": 10, "entityType": "TASK", "description": "Tâche terminée", "createdAt": "2024-03-06T09:30:00Z" },
            { "id": 3, "userId": 20, "entityType": "TASK", "description": "Tâche démarrée", "createdAt": "2024-03-04T14:00:00Z" },
            { "id": 4, "userId": 999, "entityType": "USER", "description": "Connexion", "createdAt": "2024-03-07T07:45:00Z" },
            { "id": 5, "userId": 900, "entityType": "INTERN", "description": "Stagiaire ajouté", "createdAt": "2024-03-02T10:00:00Z" },
            { "id": 6, "userId": 10, "entityType": "PROJECT", "description": "Projet mis à jour", "createdAt": "2024-03-05T16:20:00Z" }
        ],
        "users": [
            {
                "userId": 10, "firstName": "Awa", "lastName": "Diallo",
                "email": "awa.diallo@example.com", "phone": "06 12 34 56 78",
                "department": "Informatique"
            },
            { "userId": 20, "firstName": "Jean", "lastName": "Rakoto" },
            { "userId": 900, "firstName": "Marie", "lastName": "Dupont" }
        ]
    })
}

/// Router over the fixture dataset with default report settings.
pub fn test_app() -> Router {
    test_app_with(fixture_dataset(), PageBreakPolicy::default())
}

/// Router over an arbitrary dataset.
pub fn test_app_with(dataset: Value, page_breaks: PageBreakPolicy) -> Router {
    let directory = InMemoryDirectory::from_json(&dataset.to_string())
        .expect("Fixture dataset should parse");
    app_over(directory, page_breaks)
}

/// Router over any directory backend.
pub fn app_over(directory: impl Into<DirectoryBackend>, page_breaks: PageBreakPolicy) -> Router {
    let state = AppState::new(directory, ReportSettings { page_breaks });
    server::openapi::api_router(state)
}

/// Send a JSON body with `method` as `role`/`user_id`.
pub async fn send_json_as(
    app: &Router,
    method: &str,
    uri: &str,
    role: Role,
    user_id: i64,
    body: Value,
) -> (StatusCode, Value) {
    let req = identified(uri, role.as_str(), &user_id.to_string())
        .method(method)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route as `role`/`user_id`, parsing a JSON response.
pub async fn get_as(app: &Router, uri: &str, role: Role, user_id: i64) -> (StatusCode, Value) {
    let req = identified(uri, role.as_str(), &user_id.to_string())
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// GET a route with raw header values, for malformed identities.
pub async fn get_with_headers(
    app: &Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    send(app, builder.body(Body::empty()).unwrap()).await
}

/// GET a route as `role`/`user_id`, returning raw bytes (for the PDF endpoint).
pub async fn get_raw_as(
    app: &Router,
    uri: &str,
    role: Role,
    user_id: i64,
) -> (StatusCode, HeaderMap, Vec<u8>) {
    let req = identified(uri, role.as_str(), &user_id.to_string())
        .header("x-user-name", "Marie Dupont")
        .body(Body::empty())
        .unwrap();

    send_raw(app, req).await
}

fn identified(uri: &str, role: &str, user_id: &str) -> axum::http::request::Builder {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-user-role", role)
        .header("x-user-id", user_id)
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body_bytes) = send_raw(app, req).await;

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}

/// Send a request and return raw bytes + status + headers.
pub async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    (status, headers, body_bytes.to_vec())
}
