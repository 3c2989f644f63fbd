use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, Role, SessionIdentity};

pub const ROLE_HEADER: &str = "x-user-role";
pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";

/// Display name used when the session carries none.
const ANONYMOUS_NAME: &str = "Utilisateur";

/// Extractor that resolves the session identity set by the authentication
/// layer in front of this service.
///
/// - `X-User-Role`: `ADMIN`, `ENCADREUR` or `STAGIAIRE` (required)
/// - `X-User-Id`: numeric account id (required)
/// - `X-User-Name`: display name for the report byline (optional)
#[derive(Debug, Clone)]
pub struct Requester(pub SessionIdentity);

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl<S> FromRequestParts<S> for Requester
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role: Role = header(parts, ROLE_HEADER)
            .ok_or_else(|| AppError::bad_request("Missing X-User-Role header"))?
            .parse()
            .map_err(AppError::bad_request)?;

        let user_id: i64 = header(parts, USER_ID_HEADER)
            .ok_or_else(|| AppError::bad_request("Missing X-User-Id header"))?
            .parse()
            .map_err(|_| AppError::bad_request("X-User-Id must be an integer"))?;

        let display_name = header(parts, USER_NAME_HEADER)
            .unwrap_or(ANONYMOUS_NAME)
            .to_string();

        Ok(Requester(SessionIdentity {
            role,
            display_name,
            user_id,
        }))
    }
}
