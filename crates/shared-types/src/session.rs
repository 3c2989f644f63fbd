use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of the signed-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Encadreur,
    Stagiaire,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Encadreur, Role::Stagiaire];

    /// Wire name, also used in report bylines and file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Encadreur => "ENCADREUR",
            Role::Stagiaire => "STAGIAIRE",
        }
    }

    /// Display label for the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Responsable RH",
            Role::Encadreur => "Encadreur",
            Role::Stagiaire => "Stagiaire",
        }
    }

    /// Whether this role manages interns (sees intern counts and details).
    pub fn oversees_interns(self) -> bool {
        match self {
            Role::Admin | Role::Encadreur => true,
            Role::Stagiaire => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "ENCADREUR" => Ok(Role::Encadreur),
            "STAGIAIRE" => Ok(Role::Stagiaire),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// Identity of the current session, supplied by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub role: Role,
    pub display_name: String,
    pub user_id: i64,
}
