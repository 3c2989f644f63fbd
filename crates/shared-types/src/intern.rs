use serde::{Deserialize, Serialize};

/// Department shown when an intern has none on record.
pub const UNDEFINED_DEPARTMENT: &str = "Non défini";

/// An intern (stagiaire) as returned by the intern service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Intern {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    pub status: String,
    /// Account id of the intern; tasks reference this, not `id`.
    pub user_id: i64,
    /// Account id of the supervisor (encadreur) following this intern.
    #[serde(default)]
    pub encadreur_user_id: Option<i64>,
}

impl Intern {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Department name, or [`UNDEFINED_DEPARTMENT`] when missing or blank.
    pub fn department_or_default(&self) -> &str {
        match self.department.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => UNDEFINED_DEPARTMENT,
        }
    }

    /// Department as written in the report (empty when unknown).
    pub fn department_label(&self) -> &str {
        self.department.as_deref().unwrap_or("")
    }
}

/// Upstream filter for the intern service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InternFilter {
    pub encadreur_user_id: Option<i64>,
}

impl InternFilter {
    pub fn supervised_by(user_id: i64) -> Self {
        Self {
            encadreur_user_id: Some(user_id),
        }
    }

    pub fn matches(&self, intern: &Intern) -> bool {
        match self.encadreur_user_id {
            Some(id) => intern.encadreur_user_id == Some(id),
            None => true,
        }
    }
}
