use serde::{Deserialize, Serialize};

/// Account profile as held by the user service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Apply an already validated update. Email is not editable here.
    pub fn apply(&mut self, update: &UpdateProfileRequest) {
        self.first_name = update.first_name.trim().to_string();
        self.last_name = update.last_name.trim().to_string();
        self.phone = non_blank(update.phone.as_deref());
        self.department = non_blank(update.department.as_deref());
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Body of `PUT /api/profile`: the editable part of the settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 50, message = "Le prénom est requis (50 caractères max)"))
    )]
    pub first_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 50, message = "Le nom est requis (50 caractères max)"))
    )]
    pub last_name: String,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_phone"))
    )]
    pub phone: Option<String>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 100, message = "Département trop long (100 caractères max)"))
    )]
    pub department: Option<String>,
}

/// Digits with optional `+`, spaces, dots, dashes and parentheses; 6 to 20 characters.
#[cfg(feature = "validation")]
fn validate_phone(phone: &str) -> Result<(), validator::ValidationError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Ok(());
    }
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '.' | '-' | '(' | ')'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if allowed && (6..=20).contains(&phone.len()) && digits >= 6 {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("phone");
        err.message = Some("Numéro de téléphone invalide".into());
        Err(err)
    }
}
