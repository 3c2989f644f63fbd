use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of entity an activity entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Project,
    Task,
    Intern,
    #[default]
    User,
}

/// One line of the activity history service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub entity_type: ActivityKind,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Activity entry enriched for display in the dashboard feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActivityFeedItem {
    pub id: i64,
    pub kind: ActivityKind,
    pub user_name: String,
    pub avatar_url: String,
    pub description: String,
    /// Relative time ("Il y a 5 min") or a `dd/mm/yyyy` date.
    pub when: String,
}
