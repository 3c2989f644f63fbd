use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::{
    ActivityEntry, AppError, DirectorySettings, Intern, InternFilter, Project, ProjectFilter,
    Task, TaskFilter, UpdateProfileRequest, UserProfile,
};
use tokio::sync::RwLock;

// ── Trait ────────────────────────────────────────────────────────────

/// Source of the records reports and dashboards are built from.
///
/// Every listing preserves the upstream order.
#[allow(async_fn_in_trait)]
pub trait Directory: Send + Sync {
    async fn interns(&self, filter: &InternFilter) -> Result<Vec<Intern>, AppError>;

    async fn projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, AppError>;

    async fn tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError>;

    /// Most recent activity first.
    async fn recent_activities(&self) -> Result<Vec<ActivityEntry>, AppError>;

    /// Profile of an account, `None` when unknown.
    async fn profile(&self, user_id: i64) -> Result<Option<UserProfile>, AppError>;

    /// Apply an already validated update, `None` when the account is unknown.
    async fn update_profile(
        &self,
        user_id: i64,
        update: &UpdateProfileRequest,
    ) -> Result<Option<UserProfile>, AppError>;
}

// ── In-memory implementation ────────────────────────────────────────

/// On-disk dataset layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryData {
    #[serde(default)]
    pub interns: Vec<Intern>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
    #[serde(default)]
    pub users: Vec<UserProfile>,
}

/// Directory served from a JSON dataset held in memory.
///
/// Listings are read-only; profiles can be edited for the process lifetime.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    data: DirectoryData,
    users: RwLock<Vec<UserProfile>>,
}

impl InMemoryDirectory {
    pub fn new(mut data: DirectoryData) -> Self {
        let users = std::mem::take(&mut data.users);
        Self {
            data,
            users: RwLock::new(users),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let data: DirectoryData = serde_json::from_str(json)
            .map_err(|e| AppError::bad_request(format!("Invalid directory dataset: {e}")))?;
        Ok(Self::new(data))
    }

    /// Read the dataset at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::internal(format!("Cannot read directory {}: {e}", path.display()))
        })?;
        let directory = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            interns = directory.data.interns.len(),
            projects = directory.data.projects.len(),
            tasks = directory.data.tasks.len(),
            "directory loaded"
        );
        Ok(directory)
    }

    /// Number of interns, projects and tasks held.
    pub fn record_count(&self) -> usize {
        self.data.interns.len() + self.data.projects.len() + self.data.tasks.len()
    }
}

impl Directory for InMemoryDirectory {
    async fn interns(&self, filter: &InternFilter) -> Result<Vec<Intern>, AppError> {
        Ok(self
            .data
            .interns
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect())
    }

    async fn projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, AppError> {
        Ok(self
            .data
            .projects
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        Ok(self
            .data
            .tasks
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }

    async fn recent_activities(&self) -> Result<Vec<ActivityEntry>, AppError> {
        let mut entries = self.data.activities.clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn profile(&self, user_id: i64) -> Result<Option<UserProfile>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn update_profile(
        &self,
        user_id: i64,
        update: &UpdateProfileRequest,
    ) -> Result<Option<UserProfile>, AppError> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.user_id == user_id).map(|user| {
            user.apply(update);
            user.clone()
        }))
    }
}

// ── HTTP implementation ─────────────────────────────────────────────

/// Directory backed by the platform's REST services.
///
/// Transport failures, non-success statuses and undecodable bodies all
/// surface as `UpstreamError`.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDirectory {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Cannot build directory client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<Option<reqwest::Response>, AppError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "directory request failed");
            AppError::upstream(format!("Directory unreachable: {e}"))
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path, %status, "directory answered with an error");
            return Err(AppError::upstream(format!(
                "Directory error ({status}) on {path}: {body}"
            )));
        }
        Ok(Some(response))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, path: &str) -> Result<T, AppError> {
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::upstream(format!("Invalid directory payload on {path}: {e}")))
    }

    /// GET a listing; a missing resource is an error, not an empty list.
    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, i64)],
    ) -> Result<Vec<T>, AppError> {
        let request = self
            .client
            .get(format!("{}{path}", self.base_url))
            .query(query);
        match self.send(request, path).await? {
            Some(response) => Self::decode(response, path).await,
            None => Err(AppError::upstream(format!("Directory has no {path} endpoint"))),
        }
    }
}

impl Directory for HttpDirectory {
    async fn interns(&self, filter: &InternFilter) -> Result<Vec<Intern>, AppError> {
        let query: Vec<_> = filter
            .encadreur_user_id
            .map(|id| ("encadreurUserId", id))
            .into_iter()
            .collect();
        self.list("/interns", &query).await
    }

    async fn projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, AppError> {
        let query: Vec<_> = filter
            .encadreur_id
            .map(|id| ("encadreurId", id))
            .into_iter()
            .collect();
        self.list("/projects", &query).await
    }

    async fn tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        let query: Vec<_> = filter.user_id.map(|id| ("userId", id)).into_iter().collect();
        self.list("/tasks", &query).await
    }

    async fn recent_activities(&self) -> Result<Vec<ActivityEntry>, AppError> {
        let mut entries: Vec<ActivityEntry> = self.list("/activities/recent", &[]).await?;
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn profile(&self, user_id: i64) -> Result<Option<UserProfile>, AppError> {
        let path = format!("/users/{user_id}");
        let request = self.client.get(format!("{}{path}", self.base_url));
        match self.send(request, &path).await? {
            Some(response) => Self::decode(response, &path).await.map(Some),
            None => Ok(None),
        }
    }

    async fn update_profile(
        &self,
        user_id: i64,
        update: &UpdateProfileRequest,
    ) -> Result<Option<UserProfile>, AppError> {
        let path = format!("/users/{user_id}/profile");
        let request = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(update);
        match self.send(request, &path).await? {
            Some(response) => Self::decode(response, &path).await.map(Some),
            None => Ok(None),
        }
    }
}

// ── Backend selection ───────────────────────────────────────────────

/// The directory a running server talks to.
#[derive(Debug)]
pub enum DirectoryBackend {
    Memory(InMemoryDirectory),
    Http(HttpDirectory),
}

impl DirectoryBackend {
    /// Remote services when `base_url` is set, otherwise the JSON dataset at `path`.
    pub fn from_settings(settings: &DirectorySettings) -> Result<Self, AppError> {
        match settings.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                tracing::info!(base_url = url, "using remote directory");
                let timeout = Duration::from_secs(settings.timeout_seconds);
                Ok(Self::Http(HttpDirectory::new(url, timeout)?))
            }
            None => Ok(Self::Memory(InMemoryDirectory::load(&settings.path)?)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Http(_) => "http",
        }
    }

    /// Records held locally; unknown for a remote directory.
    pub fn record_count(&self) -> Option<usize> {
        match self {
            Self::Memory(directory) => Some(directory.record_count()),
            Self::Http(_) => None,
        }
    }
}

impl From<InMemoryDirectory> for DirectoryBackend {
    fn from(directory: InMemoryDirectory) -> Self {
        Self::Memory(directory)
    }
}

impl From<HttpDirectory> for DirectoryBackend {
    fn from(directory: HttpDirectory) -> Self {
        Self::Http(directory)
    }
}

impl Directory for DirectoryBackend {
    async fn interns(&self, filter: &InternFilter) -> Result<Vec<Intern>, AppError> {
        match self {
            Self::Memory(d) => d.interns(filter).await,
            Self::Http(d) => d.interns(filter).await,
        }
    }

    async fn projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, AppError> {
        match self {
            Self::Memory(d) => d.projects(filter).await,
            Self::Http(d) => d.projects(filter).await,
        }
    }

    async fn tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        match self {
            Self::Memory(d) => d.tasks(filter).await,
            Self::Http(d) => d.tasks(filter).await,
        }
    }

    async fn recent_activities(&self) -> Result<Vec<ActivityEntry>, AppError> {
        match self {
            Self::Memory(d) => d.recent_activities().await,
            Self::Http(d) => d.recent_activities().await,
        }
    }

    async fn profile(&self, user_id: i64) -> Result<Option<UserProfile>, AppError> {
        match self {
            Self::Memory(d) => d.profile(user_id).await,
            Self::Http(d) => d.profile(user_id).await,
        }
    }

    async fn update_profile(
        &self,
        user_id: i64,
        update: &UpdateProfileRequest,
    ) -> Result<Option<UserProfile>, AppError> {
        match self {
            Self::Memory(d) => d.update_profile(user_id, update).await,
            Self::Http(d) => d.update_profile(user_id, update).await,
        }
    }
}
