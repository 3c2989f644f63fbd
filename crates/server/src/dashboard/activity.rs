use chrono::{DateTime, Utc};
use shared_types::{ActivityEntry, ActivityFeedItem, UserProfile};

/// Number of entries shown in the feed.
pub const FEED_LENGTH: usize = 5;

const UNKNOWN_USER: &str = "Utilisateur";
const AVATAR_BASE: &str = "https://ui-avatars.com/api/";

/// Elapsed time in French, falling back to a `dd/mm/yyyy` date after a week.
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "À l'instant".to_string()
    } else if minutes < 60 {
        format!("Il y a {minutes} min")
    } else if hours < 24 {
        format!("Il y a {hours}h")
    } else if days < 7 {
        format!("Il y a {days}j")
    } else {
        at.format("%d/%m/%Y").to_string()
    }
}

/// Generated avatar for an author; each name part is percent-encoded.
fn avatar_url(author: Option<&UserProfile>) -> String {
    match author {
        Some(user) => format!(
            "{AVATAR_BASE}?name={}+{}&background=random",
            urlencoding::encode(&user.first_name),
            urlencoding::encode(&user.last_name)
        ),
        None => format!("{AVATAR_BASE}?name=User&background=random"),
    }
}

/// Attribute an entry to its author for display.
pub fn activity_feed_item(
    entry: &ActivityEntry,
    author: Option<&UserProfile>,
    now: DateTime<Utc>,
) -> ActivityFeedItem {
    ActivityFeedItem {
        id: entry.id,
        kind: entry.entity_type,
        user_name: author
            .map(UserProfile::full_name)
            .unwrap_or_else(|| UNKNOWN_USER.to_string()),
        avatar_url: avatar_url(author),
        description: entry.description.clone(),
        when: relative_time(entry.created_at, now),
    }
}

/// Latest entries enriched with their authors.
///
/// Author lookups run concurrently. A failed lookup degrades to the
/// anonymous placeholder.
#[cfg(feature = "server")]
pub async fn load_activity_feed<D: crate::directory::Directory>(
    directory: &D,
    now: DateTime<Utc>,
) -> Result<Vec<ActivityFeedItem>, shared_types::AppError> {
    let entries = directory.recent_activities().await?;
    let latest = &entries[..entries.len().min(FEED_LENGTH)];

    let authors = futures::future::join_all(latest.iter().map(|entry| async move {
        match directory.profile(entry.user_id).await {
            Ok(author) => author,
            Err(e) => {
                tracing::warn!(user_id = entry.user_id, error = %e, "author lookup failed");
                None
            }
        }
    }))
    .await;

    Ok(latest
        .iter()
        .zip(&authors)
        .map(|(entry, author)| activity_feed_item(entry, author.as_ref(), now))
        .collect())
}
