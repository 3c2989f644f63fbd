//! Dashboard figures: charts, banner summary and the recent activity feed.

pub mod activity;
pub mod charts;
pub mod summary;

pub use activity::{activity_feed_item, relative_time, FEED_LENGTH};
pub use charts::{project_status_chart, role_chart};
pub use summary::{dashboard_summary, greeting, welcome_message};
