pub mod error;
pub mod config;

// Internship domain modules
pub mod activity;
pub mod dashboard;
pub mod intern;
pub mod profile;
pub mod project;
pub mod report;
pub mod session;
pub mod task;

pub use error::*;
pub use config::*;

pub use activity::*;
pub use dashboard::*;
pub use intern::*;
pub use profile::*;
pub use project::*;
pub use report::*;
pub use session::*;
pub use task::*;
