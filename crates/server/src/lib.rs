// Report composition and dashboard aggregations (always compiled)
pub mod dashboard;
pub mod report;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod directory;

#[cfg(feature = "server")]
pub mod scope;

#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub mod session;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod openapi;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod typst;
