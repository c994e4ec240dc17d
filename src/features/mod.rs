pub mod auth;
pub mod dashboard;
pub mod i18n;
pub mod reports;
pub mod tracking;
pub mod triage;
