pub mod athlete_media;
pub mod audit_logs;
pub mod consent_records;
pub mod deletion_requests;
pub mod notification_preferences;
pub mod profiles;
pub mod reviews;
pub mod subscriptions;
