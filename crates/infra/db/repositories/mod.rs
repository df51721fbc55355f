pub mod compliance;
pub mod integration_tokens;
pub mod media;
pub mod notification_preferences;
pub mod profiles;
pub mod reviews;
pub mod subscriptions;
