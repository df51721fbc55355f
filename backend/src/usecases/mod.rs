pub mod billing;
pub mod integrations;
pub mod media;
pub mod notification_preferences;
pub mod privacy;
pub mod profiles;
pub mod reviews;
pub mod subscriptions;
