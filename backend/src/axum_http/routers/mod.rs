pub mod billing;
pub mod client_info;
pub mod integrations;
pub mod media;
pub mod notifications;
pub mod placeholders;
pub mod privacy;
pub mod profiles;
pub mod reviews;
pub mod subscriptions;
pub mod videos;
