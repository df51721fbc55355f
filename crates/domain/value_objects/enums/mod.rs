pub mod deletion_request_statuses;
pub mod media_types;
pub mod subscription_statuses;
pub mod subscription_tiers;
pub mod verification_statuses;
pub mod video_platforms;
