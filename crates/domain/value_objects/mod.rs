pub mod compliance;
pub mod enums;
pub mod media;
pub mod notification_preferences;
pub mod notification_types;
pub mod placeholder_svg;
pub mod profiles;
pub mod reviews;
pub mod subscription_tiers;
pub mod video_embeds;
