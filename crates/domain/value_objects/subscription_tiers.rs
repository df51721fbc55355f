use serde::Serialize;

use crate::domain::value_objects::enums::{
    media_types::MediaType, subscription_tiers::SubscriptionTier,
};

/// Upload quotas and feature flags granted by a subscription tier.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionLimits {
    pub max_videos: u32,
    pub max_photos: u32,
    pub customization: bool,
    pub analytics: bool,
    pub priority_support: bool,
    pub custom_domain: bool,
}

impl SubscriptionLimits {
    pub fn cap_for(&self, media_type: MediaType) -> u32 {
        match media_type {
            MediaType::Video => self.max_videos,
            MediaType::Photo => self.max_photos,
        }
    }
}

const FREE_LIMITS: SubscriptionLimits = SubscriptionLimits {
    max_videos: 3,
    max_photos: 10,
    customization: false,
    analytics: false,
    priority_support: false,
    custom_domain: false,
};

const PREMIUM_LIMITS: SubscriptionLimits = SubscriptionLimits {
    max_videos: 15,
    max_photos: 50,
    customization: true,
    analytics: true,
    priority_support: false,
    custom_domain: false,
};

const PRO_LIMITS: SubscriptionLimits = SubscriptionLimits {
    max_videos: 100,
    max_photos: 500,
    customization: true,
    analytics: true,
    priority_support: true,
    custom_domain: true,
};

pub fn get_subscription_limits(tier: SubscriptionTier) -> SubscriptionLimits {
    match tier {
        SubscriptionTier::Free => FREE_LIMITS,
        SubscriptionTier::Premium => PREMIUM_LIMITS,
        SubscriptionTier::Pro => PRO_LIMITS,
    }
}

pub fn can_upload_more(tier: SubscriptionTier, media_type: MediaType, current_count: u32) -> bool {
    current_count < get_subscription_limits(tier).cap_for(media_type)
}

pub fn remaining_uploads(tier: SubscriptionTier, media_type: MediaType, current_count: u32) -> u32 {
    get_subscription_limits(tier)
        .cap_for(media_type)
        .saturating_sub(current_count)
}

pub fn get_upgrade_message(tier: SubscriptionTier) -> &'static str {
    match tier {
        SubscriptionTier::Free => {
            "Upgrade to Premium to upload more videos and photos and unlock profile analytics."
        }
        _ => "Upgrade to Pro for higher upload limits, priority support and a custom domain.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_table_matches_each_tier() {
        assert_eq!(get_subscription_limits(SubscriptionTier::Free), FREE_LIMITS);
        assert_eq!(get_subscription_limits(SubscriptionTier::Premium), PREMIUM_LIMITS);
        assert_eq!(get_subscription_limits(SubscriptionTier::Pro), PRO_LIMITS);
    }

    #[test]
    fn caps_grow_with_tier() {
        let free = get_subscription_limits(SubscriptionTier::Free);
        let premium = get_subscription_limits(SubscriptionTier::Premium);
        let pro = get_subscription_limits(SubscriptionTier::Pro);

        assert!(free.max_videos < premium.max_videos && premium.max_videos < pro.max_videos);
        assert!(free.max_photos < premium.max_photos && premium.max_photos < pro.max_photos);
        assert!(!free.analytics && premium.analytics);
        assert!(pro.custom_domain && !premium.custom_domain);
    }

    #[test]
    fn can_upload_more_is_strictly_below_cap() {
        for tier in SubscriptionTier::ALL {
            let limits = get_subscription_limits(tier);
            for media_type in [MediaType::Video, MediaType::Photo] {
                let cap = limits.cap_for(media_type);
                assert!(can_upload_more(tier, media_type, 0));
                assert!(can_upload_more(tier, media_type, cap - 1));
                assert!(!can_upload_more(tier, media_type, cap));
                assert!(!can_upload_more(tier, media_type, cap + 1));
            }
        }
    }

    #[test]
    fn remaining_uploads_saturates_at_zero() {
        assert_eq!(remaining_uploads(SubscriptionTier::Free, MediaType::Video, 1), 2);
        assert_eq!(remaining_uploads(SubscriptionTier::Free, MediaType::Video, 7), 0);
    }

    #[test]
    fn upgrade_message_points_free_to_premium_and_others_to_pro() {
        assert!(get_upgrade_message(SubscriptionTier::Free).contains("Premium"));
        assert!(get_upgrade_message(SubscriptionTier::Premium).contains("Pro"));
        assert_eq!(
            get_upgrade_message(SubscriptionTier::Premium),
            get_upgrade_message(SubscriptionTier::Pro)
        );
    }
}
