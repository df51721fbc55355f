use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    enums::{media_types::MediaType, subscription_tiers::SubscriptionTier},
    subscription_tiers::{
        SubscriptionLimits, can_upload_more, get_subscription_limits, get_upgrade_message,
    },
};

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct MediaUsage {
    pub videos: u32,
    pub photos: u32,
}

impl MediaUsage {
    pub fn count_for(&self, media_type: MediaType) -> u32 {
        match media_type {
            MediaType::Video => self.videos,
            MediaType::Photo => self.photos,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaLimitsDto {
    pub tier: SubscriptionTier,
    pub limits: SubscriptionLimits,
    pub usage: MediaUsage,
    pub can_upload_video: bool,
    pub can_upload_photo: bool,
    pub upgrade_message: &'static str,
}

impl MediaLimitsDto {
    pub fn new(tier: SubscriptionTier, usage: MediaUsage) -> Self {
        Self {
            tier,
            limits: get_subscription_limits(tier),
            usage,
            can_upload_video: can_upload_more(tier, MediaType::Video, usage.videos),
            can_upload_photo: can_upload_more(tier, MediaType::Photo, usage.photos),
            upgrade_message: get_upgrade_message(tier),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckUploadModel {
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadAllowanceDto {
    pub allowed: bool,
    pub media_type: MediaType,
    pub remaining: u32,
}
