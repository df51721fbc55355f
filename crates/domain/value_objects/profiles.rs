use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    entities::{athlete_media::AthleteMediaEntity, profiles::ProfileEntity},
    value_objects::{
        enums::{subscription_tiers::SubscriptionTier, video_platforms::VideoPlatform},
        video_embeds::classify_video_url,
    },
};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicVideoDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub url: String,
    pub platform: VideoPlatform,
    pub embed_url: String,
    pub thumbnail_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<AthleteMediaEntity> for PublicVideoDto {
    fn from(value: AthleteMediaEntity) -> Self {
        let embed = classify_video_url(&value.url);
        Self {
            id: value.id,
            title: value.title,
            url: value.url,
            platform: embed.platform,
            embed_url: embed.embed_url,
            thumbnail_url: embed.thumbnail_url,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicPhotoDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<AthleteMediaEntity> for PublicPhotoDto {
    fn from(value: AthleteMediaEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            url: value.url,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileDto {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub sport: Option<String>,
    pub position: Option<String>,
    pub graduation_year: Option<i32>,
    pub school: Option<String>,
    pub bio: Option<String>,
    pub tier: SubscriptionTier,
    pub videos: Vec<PublicVideoDto>,
    pub photos: Vec<PublicPhotoDto>,
}

impl PublicProfileDto {
    pub fn new(
        profile: ProfileEntity,
        videos: Vec<PublicVideoDto>,
        photos: Vec<PublicPhotoDto>,
    ) -> Self {
        let tier = profile.tier();
        Self {
            id: profile.id,
            username: profile.username,
            full_name: profile.full_name,
            sport: profile.sport,
            position: profile.position,
            graduation_year: profile.graduation_year,
            school: profile.school,
            bio: profile.bio,
            tier,
            videos,
            photos,
        }
    }
}
