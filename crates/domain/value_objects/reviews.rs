use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    entities::reviews::ReviewEntity,
    value_objects::enums::verification_statuses::VerificationStatus,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedReviewDto {
    pub id: Uuid,
    pub reviewer_name: String,
    pub reviewer_title: Option<String>,
    pub reviewer_organization: Option<String>,
    pub rating: i32,
    pub content: String,
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewEntity> for VerifiedReviewDto {
    fn from(value: ReviewEntity) -> Self {
        Self {
            id: value.id,
            reviewer_name: value.reviewer_name,
            reviewer_title: value.reviewer_title,
            reviewer_organization: value.reviewer_organization,
            rating: value.rating,
            content: value.content,
            verified_at: value.verified_at,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStats {
    pub total_reviews: u32,
    pub verified_reviews: u32,
    pub pending_reviews: u32,
    pub rejected_reviews: u32,
    /// Mean rating across verified reviews only.
    pub average_rating: Option<f64>,
    /// Share of all reviews that are verified, in `0.0..=1.0`.
    pub verification_rate: f64,
}

impl VerificationStats {
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (i32, &'a str)>,
    {
        let mut stats = Self::default();
        let mut verified_rating_sum: i64 = 0;

        for (rating, status) in rows {
            stats.total_reviews += 1;
            match VerificationStatus::from_str(status) {
                VerificationStatus::Verified => {
                    stats.verified_reviews += 1;
                    verified_rating_sum += i64::from(rating);
                }
                VerificationStatus::Pending => stats.pending_reviews += 1,
                VerificationStatus::Rejected => stats.rejected_reviews += 1,
            }
        }

        if stats.verified_reviews > 0 {
            let average = verified_rating_sum as f64 / f64::from(stats.verified_reviews);
            stats.average_rating = Some((average * 10.0).round() / 10.0);
        }
        if stats.total_reviews > 0 {
            stats.verification_rate =
                f64::from(stats.verified_reviews) / f64::from(stats.total_reviews);
        }

        stats
    }
}
