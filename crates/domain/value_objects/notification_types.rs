use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Reviews,
    Engagement,
    Billing,
    Media,
    Digest,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: NotificationCategory,
    pub default_email: bool,
    pub default_push: bool,
}

pub const NOTIFICATION_TYPES: &[NotificationType] = &[
    NotificationType {
        id: "review_received",
        name: "New review",
        description: "A coach or scout left a review on your profile.",
        category: NotificationCategory::Reviews,
        default_email: true,
        default_push: true,
    },
    NotificationType {
        id: "review_verified",
        name: "Review verified",
        description: "One of your reviews passed verification and is now public.",
        category: NotificationCategory::Reviews,
        default_email: true,
        default_push: false,
    },
    NotificationType {
        id: "profile_view",
        name: "Profile views",
        description: "A recruiter viewed your public profile.",
        category: NotificationCategory::Engagement,
        default_email: false,
        default_push: true,
    },
    NotificationType {
        id: "coach_message",
        name: "Coach messages",
        description: "A coach sent you a message.",
        category: NotificationCategory::Engagement,
        default_email: true,
        default_push: true,
    },
    NotificationType {
        id: "subscription_renewal",
        name: "Subscription renewal",
        description: "Your subscription renewed or a payment needs attention.",
        category: NotificationCategory::Billing,
        default_email: true,
        default_push: false,
    },
    NotificationType {
        id: "subscription_expiring",
        name: "Subscription expiring",
        description: "Your subscription ends soon and your profile will move to the free tier.",
        category: NotificationCategory::Billing,
        default_email: true,
        default_push: true,
    },
    NotificationType {
        id: "media_processed",
        name: "Media ready",
        description: "An uploaded video or photo finished processing.",
        category: NotificationCategory::Media,
        default_email: false,
        default_push: true,
    },
    NotificationType {
        id: "weekly_digest",
        name: "Weekly digest",
        description: "A weekly summary of profile views and recruiting activity.",
        category: NotificationCategory::Digest,
        default_email: true,
        default_push: false,
    },
];

pub fn find_notification_type(id: &str) -> Option<&'static NotificationType> {
    NOTIFICATION_TYPES.iter().find(|notification| notification.id == id)
}
