use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
    Pro,
}

impl SubscriptionTier {
    pub const ALL: [SubscriptionTier; 3] = [
        SubscriptionTier::Free,
        SubscriptionTier::Premium,
        SubscriptionTier::Pro,
    ];

    /// Parses a stored tier, treating anything unrecognised as the free tier.
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tier = match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Premium => "premium",
            SubscriptionTier::Pro => "pro",
        };
        write!(f, "{}", tier)
    }
}

impl FromStr for SubscriptionTier {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "free" => Ok(SubscriptionTier::Free),
            "premium" => Ok(SubscriptionTier::Premium),
            "pro" => Ok(SubscriptionTier::Pro),
            other => Err(format!("Unsupported subscription tier: {}", other)),
        }
    }
}
