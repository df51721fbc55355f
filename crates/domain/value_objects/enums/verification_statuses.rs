use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        };
        write!(f, "{}", status)
    }
}

impl VerificationStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "verified" => VerificationStatus::Verified,
            "rejected" => VerificationStatus::Rejected,
            _ => VerificationStatus::Pending,
        }
    }
}
