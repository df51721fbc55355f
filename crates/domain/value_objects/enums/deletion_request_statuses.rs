use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lifecycle of a data deletion request. Only `Pending` is written by this service.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeletionRequestStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Rejected,
}

impl Display for DeletionRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            DeletionRequestStatus::Pending => "pending",
            DeletionRequestStatus::Processing => "processing",
            DeletionRequestStatus::Completed => "completed",
            DeletionRequestStatus::Rejected => "rejected",
        };
        write!(f, "{}", status)
    }
}
