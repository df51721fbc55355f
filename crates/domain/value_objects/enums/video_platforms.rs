use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    YouTube,
    Vimeo,
    Direct,
}

impl Display for VideoPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let platform = match self {
            VideoPlatform::YouTube => "youtube",
            VideoPlatform::Vimeo => "vimeo",
            VideoPlatform::Direct => "direct",
        };
        write!(f, "{}", platform)
    }
}
