use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Photo,
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let media_type = match self {
            MediaType::Video => "video",
            MediaType::Photo => "photo",
        };
        write!(f, "{}", media_type)
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "video" | "videos" => Ok(MediaType::Video),
            "photo" | "photos" | "image" => Ok(MediaType::Photo),
            other => Err(format!("Unsupported media type: {}", other)),
        }
    }
}
