use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Local,
    Development,
    Production,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stage = match self {
            Stage::Local => "local",
            Stage::Development => "development",
            Stage::Production => "production",
        };
        write!(f, "{}", stage)
    }
}

impl TryFrom<&str> for Stage {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Stage::Local),
            "development" | "dev" => Ok(Stage::Development),
            "production" | "prod" => Ok(Stage::Production),
            other => Err(anyhow::anyhow!("Invalid stage: {}", other)),
        }
    }
}
