use std::env;
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ObservabilityConfig {
    pub(crate) service_context: ServiceContext,
    /// Level used when `RUST_LOG` is not set.
    pub(crate) default_level: Level,
    pub(crate) ansi: bool,
    /// Warnings captured during config parsing so they can be logged after tracing is initialized.
    pub(crate) warnings: Vec<String>,
}

impl ObservabilityConfig {
    pub(crate) fn from_env(component: &str) -> Self {
        Self::from_lookup(component, |key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(component: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_string = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let component = component.trim().to_string();
        let mut warnings = Vec::new();

        let service_name = env_string("SERVICE_NAME").unwrap_or_else(|| component.clone());
        let environment = env_string("STAGE").unwrap_or_else(|| "unknown".to_string());

        let default_level = match env_string("LOG_LEVEL") {
            Some(raw) => match parse_level(&raw) {
                Some(level) => level,
                None => {
                    warnings.push(format!("LOG_LEVEL is invalid (value: {raw}); defaulting to INFO"));
                    Level::INFO
                }
            },
            None => Level::INFO,
        };

        let ansi = match env_string("LOG_ANSI") {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warnings.push(format!("LOG_ANSI is invalid (value: {raw}); defaulting to true"));
                true
            }),
            None => true,
        };

        Self {
            service_context: ServiceContext {
                service_name,
                environment,
                component,
            },
            default_level,
            ansi,
            warnings,
        }
    }
}

fn parse_level(input: &str) -> Option<Level> {
    match input.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
