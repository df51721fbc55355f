use anyhow::{Context, Result};

use super::{
    config_model::{BackendServer, Cron, Database, DotEnvyConfig, Stripe, Supabase},
    stage::Stage,
};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let backend_server = BackendServer {
        port: required("SERVER_PORT")?
            .parse()
            .context("SERVER_PORT is invalid")?,
        body_limit: required("SERVER_BODY_LIMIT")?
            .parse()
            .context("SERVER_BODY_LIMIT is invalid")?,
        timeout: required("SERVER_TIMEOUT")?
            .parse()
            .context("SERVER_TIMEOUT is invalid")?,
    };

    let database = Database {
        url: required("DATABASE_URL")?,
    };

    let supabase = Supabase {
        jwt_secret: required("SUPABASE_JWT_SECRET")?,
    };

    let stripe = Stripe {
        secret_key: required("STRIPE_SECRET_KEY")?,
        portal_return_url: required("STRIPE_PORTAL_RETURN_URL")?,
    };

    let cron = Cron {
        secret: required("CRON_SECRET")?,
    };

    Ok(DotEnvyConfig {
        backend_server,
        database,
        supabase,
        stripe,
        cron,
        stage: get_stage(),
    })
}

pub fn get_stage() -> Stage {
    dotenvy::dotenv().ok();

    let stage_str = std::env::var("STAGE").unwrap_or_default();
    Stage::try_from(stage_str.as_str()).unwrap_or_default()
}

fn required(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("{} is invalid", key))
}
