use super::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub backend_server: BackendServer,
    pub database: Database,
    pub supabase: Supabase,
    pub stripe: Stripe,
    pub cron: Cron,
    pub stage: Stage,
}

#[derive(Debug, Clone)]
pub struct BackendServer {
    pub port: u16,
    /// Request body limit in MiB.
    pub body_limit: u64,
    /// Request timeout in seconds.
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Supabase {
    pub jwt_secret: String,
}

#[derive(Debug, Clone)]
pub struct Stripe {
    pub secret_key: String,
    pub portal_return_url: String,
}

#[derive(Debug, Clone)]
pub struct Cron {
    pub secret: String,
}
