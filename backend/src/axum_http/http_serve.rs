use crate::{
    auth::AuthConfig,
    axum_http::{default_routers, error_responses::handle_layer_error, routers},
    config::config_model::DotEnvyConfig,
};
use anyhow::Result;
use axum::{
    Extension, Router,
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use recruit_core::{
    infra::db::postgres::postgres_connection::PgPoolSquad, payments::stripe_client::StripeClient,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let stripe_client = Arc::new(StripeClient::new(config.stripe.secret_key.clone()));

    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest(
            "/api/integrations",
            routers::integrations::routes(Arc::clone(&db_pool)),
        )
        .nest("/api/client-info", routers::client_info::routes())
        .nest(
            "/api/subscriptions",
            routers::subscriptions::routes(Arc::clone(&db_pool), config.cron.secret.clone()),
        )
        .nest(
            "/api/notifications",
            routers::notifications::routes(Arc::clone(&db_pool)),
        )
        .nest("/api/placeholder", routers::placeholders::routes())
        .nest("/api/reviews", routers::reviews::routes(Arc::clone(&db_pool)))
        .nest(
            "/api/billing",
            routers::billing::routes(
                Arc::clone(&db_pool),
                Arc::clone(&stripe_client),
                config.stripe.portal_return_url.clone(),
            ),
        )
        .nest("/api/media", routers::media::routes(Arc::clone(&db_pool)))
        .nest("/api/videos", routers::videos::routes())
        .nest("/api/profiles", routers::profiles::routes(Arc::clone(&db_pool)))
        .nest("/api/privacy", routers::privacy::routes(Arc::clone(&db_pool)))
        .route("/api/v1/health-check", get(default_routers::health_check))
        .layer(Extension(AuthConfig {
            jwt_secret: config.supabase.jwt_secret.clone(),
        }));
    let app = with_service_layers(
        app,
        Duration::from_secs(config.backend_server.timeout),
        (config.backend_server.body_limit * 1024 * 1024).try_into()?,
    )
    .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.backend_server.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        port = config.backend_server.port,
        stage = %config.stage,
        "Server is running"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Request timeout and body limit, both rendered as `{error}` JSON like handler errors.
pub fn with_service_layers(app: Router, timeout: Duration, body_limit_bytes: usize) -> Router {
    app.layer(DefaultBodyLimit::max(body_limit_bytes)).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_layer_error))
            .timeout(timeout),
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
