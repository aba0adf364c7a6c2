use anyhow::Context;
use chirpy::chirpy_config::ServerConfig;
use chirpy::logging::{init_tracing, shutdown_tracer};
use chirpy::metrics::{init_metrics, metrics_app};
use chirpy::router::init_router;
use chirpy::state::init_app_state;
use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();

    if let Some(handle) = init_metrics() {
        let metrics_addr = server_config.metrics_bind_addr.clone();
        tokio::spawn(async move {
            match tokio::net::TcpListener::bind(&metrics_addr).await {
                Ok(listener) => {
                    info!(addr = %metrics_addr, "metrics server listening");
                    if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                        error!(error = %e, "metrics server stopped");
                    }
                }
                Err(e) => error!(error = %e, addr = %metrics_addr, "cannot bind metrics server"),
            }
        });
    }

    let state = init_app_state(&server_config).await?;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", server_config.bind_addr))?;
    info!(addr = %server_config.bind_addr, "server listening");
    info!("Swagger UI at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
