use heartbeat_api::{config::Config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also picks up .env, which may set RUST_LOG)
    let config = Config::load()?;

    telemetry::init_tracing();
    tracing::info!(?config, "loaded configuration");

    let server = server::Server::new(&config).await?;
    server.run_until(server::shutdown_signal()).await
}
