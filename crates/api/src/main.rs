use profitlens_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_format = std::env::var("PROFITLENS_LOG_FORMAT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();
    profitlens_observability::init(log_format);

    let config = ApiConfig::from_env();
    let bind_addr = config.bind_addr;

    let app = profitlens_api::app::build_app(config)?;

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
