use quill_api::{app, config, database, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::init()?;
    let pool = database::connect(config).await?;

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("quill-api listening on http://{}", bind_addr);

    axum::serve(listener, app(AppState { pool })).await?;
    Ok(())
}
