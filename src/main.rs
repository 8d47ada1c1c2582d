#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, DATABASE_NAME, PORT.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = docstore_api::config::config();
    tracing::info!("Starting docstore API in {:?} mode", config.environment);

    let app = docstore_api::app();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("docstore API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
