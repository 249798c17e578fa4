use subject_api::{config, handlers, service};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DB_* and SECRET_KEY.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!(
        db_host = %config.database.host,
        db_name = %config.database.name,
        "starting subject API"
    );

    let service = service::new_service(config);
    let app = handlers::router(service);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("subject API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
