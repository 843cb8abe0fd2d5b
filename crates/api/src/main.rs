#[tokio::main]
async fn main() {
    eztest_observability::init();

    let session_secret = std::env::var("EZTEST_SESSION_SECRET").unwrap_or_else(|_| {
        tracing::warn!("EZTEST_SESSION_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let app = eztest_api::app::build_app(session_secret).expect("invalid authorization wiring");

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
