use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    server::config::load_feature_flags();
    let flags = server::config::feature_flags();

    if flags.telemetry {
        server::telemetry::init_telemetry();
    }
    server::health::record_start_time();

    let pool = server::db::create_pool();
    server::db::run_migrations(&pool).await;

    let router = server::openapi::api_router(pool).layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "starting e-malkhana server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    axum::serve(listener, router)
        .await
        .expect("Server terminated unexpectedly");
}
