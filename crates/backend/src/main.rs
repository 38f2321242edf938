pub mod api;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    system::tracing::initialize()?;

    let config = system::config::AppConfig::from_env()?;
    let addr: SocketAddr = config.bind_addr.parse()?;
    let static_dir = config.static_dir.clone();
    system::config::install(config)?;

    // The browser client may be served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure_routes()
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors);

    tracing::info!("listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
