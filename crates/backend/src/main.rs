pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let port = config.server.port;
    let seed = config.mock.seed;
    tracing::info!(
        "Mock list back-end: latency {} ms, seed {}",
        config.mock.latency_ms,
        seed
    );
    shared::config::install(config);

    if seed {
        let products = domain::a002_product::service::insert_test_data().await?;
        domain::a001_campaign::service::insert_test_data(&products).await?;
    }
    tracing::info!(
        "Store ready: {} campaign(s), {} product(s)",
        domain::a001_campaign::repository::count().await,
        domain::a002_product::repository::count().await
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes()
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
