pub mod domain;
pub mod handlers;
pub mod shared;
pub mod usecases;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Отключаем логи SQL запросов, но оставляем логи приложения
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Простой middleware для логирования запросов
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let status = response.status().as_u16();
        let elapsed_ms = start.elapsed().as_millis();
        if response.status().is_server_error() {
            tracing::error!("{} {} -> {} ({}ms)", method, uri.path(), status, elapsed_ms);
        } else {
            tracing::info!("{} {} -> {} ({}ms)", method, uri.path(), status, elapsed_ms);
        }
        response
    }

    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?
        .to_string_lossy()
        .to_string();
    let port = config.server.port;
    shared::config::set_global(config);

    shared::data::db::initialize_database(Some(db_path.as_str()))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // Building draft editor (stateless)
        .route(
            "/api/building/draft/new",
            get(handlers::a001_building::new_draft),
        )
        .route(
            "/api/building/draft/command",
            post(handlers::a001_building::draft_command),
        )
        // Buildings
        .route(
            "/api/building",
            get(handlers::a001_building::list_all).post(handlers::a001_building::create),
        )
        .route(
            "/api/building/:id",
            get(handlers::a001_building::get_by_id).delete(handlers::a001_building::delete),
        )
        .route(
            "/api/building/:id/units",
            get(handlers::a001_building::list_units),
        )
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
