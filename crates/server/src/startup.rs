use std::{env, net::SocketAddr};

use axum::Router;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::courses::CourseStore;

use crate::routes::{self, ServerState};

fn init_logging() {
    common::utils::logging::init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: seed the catalog, build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // Catalog state lives for the whole process; nothing is persisted.
    let state = ServerState {
        courses: CourseStore::seeded(),
    };

    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    // Bind failure is the one fatal startup path.
    let addr = load_bind_addr()?;
    info!(%addr, "course api listening");
    println!("🚀 Server is running on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
