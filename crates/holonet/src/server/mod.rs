mod error;
mod handlers;

use crate::prelude::{eprintln, *};
use crate::swapi::SwapiClient;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "HOLONET_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOLONET_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

/// Shared, read-only handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Arc<SwapiClient>,
}

pub fn router(client: SwapiClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        client: Arc::new(client),
    };

    Router::new()
        .route("/residentes", get(handlers::residents))
        .route("/personaje/{nombre}", get(handlers::search))
        .route("/personajes", get(handlers::characters))
        .layer(cors)
        .with_state(state)
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Starting holonet on {}...", addr);
    }

    let client = SwapiClient::from_global(&global)?;
    if global.verbose {
        eprintln!("Upstream catalog: {}", client.base_url());
    }
    let app_router = router(client);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{}", addr);

    if global.verbose {
        eprintln!("Residents endpoint: http://{}/residentes", addr);
        eprintln!("Search endpoint: http://{}/personaje/{{nombre}}", addr);
        eprintln!("Characters endpoint: http://{}/personajes", addr);
    }

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
