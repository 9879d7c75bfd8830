mod config;
mod routes;

use leptos::config::get_configuration;

use crate::config::{ConfigError, DEFAULT_PORT, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine; real deployments set variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;

    let default_port = leptos_options.site_addr.port();
    let config = ServerConfig::from_env(if default_port == 0 { DEFAULT_PORT } else { default_port })?;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    tracing::info!(addr = %config.addr(), "smartshelf listening");
    axum::serve(listener, app).await?;
    Ok(())
}
