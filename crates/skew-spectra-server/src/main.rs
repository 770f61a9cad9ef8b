//! Static file server for the visualization front-end.
//!
//! Serves the viewer assets and generated `analytic_graphs_n<N>.json`
//! files with caching disabled on every response, so a re-run of the
//! search is always picked up on reload.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{header, HeaderValue};
use axum::Router;
use clap::Parser;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "skew-spectra-server", about = "No-cache static server for the spectrum viewer")]
struct Args {
    /// HTTP port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Directory to serve
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
}

fn app(root: &PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args = Args::parse();
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("serving {} on http://localhost:{}/", args.root.display(), args.port);

    axum::serve(listener, app(&args.root)).await?;
    Ok(())
}
