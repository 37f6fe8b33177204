use axum::{extract::Extension, routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use lapstore::catalog::seed::seed_demo_catalog;
use lapstore::catalog::store::{Catalog, SqliteCatalog};
use lapstore::search::handlers::{handle_recent_searches, handle_search, handle_suggest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:3900".parse()?;
    let mut db_path = PathBuf::from("lapstore.db");
    let mut seed = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--db" => {
                db_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--seed" => {
                seed = true;
                i += 1;
            }
            "--help" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--db <path>] [--seed]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:3900 --db lapstore.db --seed", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Catalog store:
    tracing::info!("Opening catalog database at {}", db_path.display());
    let store = Arc::new(SqliteCatalog::open(&db_path)?);

    if seed {
        seed_demo_catalog(&store)?;
    }

    let catalog: Arc<dyn Catalog> = store;

    // 2. HTTP router:
    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/suggest", get(handle_suggest))
        .route("/search/logs", get(handle_recent_searches))
        .layer(Extension(catalog));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
