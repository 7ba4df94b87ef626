use std::path::PathBuf;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Router serving the generated site, with `index.html` for directories
pub fn create_app(root: PathBuf) -> Router {
    let serve_dir = ServeDir::new(root).append_index_html_on_directories(true);

    Router::new()
        .fallback_service(serve_dir)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
