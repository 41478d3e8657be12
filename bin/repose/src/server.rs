//! Static file server for local preview

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

/// Create the preview router serving `output_dir`.
pub fn create_router(output_dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(output_dir))
}
