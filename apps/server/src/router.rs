use axum::Router;
use folio::kernel::prelude::ApiState;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

const DOCS_PATH: &str = "/docs";
const SPA_INDEX: &str = "index.html";

#[derive(OpenApi)]
#[openapi(info(title = "Folio API", description = "Portfolio backend: contact form delivery"))]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let static_dir = state.config.site.static_dir.clone();

    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(folio::server::router::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let router = Router::new().merge(api_routes).merge(Scalar::with_url(DOCS_PATH, api_doc));

    match static_dir {
        Some(dir) => router.fallback_service(spa(&dir)),
        None => router,
    }
}

/// Serves the built single-page app; unknown paths get `index.html` so the
/// client-side router can resolve them.
fn spa(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join(SPA_INDEX)))
}
