//! HTTP adapter - exposes a [`NarrativeHandler`] through axum.
//!
//! ## URL layout
//!
//! ```text
//! ANY /              → entry chapter
//! ANY /{chapter-id}  → that chapter
//! ```
//!
//! There is a single fallback route: every method and every path goes through
//! [`NarrativeHandler::handle`] with the raw, undecoded URI path.

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::handler::{NarrativeHandler, Outcome};

const HTML: &str = "text/html; charset=utf-8";
const PLAIN: &str = "text/plain; charset=utf-8";

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let status = match &self {
            Outcome::Rendered(_) => StatusCode::OK,
            Outcome::NotFound => StatusCode::NOT_FOUND,
            Outcome::Failed => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match self {
            Outcome::Rendered(body) => (status, [(header::CONTENT_TYPE, HTML)], body).into_response(),
            other => (status, [(header::CONTENT_TYPE, PLAIN)], other.body().to_vec()).into_response(),
        }
    }
}

/// Build the router for a handler.
pub fn router(handler: Arc<NarrativeHandler>) -> Router {
    Router::new().fallback(serve_chapter).with_state(handler)
}

async fn serve_chapter(
    State(handler): State<Arc<NarrativeHandler>>,
    method: Method,
    uri: Uri,
) -> Outcome {
    let outcome = handler.handle(uri.path());
    debug!(%method, path = uri.path(), status = outcome.status_code(), "request served");
    outcome
}

/// Serve `handler` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, handler: Arc<NarrativeHandler>, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, chapters = handler.story().len(), "narrative server listening");

    axum::serve(listener, router(handler))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("narrative server shut down");
    Ok(())
}
