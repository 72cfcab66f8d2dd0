use std::sync::Arc;

use axum::{
  middleware::from_fn_with_state,
  routing::get,
  Router
};

use path_processor::RokkaImageStylePathProcessor;

pub mod endpoints;
pub mod middleware;
pub mod path_processor;
pub mod utils;


/// Route the rewritten image-style requests land on.
pub const IMAGE_STYLE_ROUTE: &str = "/rokka/files/styles/{style}/{scheme}";


pub fn routes() -> Router {
  Router::new()
    .route(IMAGE_STYLE_ROUTE, get(endpoints::image_style::handler))
}

/// Application with inbound path rewriting in front of [`routes`].
///
/// `Router::layer` middleware runs after a route has been matched, so the
/// real routes sit behind a catch-all fallback and the rewrite wraps that.
pub fn app() -> Router {
  let processor = Arc::new(RokkaImageStylePathProcessor::new());

  Router::new()
    .fallback_service(routes())
    .layer(
      from_fn_with_state(
        processor,
        middleware::rewrite::rewrite_image_style_uri::<RokkaImageStylePathProcessor>
      )
    )
}
