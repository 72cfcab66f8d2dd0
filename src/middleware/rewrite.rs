use std::sync::Arc;

use axum::{
  extract::{Request, State},
  http::{uri::PathAndQuery, Uri},
  middleware::Next,
  response::Response
};
use tracing::{debug, warn};

use crate::path_processor::{InboundPathProcessor, QueryParameters};


/// Query string of an inbound `Uri`, kept as raw `key=value` pairs so that
/// parameters nobody touches are written back byte for byte.
#[derive(Debug, Default, Clone)]
pub struct UriQuery {
  pairs: Vec<String>,
  modified: bool
}

impl UriQuery {
  pub fn parse(query: Option<&str>) -> Self {
    let pairs = query
      .unwrap_or_default()
      .split('&')
      .filter(|pair| !pair.is_empty())
      .map(str::to_owned)
      .collect();

    Self {
      pairs,
      modified: false
    }
  }

  pub fn is_modified(&self) -> bool {
    self.modified
  }

  /// `None` when no pair is left.
  pub fn to_query_string(&self) -> Option<String> {
    if self.pairs.is_empty() {
      None
    } else {
      Some(self.pairs.join("&"))
    }
  }

  fn has_key(pair: &str, key: &str) -> bool {
    let raw_key = pair.split_once('=').map_or(pair, |(k, _)| k);

    match urlencoding::decode(raw_key) {
      Ok(decoded) => decoded == key,
      Err(_) => false,
    }
  }
}

impl QueryParameters for UriQuery {
  fn set_query_parameter(&mut self, key: &str, value: &str) {
    self.pairs.retain(|pair| !Self::has_key(pair, key));
    self.pairs.push(
      format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
    );
    self.modified = true;
  }
}

fn encode_path(path: &str) -> String {
  path
    .split('/')
    .map(|segment| urlencoding::encode(segment).into_owned())
    .collect::<Vec<_>>()
    .join("/")
}

/// Runs `processor` over the decoded path of `uri`.
///
/// Returns the rewritten `Uri`, or `None` when the processor left the
/// request alone or the path is not valid UTF-8 once decoded.
pub fn rewrite_uri<P>(processor: &P, uri: &Uri) -> Option<Uri>
where
  P: InboundPathProcessor + ?Sized
{
  let decoded_path = urlencoding::decode(uri.path()).ok()?;
  let mut query = UriQuery::parse(uri.query());

  let processed = processor.process_inbound(&decoded_path, &mut query);

  if processed == decoded_path && !query.is_modified() {
    return None;
  }

  let path_and_query = match query.to_query_string() {
    Some(query) => format!("{}?{}", encode_path(&processed), query),
    None => encode_path(&processed),
  };

  let mut parts = uri.clone().into_parts();

  parts.path_and_query = match PathAndQuery::try_from(path_and_query) {
    Ok(path_and_query) => Some(path_and_query),
    Err(err) => {
      warn!(" [ Rwr ]  Rejected rewritten path for {}: {}", uri.path(), err);
      return None;
    },
  };

  match Uri::from_parts(parts) {
    Ok(rewritten) => Some(rewritten),
    Err(err) => {
      warn!(" [ Rwr ]  Rejected rewritten uri for {}: {}", uri.path(), err);
      None
    },
  }
}

/// Middleware that rewrites the request `Uri` before the router sees it.
///
/// Must wrap the `Router` itself, not be added with `Router::layer`, or the
/// route has already been picked when it runs.
pub async fn rewrite_image_style_uri<P>(
  State(processor): State<Arc<P>>,
  mut request: Request,
  next: Next
) -> Response
where
  P: InboundPathProcessor + Send + Sync + 'static
{
  if let Some(rewritten) = rewrite_uri(processor.as_ref(), request.uri()) {
    debug!(
      " [ Rwr ]  {}  ->  {}",
      request.uri(),
      rewritten
    );

    *request.uri_mut() = rewritten;
  }

  next.run(request).await
}
