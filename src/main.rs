use std::time::Duration;

use axum::{
  body::Body,
  http::{Method, Request, Response}
};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer
};
use anyhow::Result;
use tracing::Span;

use rokka_style_paths::utils;


#[tokio::main]
async fn main() -> Result<()> {
  let env_config = utils::env::EnvConfig::load_env().await?;

  tracing_subscriber::fmt()
    .with_timer(utils::timer::LocalLogTimer)
    .with_target(false)
    .with_max_level(env_config.log_level)
    .init();

  let trace = TraceLayer::new_for_http()
    .on_request(
      |request: &Request<Body>, _span: &Span| {
        tracing::info!(
          " Incoming  [ {} ]  {}",
          request.method(),
          request.uri().path()
        );
      }
    )
    .on_response(
      |response: &Response<Body>, latency: Duration, _span: &Span| {
        tracing::info!(
          " Outgoing  [ {} ]  Took {} ms",
          response.status().as_u16(),
          latency.as_millis()
        );
      }
    );

  let cors = CorsLayer::new()
    .allow_methods([Method::GET])
    .allow_origin(Any);

  let app = rokka_style_paths::app()
    .layer(trace)
    .layer(cors);

  let listener = tokio::net::TcpListener::bind(env_config.bind_address()).await?;

  tracing::info!(" Listening on {}", env_config.bind_address());

  axum::serve(listener, app).await?;

  Ok(())
}
