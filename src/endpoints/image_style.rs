use axum::{
  extract::{Path, Query},
  http::StatusCode,
  response::IntoResponse,
  Json
};
use serde::{Deserialize, Serialize};

use crate::path_processor::RokkaImageStylePathProcessor;


#[derive(Debug, Deserialize)]
pub struct FileQuery {
  pub file: String
}

/// Derivative the delivery controller is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDerivative {
  pub style: String,
  pub scheme: String,
  pub file: String
}


pub async fn handler(
  Path((style, scheme)): Path<(String, String)>,
  Query(query): Query<FileQuery>,
) -> impl IntoResponse {
  if !RokkaImageStylePathProcessor::is_valid_scheme(&scheme) {
    return StatusCode::NOT_FOUND.into_response();
  }

  if query.file.is_empty() {
    return (
      StatusCode::BAD_REQUEST,
      "Missing source file."
    ).into_response();
  }

  (
    StatusCode::OK,
    Json(
      StyleDerivative {
        style,
        scheme,
        file: query.file
      }
    )
  ).into_response()
}
