use axum::{
  body::Body,
  http::{Request, StatusCode}
};
use rokka_style_paths::endpoints::image_style::StyleDerivative;
use tower::ServiceExt;


async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
  let response = rokka_style_paths::app()
    .oneshot(
      Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
    )
    .await
    .expect("router is infallible");

  let status = response.status();
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read body");

  (status, bytes.to_vec())
}

async fn get_derivative(uri: &str) -> StyleDerivative {
  let (status, body) = get(uri).await;
  assert_eq!(status, StatusCode::OK, "unexpected status for {uri}");
  serde_json::from_slice(&body).expect("parse json")
}


#[tokio::test]
async fn nested_file_reaches_style_route() {
  let derivative = get_derivative("/rokka/files/styles/thumbnail/rokka/folder/photo.jpg").await;

  assert_eq!(
    derivative,
    StyleDerivative {
      style: "thumbnail".to_string(),
      scheme: "rokka".to_string(),
      file: "folder/photo.jpg".to_string()
    }
  );
}

#[tokio::test]
async fn deep_file_path_survives_verbatim() {
  let derivative = get_derivative("/rokka/files/styles/large/rokka/a/b/c.png").await;
  assert_eq!(derivative.file, "a/b/c.png");
}

#[tokio::test]
async fn encoded_file_path_arrives_decoded() {
  let derivative = get_derivative("/rokka/files/styles/large/rokka/my%20photo.jpg?itok=abc").await;
  assert_eq!(derivative.file, "my photo.jpg");
}

#[tokio::test]
async fn path_file_wins_over_query_file() {
  let derivative = get_derivative("/rokka/files/styles/large/rokka/real.jpg?file=spoofed.jpg").await;
  assert_eq!(derivative.file, "real.jpg");
}

#[tokio::test]
async fn other_scheme_is_not_found() {
  let (status, _) = get("/rokka/files/styles/thumbnail/other/photo.jpg").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn short_style_path_is_not_found() {
  let (status, _) = get("/rokka/files/styles/thumbnail").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unrelated_path_is_not_found() {
  let (status, _) = get("/images/1/2/3.png").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn style_route_without_file_is_bad_request() {
  let (status, _) = get("/rokka/files/styles/thumbnail/rokka").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn already_rewritten_request_is_served_as_is() {
  let derivative = get_derivative("/rokka/files/styles/thumbnail/rokka?file=folder%2Fphoto.jpg").await;
  assert_eq!(derivative.file, "folder/photo.jpg");
}
