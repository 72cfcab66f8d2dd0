use anyhow::{Context, Result};
use tokio::sync::OnceCell;
use tracing::Level;

pub static ENV_CONFIG: OnceCell<EnvConfig> = OnceCell::const_new();

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, Clone)]
pub struct EnvConfig {
  pub server_ip: String,
  pub server_port: String,
  pub log_level: Level
}

impl EnvConfig {
  fn new() -> Result<Self> {
    Ok(
      Self {
        server_ip: std::env::var("SERVER_IP").context("SERVER_IP is not set")?,
        server_port: std::env::var("SERVER_PORT").context("SERVER_PORT is not set")?,
        log_level: parse_log_level(std::env::var("LOG_LEVEL").ok().as_deref())?
      }
    )
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_ip, self.server_port)
  }

  pub async fn load_env() -> Result<&'static Self> {
    // A missing .env is fine, the process environment may already be set.
    let _ = dotenvy::from_filename_override(".env");

    ENV_CONFIG.get_or_try_init(
      || async {
        Self::new()
      }
    ).await
  }
}

fn parse_log_level(raw: Option<&str>) -> Result<Level> {
  match raw.map(str::trim) {
    None | Some("") => Ok(DEFAULT_LOG_LEVEL),
    Some(raw) => raw
      .parse::<Level>()
      .with_context(|| format!("LOG_LEVEL `{raw}` is not a tracing level")),
  }
}
