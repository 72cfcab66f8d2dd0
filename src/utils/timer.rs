use chrono::{DateTime, Local};
use tracing_subscriber::fmt::{format, time};

const LOG_TIME_FORMAT: &str = "%F %T%.3f";

/// Local wall clock with millisecond precision for log lines.
pub struct LocalLogTimer;

impl LocalLogTimer {
  fn render(at: &DateTime<Local>) -> String {
    at.format(LOG_TIME_FORMAT).to_string()
  }
}

impl time::FormatTime for LocalLogTimer {
  fn format_time(&self, w: &mut format::Writer<'_>) -> std::fmt::Result {
    write!(w, "{}", Self::render(&Local::now()))
  }
}
