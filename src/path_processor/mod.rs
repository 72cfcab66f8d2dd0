//! Inbound path processing for Rokka image-style derivatives.
//!
//! The router only matches routes with a fixed number of segments, while a
//! derivative URL carries a whole file path after the style and scheme:
//!
//! ```text
//! /rokka/files/styles/{style}/{scheme}/{file...}
//! ```
//!
//! The processor moves `{file...}` into the `file` query parameter and
//! shortens the path to `/rokka/files/styles/{style}/{scheme}`.

use std::{borrow::Cow, collections::HashMap};

pub mod split;

use split::{count_separators, split_bounded};


pub const IMAGE_STYLE_PATH_PREFIX: &str = "/rokka/files/styles/";
pub const ROKKA_SCHEME: &str = "rokka";
pub const FILE_QUERY_KEY: &str = "file";


/// Settable query parameters of the request being routed.
pub trait QueryParameters {
  /// Sets `key` to `value`, replacing a previous value and leaving every
  /// other parameter alone.
  fn set_query_parameter(&mut self, key: &str, value: &str);
}

impl QueryParameters for HashMap<String, String> {
  fn set_query_parameter(&mut self, key: &str, value: &str) {
    self.insert(key.to_owned(), value.to_owned());
  }
}

/// Hook run on the request path before route matching.
pub trait InboundPathProcessor {
  /// Returns the path the router should match. Never fails: input it does
  /// not understand is returned as is.
  fn process_inbound<'a>(
    &self,
    path: &'a str,
    request: &mut dyn QueryParameters
  ) -> Cow<'a, str>;
}

/// Style, scheme and file path borrowed from the part of the path that
/// follows [`IMAGE_STYLE_PATH_PREFIX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageStyleRef<'a> {
  pub style: &'a str,
  pub scheme: &'a str,
  pub file: &'a str
}

impl<'a> ImageStyleRef<'a> {
  /// `None` unless `rest` holds at least two `/`.
  pub fn parse(rest: &'a str) -> Option<Self> {
    if count_separators(rest, '/') < 2 {
      return None;
    }

    match split_bounded(rest, '/', 3).as_slice() {
      &[style, scheme, file] => Some(
        Self {
          style,
          scheme,
          file
        }
      ),
      _ => None,
    }
  }

  /// Path the router matches once the file has moved to the query.
  pub fn route_path(&self) -> String {
    format!("{}{}/{}", IMAGE_STYLE_PATH_PREFIX, self.style, self.scheme)
  }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RokkaImageStylePathProcessor;

impl RokkaImageStylePathProcessor {
  pub fn new() -> Self {
    Self
  }

  pub fn is_image_style_path(path: &str) -> bool {
    path.starts_with(IMAGE_STYLE_PATH_PREFIX)
  }

  pub fn is_valid_scheme(scheme: &str) -> bool {
    scheme == ROKKA_SCHEME
  }
}

impl InboundPathProcessor for RokkaImageStylePathProcessor {
  fn process_inbound<'a>(
    &self,
    path: &'a str,
    request: &mut dyn QueryParameters
  ) -> Cow<'a, str> {
    if !Self::is_image_style_path(path) {
      return Cow::Borrowed(path);
    }

    let rest = &path[IMAGE_STYLE_PATH_PREFIX.len()..];

    let style_ref = match ImageStyleRef::parse(rest) {
      Some(style_ref) => style_ref,
      None => return Cow::Borrowed(path),
    };

    // An unknown scheme belongs to another delivery mechanism.
    if !Self::is_valid_scheme(style_ref.scheme) {
      return Cow::Borrowed(path);
    }

    request.set_query_parameter(FILE_QUERY_KEY, style_ref.file);

    Cow::Owned(style_ref.route_path())
  }
}
