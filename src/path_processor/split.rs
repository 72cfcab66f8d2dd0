/// Splits `input` into at most `limit` pieces on `separator`.
///
/// Only the first `limit - 1` separators are consumed; the last piece keeps
/// the remainder verbatim, separators included. A `limit` of zero yields
/// nothing.
pub fn split_bounded(input: &str, separator: char, limit: usize) -> Vec<&str> {
  if limit == 0 {
    return Vec::new();
  }

  let mut pieces = Vec::with_capacity(limit);
  let mut rest = input;

  while pieces.len() + 1 < limit {
    match rest.split_once(separator) {
      Some((head, tail)) => {
        pieces.push(head);
        rest = tail;
      },
      None => break,
    }
  }

  pieces.push(rest);
  pieces
}

/// Number of `separator` occurrences in `input`.
pub fn count_separators(input: &str, separator: char) -> usize {
  input.matches(separator).count()
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keeps_remainder_after_limit() {
    assert_eq!(
      split_bounded("thumbnail/rokka/a/b/c.png", '/', 3),
      vec!["thumbnail", "rokka", "a/b/c.png"]
    );
  }

  #[test]
  fn stops_early_when_separators_run_out() {
    assert_eq!(split_bounded("thumbnail/rokka", '/', 3), vec!["thumbnail", "rokka"]);
    assert_eq!(split_bounded("thumbnail", '/', 3), vec!["thumbnail"]);
  }

  #[test]
  fn preserves_empty_pieces() {
    assert_eq!(split_bounded("/rokka/", '/', 3), vec!["", "rokka", ""]);
    assert_eq!(split_bounded("", '/', 3), vec![""]);
  }

  #[test]
  fn limit_one_returns_input_whole() {
    assert_eq!(split_bounded("a/b/c", '/', 1), vec!["a/b/c"]);
  }

  #[test]
  fn limit_zero_returns_nothing() {
    assert!(split_bounded("a/b/c", '/', 0).is_empty());
  }

  #[test]
  fn counts_every_separator() {
    assert_eq!(count_separators("a/b/c/d.png", '/'), 3);
    assert_eq!(count_separators("thumbnail", '/'), 0);
  }
}
