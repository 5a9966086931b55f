use std::path::Path;

use clap::Parser;
use log::trace;

use crate::{cli::Cli, error::MyError};

/// Set up crate logging and environment variables.
pub(crate) fn setup() -> Result<Cli, MyError> {
  dotenv::dotenv().ok();
  env_logger::init();
  trace!("logger initialized");

  let args = Cli::parse();
  Ok(args)
}

/// Join the source directory with the user-supplied path tokens.
///
/// Several tokens are joined with single spaces, so unquoted titles with
/// spaces still resolve to one path. Errors if no token was given.
pub(crate) fn resource_path(
  source: &str,
  tokens: &[String],
  resource_type: &str,
) -> Result<String, MyError> {
  if tokens.is_empty() {
    return Err(MyError::Usage(format!("You must specify a {resource_type} path.")));
  }
  Ok(join_source(source, &tokens.join(" ")))
}

/// String-level join of the source directory and a relative path. An empty
/// source contributes no prefix, and a single leading separator is stripped
/// from the result so an absolute argument cannot escape the source root.
pub(crate) fn join_source(source: &str, rest: &str) -> String {
  let joined =
    if source.is_empty() { rest.to_string() } else { format!("{source}/{rest}") };
  match joined.strip_prefix('/') {
    Some(stripped) => stripped.to_string(),
    None => joined,
  }
}

/// Render a path relative to the source directory, for status messages.
pub(crate) fn display_relative(source: &str, path: &Path) -> String {
  if source.is_empty() {
    return path.display().to_string();
  }
  path.strip_prefix(source).unwrap_or(path).display().to_string()
}

/// Lowercase the title and collapse every run of non-alphanumeric characters
/// into a single hyphen. Leading and trailing hyphens are dropped.
pub(crate) fn slugify(title: &str) -> String {
  let mut slug = String::with_capacity(title.len());
  let mut pending_dash = false;
  for c in title.chars() {
    if c.is_ascii_alphanumeric() {
      if pending_dash && !slug.is_empty() {
        slug.push('-');
      }
      pending_dash = false;
      slug.push(c.to_ascii_lowercase());
    } else {
      pending_dash = true;
    }
  }
  slug
}

pub(crate) fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;
  use crate::error::MyError;

  #[rstest]
  #[case("", &["_drafts/a.md"], "_drafts/a.md")]
  #[case("site", &["_drafts/a.md"], "site/_drafts/a.md")]
  #[case("", &["_drafts/a", "test", "post.md"], "_drafts/a test post.md")]
  #[case("", &["/_drafts/a.md"], "_drafts/a.md")]
  fn resource_path_joins_and_strips(
    #[case] source: &str,
    #[case] tokens: &[&str],
    #[case] expected: &str,
  ) {
    let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(resource_path(source, &tokens, "draft").unwrap(), expected);
  }

  #[test]
  fn resource_path_requires_tokens() {
    let err = resource_path("", &[], "draft").unwrap_err();
    match err {
      MyError::Usage(msg) => assert_eq!(msg, "You must specify a draft path."),
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[rstest]
  #[case("My Title", "my-title")]
  #[case("Hello, World!", "hello-world")]
  #[case("  spaced   out  ", "spaced-out")]
  #[case("Already-Slugged", "already-slugged")]
  #[case("123 go", "123-go")]
  fn slugify_titles(#[case] title: &str, #[case] expected: &str) {
    assert_eq!(slugify(title), expected);
  }

  #[test]
  fn display_relative_strips_source_prefix() {
    assert_eq!(display_relative("site", Path::new("site/_posts/a.md")), "_posts/a.md");
    assert_eq!(display_relative("", Path::new("_posts/a.md")), "_posts/a.md");
  }
}
