//! Minimal line-oriented front-matter editing.
//!
//! Only the `date` key is ever touched. Every other line of the file,
//! including comments and unrelated keys inside the block, passes through
//! byte-for-byte. This is deliberately not a YAML parser.

/// Set the `date` key in the front-matter block to `value`, replacing an
/// existing `date:` line or inserting one right after the opening `---`.
/// Content without a front-matter block is returned unchanged.
pub fn set_date(content: &str, value: &str) -> String {
  patch(content, Some(value))
}

/// Delete the `date` key from the front-matter block, if present.
pub fn remove_date(content: &str) -> String {
  patch(content, None)
}

fn patch(content: &str, value: Option<&str>) -> String {
  let lines: Vec<&str> = content.split_inclusive('\n').collect();

  // The block opens on the very first line and closes on the next line that
  // is exactly `---`.
  if lines.first().map(|l| line_text(l)) != Some("---") {
    return content.to_string();
  }
  let Some(close) = lines[1..].iter().position(|l| line_text(l) == "---").map(|i| i + 1)
  else {
    return content.to_string();
  };
  let date_line =
    lines[1..close].iter().position(|l| line_text(l).starts_with("date:")).map(|i| i + 1);

  let mut patched = String::with_capacity(content.len() + 32);
  for (i, line) in lines.iter().enumerate() {
    if date_line == Some(i) {
      if let Some(value) = value {
        patched.push_str("date: ");
        patched.push_str(value);
        patched.push('\n');
      }
      continue;
    }
    patched.push_str(line);
    if i == 0 && date_line.is_none() {
      if let Some(value) = value {
        patched.push_str("date: ");
        patched.push_str(value);
        patched.push('\n');
      }
    }
  }
  patched
}

fn line_text(line: &str) -> &str {
  line.trim_end_matches('\n').trim_end_matches('\r')
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inserts_date_when_absent() {
    let content = "---\nlayout: post\n---\n";
    assert_eq!(set_date(content, "2012-03-04"), "---\ndate: 2012-03-04\nlayout: post\n---\n");
  }

  #[test]
  fn replaces_existing_date_in_place() {
    let content = "---\nlayout: post\ndate: 2001-01-01\ntitle: hi\n---\nbody\n";
    assert_eq!(
      set_date(content, "2012-03-04"),
      "---\nlayout: post\ndate: 2012-03-04\ntitle: hi\n---\nbody\n"
    );
  }

  #[test]
  fn leaves_body_and_comments_untouched() {
    let content = "---\n# a comment\nlayout: post\n---\n\ndate: not front matter\n";
    let patched = set_date(content, "2012-03-04");
    assert!(patched.contains("# a comment\n"));
    assert!(patched.ends_with("---\n\ndate: not front matter\n"));
  }

  #[test]
  fn no_front_matter_passes_through() {
    let content = "just a plain file\n";
    assert_eq!(set_date(content, "2012-03-04"), content);
    assert_eq!(remove_date(content), content);
  }

  #[test]
  fn unclosed_block_passes_through() {
    let content = "---\nlayout: post\n";
    assert_eq!(set_date(content, "2012-03-04"), content);
  }

  #[test]
  fn removes_date_line() {
    let content = "---\nlayout: post\ndate: 2012-03-04\n---\nbody\n";
    assert_eq!(remove_date(content), "---\nlayout: post\n---\nbody\n");
  }

  #[test]
  fn remove_without_date_is_noop() {
    let content = "---\nlayout: post\n---\n";
    assert_eq!(remove_date(content), content);
  }
}
