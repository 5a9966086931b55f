use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::MyError;

/// Format for the front-matter `date` value when none is configured.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d";
/// Format for the date prefix of post filenames. Fixed, regardless of any
/// `--timestamp_format` override.
pub const DATESTAMP_FORMAT: &str = "%Y-%m-%d";

/// Parse a user-supplied date like `2012-3-4`, defaulting the time of day to
/// midnight when only a calendar date was given.
pub fn parse_date(input: &str) -> Result<NaiveDateTime, MyError> {
  for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
      return Ok(datetime);
    }
  }
  if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
    return Ok(date.and_time(NaiveTime::MIN));
  }
  Err(MyError::Date(input.to_string()))
}

/// The date an invocation stamps files with: the `--date` option if given,
/// otherwise now.
pub fn invocation_date(option: Option<&str>) -> Result<NaiveDateTime, MyError> {
  match option {
    Some(input) => parse_date(input),
    None => Ok(Local::now().naive_local()),
  }
}

/// Format the date for embedding as a front-matter value.
///
/// Quoting rule: the value is single-quoted whenever it contains a character
/// outside `[0-9-]`, with embedded single quotes doubled. The default format
/// yields a bare value like `2012-03-04`.
pub fn front_matter_value(date: &NaiveDateTime, format: Option<&str>) -> String {
  let formatted = date.format(format.unwrap_or(DEFAULT_TIMESTAMP_FORMAT)).to_string();
  if formatted.chars().all(|c| c.is_ascii_digit() || c == '-') {
    formatted
  } else {
    format!("'{}'", formatted.replace('\'', "''"))
  }
}

/// The filename prefix for a post published on `date`.
pub fn datestamp(date: &NaiveDateTime) -> String {
  date.format(DATESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;

  #[rstest]
  #[case("2012-03-04", 2012, 3, 4)]
  #[case("2012-3-4", 2012, 3, 4)]
  #[case("2024-12-31", 2024, 12, 31)]
  fn parses_bare_dates(#[case] input: &str, #[case] y: i32, #[case] m: u32, #[case] d: u32) {
    let parsed = parse_date(input).unwrap();
    assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(y, m, d).unwrap());
    assert_eq!(parsed.time(), NaiveTime::MIN);
  }

  #[test]
  fn parses_date_with_time() {
    let parsed = parse_date("2012-03-04 05:06:07").unwrap();
    assert_eq!(parsed.format("%H:%M:%S").to_string(), "05:06:07");
  }

  #[test]
  fn rejects_garbage() {
    assert!(matches!(parse_date("next tuesday"), Err(MyError::Date(_))));
  }

  #[rstest]
  #[case(None, "2012-03-04")]
  #[case(Some("%Y-%m-%d %H:%M:%S"), "'2012-03-04 00:00:00'")]
  #[case(Some("%d/%m/%Y"), "'04/03/2012'")]
  #[case(Some("%Y-%m-%d"), "2012-03-04")]
  fn formats_and_quotes(#[case] format: Option<&str>, #[case] expected: &str) {
    let date = parse_date("2012-3-4").unwrap();
    assert_eq!(front_matter_value(&date, format), expected);
  }

  #[test]
  fn datestamp_ignores_timestamp_format() {
    let date = parse_date("2012-3-4").unwrap();
    assert_eq!(datestamp(&date), "2012-03-04");
  }
}
