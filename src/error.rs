use thiserror::Error;

#[derive(Error, Debug)]
pub enum MyError {
  /// Missing or malformed command-line input, e.g. "You must specify a draft
  /// path."
  #[error("{0}")]
  Usage(String),
  #[error("could not parse date '{0}'")]
  Date(String),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Toml(#[from] toml::de::Error),
  #[error(transparent)]
  Other(#[from] anyhow::Error),
}
