use log::debug;

use crate::{
  cli::Cli,
  creator::{Creation, ResourceKind},
  error::MyError,
  mover::Movement,
};

mod cli;
mod config;
mod creator;
mod error;
mod front_matter;
mod mover;
mod timestamp;
mod utils;

/// Folder for unpublished content, under the site source directory.
const DRAFTS_DIR: &str = "_drafts";
/// Folder for published posts, under the site source directory.
const POSTS_DIR: &str = "_posts";
/// Site config file, resolved against the working directory.
const CONFIG_FILE_PATH: &str = "_config.toml";

fn main() -> Result<(), MyError> {
  let cli = utils::setup()?;
  debug!("invocation: {cli:?}");

  match &cli {
    Cli::Post(args) => {
      Creation::new(ResourceKind::Post, args)?.create()?;
    },
    Cli::Draft(args) => {
      Creation::new(ResourceKind::Draft, args)?.create()?;
    },
    Cli::Page(args) => {
      Creation::new(ResourceKind::Page, args)?.create()?;
    },
    Cli::Publish(args) => {
      Movement::publish(args)?.run()?;
    },
    Cli::Unpublish(args) => {
      Movement::unpublish(args)?.run()?;
    },
  }
  Ok(())
}
