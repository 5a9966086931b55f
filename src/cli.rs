use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Parser, Debug)]
#[clap(version = "0.1.0")]
#[command(name = "site-compose")]
#[command(bin_name = "site-compose")]
#[command(about = "a tool to scaffold drafts, posts and pages for a static site and publish them")]
pub enum Cli {
  /// Create a new post in the posts folder, filename stamped with the date
  #[clap(name = "post")]
  Post(CreateArgs),
  /// Create a new draft in the drafts folder
  #[clap(name = "draft")]
  Draft(CreateArgs),
  /// Create a new page at the source root
  #[clap(name = "page")]
  Page(CreateArgs),
  /// Move a draft into the posts folder under a date-stamped filename
  #[clap(name = "publish")]
  Publish(MoveArgs),
  /// Move a post back into the drafts folder, dropping the date stamp
  #[clap(name = "unpublish")]
  Unpublish(MoveArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
  /// Title of the new file. Several tokens are joined with spaces.
  #[arg(index = 1)]
  pub title:     Vec<String>,
  /// File extension for the created file
  #[arg(short = 'x', long, default_value = "md")]
  pub extension: String,
  #[clap(flatten)]
  pub common:    CommonArgs,
}

#[derive(Args, Debug)]
pub struct MoveArgs {
  /// Path of the file to move, relative to the source directory
  #[arg(index = 1)]
  pub path:   Vec<String>,
  #[clap(flatten)]
  pub common: CommonArgs,
}

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct CommonArgs {
  /// Date to stamp the file with, e.g. 2012-3-4. Defaults to today.
  #[arg(long)]
  pub date:             Option<String>,
  /// strftime pattern for the front-matter date value
  #[arg(long = "timestamp_format")]
  pub timestamp_format: Option<String>,
  /// Overwrite the destination if it already exists
  #[arg(short, long)]
  pub force:            bool,
  /// Site source directory. Overrides the config file.
  #[arg(long)]
  pub source:           Option<String>,
  /// Sets a custom config file
  #[arg(short, long, value_name = "FILE")]
  pub config:           Option<PathBuf>,
}
