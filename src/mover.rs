use std::{fs, path::PathBuf};

use anyhow::{anyhow, Context};
use log::{debug, info};
use regex::Regex;

use crate::{
  cli::MoveArgs, config::SiteConfig, error::MyError, front_matter, timestamp, utils,
  DRAFTS_DIR, POSTS_DIR,
};

/// What a movement does to the front-matter `date` key.
#[derive(Debug)]
enum DatePatch {
  Set(String),
  Remove,
}

/// How a movement ended. Missing sources and destination collisions are
/// expected outcomes, not errors.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
  Moved,
  SourceMissing,
  Collision,
}

/// A resolved source-to-destination move within the site tree.
#[derive(Debug)]
pub struct Movement {
  /// Site source root; status messages print paths relative to this.
  source:    String,
  from:      PathBuf,
  to:        PathBuf,
  patch:     DatePatch,
  force:     bool,
  kind_from: &'static str,
  kind_to:   &'static str,
}

impl Movement {
  /// Draft to post: the destination filename gains a date stamp and the
  /// front-matter `date` key is set to the invocation date.
  pub fn publish(args: &MoveArgs) -> Result<Self, MyError> {
    let source = SiteConfig::resolve_source(&args.common)?;
    let from = PathBuf::from(utils::resource_path(&source, &args.path, "draft")?);
    let date = timestamp::invocation_date(args.common.date.as_deref())?;

    let basename = basename(&from)?;
    let post_name = format!("{}-{basename}", timestamp::datestamp(&date));
    let to = PathBuf::from(utils::join_source(&source, &format!("{POSTS_DIR}/{post_name}")));
    let value = timestamp::front_matter_value(&date, args.common.timestamp_format.as_deref());

    Ok(Self {
      source,
      from,
      to,
      patch: DatePatch::Set(value),
      force: args.common.force,
      kind_from: "draft",
      kind_to: "post",
    })
  }

  /// Post back to draft: the date stamp is dropped from the filename and the
  /// front-matter `date` key is removed.
  pub fn unpublish(args: &MoveArgs) -> Result<Self, MyError> {
    let source = SiteConfig::resolve_source(&args.common)?;
    let from = PathBuf::from(utils::resource_path(&source, &args.path, "post")?);

    let stamp_re = Regex::new(r"^\d{4}-\d{2}-\d{2}-").unwrap();
    let draft_name = stamp_re.replace(&basename(&from)?, "").to_string();
    let to = PathBuf::from(utils::join_source(&source, &format!("{DRAFTS_DIR}/{draft_name}")));

    Ok(Self {
      source,
      from,
      to,
      patch: DatePatch::Remove,
      force: args.common.force,
      kind_from: "post",
      kind_to: "draft",
    })
  }

  /// Run the movement. The destination is fully written before the original
  /// is removed; no rollback is attempted if the removal fails.
  pub fn run(&self) -> Result<Outcome, MyError> {
    debug!("moving {:?} to {:?}", self.from, self.to);

    if !self.from.exists() {
      println!("There was no {} found at '{}'.", self.kind_from, self.rel(&self.from));
      return Ok(Outcome::SourceMissing);
    }
    if self.to.exists() && !self.force {
      println!("A {} already exists at {}", self.kind_to, self.rel(&self.to));
      return Ok(Outcome::Collision);
    }

    if let Some(parent) = self.to.parent() {
      fs::create_dir_all(parent)
        .with_context(|| format!("Could not create directory {parent:?}"))?;
    }

    let content = fs::read_to_string(&self.from)
      .with_context(|| format!("Could not read {:?}", self.from))?;
    let patched = match &self.patch {
      DatePatch::Set(value) => front_matter::set_date(&content, value),
      DatePatch::Remove => front_matter::remove_date(&content),
    };

    fs::write(&self.to, patched).with_context(|| format!("Could not write {:?}", self.to))?;
    fs::remove_file(&self.from)
      .with_context(|| format!("Could not remove {:?}", self.from))?;
    info!("moved {:?} to {:?}", self.from, self.to);

    println!(
      "{} {} was moved to {}",
      utils::capitalize(self.kind_from),
      self.rel(&self.from),
      self.rel(&self.to)
    );
    Ok(Outcome::Moved)
  }

  fn rel(&self, path: &std::path::Path) -> String {
    utils::display_relative(&self.source, path)
  }
}

fn basename(path: &std::path::Path) -> Result<String, MyError> {
  let name = path
    .file_name()
    .and_then(|n| n.to_str())
    .ok_or_else(|| anyhow!("path {path:?} has no file name"))?;
  Ok(name.to_string())
}
