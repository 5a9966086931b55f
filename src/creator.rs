use std::{fs, path::PathBuf};

use anyhow::Context;
use log::info;

use crate::{
  cli::CreateArgs, config::SiteConfig, error::MyError, timestamp, utils, DRAFTS_DIR,
  POSTS_DIR,
};

/// The kinds of files the scaffolding commands create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
  Post,
  Draft,
  Page,
}

impl ResourceKind {
  fn label(self) -> &'static str {
    match self {
      Self::Post => "post",
      Self::Draft => "draft",
      Self::Page => "page",
    }
  }

  fn layout(self) -> &'static str {
    match self {
      Self::Page => "page",
      _ => "post",
    }
  }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
  Created,
  Collision,
}

/// A resolved file-creation request: destination path plus skeleton content.
#[derive(Debug)]
pub struct Creation {
  source:  String,
  path:    PathBuf,
  content: String,
  force:   bool,
  kind:    ResourceKind,
}

impl Creation {
  pub fn new(kind: ResourceKind, args: &CreateArgs) -> Result<Self, MyError> {
    if args.title.is_empty() {
      return Err(MyError::Usage("You must specify a name.".to_string()));
    }
    let source = SiteConfig::resolve_source(&args.common)?;
    let title = args.title.join(" ");
    let slug = utils::slugify(&title);
    let date = timestamp::invocation_date(args.common.date.as_deref())?;

    let name = match kind {
      ResourceKind::Post => {
        format!("{POSTS_DIR}/{}-{slug}.{}", timestamp::datestamp(&date), args.extension)
      },
      ResourceKind::Draft => format!("{DRAFTS_DIR}/{slug}.{}", args.extension),
      ResourceKind::Page => format!("{slug}.{}", args.extension),
    };
    let path = PathBuf::from(utils::join_source(&source, &name));

    // Skeleton front matter. Only posts carry a date; drafts get theirs when
    // published.
    let mut content = format!("---\nlayout: {}\ntitle: {title}\n", kind.layout());
    if kind == ResourceKind::Post {
      let value =
        timestamp::front_matter_value(&date, args.common.timestamp_format.as_deref());
      content.push_str(&format!("date: {value}\n"));
    }
    content.push_str("---\n");

    Ok(Self { source, path, content, force: args.common.force, kind })
  }

  pub fn create(&self) -> Result<Outcome, MyError> {
    if self.path.exists() && !self.force {
      println!("A {} already exists at {}", self.kind.label(), self.rel());
      return Ok(Outcome::Collision);
    }

    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent)
        .with_context(|| format!("Could not create directory {parent:?}"))?;
    }
    fs::write(&self.path, &self.content)
      .with_context(|| format!("Could not write {:?}", self.path))?;
    info!("created {:?}", self.path);

    println!("New {} created at {}", self.kind.label(), self.rel());
    Ok(Outcome::Created)
  }

  fn rel(&self) -> String {
    utils::display_relative(&self.source, &self.path)
  }
}
