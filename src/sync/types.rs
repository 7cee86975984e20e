extern crate serde;

use serde::Serialize;
use std::{collections::HashSet, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Accepted,
    Other,
}
impl Status {
    pub fn from_display(display: &str) -> Self {
        if display == "Accepted" {
            Status::Accepted
        } else {
            Status::Other
        }
    }
}

/// One row of the submission history, normalized from either listing shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionSummary {
    pub id: u64,
    pub slug: String,
    pub language: String,
    pub status: Status,
    pub timestamp: Option<i64>,
}
impl fmt::Display for SubmissionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (submission {})", self.slug, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDetail {
    pub code: String,
    pub language: String,
    pub slug: String,
}

/// A single page of history plus the continuation flag.
#[derive(Debug, Default)]
pub struct Page {
    pub submissions: Vec<SubmissionSummary>,
    pub has_more: bool,
}

/// Slugs already handled in this run. Insertion only.
#[derive(Debug, Default)]
pub struct SeenSlugs(HashSet<String>);
impl SeenSlugs {
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns `true` the first time `slug` is offered.
    pub fn insert(&mut self, slug: &str) -> bool {
        !self.0.contains(slug) && self.0.insert(slug.to_owned())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub total: u64,
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
}
