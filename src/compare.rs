use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::digest::ContentDigest;
use crate::fileset::FileSet;

#[derive(Debug, Error)]
pub enum CompareError {
    /// A shared file could not be read on one side. Surfaced as its own
    /// error so a transient read failure never shows up as drift.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("comparison task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// The outcome of comparing two environment directories.
///
/// All three lists are sorted. They are pairwise disjoint and, together with
/// the files whose content matched, cover every filename seen in either
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// Present in dev, missing from prod.
    pub only_in_dev: Vec<String>,
    /// Present in prod, missing from dev.
    pub only_in_prod: Vec<String>,
    /// Present in both environments with differing content.
    pub differing: Vec<String>,
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        self.only_in_dev.is_empty() && self.only_in_prod.is_empty() && self.differing.is_empty()
    }
}

/// Split two filename sets into dev-only, prod-only, and shared.
pub fn split(dev: &FileSet, prod: &FileSet) -> (Vec<String>, Vec<String>, BTreeSet<String>) {
    let only_in_dev = dev
        .iter()
        .filter(|name| !prod.contains(name))
        .map(str::to_string)
        .collect();
    let only_in_prod = prod
        .iter()
        .filter(|name| !dev.contains(name))
        .map(str::to_string)
        .collect();
    let shared = dev
        .iter()
        .filter(|name| prod.contains(name))
        .map(str::to_string)
        .collect();
    (only_in_dev, only_in_prod, shared)
}

/// Digest every shared filename on both sides and collect the names whose
/// content differs.
///
/// Each filename is compared in its own task since the comparisons are
/// independent. The returned list is sorted, so the report never depends on
/// task completion order.
pub async fn differing_contents(
    dev_root: &Path,
    prod_root: &Path,
    shared: &BTreeSet<String>,
) -> Result<Vec<String>, CompareError> {
    let mut tasks = JoinSet::new();

    for name in shared {
        let dev_path = dev_root.join(name);
        let prod_path = prod_root.join(name);
        let name = name.clone();
        tasks.spawn(async move {
            let dev_digest = ContentDigest::of_file(&dev_path)
                .await
                .map_err(|source| CompareError::Read {
                    path: dev_path,
                    source,
                })?;
            let prod_digest = ContentDigest::of_file(&prod_path)
                .await
                .map_err(|source| CompareError::Read {
                    path: prod_path,
                    source,
                })?;
            Ok::<_, CompareError>((name, dev_digest != prod_digest))
        });
    }

    let mut differing = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (name, differs) = joined??;
        if differs {
            differing.push(name);
        }
    }

    differing.sort();
    Ok(differing)
}
