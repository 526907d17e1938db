//! The parity check itself: wires the directory lister, set comparator, and
//! content differ together behind the manual override gate.

use std::path::PathBuf;

use crate::compare::{self, ComparisonResult};
use crate::error::ParityError;
use crate::fileset::{FileSet, Pattern};

pub const DEFAULT_DEV_DIR: &str = "../dev";
pub const DEFAULT_PROD_DIR: &str = "../prod";
pub const DEFAULT_PATTERN: &str = "*.tf";

/// Manual override for the parity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Enabled,
    Disabled,
}

impl Gate {
    pub fn from_override(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub dev_root: PathBuf,
    pub prod_root: PathBuf,
    pub pattern: String,
    pub gate: Gate,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            dev_root: PathBuf::from(DEFAULT_DEV_DIR),
            prod_root: PathBuf::from(DEFAULT_PROD_DIR),
            pattern: DEFAULT_PATTERN.to_string(),
            gate: Gate::Enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Environments are in parity.
    Pass,
    /// The gate was disabled; no directory I/O was performed.
    Skipped,
    /// Environments differ.
    Fail(ComparisonResult),
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        !matches!(self, CheckOutcome::Fail(_))
    }
}

/// Run the parity check.
///
/// Stateless and read-only: every invocation recomputes both filesets and
/// every shared-file digest from scratch. A disabled gate short-circuits
/// before any filesystem access.
pub async fn run(config: &CheckConfig) -> Result<CheckOutcome, ParityError> {
    if config.gate == Gate::Disabled {
        tracing::info!("parity check disabled by override, skipping");
        return Ok(CheckOutcome::Skipped);
    }

    let pattern = Pattern::new(&config.pattern)?;

    let dev = FileSet::scan(&config.dev_root, &pattern)?;
    tracing::info!(
        count = dev.len(),
        root = %config.dev_root.display(),
        "dev fileset scanned"
    );

    let prod = FileSet::scan(&config.prod_root, &pattern)?;
    tracing::info!(
        count = prod.len(),
        root = %config.prod_root.display(),
        "prod fileset scanned"
    );

    let (only_in_dev, only_in_prod, shared) = compare::split(&dev, &prod);

    let differing =
        compare::differing_contents(&config.dev_root, &config.prod_root, &shared).await?;
    tracing::info!(
        shared = shared.len(),
        differing = differing.len(),
        "content comparison complete"
    );

    let result = ComparisonResult {
        only_in_dev,
        only_in_prod,
        differing,
    };

    if result.is_match() {
        Ok(CheckOutcome::Pass)
    } else {
        Ok(CheckOutcome::Fail(result))
    }
}
