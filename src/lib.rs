//! tfparity - Terraform Environment Parity
//!
//! A library for asserting that two Terraform environment directories contain
//! the same configuration files with identical content.

pub mod check;
pub mod compare;
pub mod fileset;
pub mod report;

mod digest;
mod error;

pub use check::{CheckConfig, CheckOutcome, Gate};
pub use compare::ComparisonResult;
pub use digest::ContentDigest;
pub use error::ParityError;
pub use fileset::{FileSet, Pattern};
