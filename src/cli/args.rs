use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tfparity::check::{DEFAULT_DEV_DIR, DEFAULT_PATTERN, DEFAULT_PROD_DIR};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assert that the dev and prod environments contain identical files
    Check(CheckArgs),
    /// Summarize the differences between the environments
    Report(ReportArgs),
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Dev environment directory
    #[arg(long, default_value = DEFAULT_DEV_DIR, env = "TFPARITY_DEV_DIR")]
    pub dev: PathBuf,

    /// Prod environment directory
    #[arg(long, default_value = DEFAULT_PROD_DIR, env = "TFPARITY_PROD_DIR")]
    pub prod: PathBuf,

    /// Filename pattern to compare (`*` and `?` wildcards)
    #[arg(long, default_value = DEFAULT_PATTERN, env = "TFPARITY_PATTERN")]
    pub pattern: String,

    /// Bypass the check entirely; it passes regardless of contents
    #[arg(long, env = "TFPARITY_DISABLE")]
    pub disable: bool,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Dev environment directory
    #[arg(long, default_value = DEFAULT_DEV_DIR, env = "TFPARITY_DEV_DIR")]
    pub dev: PathBuf,

    /// Prod environment directory
    #[arg(long, default_value = DEFAULT_PROD_DIR, env = "TFPARITY_PROD_DIR")]
    pub prod: PathBuf,

    /// Filename pattern to compare (`*` and `?` wildcards)
    #[arg(long, default_value = DEFAULT_PATTERN, env = "TFPARITY_PATTERN")]
    pub pattern: String,

    /// Emit the comparison result as pretty-printed JSON
    #[arg(long)]
    pub json: bool,
}
