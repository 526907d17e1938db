mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use tfparity::check::{self, CheckConfig, CheckOutcome, Gate};
use tfparity::{ComparisonResult, report};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => {
            let config = CheckConfig {
                dev_root: args.dev,
                prod_root: args.prod,
                pattern: args.pattern,
                gate: Gate::from_override(!args.disable),
            };
            match check::run(&config).await? {
                CheckOutcome::Pass => {
                    tracing::info!("environments match");
                }
                CheckOutcome::Skipped => {
                    tracing::warn!("parity check bypassed by override");
                }
                CheckOutcome::Fail(result) => {
                    eprintln!("{}", report::render(&result));
                    std::process::exit(1);
                }
            }
        }
        Command::Report(args) => {
            let config = CheckConfig {
                dev_root: args.dev,
                prod_root: args.prod,
                pattern: args.pattern,
                gate: Gate::Enabled,
            };
            let result = match check::run(&config).await? {
                CheckOutcome::Fail(result) => result,
                _ => ComparisonResult::default(),
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", report::summary_table(&result));
            }
        }
    }

    Ok(())
}
