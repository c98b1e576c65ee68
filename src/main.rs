use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use port_progress::cli::{self, Command};
use port_progress::config::Config;
use port_progress::logging::{self, Verbosity};
use port_progress::output::{self, OutputFormatter};
use port_progress::{parity, review};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    let rendered = match &args.command {
        Command::Review(review_args) => {
            let review_config = config
                .review
                .apply(review_args.overrides())
                .context("Invalid review settings")?;
            tracing::info!("Output format: {}", review_args.format.as_str());
            let report = review::scan(&review_config).with_context(|| {
                format!("Failed to scan {}", review_config.root.display())
            })?;
            OutputFormatter::format_review(&report, review_args.format)?
        }
        Command::Parity(parity_args) => {
            let parity_config = config.parity.apply(parity_args.overrides());
            let report = parity::run(&parity_config).with_context(|| {
                format!(
                    "Failed to compare {} against {}",
                    parity_config.target_suite.display(),
                    parity_config.source_suite.display()
                )
            })?;
            OutputFormatter::format_parity(&report)?
        }
    };

    output::emit(&rendered, args.output_file.as_deref()).context("Failed to write report")?;

    Ok(())
}
