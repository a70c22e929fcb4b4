//! cf-report CLI binary.
//!
//! Walks a Cloud Foundry installation and prints user or buildpack reports.

use std::io;
use std::process::ExitCode;

use cf_report::cli::{Cli, Command};
use cf_report::{
    report_buildpacks, report_users, write_report, BuildpacksReportOptions, CfClient, Config,
    OutputFormat, UsersReportOptions,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let client = match Config::resolve(cli.overrides()).and_then(|c| CfClient::from_config(&c)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Run `cf login`, or set CF_API and CF_ACCESS_TOKEN");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Progress goes to stderr so stdout carries only the report.
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(client: &CfClient, cli: Cli) -> cf_report::Result<()> {
    let format = OutputFormat::from_json_flag(cli.output_json);

    match cli.command {
        Command::ReportUsers { org_users } => {
            let options = UsersReportOptions {
                include_org_users: org_users,
            };
            let rows = report_users(client, &options).await?;
            write_report(&mut io::stdout().lock(), &rows, format)
        }
        Command::ReportBuildpacks { version_match } => {
            let options = BuildpacksReportOptions {
                version_match: version_match.into(),
            };
            let rows = report_buildpacks(client, &options).await?;
            write_report(&mut io::stdout().lock(), &rows, format)
        }
    }
}
