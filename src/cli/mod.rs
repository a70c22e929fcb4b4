//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! cf-report binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Overrides;
use crate::models::VersionMatch;

/// Cloud Foundry reporting command-line interface.
#[derive(Parser, Debug)]
#[command(name = "cf-report", about = "Cloud Foundry user and buildpack reports", version)]
pub struct Cli {
    /// Send JSON to stdout instead of a rendered table.
    #[arg(long, global = true, default_value = "false")]
    pub output_json: bool,

    /// Suppress printing of progress messages to stderr.
    #[arg(long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Disable TLS certificate verification.
    #[arg(long, global = true, default_value = "false")]
    pub insecure_skip_verify: bool,

    /// Cloud Controller endpoint. Defaults to the cf CLI target.
    #[arg(long, global = true, env = "CF_API")]
    pub api: Option<String>,

    /// Access token. Defaults to the token stored by `cf login`.
    #[arg(long, global = true, env = "CF_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Configuration values given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api.clone(),
            access_token: self.token.clone(),
            quiet: self.quiet,
            insecure_skip_verify: self.insecure_skip_verify,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report all users and their org and space roles.
    ReportUsers {
        /// Include the OrgUser role, which is otherwise skipped.
        #[arg(long)]
        org_users: bool,
    },

    /// Report the buildpacks each application was staged with.
    ReportBuildpacks {
        /// How installed buildpack archives are matched against droplet versions.
        #[arg(long, value_enum, default_value_t = VersionMatchArg::Suffix)]
        version_match: VersionMatchArg,
    },
}

/// Version match policy as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionMatchArg {
    /// Archive name must end with `v<version>.zip`.
    Suffix,
    /// Archive name must contain the version.
    Substring,
}

impl From<VersionMatchArg> for VersionMatch {
    fn from(arg: VersionMatchArg) -> Self {
        match arg {
            VersionMatchArg::Suffix => VersionMatch::Suffix,
            VersionMatchArg::Substring => VersionMatch::Substring,
        }
    }
}
