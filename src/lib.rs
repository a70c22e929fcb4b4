//! Cloud Foundry reporting library.
//!
//! Walks the Cloud Controller `/v2` resource tree (organizations, spaces,
//! role collections, applications) following `next_url` pagination, and
//! aggregates the results into user-role and buildpack-usage reports.
//!
//! # Quick Start
//!
//! ```no_run
//! use cf_report::{report_users, CfClient, ClientOptions, UsersReportOptions};
//!
//! #[tokio::main]
//! async fn main() -> cf_report::Result<()> {
//!     let client = CfClient::new(
//!         "bearer eyJhbGciOi...",
//!         "https://api.sys.example.com",
//!         ClientOptions::default(),
//!     )?;
//!
//!     let rows = report_users(&client, &UsersReportOptions::default()).await?;
//!     for row in rows {
//!         println!("{} {:?} {} {}", row.organization, row.space, row.username, row.role);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`CfClient`] issues authenticated GET requests and decodes JSON.
//! - [`Pager`] lazily walks a paginated collection; [`walk`] visits each
//!   item with a callback and stops at the first error.
//! - Entity types ([`Organization`], [`Space`], [`User`], [`App`],
//!   [`Buildpack`], [`Droplet`]) each decode their own narrow view of the
//!   API payload and implement [`Get`] / [`List`] where supported.
//! - [`report`] strings the walks together; [`output`] renders the rows.
//!
//! All requests are issued one at a time. Any failure aborts the report,
//! except a missing droplet, which is flagged on the affected row.
//!
//! # Configuration
//!
//! The binary takes the API endpoint and access token from `--api` /
//! `--token` (or `CF_API` / `CF_ACCESS_TOKEN`), falling back to the cf CLI's
//! `~/.cf/config.json`.

pub mod cli;
mod client;
mod config;
mod error;
mod models;
pub mod output;
mod pagination;
pub mod report;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{CfClient, ClientOptions};
pub use config::{CfConfigFile, Config, Overrides};
pub use error::{CfError, Result};
pub use pagination::{walk, Page, Pager};

// Re-export traits
pub use traits::{Get, List};

// Re-export models
pub use models::{
    App, AppEntity, Buildpack, BuildpackEntity, Droplet, DropletBuildpack, Metadata,
    Organization, OrganizationEntity, Resource, Role, Space, SpaceEntity, User, UserEntity,
    VersionMatch,
};

// Re-export reports and rendering
pub use output::{write_report, OutputFormat, TableRow};
pub use report::{
    reconcile, report_buildpacks, report_users, BuildpackIndex, BuildpackUsage,
    BuildpacksReportOptions, UserRoleLineItem, UsersReportOptions,
};
