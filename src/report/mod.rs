//! Report generation.
//!
//! Each report walks the resource tree sequentially and accumulates one row
//! per finding, in discovery order. Rendering is left to [`crate::output`].

pub mod buildpacks;
pub mod users;

pub use buildpacks::{
    reconcile, report_buildpacks, BuildpackIndex, BuildpackUsage, BuildpacksReportOptions,
    NEEDS_ATTENTION_DROPLET_FAILED, OK,
};
pub use users::{report_users, UserRoleLineItem, UsersReportOptions};
