//! Report rendering.
//!
//! Rows are either serialized as a JSON array or projected into [`Tabled`]
//! display rows via [`TableRow`] and printed as a table.

use std::io::Write;

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::Result;
use crate::report::{BuildpackUsage, UserRoleLineItem};

/// How a report is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// A rendered text table.
    #[default]
    Table,
    /// A JSON array of rows.
    Json,
}

impl OutputFormat {
    /// Pick the format from the `--output-json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Projects a report record into a table row for terminal display.
pub trait TableRow {
    /// The display row type.
    type Row: Tabled;

    /// Build the display row.
    fn to_row(&self) -> Self::Row;
}

/// Write `rows` to `out` in the requested format.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_report<T, W>(out: &mut W, rows: &[T], format: OutputFormat) -> Result<()>
where
    T: Serialize + TableRow,
    W: Write,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let table = Table::new(rows.iter().map(T::to_row));
            writeln!(out, "{table}")?;
        }
    }
    Ok(())
}

#[derive(Tabled)]
pub struct UserRoleRow {
    #[tabled(rename = "Organization")]
    organization: String,
    #[tabled(rename = "Space")]
    space: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Role")]
    role: String,
}

impl TableRow for UserRoleLineItem {
    type Row = UserRoleRow;

    fn to_row(&self) -> UserRoleRow {
        UserRoleRow {
            organization: self.organization.clone(),
            space: self.space.clone().unwrap_or_default(),
            username: self.username.clone(),
            role: self.role.to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct BuildpackUsageRow {
    #[tabled(rename = "Organization")]
    organization: String,
    #[tabled(rename = "Space")]
    space: String,
    #[tabled(rename = "Application")]
    application: String,
    #[tabled(rename = "Buildpacks")]
    buildpacks: String,
    #[tabled(rename = "Messages")]
    messages: String,
}

impl TableRow for BuildpackUsage {
    type Row = BuildpackUsageRow;

    fn to_row(&self) -> BuildpackUsageRow {
        BuildpackUsageRow {
            organization: self.organization.clone(),
            space: self.space.clone(),
            application: self.application.clone(),
            buildpacks: self.buildpacks.join(", "),
            messages: self.messages.join(", "),
        }
    }
}
