//! Organization and space roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named permission grouping linking users to an organization or space.
///
/// The label printed in reports is the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    OrgUser,
    OrgManager,
    OrgBillingManager,
    OrgAuditor,
    SpaceDeveloper,
    SpaceManager,
    SpaceAuditor,
}

impl Role {
    /// Organization-level roles in report order. `OrgUser` is opt-in.
    pub const ORG: [Role; 4] = [
        Role::OrgUser,
        Role::OrgManager,
        Role::OrgBillingManager,
        Role::OrgAuditor,
    ];

    /// Space-level roles in report order.
    pub const SPACE: [Role; 3] = [Role::SpaceDeveloper, Role::SpaceManager, Role::SpaceAuditor];

    /// The label used in report output.
    pub fn label(self) -> &'static str {
        match self {
            Role::OrgUser => "OrgUser",
            Role::OrgManager => "OrgManager",
            Role::OrgBillingManager => "OrgBillingManager",
            Role::OrgAuditor => "OrgAuditor",
            Role::SpaceDeveloper => "SpaceDeveloper",
            Role::SpaceManager => "SpaceManager",
            Role::SpaceAuditor => "SpaceAuditor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
