//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Cloud Controller.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{App, Buildpack, Droplet, Role, User};

/// Default number of resources per page; small so that walks span pages.
pub const DEFAULT_RESULTS_PER_PAGE: usize = 2;

/// An organization and everything nested under it.
#[derive(Debug, Clone, Default)]
pub struct MockOrganization {
    pub guid: String,
    pub name: String,
    pub roles: HashMap<Role, Vec<User>>,
    pub spaces: Vec<MockSpace>,
}

/// A space with its role holders and applications.
#[derive(Debug, Clone, Default)]
pub struct MockSpace {
    pub guid: String,
    pub name: String,
    pub roles: HashMap<Role, Vec<User>>,
    pub apps: Vec<App>,
}

/// Shared state for the mock server.
///
/// Collections keep insertion order, which is the order they are served in.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Organizations in listing order.
    pub organizations: Vec<MockOrganization>,

    /// Admin buildpacks in listing order.
    pub buildpacks: Vec<Buildpack>,

    /// Current droplet per application GUID. Apps without one get a 404.
    pub droplets: HashMap<String, Droplet>,

    /// Page size used when the request does not ask for one.
    pub results_per_page: usize,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            organizations: Vec::new(),
            buildpacks: Vec::new(),
            droplets: HashMap::new(),
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            required_token: None,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an organization.
    pub fn with_organization(mut self, guid: &str, name: &str) -> Self {
        self.organizations.push(MockOrganization {
            guid: guid.to_string(),
            name: name.to_string(),
            ..Default::default()
        });
        self
    }

    /// Grant an organization role to a user.
    ///
    /// # Panics
    ///
    /// Panics if the organization does not exist.
    pub fn with_org_role(mut self, org_guid: &str, role: Role, user: User) -> Self {
        self.org_mut(org_guid)
            .roles
            .entry(role)
            .or_default()
            .push(user);
        self
    }

    /// Add a space to an organization.
    ///
    /// # Panics
    ///
    /// Panics if the organization does not exist.
    pub fn with_space(mut self, org_guid: &str, guid: &str, name: &str) -> Self {
        self.org_mut(org_guid).spaces.push(MockSpace {
            guid: guid.to_string(),
            name: name.to_string(),
            ..Default::default()
        });
        self
    }

    /// Grant a space role to a user.
    ///
    /// # Panics
    ///
    /// Panics if the space does not exist.
    pub fn with_space_role(mut self, space_guid: &str, role: Role, user: User) -> Self {
        self.space_mut(space_guid)
            .roles
            .entry(role)
            .or_default()
            .push(user);
        self
    }

    /// Deploy an application into a space.
    ///
    /// # Panics
    ///
    /// Panics if the space does not exist.
    pub fn with_app(mut self, space_guid: &str, app: App) -> Self {
        self.space_mut(space_guid).apps.push(app);
        self
    }

    /// Install an admin buildpack.
    pub fn with_buildpack(mut self, buildpack: Buildpack) -> Self {
        self.buildpacks.push(buildpack);
        self
    }

    /// Set the current droplet of an application.
    pub fn with_droplet(mut self, app_guid: &str, droplet: Droplet) -> Self {
        self.droplets.insert(app_guid.to_string(), droplet);
        self
    }

    /// Set the default page size.
    pub fn with_results_per_page(mut self, results_per_page: usize) -> Self {
        self.results_per_page = results_per_page.max(1);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Get an organization by GUID.
    pub fn get_organization(&self, guid: &str) -> Option<&MockOrganization> {
        self.organizations.iter().find(|o| o.guid == guid)
    }

    /// Get a space by GUID, searching every organization.
    pub fn get_space(&self, guid: &str) -> Option<&MockSpace> {
        self.organizations
            .iter()
            .flat_map(|o| o.spaces.iter())
            .find(|s| s.guid == guid)
    }

    /// Get the current droplet of an application.
    pub fn get_droplet(&self, app_guid: &str) -> Option<&Droplet> {
        self.droplets.get(app_guid)
    }

    fn org_mut(&mut self, guid: &str) -> &mut MockOrganization {
        self.organizations
            .iter_mut()
            .find(|o| o.guid == guid)
            .unwrap_or_else(|| panic!("unknown organization {guid}"))
    }

    fn space_mut(&mut self, guid: &str) -> &mut MockSpace {
        self.organizations
            .iter_mut()
            .flat_map(|o| o.spaces.iter_mut())
            .find(|s| s.guid == guid)
            .unwrap_or_else(|| panic!("unknown space {guid}"))
    }
}
