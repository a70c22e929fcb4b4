//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{
    App, AppEntity, Buildpack, BuildpackEntity, Droplet, DropletBuildpack, Metadata, Resource,
    Role, User, UserEntity,
};

use super::state::MockState;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    fn metadata(guid: &str) -> Metadata {
        Metadata {
            guid: guid.to_string(),
            ..Default::default()
        }
    }

    /// Create a user with a username.
    pub fn user(guid: &str, username: &str) -> User {
        Resource {
            metadata: Self::metadata(guid),
            entity: UserEntity {
                username: Some(username.to_string()),
            },
        }
    }

    /// Create an application, optionally with a legacy buildpack field.
    pub fn app(guid: &str, name: &str, buildpack: Option<&str>) -> App {
        Resource {
            metadata: Self::metadata(guid),
            entity: AppEntity {
                name: name.to_string(),
                buildpack: buildpack.map(str::to_string),
                ..Default::default()
            },
        }
    }

    /// Create an admin buildpack.
    pub fn buildpack(guid: &str, name: &str, filename: &str, enabled: bool) -> Buildpack {
        Resource {
            metadata: Self::metadata(guid),
            entity: BuildpackEntity {
                name: name.to_string(),
                filename: Some(filename.to_string()),
                enabled,
            },
        }
    }

    /// Create a staged droplet from `(name, buildpack_name, version)` entries.
    pub fn droplet(guid: &str, buildpacks: &[(&str, &str, &str)]) -> Droplet {
        Droplet {
            guid: guid.to_string(),
            buildpacks: buildpacks
                .iter()
                .map(|(name, buildpack_name, version)| DropletBuildpack {
                    name: name.to_string(),
                    buildpack_name: Some(buildpack_name.to_string()),
                    version: Some(version.to_string()),
                })
                .collect(),
        }
    }

    // =========================================================================
    // Complete Scenarios
    // =========================================================================

    /// A small installation exercising both reports.
    ///
    /// - Organization "acme": OrgUser {alice, bob}, OrgManager {alice},
    ///   OrgAuditor {bob}
    /// - Space "prod": SpaceDeveloper {carol, dave, erin} (spans pages),
    ///   SpaceManager {alice}; apps "api" (current go buildpack),
    ///   "web" (outdated nodejs), "worker" (no droplet)
    /// - Space "dev": no roles, no apps
    /// - Organization "globex": OrgManager {frank}, no spaces
    pub fn default_scenario() -> MockState {
        let alice = Self::user("user-alice", "alice");
        let bob = Self::user("user-bob", "bob");

        MockState::new()
            .with_buildpack(Self::buildpack(
                "bp-go",
                "go_buildpack",
                "go_buildpack-cached-cflinuxfs3-v1.2.3.zip",
                true,
            ))
            .with_buildpack(Self::buildpack(
                "bp-nodejs",
                "nodejs_buildpack",
                "nodejs_buildpack-cached-cflinuxfs3-v1.7.0.zip",
                true,
            ))
            .with_buildpack(Self::buildpack(
                "bp-java",
                "java_buildpack",
                "java_buildpack-cached-cflinuxfs3-v4.20.zip",
                false,
            ))
            .with_organization("org-acme", "acme")
            .with_org_role("org-acme", Role::OrgUser, alice.clone())
            .with_org_role("org-acme", Role::OrgUser, bob.clone())
            .with_org_role("org-acme", Role::OrgManager, alice.clone())
            .with_org_role("org-acme", Role::OrgAuditor, bob)
            .with_space("org-acme", "space-prod", "prod")
            .with_space_role("space-prod", Role::SpaceDeveloper, Self::user("user-carol", "carol"))
            .with_space_role("space-prod", Role::SpaceDeveloper, Self::user("user-dave", "dave"))
            .with_space_role("space-prod", Role::SpaceDeveloper, Self::user("user-erin", "erin"))
            .with_space_role("space-prod", Role::SpaceManager, alice)
            .with_app("space-prod", Self::app("app-api", "api", None))
            .with_app("space-prod", Self::app("app-web", "web", Some("nodejs_buildpack")))
            .with_app("space-prod", Self::app("app-worker", "worker", None))
            .with_droplet(
                "app-api",
                Self::droplet("droplet-api", &[("go_buildpack", "go", "1.2.3")]),
            )
            .with_droplet(
                "app-web",
                Self::droplet("droplet-web", &[("nodejs_buildpack", "nodejs", "1.6.0")]),
            )
            .with_space("org-acme", "space-dev", "dev")
            .with_organization("org-globex", "globex")
            .with_org_role("org-globex", Role::OrgManager, Self::user("user-frank", "frank"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_shape() {
        let state = Fixtures::default_scenario();
        assert_eq!(state.organizations.len(), 2);
        assert_eq!(state.buildpacks.len(), 3);
        assert!(state.get_droplet("app-api").is_some());
        assert!(state.get_droplet("app-worker").is_none());
    }

    #[test]
    fn test_droplet_fixture() {
        let droplet = Fixtures::droplet("d-1", &[("go_buildpack", "go", "1.2.3")]);
        assert_eq!(droplet.buildpacks[0].display().as_deref(), Some("go v1.2.3"));
    }
}
