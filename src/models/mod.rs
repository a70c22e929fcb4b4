//! Entity models for Cloud Controller resources.

mod app;
mod buildpack;
mod droplet;
mod organization;
mod resource;
mod role;
mod space;
mod user;

pub use app::{App, AppEntity};
pub use buildpack::{Buildpack, BuildpackEntity, VersionMatch};
pub use droplet::{Droplet, DropletBuildpack};
pub use organization::{Organization, OrganizationEntity};
pub use resource::{Metadata, Resource};
pub use role::Role;
pub use space::{Space, SpaceEntity};
pub use user::{User, UserEntity};
