//! Mock Cloud Controller for E2E testing.
//!
//! This module provides an in-memory server that speaks enough of the
//! Cloud Controller `/v2` and `/v3` APIs to run both reports. Unlike
//! wiremock, which mocks individual requests per test, it builds every
//! collection link and `next_url` itself, so whole traversals can run
//! against it.
//!
//! # Example
//!
//! ```ignore
//! use cf_report::mock_server::{Fixtures, MockServer};
//! use cf_report::{report_users, CfClient, ClientOptions};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = CfClient::new("test-token", server.url(), ClientOptions::default()).unwrap();
//!
//!     let rows = report_users(&client, &Default::default()).await.unwrap();
//!     assert_eq!(rows[0].organization, "acme");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{MockOrganization, MockSpace, MockState};
