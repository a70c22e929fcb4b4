//! User/role report traversal tests against wiremock.

use cf_report::{
    report_users, CfClient, CfError, ClientOptions, Role, UserRoleLineItem, UsersReportOptions,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> CfClient {
    CfClient::new(
        "test-token",
        &server.uri(),
        ClientOptions {
            quiet: true,
            insecure_skip_verify: false,
        },
    )
    .unwrap()
}

fn single_page(resources: Vec<serde_json::Value>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "total_results": resources.len(),
        "total_pages": 1,
        "prev_url": null,
        "next_url": null,
        "resources": resources
    }))
}

fn user(username: &str) -> serde_json::Value {
    serde_json::json!({
        "metadata": { "guid": format!("{username}-guid") },
        "entity": { "username": username, "admin": false, "active": true }
    })
}

async fn mount(server: &MockServer, route: &str, resources: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(single_page(resources))
        .mount(server)
        .await;
}

/// Organization "acme": OrgManager={alice}, OrgAuditor={bob}, OrgUser={alice, bob},
/// one space "prod" with SpaceDeveloper={carol}.
async fn mount_acme(server: &MockServer) {
    mount(
        server,
        "/v2/organizations",
        vec![serde_json::json!({
            "metadata": { "guid": "org-acme" },
            "entity": {
                "name": "acme",
                "spaces_url": "/v2/organizations/org-acme/spaces",
                "users_url": "/v2/organizations/org-acme/users",
                "managers_url": "/v2/organizations/org-acme/managers",
                "billing_managers_url": "/v2/organizations/org-acme/billing_managers",
                "auditors_url": "/v2/organizations/org-acme/auditors"
            }
        })],
    )
    .await;
    mount(
        server,
        "/v2/organizations/org-acme/users",
        vec![user("alice"), user("bob")],
    )
    .await;
    mount(server, "/v2/organizations/org-acme/managers", vec![user("alice")]).await;
    mount(server, "/v2/organizations/org-acme/billing_managers", vec![]).await;
    mount(server, "/v2/organizations/org-acme/auditors", vec![user("bob")]).await;
    mount(
        server,
        "/v2/organizations/org-acme/spaces",
        vec![serde_json::json!({
            "metadata": { "guid": "space-prod" },
            "entity": {
                "name": "prod",
                "developers_url": "/v2/spaces/space-prod/developers",
                "managers_url": "/v2/spaces/space-prod/managers",
                "auditors_url": "/v2/spaces/space-prod/auditors",
                "apps_url": "/v2/spaces/space-prod/apps"
            }
        })],
    )
    .await;
    mount(server, "/v2/spaces/space-prod/developers", vec![user("carol")]).await;
    mount(server, "/v2/spaces/space-prod/managers", vec![]).await;
    mount(server, "/v2/spaces/space-prod/auditors", vec![]).await;
}

fn item(space: Option<&str>, username: &str, role: Role) -> UserRoleLineItem {
    UserRoleLineItem {
        organization: "acme".to_string(),
        space: space.map(str::to_string),
        username: username.to_string(),
        role,
    }
}

#[tokio::test]
async fn test_report_users_acme_example() {
    let server = MockServer::start().await;
    mount_acme(&server).await;

    let rows = report_users(&client(&server), &UsersReportOptions::default())
        .await
        .unwrap();

    assert_eq!(
        rows,
        vec![
            item(None, "alice", Role::OrgManager),
            item(None, "bob", Role::OrgAuditor),
            item(Some("prod"), "carol", Role::SpaceDeveloper),
        ]
    );
}

#[tokio::test]
async fn test_report_users_with_org_users() {
    let server = MockServer::start().await;
    mount_acme(&server).await;

    let options = UsersReportOptions {
        include_org_users: true,
    };
    let rows = report_users(&client(&server), &options).await.unwrap();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], item(None, "alice", Role::OrgUser));
    assert_eq!(rows[1], item(None, "bob", Role::OrgUser));
    assert_eq!(rows[2], item(None, "alice", Role::OrgManager));
}

#[tokio::test]
async fn test_report_users_skips_org_users_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/org-acme/users"))
        .respond_with(single_page(vec![]))
        .with_priority(1)
        .expect(0)
        .mount(&server)
        .await;
    mount_acme(&server).await;

    report_users(&client(&server), &UsersReportOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_report_users_aborts_on_failed_role_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces/space-prod/developers"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_acme(&server).await;

    let result = report_users(&client(&server), &UsersReportOptions::default()).await;
    assert!(matches!(
        result,
        Err(CfError::ApiError {
            status_code: 500,
            ..
        })
    ));
}
