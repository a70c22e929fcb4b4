//! Pagination walker tests.
//!
//! Uses wiremock to serve multi-page collections and checks ordering,
//! termination and early-exit behaviour.

use cf_report::{walk, CfClient, CfError, ClientOptions, Organization, Pager};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> CfClient {
    CfClient::new(
        "bearer test-token",
        &server.uri(),
        ClientOptions {
            quiet: true,
            insecure_skip_verify: false,
        },
    )
    .unwrap()
}

fn org(name: &str) -> serde_json::Value {
    serde_json::json!({
        "metadata": { "guid": format!("{name}-guid") },
        "entity": { "name": name }
    })
}

/// Mount a collection at `/v2/organizations` split into the given pages.
async fn mount_pages(server: &MockServer, pages: &[&[&str]]) {
    for (i, names) in pages.iter().enumerate() {
        let page = i + 1;
        let next_url = if page < pages.len() {
            serde_json::json!(format!(
                "/v2/organizations?page={}&results-per-page=2",
                page + 1
            ))
        } else {
            serde_json::Value::Null
        };
        let body = serde_json::json!({
            "total_results": 0,
            "total_pages": pages.len(),
            "prev_url": null,
            "next_url": next_url,
            "resources": names.iter().map(|n| org(n)).collect::<Vec<_>>()
        });

        let mock = Mock::given(method("GET")).and(path("/v2/organizations"));
        let mock = if page == 1 {
            mock.and(query_param_is_missing("page"))
        } else {
            mock.and(query_param("page", page.to_string()))
        };
        mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn test_walk_visits_every_item_in_order() {
    let server = MockServer::start().await;
    mount_pages(&server, &[&["a", "b"], &["c", "d"], &["e"]]).await;

    let client = client(&server);
    let mut seen = Vec::new();
    walk(&client, "/v2/organizations", |org: Organization| {
        seen.push(org.name().to_string());
        Ok(())
    })
    .await
    .unwrap();

    assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn test_walk_handles_empty_middle_page() {
    let server = MockServer::start().await;
    mount_pages(&server, &[&["a"], &[], &["b"]]).await;

    let client = client(&server);
    let items = Pager::<Organization>::new(&client, "/v2/organizations")
        .collect_all()
        .await
        .unwrap();

    let names: Vec<&str> = items.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[tokio::test]
async fn test_walk_stops_at_visit_error() {
    let server = MockServer::start().await;

    // Only the first page may be requested
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": "/v2/organizations?page=2",
            "resources": [org("a"), org("b"), org("c")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": null,
            "resources": [org("d")]
        })))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut seen = Vec::new();
    let result = walk(&client, "/v2/organizations", |org: Organization| {
        seen.push(org.name().to_string());
        if org.name() == "b" {
            return Err(CfError::ConfigMissing("stop".to_string()));
        }
        Ok(())
    })
    .await;

    assert!(matches!(result, Err(CfError::ConfigMissing(_))));
    assert_eq!(seen, vec!["a", "b"]);
}

#[tokio::test]
async fn test_empty_next_url_terminates_after_one_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 0,
            "next_url": "",
            "resources": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut pager = Pager::<Organization>::new(&client, "/v2/organizations");
    assert!(pager.try_next().await.unwrap().is_none());
    assert_eq!(pager.pages_fetched(), 1);
    // Exhausted pager does not refetch
    assert!(pager.try_next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": null,
            "resources": [org("a")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = Pager::<Organization>::new(&client(&server), "/v2/organizations")
        .collect_all()
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_non_ok_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "description": "You are not authorized to perform the requested action",
            "error_code": "CF-NotAuthorized",
            "code": 10003
        })))
        .mount(&server)
        .await;

    let result = Pager::<Organization>::new(&client(&server), "/v2/organizations")
        .collect_all()
        .await;

    match result {
        Err(CfError::ApiError {
            status_code,
            message,
        }) => {
            assert_eq!(status_code, 403);
            assert!(message.contains("not authorized"));
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_200_success_status_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let result = Pager::<Organization>::new(&client(&server), "/v2/organizations")
        .collect_all()
        .await;
    assert!(matches!(
        result,
        Err(CfError::ApiError {
            status_code: 204,
            ..
        })
    ));
}

#[tokio::test]
async fn test_malformed_page_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = Pager::<Organization>::new(&client(&server), "/v2/organizations")
        .collect_all()
        .await;
    assert!(matches!(result, Err(CfError::ParseError(_))));
}

#[tokio::test]
async fn test_null_resources_is_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 0,
            "next_url": null,
            "resources": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orgs = Pager::<Organization>::new(&client(&server), "/v2/organizations")
        .collect_all()
        .await
        .unwrap();
    assert!(orgs.is_empty());
}

#[tokio::test]
async fn test_foreign_next_url_stays_on_api_host() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": "http://127.0.0.1:1/v2/organizations?page=2",
            "resources": [org("acme")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("page", "2"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": null,
            "resources": [org("globex")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orgs = Pager::<Organization>::new(&client(&server), "/v2/organizations")
        .collect_all()
        .await
        .unwrap();
    let names: Vec<&str> = orgs.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["acme", "globex"]);
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    let client = CfClient::new(
        "test-token",
        "http://127.0.0.1:1",
        ClientOptions {
            quiet: true,
            insecure_skip_verify: false,
        },
    )
    .unwrap();

    let result = walk(&client, "/v2/organizations", |_: Organization| Ok(())).await;
    assert!(matches!(result, Err(CfError::HttpError(_))));
}
