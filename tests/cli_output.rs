//! Report rendering tests.

use cf_report::{write_report, BuildpackUsage, OutputFormat, Role, UserRoleLineItem};

fn user_rows() -> Vec<UserRoleLineItem> {
    vec![
        UserRoleLineItem {
            organization: "acme".to_string(),
            space: None,
            username: "alice".to_string(),
            role: Role::OrgManager,
        },
        UserRoleLineItem {
            organization: "acme".to_string(),
            space: Some("prod".to_string()),
            username: "carol".to_string(),
            role: Role::SpaceDeveloper,
        },
    ]
}

fn render<T>(rows: &[T], format: OutputFormat) -> String
where
    T: serde::Serialize + cf_report::TableRow,
{
    let mut out = Vec::new();
    write_report(&mut out, rows, format).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_json_output_is_array_of_rows() {
    let output = render(&user_rows(), OutputFormat::Json);

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["organization"], "acme");
    assert_eq!(rows[0]["role"], "OrgManager");
    // Org-level rows carry no space key at all
    assert!(rows[0].get("space").is_none());
    assert_eq!(rows[1]["space"], "prod");
}

#[test]
fn test_json_output_for_empty_report() {
    let rows: Vec<UserRoleLineItem> = vec![];
    let output = render(&rows, OutputFormat::Json);
    assert_eq!(output.trim(), "[]");
}

#[test]
fn test_table_output_has_headers_and_rows() {
    let output = render(&user_rows(), OutputFormat::Table);

    for header in ["Organization", "Space", "Username", "Role"] {
        assert!(output.contains(header), "missing header {header}");
    }
    assert!(output.contains("alice"));
    assert!(output.contains("SpaceDeveloper"));

    // Table output must not parse as JSON
    assert!(serde_json::from_str::<serde_json::Value>(&output).is_err());
}

#[test]
fn test_buildpack_table_joins_lists() {
    let rows = vec![BuildpackUsage {
        organization: "acme".to_string(),
        space: "prod".to_string(),
        application: "api".to_string(),
        buildpacks: vec!["nodejs v1.6.0".to_string(), "go v1.2.3".to_string()],
        messages: vec!["OK".to_string()],
    }];

    let output = render(&rows, OutputFormat::Table);
    assert!(output.contains("Application"));
    assert!(output.contains("Messages"));
    assert!(output.contains("nodejs v1.6.0, go v1.2.3"));
}

#[test]
fn test_buildpack_json_keeps_lists() {
    let rows = vec![BuildpackUsage {
        organization: "acme".to_string(),
        space: "prod".to_string(),
        application: "worker".to_string(),
        buildpacks: vec![],
        messages: vec!["needs attention (droplet fetch failed)".to_string()],
    }];

    let parsed: serde_json::Value =
        serde_json::from_str(&render(&rows, OutputFormat::Json)).unwrap();
    assert_eq!(parsed[0]["buildpacks"], serde_json::json!([]));
    assert_eq!(
        parsed[0]["messages"][0],
        "needs attention (droplet fetch failed)"
    );
}
