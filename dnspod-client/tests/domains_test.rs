//! `Domain.*` 行为测试（内存 Transport）

mod common;

use common::{TEST_LOGIN_TOKEN, ok_body, setup};
use dnspod_client::{ClientError, Domain, DomainQuery};

#[tokio::test]
async fn list_domains() {
    let (client, transport) = setup();
    transport.reply(
        "Domain.List",
        &ok_body(
            r#""domains": [
                {"id": 2238269, "status": "enable"},
                {"id": 10360095, "status": "enable"}
            ]"#,
        ),
    );

    let domains = require_ok!(client.list_domains(&DomainQuery::default()).await);

    let want = vec![
        Domain {
            id: "2238269".to_string(),
            status: "enable".to_string(),
            ..Domain::default()
        },
        Domain {
            id: "10360095".to_string(),
            status: "enable".to_string(),
            ..Domain::default()
        },
    ];
    assert_eq!(domains, want);

    let sent = transport.last();
    assert_eq!(sent.path, "Domain.List");
    assert_eq!(sent.form.get("login_token"), Some(TEST_LOGIN_TOKEN));
    assert_eq!(sent.form.get("format"), Some("json"));
    assert_eq!(sent.form.len(), 2, "default query adds no filters");
}

#[tokio::test]
async fn list_domains_ambiguous_value_types() {
    let (client, transport) = setup();
    transport.reply(
        "Domain.List",
        &ok_body(
            r#""domains": [
                {"id": 2238269, "status": "enable", "group_id": 9},
                {"id": 10360095, "status": "enable", "group_id": "9"}
            ]"#,
        ),
    );

    let domains = require_ok!(client.list_domains(&DomainQuery::default()).await);

    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].id, "2238269");
    assert_eq!(domains[0].group_id, "9");
    assert_eq!(domains[1].id, "10360095");
    assert_eq!(domains[1].group_id, "9");
}

#[tokio::test]
async fn list_domains_sends_filters() {
    let (client, transport) = setup();
    transport.reply("Domain.List", &ok_body(r#""domains": []"#));

    let query = DomainQuery {
        kind: "mine".to_string(),
        offset: 20,
        length: 10,
        keyword: "example".to_string(),
        ..DomainQuery::default()
    };
    let domains = require_ok!(client.list_domains(&query).await);
    assert!(domains.is_empty());

    let form = transport.last().form;
    assert_eq!(form.get("type"), Some("mine"));
    assert_eq!(form.get("offset"), Some("20"));
    assert_eq!(form.get("length"), Some("10"));
    assert_eq!(form.get("keyword"), Some("example"));
    assert!(!form.contains_key("group_id"));
}

#[tokio::test]
async fn list_domains_without_payload_key_is_empty() {
    let (client, transport) = setup();
    transport.reply("Domain.List", &ok_body(""));

    let domains = require_ok!(client.list_domains(&DomainQuery::default()).await);
    assert!(domains.is_empty());
}

#[tokio::test]
async fn create_domain() {
    let (client, transport) = setup();
    transport.reply(
        "Domain.Create",
        &ok_body(r#""domain": {"id": 1, "name": "example.com"}"#),
    );

    let domain = require_ok!(
        client
            .create_domain(&Domain {
                name: "example.com".to_string(),
                ..Domain::default()
            })
            .await
    );

    assert_eq!(
        domain,
        Domain {
            id: "1".to_string(),
            name: "example.com".to_string(),
            ..Domain::default()
        }
    );

    let form = transport.last().form;
    assert_eq!(form.get("domain"), Some("example.com"));
    assert!(!form.contains_key("group_id"));
    assert!(!form.contains_key("is_mark"));
}

#[tokio::test]
async fn get_domain() {
    let (client, transport) = setup();
    transport.reply(
        "Domain.Info",
        &ok_body(r#""domain": {"id": 1, "name": "example.com", "grade": "DP_Free", "records": "5"}"#),
    );

    let domain = require_ok!(client.get_domain("1").await);

    assert_eq!(domain.id, "1");
    assert_eq!(domain.name, "example.com");
    assert_eq!(domain.grade, "DP_Free");
    assert_eq!(domain.records, "5");
    assert_eq!(transport.last().form.get("domain_id"), Some("1"));
}

#[tokio::test]
async fn get_domain_missing_payload_is_decode_error() {
    let (client, transport) = setup();
    transport.reply("Domain.Info", &ok_body(""));

    let err = require_err!(client.get_domain("1").await);
    assert!(matches!(err, ClientError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn delete_domain() {
    let (client, transport) = setup();
    transport.reply("Domain.Remove", &ok_body(""));

    require_ok!(client.delete_domain("1").await);

    let sent = transport.last();
    assert_eq!(sent.path, "Domain.Remove");
    assert_eq!(sent.form.get("domain_id"), Some("1"));
}

#[tokio::test]
async fn update_domain_status() {
    let (client, transport) = setup();
    transport.reply(
        "Domain.Status",
        r#"{
            "status": {
                "code": "1",
                "message": "Action completed successful",
                "created_at": "2015-01-18 12:02:04"
            }
        }"#,
    );

    require_ok!(client.update_domain_status("1", "enable").await);

    let form = transport.last().form;
    assert_eq!(form.get("domain_id"), Some("1"));
    assert_eq!(form.get("status"), Some("enable"));
}
