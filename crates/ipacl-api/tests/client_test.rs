#![allow(clippy::unwrap_used)]
// Integration tests for `WorkspaceClient` and `AccountClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ipacl_api::{
    AccountClient, CreateIpAccessList, Error, ListId, ListType, TransportConfig,
    UpdateIpAccessList, WorkspaceClient,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn workspace() -> (MockServer, WorkspaceClient) {
    let server = MockServer::start().await;
    let host = Url::parse(&server.uri()).unwrap();
    let client = WorkspaceClient::from_reqwest(&host, reqwest::Client::new());
    (server, client)
}

async fn account() -> (MockServer, AccountClient) {
    let server = MockServer::start().await;
    let host = Url::parse(&server.uri()).unwrap();
    let client = AccountClient::from_reqwest(&host, "acc-1", reqwest::Client::new());
    (server, client)
}

fn office_request() -> CreateIpAccessList {
    CreateIpAccessList {
        label: "office".into(),
        list_type: ListType::Allow,
        ip_addresses: vec!["203.0.113.0/24".into()],
        enabled: true,
    }
}

fn info_body(id: &str) -> serde_json::Value {
    json!({
        "ip_access_list": {
            "list_id": id,
            "label": "office",
            "list_type": "ALLOW",
            "ip_addresses": ["203.0.113.0/24"],
            "address_count": 256,
            "enabled": true,
            "created_at": 1_700_000_000_000_i64,
            "created_by": 42
        }
    })
}

// ── Workspace scope ─────────────────────────────────────────────────

#[tokio::test]
async fn test_workspace_create_returns_list_id() {
    let (server, client) = workspace().await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/ip-access-lists"))
        .and(body_json(json!({
            "label": "office",
            "list_type": "ALLOW",
            "ip_addresses": ["203.0.113.0/24"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(info_body("abc123")))
        .expect(1)
        .mount(&server)
        .await;

    let id = client.create(&office_request()).await.unwrap();
    assert_eq!(id, ListId::from("abc123"));
}

#[tokio::test]
async fn test_workspace_get() {
    let (server, client) = workspace().await;

    Mock::given(method("GET"))
        .and(path("/api/2.0/ip-access-lists/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info_body("abc123")))
        .mount(&server)
        .await;

    let info = client.get(&ListId::from("abc123")).await.unwrap();
    assert_eq!(info.label, "office");
    assert_eq!(info.list_type, ListType::Allow);
    assert_eq!(info.ip_addresses, vec!["203.0.113.0/24".to_string()]);
    assert_eq!(info.address_count, Some(256));
    assert!(info.enabled);
}

#[tokio::test]
async fn test_workspace_update_sends_patch_without_id_in_body() {
    let (server, client) = workspace().await;

    Mock::given(method("PATCH"))
        .and(path("/api/2.0/ip-access-lists/abc123"))
        .and(body_json(json!({
            "label": "office",
            "list_type": "ALLOW",
            "ip_addresses": ["203.0.113.0/24", "198.51.100.5"],
            "enabled": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateIpAccessList {
        ip_access_list_id: ListId::from("abc123"),
        label: "office".into(),
        list_type: ListType::Allow,
        ip_addresses: vec!["203.0.113.0/24".into(), "198.51.100.5".into()],
        enabled: false,
    };
    client.update(&request).await.unwrap();
}

#[tokio::test]
async fn test_workspace_delete() {
    let (server, client) = workspace().await;

    Mock::given(method("DELETE"))
        .and(path("/api/2.0/ip-access-lists/abc123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete(&ListId::from("abc123")).await.unwrap();
}

#[tokio::test]
async fn test_get_missing_list_is_not_found() {
    let (server, client) = workspace().await;

    Mock::given(method("GET"))
        .and(path("/api/2.0/ip-access-lists/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error_code": "RESOURCE_DOES_NOT_EXIST",
            "message": "Can't find an IP access list with id: gone."
        })))
        .mount(&server)
        .await;

    let err = client.get(&ListId::from("gone")).await.unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err:?}");
    assert_eq!(err.error_code(), Some("RESOURCE_DOES_NOT_EXIST"));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_structured_api_error() {
    let (server, client) = workspace().await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/ip-access-lists"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_code": "INVALID_PARAMETER_VALUE",
            "message": "IP address 300.1.1.1 is invalid"
        })))
        .mount(&server)
        .await;

    let err = client.create(&office_request()).await.unwrap_err();
    match err {
        Error::Api {
            status,
            error_code,
            message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(error_code.as_deref(), Some("INVALID_PARAMETER_VALUE"));
            assert_eq!(message, "IP address 300.1.1.1 is invalid");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    let (server, client) = workspace().await;

    Mock::given(method("DELETE"))
        .and(path("/api/2.0/ip-access-lists/abc123"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client.delete(&ListId::from("abc123")).await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert!(matches!(err, Error::Api { ref message, .. } if message == "bad gateway"));
}

#[tokio::test]
async fn test_unauthorized() {
    let (server, client) = workspace().await;

    Mock::given(method("GET"))
        .and(path("/api/2.0/ip-access-lists/abc123"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error_code": "UNAUTHENTICATED",
            "message": "Invalid access token."
        })))
        .mount(&server)
        .await;

    let err = client.get(&ListId::from("abc123")).await.unwrap_err();
    assert!(
        matches!(err, Error::Unauthorized { status: 401, .. }),
        "expected Unauthorized, got: {err:?}"
    );
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = workspace().await;

    Mock::given(method("GET"))
        .and(path("/api/2.0/ip-access-lists/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip_access_list": {
                "list_id": "abc123",
                "label": "office",
                "list_type": "MAYBE"
            }
        })))
        .mount(&server)
        .await;

    let err = client.get(&ListId::from("abc123")).await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}

#[tokio::test]
async fn test_bearer_token_header() {
    let server = MockServer::start().await;
    let host = Url::parse(&server.uri()).unwrap();
    let token: secrecy::SecretString = "dapi-secret".to_string().into();
    let client = WorkspaceClient::from_token(&host, &token, &TransportConfig::default()).unwrap();

    Mock::given(method("DELETE"))
        .and(path("/api/2.0/ip-access-lists/abc123"))
        .and(header("authorization", "Bearer dapi-secret"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete(&ListId::from("abc123")).await.unwrap();
}

// ── Account scope ───────────────────────────────────────────────────

#[tokio::test]
async fn test_account_paths_include_account_id() {
    let (server, client) = account().await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/accounts/acc-1/ip-access-lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info_body("acct-list")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/2.0/accounts/acc-1/ip-access-lists/acct-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info_body("acct-list")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/2.0/accounts/acc-1/ip-access-lists/acct-list"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/2.0/accounts/acc-1/ip-access-lists/acct-list"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let id = client.create(&office_request()).await.unwrap();
    assert_eq!(id.as_str(), "acct-list");

    let info = client.get(&id).await.unwrap();
    assert_eq!(info.list_id, id);

    let update = UpdateIpAccessList {
        ip_access_list_id: id.clone(),
        label: info.label,
        list_type: ListType::Block,
        ip_addresses: info.ip_addresses,
        enabled: true,
    };
    client.update(&update).await.unwrap();
    client.delete(&id).await.unwrap();

    assert_eq!(client.account_id(), "acc-1");
}
