//! Integration tests for the redirect service, including cursor pagination.

use serde_json::json;
use shopify_services::rest::resources::{ListFilter, Redirect, RedirectFilter, RedirectService};
use shopify_services::rest::ServiceError;
use shopify_services::{AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyConfig};
use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup_with_version(version: ApiVersion) -> (MockServer, RedirectService) {
    let server = MockServer::start().await;
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop.myshopify.com").unwrap())
        .access_token(AccessToken::new("shpat_redirects").unwrap())
        .api_version(version)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .user_agent_prefix("RedirectTests/1.0")
        .build()
        .unwrap();
    (server, RedirectService::with_config(config).unwrap())
}

async fn setup() -> (MockServer, RedirectService) {
    setup_with_version(ApiVersion::V2025_10).await
}

#[tokio::test]
async fn test_create_get_update_delete_round() {
    let (server, service) = setup().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/redirects.json"))
        .and(body_json(json!({"redirect": {"path": "/ipod", "target": "/pages/itunes"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "redirect": {"id": 979034150, "path": "/ipod", "target": "/pages/itunes"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/redirects/979034150.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "redirect": {"id": 979034150, "path": "/ipod", "target": "/pages/itunes"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/admin/api/2025-10/redirects/979034150.json"))
        .and(body_json(json!({
            "redirect": {"id": 979034150, "path": "/ipod", "target": "/pages/ipod"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "redirect": {"id": 979034150, "path": "/ipod", "target": "/pages/ipod"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/api/2025-10/redirects/979034150.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let created = service
        .create(&Redirect::new("/ipod", "/pages/itunes"))
        .await
        .unwrap();
    let id = created.id.unwrap();

    let mut fetched = service.get(id, None).await.unwrap();
    assert_eq!(fetched, created);

    fetched.target = Some("/pages/ipod".to_string());
    let updated = service.update(&fetched).await.unwrap();
    assert_eq!(updated.target.as_deref(), Some("/pages/ipod"));

    service.delete(id).await.unwrap();
}

#[tokio::test]
async fn test_clearing_id_before_update_is_invalid_argument() {
    let (server, service) = setup().await;

    let mut redirect = Redirect {
        id: Some(1),
        ..Redirect::new("/a", "/b")
    };
    redirect.id = None;

    let result = service.update(&redirect).await;
    assert!(matches!(result, Err(ServiceError::InvalidArgument { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_count_and_list_with_filter() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/redirects/count.json"))
        .and(query_param("target", "/pages/itunes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/redirects.json"))
        .and(query_param("target", "/pages/itunes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "redirects": [
                {"id": 1, "path": "/ipod", "target": "/pages/itunes"},
                {"id": 2, "path": "/itunes", "target": "/pages/itunes"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = RedirectFilter {
        target: Some("/pages/itunes".to_string()),
        ..Default::default()
    };

    assert_eq!(service.count(Some(&filter)).await.unwrap(), 2);
    let redirects = service.list(Some(&filter)).await.unwrap();
    let paths: Vec<&str> = redirects.iter().filter_map(|r| r.path.as_deref()).collect();
    assert_eq!(paths, vec!["/ipod", "/itunes"]);
}

#[tokio::test]
async fn test_list_page_follows_link_header() {
    let (server, service) = setup().await;
    let base = format!("{}/admin/api/2025-10/redirects.json", server.uri());

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/redirects.json"))
        .and(query_param("page_info", "page2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    format!(r#"<{base}?limit=1&page_info=page1>; rel="previous""#).as_str(),
                )
                .set_body_json(json!({"redirects": [{"id": 2, "path": "/b", "target": "/y"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/redirects.json"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    format!(r#"<{base}?limit=1&page_info=page2>; rel="next""#).as_str(),
                )
                .set_body_json(json!({"redirects": [{"id": 1, "path": "/a", "target": "/x"}]})),
        )
        .mount(&server)
        .await;

    let first_filter = RedirectFilter {
        list: ListFilter {
            limit: Some(1),
            ..Default::default()
        },
        ..Default::default()
    };
    let first = service.list_page(Some(&first_filter)).await.unwrap();
    assert_eq!(first.items[0].id, Some(1));
    assert!(first.has_next_page());
    assert!(!first.has_prev_page());

    let next_filter = RedirectFilter {
        list: ListFilter {
            limit: Some(1),
            ..ListFilter::page(first.next_page_info.clone().unwrap())
        },
        ..Default::default()
    };
    let second = service.list_page(Some(&next_filter)).await.unwrap();
    assert_eq!(second.items[0].id, Some(2));
    assert_eq!(second.prev_page_info.as_deref(), Some("page1"));
    assert!(!second.has_next_page());
}

#[tokio::test]
async fn test_requests_carry_auth_and_user_agent() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/redirects/count.json"))
        .and(header("X-Shopify-Access-Token", "shpat_redirects"))
        .and(header("Accept", "application/json"))
        .and(header_regex(
            "User-Agent",
            r"^RedirectTests/1\.0 \| Shopify REST Services v",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(service.count(None).await.unwrap(), 0);
}

#[tokio::test]
async fn test_configured_version_is_used_in_path() {
    let (server, service) = setup_with_version(ApiVersion::V2025_01).await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-01/redirects/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 4})))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(service.count(None).await.unwrap(), 4);
}

#[tokio::test]
async fn test_server_error_surfaces_status_and_body() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/redirects.json"))
        .respond_with(
            ResponseTemplate::new(503)
                .insert_header("X-Request-Id", "req-503")
                .set_body_string("Service Unavailable"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = service.list(None).await.unwrap_err();
    match error {
        ServiceError::Api {
            status,
            ref body,
            ref request_id,
            ref path,
        } => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
            assert_eq!(request_id.as_deref(), Some("req-503"));
            assert_eq!(path, "redirects.json");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_root_element_is_malformed() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/redirects/1.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"redirects": [{"id": 1, "path": "/a", "target": "/b"}]})),
        )
        .mount(&server)
        .await;

    let error = service.get(1, None).await.unwrap_err();
    assert!(matches!(
        error,
        ServiceError::MalformedResponse { ref root_element, .. } if root_element == "redirect"
    ));
}
