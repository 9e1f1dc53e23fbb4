#![cfg(feature = "stoplight-elements")]

use poem::{http::StatusCode, test::TestClient, Route};
use poem_apidocs::{
    stoplight_elements, DocsError, ElementsLayout, ElementsRouter, StoplightElementsConfig,
};

const SPEC: &str = "openapi: 3.0.0\ninfo:\n  title: pets\n  version: 1.0.0\n";

fn client(config: StoplightElementsConfig) -> TestClient<Route> {
    let app = stoplight_elements::register(Route::new(), "/docs", config).unwrap();
    TestClient::new(app)
}

#[tokio::test]
async fn renders_page_with_external_spec_url() {
    let cli = client(StoplightElementsConfig {
        spec_url: "https://example.com/openapi.yml".to_string(),
        ..StoplightElementsConfig::default()
    });

    let resp = cli.get("/docs").send().await;
    resp.assert_status_is_ok();
    resp.assert_content_type("text/html");
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains(r#"apiDescriptionUrl="https://example.com/openapi.yml""#));
    assert!(body.contains("<title>API documentation with Stoplight Elements</title>"));
    // Defaults from the provider record.
    assert!(body.contains(r#"layout="sidebar""#));
    assert!(body.contains(r#"router="history""#));
}

#[tokio::test]
async fn serves_inline_spec_from_synthetic_endpoint() {
    let cli = client(StoplightElementsConfig {
        spec: SPEC.to_string(),
        ..StoplightElementsConfig::default()
    });

    let resp = cli.get("/docs").send().await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains(r#"apiDescriptionUrl="/docs/openapi-spec""#));

    let resp = cli.get("/docs/openapi-spec").send().await;
    resp.assert_status_is_ok();
    resp.assert_content_type("text/plain; charset=utf-8");
    resp.assert_text(SPEC).await;
}

#[tokio::test]
async fn history_router_serves_subpaths_without_redirect() {
    // The default router is history mode, which resolves deep links on the
    // client, so sub-paths must not redirect.
    let cli = client(StoplightElementsConfig {
        spec_url: "https://example.com/openapi.yml".to_string(),
        ..StoplightElementsConfig::default()
    });

    let resp = cli.get("/docs/operations/list-pets").send().await;
    resp.assert_status_is_ok();
    resp.assert_content_type("text/html");
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains(r#"basePath="/docs""#));
}

#[tokio::test]
async fn hash_router_redirects_subpaths_to_base_path() {
    let cli = client(StoplightElementsConfig {
        spec_url: "https://example.com/openapi.yml".to_string(),
        router: ElementsRouter::Hash,
        ..StoplightElementsConfig::default()
    });

    let resp = cli.get("/docs/operations/list-pets").send().await;
    resp.assert_status(StatusCode::FOUND);
    resp.assert_header("location", "/docs");
}

#[tokio::test]
async fn optional_attributes_follow_omit_if_default_policy() {
    let cli = client(StoplightElementsConfig {
        spec_url: "https://example.com/openapi.yml".to_string(),
        hide_try_it: true,
        layout: ElementsLayout::Stacked,
        logo: "https://example.com/logo.png".to_string(),
        ..StoplightElementsConfig::default()
    });

    let resp = cli.get("/docs").send().await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains(r#"hideTryIt="true""#));
    assert!(body.contains(r#"layout="stacked""#));
    assert!(body.contains(r#"logo="https://example.com/logo.png""#));
    // Unset options leave no trace in the page.
    assert!(!body.contains("hideInternal"));
    assert!(!body.contains("hideSchemas"));
    assert!(!body.contains("tryItCorsProxy"));
    assert!(!body.contains("tryItCredentialsPolicy"));
}

#[test]
fn construction_fails_without_spec_source() {
    let result = stoplight_elements::register(
        Route::new(),
        "/docs",
        StoplightElementsConfig::default(),
    );
    assert!(matches!(result, Err(DocsError::MissingSpecSource)));
}
