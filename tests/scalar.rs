#![cfg(feature = "scalar")]

use poem::{http::StatusCode, test::TestClient, Route};
use poem_apidocs::{scalar, DocsError, ScalarConfig, ScalarLayout, ScalarTheme};

const SPEC: &str = "openapi: 3.0.0\ninfo:\n  title: pets\n  version: 1.0.0\n";

fn client(config: ScalarConfig) -> TestClient<Route> {
    let app = scalar::register(Route::new(), "/docs", config).unwrap();
    TestClient::new(app)
}

#[tokio::test]
async fn renders_page_with_external_spec_url() {
    let cli = client(ScalarConfig {
        spec_url: "https://example.com/openapi.yml".to_string(),
        ..ScalarConfig::default()
    });

    let resp = cli.get("/docs").send().await;
    resp.assert_status_is_ok();
    resp.assert_content_type("text/html");
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains(r#""url":"https://example.com/openapi.yml""#));
    assert!(body.contains("<title>API documentation with Scalar</title>"));
    assert!(body.contains(r#""layout":"modern""#));
    assert!(body.contains(r#""theme":"default""#));
}

#[tokio::test]
async fn serves_inline_spec_from_synthetic_endpoint() {
    let cli = client(ScalarConfig {
        spec: SPEC.to_string(),
        ..ScalarConfig::default()
    });

    let resp = cli.get("/docs").send().await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains(r#""url":"/docs/openapi-spec""#));

    let resp = cli.get("/docs/openapi-spec").send().await;
    resp.assert_status_is_ok();
    resp.assert_content_type("text/plain; charset=utf-8");
    resp.assert_text(SPEC).await;
}

#[tokio::test]
async fn redirects_subpaths_to_base_path() {
    let cli = client(ScalarConfig {
        spec_url: "https://example.com/openapi.yml".to_string(),
        ..ScalarConfig::default()
    });

    let resp = cli.get("/docs/anything").send().await;
    resp.assert_status(StatusCode::FOUND);
    resp.assert_header("location", "/docs");
}

#[tokio::test]
async fn embedded_configuration_reflects_options() {
    let cli = client(ScalarConfig {
        spec_url: "https://example.com/openapi.yml".to_string(),
        dark_mode: true,
        hide_sidebar: true,
        layout: ScalarLayout::Classic,
        theme: ScalarTheme::DeepSpace,
        ..ScalarConfig::default()
    });

    let resp = cli.get("/docs").send().await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains(r#""darkMode":true"#));
    assert!(body.contains(r#""showSidebar":false"#));
    assert!(body.contains(r#""layout":"classic""#));
    assert!(body.contains(r#""theme":"deepSpace""#));
    assert!(!body.contains("isEditable"));
    assert!(!body.contains("proxyUrl"));
}

#[test]
fn construction_fails_without_spec_source() {
    let result = scalar::register(Route::new(), "/docs", ScalarConfig::default());
    assert!(matches!(result, Err(DocsError::MissingSpecSource)));
}
