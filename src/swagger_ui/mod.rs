//! Documentation pages rendered by [Swagger UI].
//!
//! The page passes a JSON configuration object to `SwaggerUIBundle`.
//!
//! [Swagger UI]: https://github.com/swagger-api/swagger-ui

use poem::{Endpoint, Route};
use serde::Serialize;
use tera::Context;

use crate::{
    error::DocsError,
    page::{self, PageOptions},
};

const DEFAULT_TEMPLATE: &str = include_str!("default-template.html");
const DEFAULT_TITLE: &str = "API documentation with Swagger UI";

/// Configuration for a [Swagger UI] documentation page.
///
/// [Swagger UI]: https://github.com/swagger-api/swagger-ui/blob/master/docs/usage/configuration.md
#[derive(Debug, Clone)]
pub struct SwaggerUIConfig {
    /// Inline OpenAPI specification. Takes precedence over `spec_url`.
    pub spec: String,
    /// URL of the OpenAPI specification, used when `spec` is empty.
    pub spec_url: String,
    /// Page title. Empty means the provider default.
    pub title: String,
    /// Tera template for the HTML shell. Empty means the built-in template.
    pub template: String,

    /// The Swagger UI `deepLinking` option.
    pub deep_linking: bool,
    /// The Swagger UI `displayOperationId` option.
    pub display_operation_id: bool,
}

impl Default for SwaggerUIConfig {
    fn default() -> Self {
        Self {
            spec: String::new(),
            spec_url: String::new(),
            title: String::new(),
            template: String::new(),
            deep_linking: false,
            display_operation_id: false,
        }
    }
}

impl SwaggerUIConfig {
    fn normalized(mut self) -> Self {
        if self.title.is_empty() {
            self.title = DEFAULT_TITLE.to_string();
        }
        if self.template.is_empty() {
            self.template = DEFAULT_TEMPLATE.to_string();
        }
        self
    }
}

/// The object handed to `SwaggerUIBundle`, in its wire shape.
#[derive(Serialize)]
struct SwaggerUIConfiguration<'a> {
    url: &'a str,
    dom_id: &'a str,
    #[serde(rename = "deepLinking", skip_serializing_if = "std::ops::Not::not")]
    deep_linking: bool,
    #[serde(
        rename = "displayOperationId",
        skip_serializing_if = "std::ops::Not::not"
    )]
    display_operation_id: bool,
}

impl PageOptions for SwaggerUIConfig {
    const VIEWER: &'static str = "swagger-ui";

    fn page_context(&self, base_path: &str, spec_url: &str) -> serde_json::Result<Context> {
        let configuration = serde_json::to_string(&SwaggerUIConfiguration {
            url: spec_url,
            dom_id: "#swagger-ui",
            deep_linking: self.deep_linking,
            display_operation_id: self.display_operation_id,
        })?;

        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("base_path", base_path);
        context.insert("configuration", &configuration);
        Ok(context)
    }
}

/// Creates an endpoint serving the Swagger UI documentation page.
///
/// The endpoint must be mounted at `path_prefix` (as [`register`] does);
/// the prefix becomes the page's base path.
pub fn create_endpoint(
    path_prefix: &str,
    config: SwaggerUIConfig,
) -> Result<impl Endpoint + 'static, DocsError> {
    let config = config.normalized();
    page::build_endpoint(
        path_prefix,
        config.spec.clone(),
        config.spec_url.clone(),
        config.template.clone(),
        config,
    )
}

/// Mounts the Swagger UI documentation page under `path_prefix`.
pub fn register(
    route: Route,
    path_prefix: &str,
    config: SwaggerUIConfig,
) -> Result<Route, DocsError> {
    Ok(route.nest(path_prefix, create_endpoint(path_prefix, config)?))
}
