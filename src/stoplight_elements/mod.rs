//! Documentation pages rendered by [Stoplight Elements].
//!
//! [Stoplight Elements]: https://github.com/stoplightio/elements

use poem::{Endpoint, Route};
use serde::Serialize;
use tera::Context;

use crate::{
    error::DocsError,
    page::{self, PageOptions},
};

const DEFAULT_TEMPLATE: &str = include_str!("default-template.html");
const DEFAULT_TITLE: &str = "API documentation with Stoplight Elements";

/// The Elements `router` option.
///
/// Only [`ElementsRouter::History`] can resolve sub-paths client side; the
/// other modes cause any request below the mount point to redirect back to
/// the base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementsRouter {
    /// Hash-fragment routing.
    Hash,
    /// Browser history API routing.
    History,
    /// In-memory routing.
    Memory,
}

/// The Elements `layout` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementsLayout {
    /// Three-column layout with a sidebar.
    Sidebar,
    /// Layout that adapts to the viewport.
    Responsive,
    /// Single-column layout.
    Stacked,
}

/// The Elements `tryItCredentialsPolicy` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementsTryItCredentialsPolicy {
    /// Never send credentials.
    Omit,
    /// Always send credentials.
    Include,
    /// Send credentials to the page's own origin only.
    SameOrigin,
}

/// Configuration for a [Stoplight Elements] documentation page.
///
/// Display options map one to one onto the attributes of the
/// `<elements-api>` web component and are passed through verbatim.
///
/// [Stoplight Elements]: https://github.com/stoplightio/elements/blob/main/docs/getting-started/elements/elements-options.md
#[derive(Debug, Clone)]
pub struct StoplightElementsConfig {
    /// Inline OpenAPI specification. Takes precedence over `spec_url`.
    pub spec: String,
    /// URL of the OpenAPI specification, used when `spec` is empty.
    pub spec_url: String,
    /// Page title. Empty means the provider default.
    pub title: String,
    /// Tera template for the HTML shell. Empty means the built-in template.
    pub template: String,

    /// The Elements `router` option.
    pub router: ElementsRouter,
    /// The Elements `layout` option.
    pub layout: ElementsLayout,
    /// The Elements `hideInternal` option.
    pub hide_internal: bool,
    /// The Elements `hideTryIt` option.
    pub hide_try_it: bool,
    /// The Elements `hideSchemas` option.
    pub hide_schemas: bool,
    /// The Elements `hideExport` option.
    pub hide_export: bool,
    /// The Elements `tryItCorsProxy` option.
    pub try_it_cors_proxy: String,
    /// The Elements `tryItCredentialsPolicy` option.
    pub try_it_credentials_policy: ElementsTryItCredentialsPolicy,
    /// The Elements `logo` option.
    pub logo: String,
}

impl Default for StoplightElementsConfig {
    fn default() -> Self {
        Self {
            spec: String::new(),
            spec_url: String::new(),
            title: String::new(),
            template: String::new(),
            router: ElementsRouter::History,
            layout: ElementsLayout::Sidebar,
            hide_internal: false,
            hide_try_it: false,
            hide_schemas: false,
            hide_export: false,
            try_it_cors_proxy: String::new(),
            try_it_credentials_policy: ElementsTryItCredentialsPolicy::Omit,
            logo: String::new(),
        }
    }
}

impl StoplightElementsConfig {
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

impl PageOptions for StoplightElementsConfig {
    const VIEWER: &'static str = "stoplight-elements";

    fn collapse_subpaths(&self) -> bool {
        self.router != ElementsRouter::History
    }

    fn page_context(&self, base_path: &str, spec_url: &str) -> serde_json::Result<Context> {
        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("base_path", base_path);
        context.insert("api_description_url", spec_url);
        context.insert("router", &self.router);
        context.insert("layout", &self.layout);
        context.insert("hide_internal", &self.hide_internal);
        context.insert("hide_try_it", &self.hide_try_it);
        context.insert("hide_schemas", &self.hide_schemas);
        context.insert("hide_export", &self.hide_export);
        context.insert("try_it_cors_proxy", &self.try_it_cors_proxy);
        context.insert("try_it_credentials_policy", &self.try_it_credentials_policy);
        context.insert("logo", &self.logo);
        Ok(context)
    }
}

/// Creates an endpoint serving the Stoplight Elements documentation page.
///
/// The endpoint must be mounted at `path_prefix` (as [`register`] does);
/// the prefix becomes the page's base path.
pub fn create_endpoint(
    path_prefix: &str,
    config: StoplightElementsConfig,
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

/// Mounts the Stoplight Elements documentation page under `path_prefix`.
pub fn register(
    route: Route,
    path_prefix: &str,
    config: StoplightElementsConfig,
) -> Result<Route, DocsError> {
    Ok(route.nest(path_prefix, create_endpoint(path_prefix, config)?))
}
