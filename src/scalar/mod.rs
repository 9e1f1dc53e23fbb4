//! Documentation pages rendered by the [Scalar] API reference viewer.
//!
//! Unlike the attribute-driven viewers, Scalar reads a single JSON
//! configuration object; the page embeds it as a `data-configuration`
//! attribute on the loader script.
//!
//! [Scalar]: https://github.com/scalar/scalar

use poem::{Endpoint, Route};
use serde::Serialize;
use tera::Context;

use crate::{
    error::DocsError,
    page::{self, PageOptions},
};

const DEFAULT_TEMPLATE: &str = include_str!("default-template.html");
const DEFAULT_TITLE: &str = "API documentation with Scalar";

/// The Scalar `layout` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarLayout {
    /// The default modern layout.
    Modern,
    /// A layout closer to classic Swagger UI.
    Classic,
}

/// The Scalar `theme` option.
///
/// See <https://github.com/scalar/scalar?tab=readme-ov-file#themes>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum ScalarTheme {
    Alternate,
    Default,
    Moon,
    Purple,
    Solarized,
    BluePlanet,
    Saturn,
    Mars,
    DeepSpace,
    None,
}

/// Configuration for a [Scalar] documentation page.
///
/// [Scalar]: https://github.com/scalar/scalar?tab=readme-ov-file#configuration
#[derive(Debug, Clone)]
pub struct ScalarConfig {
    /// Inline OpenAPI specification. Takes precedence over `spec_url`.
    pub spec: String,
    /// URL of the OpenAPI specification, used when `spec` is empty.
    pub spec_url: String,
    /// Page title. Empty means the provider default.
    pub title: String,
    /// Tera template for the HTML shell. Empty means the built-in template.
    pub template: String,

    /// The Scalar `isEditable` option.
    pub is_editable: bool,
    /// The Scalar `proxyUrl` option.
    pub proxy_url: String,
    /// The Scalar `darkMode` option.
    pub dark_mode: bool,
    /// The Scalar `layout` option.
    pub layout: ScalarLayout,
    /// The Scalar `theme` option.
    pub theme: ScalarTheme,
    /// Inverse of the Scalar `showSidebar` option, which defaults to true
    /// on the viewer side.
    pub hide_sidebar: bool,
    /// The Scalar `searchHotKey` option.
    pub search_hot_key: String,
}

impl Default for ScalarConfig {
    fn default() -> Self {
        Self {
            spec: String::new(),
            spec_url: String::new(),
            title: String::new(),
            template: String::new(),
            is_editable: false,
            proxy_url: String::new(),
            dark_mode: false,
            layout: ScalarLayout::Modern,
            theme: ScalarTheme::Default,
            hide_sidebar: false,
            search_hot_key: String::new(),
        }
    }
}

impl ScalarConfig {
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

/// The configuration object the Scalar bundle expects, in its wire shape.
///
/// `layout` and `theme` are always emitted, even when they equal the
/// viewer defaults: the handler fills them from [`ScalarConfig`]'s own
/// defaults first, so no "unset" state is left to omit.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiReferenceConfiguration<'a> {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    is_editable: bool,
    spec: SpecTarget<'a>,
    #[serde(skip_serializing_if = "str::is_empty")]
    proxy_url: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    dark_mode: bool,
    layout: ScalarLayout,
    theme: ScalarTheme,
    // The viewer defaults showSidebar to true, so it is always emitted.
    show_sidebar: bool,
    #[serde(skip_serializing_if = "str::is_empty")]
    search_hot_key: &'a str,
}

#[derive(Serialize)]
struct SpecTarget<'a> {
    url: &'a str,
}

impl PageOptions for ScalarConfig {
    const VIEWER: &'static str = "scalar";

    fn page_context(&self, base_path: &str, spec_url: &str) -> serde_json::Result<Context> {
        let configuration = serde_json::to_string(&ApiReferenceConfiguration {
            is_editable: self.is_editable,
            spec: SpecTarget { url: spec_url },
            proxy_url: &self.proxy_url,
            dark_mode: self.dark_mode,
            layout: self.layout,
            theme: self.theme,
            show_sidebar: !self.hide_sidebar,
            search_hot_key: &self.search_hot_key,
        })?;

        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("base_path", base_path);
        context.insert("configuration", &configuration);
        Ok(context)
    }
}

/// Creates an endpoint serving the Scalar documentation page.
///
/// The endpoint must be mounted at `path_prefix` (as [`register`] does);
/// the prefix becomes the page's base path.
pub fn create_endpoint(
    path_prefix: &str,
    config: ScalarConfig,
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

/// Mounts the Scalar documentation page under `path_prefix`.
pub fn register(route: Route, path_prefix: &str, config: ScalarConfig) -> Result<Route, DocsError> {
    Ok(route.nest(path_prefix, create_endpoint(path_prefix, config)?))
}
