//! Documentation pages rendered by [Redoc](https://github.com/Redocly/redoc).

use poem::{Endpoint, Route};
use tera::Context;

use crate::{
    error::DocsError,
    page::{self, PageOptions},
};

const DEFAULT_TEMPLATE: &str = include_str!("default-template.html");
const DEFAULT_TITLE: &str = "API documentation with Redoc";

/// Configuration for a [Redoc] documentation page.
///
/// Display options map onto the attributes of the `<redoc>` element.
///
/// [Redoc]: https://github.com/Redocly/redoc/blob/main/docs/config.md
#[derive(Debug, Clone)]
pub struct RedocConfig {
    /// Inline OpenAPI specification. Takes precedence over `spec_url`.
    pub spec: String,
    /// URL of the OpenAPI specification, used when `spec` is empty.
    pub spec_url: String,
    /// Page title. Empty means the provider default.
    pub title: String,
    /// Tera template for the HTML shell. Empty means the built-in template.
    pub template: String,

    /// The Redoc `disableSearch` option.
    pub disable_search: bool,
    /// The Redoc `minCharacterLengthToInitSearch` option; 0 leaves the
    /// viewer default in place.
    pub min_character_length_to_init_search: u32,
}

impl Default for RedocConfig {
    fn default() -> Self {
        Self {
            spec: String::new(),
            spec_url: String::new(),
            title: String::new(),
            template: String::new(),
            disable_search: false,
            min_character_length_to_init_search: 0,
        }
    }
}

impl RedocConfig {
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

impl PageOptions for RedocConfig {
    const VIEWER: &'static str = "redoc";

    fn page_context(&self, base_path: &str, spec_url: &str) -> serde_json::Result<Context> {
        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("base_path", base_path);
        context.insert("spec_url", spec_url);
        context.insert("disable_search", &self.disable_search);
        context.insert(
            "min_character_length_to_init_search",
            &self.min_character_length_to_init_search,
        );
        Ok(context)
    }
}

/// Creates an endpoint serving the Redoc documentation page.
///
/// The endpoint must be mounted at `path_prefix` (as [`register`] does);
/// the prefix becomes the page's base path.
pub fn create_endpoint(
    path_prefix: &str,
    config: RedocConfig,
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

/// Mounts the Redoc documentation page under `path_prefix`.
pub fn register(route: Route, path_prefix: &str, config: RedocConfig) -> Result<Route, DocsError> {
    Ok(route.nest(path_prefix, create_endpoint(path_prefix, config)?))
}
