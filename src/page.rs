use poem::{
    http::{header, StatusCode},
    web::Html,
    Endpoint, IntoResponse, Request, Response, Result,
};
use tera::{Context, Tera};

use crate::error::DocsError;

/// Name under which the page template is registered.
const TEMPLATE_NAME: &str = "page";

/// Path segment of the synthetic endpoint serving an inline spec.
const SPEC_SEGMENT: &str = "openapi-spec";

/// Where the rendered page finds the OpenAPI document.
pub(crate) enum SpecSource {
    /// The document itself, served from a synthetic `openapi-spec` endpoint
    /// under the mount point.
    Inline(String),
    /// An external URL the viewer fetches on its own.
    Url(String),
}

impl SpecSource {
    fn resolve(spec: String, spec_url: String) -> Result<Self, DocsError> {
        if !spec.is_empty() {
            Ok(SpecSource::Inline(spec))
        } else if !spec_url.is_empty() {
            Ok(SpecSource::Url(spec_url))
        } else {
            Err(DocsError::MissingSpecSource)
        }
    }
}

/// Per-viewer capabilities consumed by the shared dispatcher.
///
/// A provider supplies its option schema through this trait; everything
/// else (spec passthrough, base-path redirect, template execution) is
/// implemented once in [`DocsEndpoint`].
pub(crate) trait PageOptions: Send + Sync + 'static {
    /// Viewer name used in trace output.
    const VIEWER: &'static str;

    /// Whether every sub-path below the mount point must redirect back to
    /// the base path. Single-page viewers cannot resolve deep links server
    /// side; Stoplight Elements in history-router mode is the exception.
    fn collapse_subpaths(&self) -> bool {
        true
    }

    /// Builds the template context for a page served under `base_path`
    /// with the given spec reference.
    fn page_context(&self, base_path: &str, spec_url: &str) -> serde_json::Result<Context>;
}

/// The handler shared by all providers. Holds only immutable state, so
/// concurrent requests need no synchronization.
///
/// The endpoint must be mounted (via `Route::nest`) at the path prefix it
/// was built with; that prefix is the page's base path. It cannot be
/// derived from the request, since `nest` strips the prefix and the
/// pre-nest URI is not reliably available to the inner endpoint.
pub(crate) struct DocsEndpoint<T> {
    base_path: String,
    source: SpecSource,
    templates: Tera,
    options: T,
}

/// Validates the configuration and parses the template eagerly, so a
/// misconfigured application fails at registration time rather than on the
/// first request.
pub(crate) fn build_endpoint<T: PageOptions>(
    path_prefix: &str,
    spec: String,
    spec_url: String,
    template: String,
    options: T,
) -> Result<DocsEndpoint<T>, DocsError> {
    let source = SpecSource::resolve(spec, spec_url)?;
    let mut templates = Tera::default();
    // Every template value comes from the configuration, not from requests;
    // escaping would mangle spec URLs and the embedded configuration JSON.
    templates.autoescape_on(vec![]);
    templates.add_raw_template(TEMPLATE_NAME, &template)?;
    tracing::debug!(viewer = T::VIEWER, path_prefix, "documentation endpoint created");
    Ok(DocsEndpoint {
        base_path: path_prefix.trim_end_matches('/').to_string(),
        source,
        templates,
        options,
    })
}

/// Joins a path segment onto a base path without introducing a double slash.
fn join_path(base_path: &str, segment: &str) -> String {
    if base_path.is_empty() {
        return segment.to_string();
    }
    format!("{}/{}", base_path.trim_end_matches('/'), segment)
}

impl<T: PageOptions> Endpoint for DocsEndpoint<T> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        // `Route::nest` strips the mount prefix and hands the remainder
        // down with a leading slash, so the mount root arrives as "/"
        // (with or without a trailing slash on the request).
        let rel_path = req.uri().path();
        let at_root = rel_path.is_empty() || rel_path == "/";
        let base_path = self.base_path.as_str();

        let spec_url = match &self.source {
            SpecSource::Inline(document) => {
                let spec_path = join_path(base_path, SPEC_SEGMENT);
                let full_path = format!("{base_path}{rel_path}");
                if full_path.ends_with(&spec_path) {
                    return Ok(Response::builder()
                        .content_type("text/plain; charset=utf-8")
                        .body(document.clone()));
                }
                spec_path
            }
            SpecSource::Url(url) => url.clone(),
        };

        if self.options.collapse_subpaths() && !at_root {
            // The viewer only works from the base path; send deep links back.
            tracing::debug!(viewer = T::VIEWER, rel_path, "redirecting to base path");
            let location = if base_path.is_empty() { "/" } else { base_path };
            return Ok(Response::builder()
                .status(StatusCode::FOUND)
                .header(header::LOCATION, location)
                .finish());
        }

        let context = self
            .options
            .page_context(base_path, &spec_url)
            .map_err(poem::error::InternalServerError)?;
        let html = self
            .templates
            .render(TEMPLATE_NAME, &context)
            .map_err(poem::error::InternalServerError)?;
        Ok(Html(html).into_response())
    }
}
