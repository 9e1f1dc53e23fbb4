//! Interactive OpenAPI documentation pages for [`poem`].
//!
//! This crate mounts handlers that serve an HTML shell embedding one of
//! four third-party documentation viewers, pointed at an OpenAPI
//! specification given either inline or by URL. The specification itself is
//! treated as an opaque string; nothing here parses or validates it.
//!
//! Supported viewers, one module each:
//!
//! * [`stoplight_elements`] — Stoplight Elements
//! * [`redoc`] — Redoc
//! * [`scalar`] — Scalar API Reference
//! * [`swagger_ui`] — Swagger UI
//!
//! Each module exposes a configuration struct, a `create_endpoint` function
//! that builds a [`poem::Endpoint`] for a given mount prefix, and a
//! `register` convenience that nests it under that prefix. The prefix
//! becomes the page's base path. When the specification is inline, the
//! handler also serves it as plain text from a synthetic `openapi-spec`
//! path under the mount point. Requests to other sub-paths redirect back to
//! the mount point, since the single-page viewers cannot resolve deep links
//! server side (Stoplight Elements in history-router mode excepted).
//!
//! The HTML shell is a [tera] template that can be replaced per
//! configuration; replacement templates receive `title`, `base_path`, the
//! spec reference (`api_description_url`, `spec_url`, or a serialized
//! `configuration` JSON blob, depending on the viewer) and the viewer's
//! option fields.
//!
//! # Example
//!
//! ```no_run
//! use poem::{listener::TcpListener, Route, Server};
//! use poem_apidocs::{swagger_ui, SwaggerUIConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SwaggerUIConfig {
//!         spec_url: "https://petstore3.swagger.io/api/v3/openapi.json".to_string(),
//!         ..SwaggerUIConfig::default()
//!     };
//!     let app = swagger_ui::register(Route::new(), "/docs", config)?;
//!     Server::new(TcpListener::bind("127.0.0.1:3000"))
//!         .run(app)
//!         .await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(unreachable_pub)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

mod error;
mod page;

#[cfg(feature = "redoc")]
#[cfg_attr(docsrs, doc(cfg(feature = "redoc")))]
pub mod redoc;
#[cfg(feature = "scalar")]
#[cfg_attr(docsrs, doc(cfg(feature = "scalar")))]
pub mod scalar;
#[cfg(feature = "stoplight-elements")]
#[cfg_attr(docsrs, doc(cfg(feature = "stoplight-elements")))]
pub mod stoplight_elements;
#[cfg(feature = "swagger-ui")]
#[cfg_attr(docsrs, doc(cfg(feature = "swagger-ui")))]
pub mod swagger_ui;

pub use error::DocsError;
#[cfg(feature = "redoc")]
pub use redoc::RedocConfig;
#[cfg(feature = "scalar")]
pub use scalar::{ScalarConfig, ScalarLayout, ScalarTheme};
#[cfg(feature = "stoplight-elements")]
pub use stoplight_elements::{
    ElementsLayout, ElementsRouter, ElementsTryItCredentialsPolicy, StoplightElementsConfig,
};
#[cfg(feature = "swagger-ui")]
pub use swagger_ui::SwaggerUIConfig;
