/// Errors raised while building a documentation endpoint.
///
/// These are construction-time errors: they are returned from
/// `create_endpoint` / `register` before any request is served, so the
/// embedding application can decide whether to abort startup or fall back.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// Neither `spec` nor `spec_url` was set on the configuration.
    #[error("either `spec` or `spec_url` must be set")]
    MissingSpecSource,

    /// The page template failed to parse.
    #[error("invalid page template: {0}")]
    Template(#[from] tera::Error),
}
