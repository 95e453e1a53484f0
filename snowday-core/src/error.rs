use thiserror::Error;

/// Failure modes of a single lookup.
///
/// None of these are retried; each variant has a localized rendering in
/// [`crate::i18n::error_message`].
#[derive(Debug, Error)]
pub enum LookupError {
    /// The query was blank after trimming.
    #[error("empty query")]
    EmptyInput,

    /// The provider rejected the API key (`cod` 401).
    #[error("provider rejected the API key")]
    Auth,

    /// No location matched the query (`cod` 404).
    #[error("no location matched '{query}'")]
    NotFound { query: String },

    /// Any other failure: transport error, malformed body, or a non-200
    /// `cod` that is not special-cased.
    #[error("weather lookup failed: {message}")]
    Provider { message: String },
}
