use thiserror::Error;

#[derive(Error, Debug)]
/// Projection error
pub enum ProjectionError {
    /// The token names neither a field nor a zero-argument accessor on the
    /// projected type. Indicates a projection/type mismatch, not missing data.
    #[error("no field or accessor named `{0}` on the projected type")]
    MemberNotFound(String),

    /// A nested-array spec fetched a member that is not a collection.
    #[error("member `{0}` does not resolve to a collection")]
    NotIterable(String),

    /// A nested-hash spec fetched a member that is not a nested object.
    #[error("member `{0}` does not resolve to a nested object")]
    NotAnObject(String),

    /// A plain member or alias fetched a nested object or collection, which
    /// cannot be projected without rules of its own.
    #[error("member `{0}` resolves to a nested structure, not a plain value")]
    NotAValue(String),

    /// The projection recursed deeper than the configured `max_depth`.
    #[error("projection depth exceeds the configured limit of {0}")]
    DepthExceeded(usize),

    /// The resolved tree could not be encoded to JSON text.
    #[error("JSON encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}
