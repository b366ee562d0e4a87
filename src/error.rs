use thiserror::Error;

/// Everything that can go wrong while bringing the recipe collection in.
/// The app shows any of these as the empty error state; none are retried.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {source_name}: {reason}")]
    Read { source_name: String, reason: String },

    #[error("Failed to fetch {source_name}: {reason}")]
    Fetch { source_name: String, reason: String },

    #[error("Failed to parse recipe document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} is a bare recipe array; run `recipebox migrate` to wrap it in {{\"recipes\": [...]}}")]
    LegacyShape(String),

    #[error("Duplicate recipe id {0}")]
    DuplicateId(u32),
}
