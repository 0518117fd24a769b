use thiserror::Error;
use uuid::Uuid;

/// A note field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Content => write!(f, "content"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PostitError {
    #[error("Empty field(s): {}", format_fields(.0))]
    Validation(Vec<Field>),

    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

impl PostitError {
    /// The fields a validation failure names, empty for every other kind.
    pub fn invalid_fields(&self) -> &[Field] {
        match self {
            PostitError::Validation(fields) => fields,
            _ => &[],
        }
    }
}

fn format_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, PostitError>;
