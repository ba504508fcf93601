use thiserror::Error;

/// Everything that can go wrong on the page. None of these are ever shown to
/// the visitor: the tab control ignores unknown keys and a broken decoration
/// layer is simply left out.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContentError {
    #[error("unknown achievement category: {0}")]
    UnknownCategory(String),

    #[error("decoration unavailable: {0}")]
    DecorationUnavailable(String),

    #[error("invalid decoration config: {0}")]
    InvalidConfig(String),
}

pub type ContentResult<T> = Result<T, ContentError>;
