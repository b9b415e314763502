use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no layer with id '{0}'")]
    NotFound(String),
    #[error("catalog must hold exactly {expected} layers, got {actual}")]
    LayerCount { expected: usize, actual: usize },
    #[error("duplicate layer id '{0}'")]
    DuplicateId(String),
}

/// Rejections from the view state controller. Selecting an id that did not
/// come from the catalog is a caller bug; it is surfaced as a value so callers
/// can report it, and the state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown layer '{0}'")]
    UnknownLayer(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}'")]
pub struct ModeParseError(pub String);
