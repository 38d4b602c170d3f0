/// Rejected request input
///
/// Raised before any upstream request is made, so a caller can answer with a
/// client error without touching the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid sort field: {0}. Valid fields: nombre, peso, altura")]
    InvalidSort(String),

    #[error("Invalid page: {0}. Pages are positive integers starting at 1")]
    InvalidPage(String),
}
