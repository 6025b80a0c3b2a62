//! CatalogError - lookups that can fail when resolving a gallery route

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid item path: {0:?}")]
    InvalidPath(String),

    #[error("unable to read category: {0}")]
    CategoryNotFound(String),

    #[error("unable to read item: {category}/{item}")]
    ItemNotFound { category: String, item: String },
}
