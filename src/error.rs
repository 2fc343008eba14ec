#[derive(Debug, thiserror::Error)]
pub enum AlbumError {
    #[error("photo catalog is not valid JSON: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("photo catalog is empty")]
    EmptyCatalog,
    #[error("duplicate photo id '{0}' in catalog")]
    DuplicateId(String),
}
