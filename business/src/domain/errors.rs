/// Repository errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.storage")]
    Storage,
    #[error("repository.corrupt_document")]
    CorruptDocument,
}
