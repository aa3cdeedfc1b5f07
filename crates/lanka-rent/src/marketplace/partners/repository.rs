use super::domain::{Partner, PartnerId};

/// Storage abstraction so the partner service can be exercised in isolation.
pub trait PartnerRepository: Send + Sync {
    fn insert(&self, partner: Partner) -> Result<Partner, RepositoryError>;
    fn update(&self, partner: Partner) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &PartnerId) -> Result<Option<Partner>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<Partner>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
