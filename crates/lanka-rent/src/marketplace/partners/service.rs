use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{Partner, PartnerId, PartnerRegistration, PartnerStatus};
use super::guard::{RegistrationError, RegistrationGuard};
use super::repository::{PartnerRepository, RepositoryError};
use crate::marketplace::ids::timestamp_id;

/// Service composing the registration guard and the partner repository.
pub struct PartnerService<R> {
    guard: RegistrationGuard,
    repository: Arc<R>,
}

impl<R> PartnerService<R>
where
    R: PartnerRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            guard: RegistrationGuard,
            repository,
        }
    }

    /// Validate a registration and store the resulting pending partner.
    pub fn register(
        &self,
        submission: PartnerRegistration,
        now: DateTime<Utc>,
    ) -> Result<Partner, PartnerServiceError> {
        let mut partner = self.guard.partner_from_submission(submission, now)?;
        partner.id = PartnerId(timestamp_id("partner", now));

        let stored = self.repository.insert(partner)?;
        info!(
            partner_id = %stored.id.0,
            district = %stored.district,
            kind = stored.business_kind.label(),
            "partner registration received"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &PartnerId) -> Result<Partner, PartnerServiceError> {
        let partner = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(partner)
    }

    /// Move a pending partner to approved. Approving twice is a no-op.
    pub fn approve(&self, id: &PartnerId) -> Result<Partner, PartnerServiceError> {
        let mut partner = self.get(id)?;
        if partner.status == PartnerStatus::Approved {
            return Ok(partner);
        }

        partner.status = PartnerStatus::Approved;
        self.repository.update(partner.clone())?;
        info!(partner_id = %partner.id.0, "partner approved");
        Ok(partner)
    }

    pub fn pending(&self, limit: usize) -> Result<Vec<Partner>, PartnerServiceError> {
        Ok(self.repository.pending(limit)?)
    }
}

/// Error raised by the partner service.
#[derive(Debug, thiserror::Error)]
pub enum PartnerServiceError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
