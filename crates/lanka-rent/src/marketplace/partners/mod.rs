//! Partner registration: a typed form validated at the boundary, folded into a pending partner.

pub mod domain;
mod guard;
pub mod repository;
mod service;

pub use domain::{BusinessKind, Partner, PartnerId, PartnerRegistration, PartnerStatus};
pub use guard::{RegistrationError, RegistrationGuard};
pub use repository::{PartnerRepository, RepositoryError};
pub use service::{PartnerService, PartnerServiceError};
