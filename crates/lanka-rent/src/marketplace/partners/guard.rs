use chrono::{DateTime, Utc};

use super::domain::{Partner, PartnerId, PartnerRegistration, PartnerStatus};

/// Validation errors raised before a registration becomes a partner.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("business name is required")]
    MissingBusinessName,
    #[error("contact person is required")]
    MissingContactPerson,
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
    #[error("phone number '{found}' must have {min}-{max} digits")]
    InvalidPhone { found: String, min: usize, max: usize },
    #[error("business address is required")]
    MissingAddress,
    #[error("at least one offered service is required")]
    NoServicesOffered,
}

const MIN_PHONE_DIGITS: usize = 9;
const MAX_PHONE_DIGITS: usize = 12;

/// Guard responsible for producing `Partner` instances from raw registrations.
#[derive(Debug, Clone, Default)]
pub struct RegistrationGuard;

impl RegistrationGuard {
    /// The returned partner carries a placeholder id; the service assigns the real one.
    pub fn partner_from_submission(
        &self,
        submission: PartnerRegistration,
        now: DateTime<Utc>,
    ) -> Result<Partner, RegistrationError> {
        let business_name = required(submission.business_name)
            .ok_or(RegistrationError::MissingBusinessName)?;
        let contact_person = required(submission.contact_person)
            .ok_or(RegistrationError::MissingContactPerson)?;

        let email = submission.email.trim().to_string();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !well_formed {
            return Err(RegistrationError::InvalidEmail(email));
        }

        let phone = normalize_phone(&submission.phone).ok_or_else(|| {
            RegistrationError::InvalidPhone {
                found: submission.phone.clone(),
                min: MIN_PHONE_DIGITS,
                max: MAX_PHONE_DIGITS,
            }
        })?;

        let address = required(submission.address).ok_or(RegistrationError::MissingAddress)?;

        let services: Vec<String> = submission
            .services
            .into_iter()
            .filter_map(required)
            .collect();
        if services.is_empty() {
            return Err(RegistrationError::NoServicesOffered);
        }

        Ok(Partner {
            id: PartnerId("pending".to_string()),
            business_name,
            contact_person,
            email,
            phone,
            district: submission.district,
            address,
            business_kind: submission.business_kind,
            services,
            description: submission.description.and_then(required),
            status: PartnerStatus::Pending,
            registration_date: now,
            rating: 0.0,
            total_jobs: 0,
        })
    }
}

fn required(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Keeps a leading `+`, drops spaces and dashes, and checks the digit count.
fn normalize_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let (prefix, rest) = match trimmed.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", trimmed),
    };
    let digits: String = rest.chars().filter(|c| *c != ' ' && *c != '-').collect();
    let valid = digits.chars().all(|c| c.is_ascii_digit())
        && (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len());
    valid.then(|| format!("{prefix}{digits}"))
}
