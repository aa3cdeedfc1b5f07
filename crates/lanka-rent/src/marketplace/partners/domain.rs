use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::marketplace::catalog::District;

/// Identifier wrapper for registered partners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartnerId(pub String);

/// What a partner brings to the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessKind {
    VehicleOwner,
    MaterialSupplier,
    Both,
}

impl BusinessKind {
    pub const fn label(self) -> &'static str {
        match self {
            BusinessKind::VehicleOwner => "Vehicle owner",
            BusinessKind::MaterialSupplier => "Material supplier",
            BusinessKind::Both => "Vehicles and materials",
        }
    }
}

/// Registration form payload as submitted by a prospective partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRegistration {
    pub business_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub district: District,
    pub address: String,
    pub business_kind: BusinessKind,
    pub services: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerStatus {
    Pending,
    Approved,
}

impl PartnerStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PartnerStatus::Pending => "pending",
            PartnerStatus::Approved => "approved",
        }
    }
}

/// Validated partner profile. New registrations carry placeholder rating and job counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub business_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub district: District,
    pub address: String,
    pub business_kind: BusinessKind,
    pub services: Vec<String>,
    pub description: Option<String>,
    pub status: PartnerStatus,
    pub registration_date: DateTime<Utc>,
    pub rating: f32,
    pub total_jobs: u32,
}
