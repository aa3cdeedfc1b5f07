use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::marketplace::accounts::UserId;
use crate::marketplace::catalog::{MaterialId, VehicleId};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub String);

/// Billing unit for vehicle hire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Hours,
    Days,
}

impl DurationUnit {
    pub const fn label(self) -> &'static str {
        match self {
            DurationUnit::Hours => "hours",
            DurationUnit::Days => "days",
        }
    }
}

/// What the renter is asking for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestedItem {
    Material {
        material_id: MaterialId,
        quantity: u32,
    },
    Vehicle {
        vehicle_id: VehicleId,
        duration: u32,
        unit: DurationUnit,
    },
}

/// Contact request as filled in by a renter, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequestDraft {
    pub item: RequestedItem,
    pub contact_name: String,
    pub contact_phone: String,
    #[serde(default)]
    pub delivery_location: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Accepted but the supplier has not been told yet.
    Pending,
    /// The supplier notification went out.
    SupplierNotified,
}

/// A validated request. It lives only as long as the caller keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: RequestId,
    pub item: RequestedItem,
    pub item_name: String,
    pub supplier_name: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub delivery_location: Option<String>,
    pub message: Option<String>,
    pub user_id: Option<UserId>,
    /// Rupees, before any supplier negotiation.
    pub estimated_cost: u64,
    pub status: RequestStatus,
    pub request_date: DateTime<Utc>,
}

/// Outbound message to the owner of the requested listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierNotification {
    pub template: String,
    pub request_id: RequestId,
    pub supplier_name: String,
    pub details: BTreeMap<String, String>,
}
