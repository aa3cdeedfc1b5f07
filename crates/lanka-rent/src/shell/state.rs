use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::marketplace::catalog::{MaterialItem, Vehicle};
use crate::marketplace::partners::Partner;
use crate::marketplace::requests::{DurationUnit, RequestedItem};

/// Pages a visitor can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Services,
    Materials,
    Vehicles,
    VehicleDetail,
    About,
    Contact,
    PartnerDashboard,
}

impl View {
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::Services,
        Self::Materials,
        Self::Vehicles,
        Self::VehicleDetail,
        Self::About,
        Self::Contact,
        Self::PartnerDashboard,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Materials => "materials",
            Self::Vehicles => "vehicles",
            Self::VehicleDetail => "vehicle-detail",
            Self::About => "about",
            Self::Contact => "contact",
            Self::PartnerDashboard => "partner-dashboard",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view '{0}'")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|view| view.key() == wanted)
            .ok_or_else(|| UnknownView(raw.to_string()))
    }
}

/// The two services offered from the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Materials,
    Vehicles,
}

impl ServiceKind {
    pub const fn view(self) -> View {
        match self {
            Self::Materials => View::Materials,
            Self::Vehicles => View::Vehicles,
        }
    }
}

/// Transient confirmation shown after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub expires_at: DateTime<Utc>,
}

impl Banner {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Listing the request dialog was opened for, with the amount the renter picked.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalItem {
    Material {
        item: MaterialItem,
        quantity: u32,
    },
    Vehicle {
        vehicle: Vehicle,
        duration: u32,
        unit: DurationUnit,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestModal {
    pub item: ModalItem,
}

impl RequestModal {
    pub fn item_name(&self) -> &str {
        match &self.item {
            ModalItem::Material { item, .. } => &item.name,
            ModalItem::Vehicle { vehicle, .. } => &vehicle.name,
        }
    }

    /// The catalog reference a service request needs.
    pub fn requested_item(&self) -> RequestedItem {
        match &self.item {
            ModalItem::Material { item, quantity } => RequestedItem::Material {
                material_id: item.id.clone(),
                quantity: *quantity,
            },
            ModalItem::Vehicle {
                vehicle,
                duration,
                unit,
            } => RequestedItem::Vehicle {
                vehicle_id: vehicle.id.clone(),
                duration: *duration,
                unit: *unit,
            },
        }
    }
}

/// What the shell resolves to for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    Home,
    Services,
    Materials,
    Vehicles,
    VehicleDetail(&'a Vehicle),
    About,
    Contact,
    PartnerDashboard(&'a Partner),
    /// Partner dashboard requested before any registration.
    GuestPartnerInvite,
}
