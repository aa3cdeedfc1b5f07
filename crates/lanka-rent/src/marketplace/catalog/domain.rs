use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::district::District;

/// Identifier wrapper for listed vehicles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub String);

/// Identifier wrapper for listed material items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub String);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored category tag of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    Excavator,
    Jcb,
    Tipper,
    Lorry,
    Crane,
    ConcreteMixer,
    Bowser,
}

impl VehicleCategory {
    pub const ALL: [Self; 7] = [
        Self::Excavator,
        Self::Jcb,
        Self::Tipper,
        Self::Lorry,
        Self::Crane,
        Self::ConcreteMixer,
        Self::Bowser,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Excavator => "excavator",
            Self::Jcb => "jcb",
            Self::Tipper => "tipper",
            Self::Lorry => "lorry",
            Self::Crane => "crane",
            Self::ConcreteMixer => "concrete_mixer",
            Self::Bowser => "bowser",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excavator => "Excavator",
            Self::Jcb => "JCB",
            Self::Tipper => "Tipper",
            Self::Lorry => "Lorry",
            Self::Crane => "Crane",
            Self::ConcreteMixer => "Concrete Mixer",
            Self::Bowser => "Water Bowser",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle category '{0}'")]
pub struct UnknownVehicleCategory(pub String);

impl FromStr for VehicleCategory {
    type Err = UnknownVehicleCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_tag(raw);
        Self::ALL
            .into_iter()
            .find(|category| category.tag() == normalized)
            .ok_or_else(|| UnknownVehicleCategory(raw.to_string()))
    }
}

/// Material families offered by suppliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    Sand,
    Soil,
    Bricks,
    Gravel,
}

impl MaterialCategory {
    pub const ALL: [Self; 4] = [Self::Sand, Self::Soil, Self::Bricks, Self::Gravel];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sand => "sand",
            Self::Soil => "soil",
            Self::Bricks => "bricks",
            Self::Gravel => "gravel",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sand => "Sand",
            Self::Soil => "Soil",
            Self::Bricks => "Bricks",
            Self::Gravel => "Gravel",
        }
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown material category '{0}'")]
pub struct UnknownMaterialCategory(pub String);

impl FromStr for MaterialCategory {
    type Err = UnknownMaterialCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_tag(raw);
        Self::ALL
            .into_iter()
            .find(|category| category.tag() == normalized)
            .ok_or_else(|| UnknownMaterialCategory(raw.to_string()))
    }
}

fn normalize_tag(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
}

/// Vendor-side profile embedded in every listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub location: String,
    pub district: District,
    pub rating: f32,
    pub completed_jobs: u32,
}

/// A rentable vehicle. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub category: VehicleCategory,
    pub price_per_hour: u32,
    pub price_per_day: u32,
    pub available: bool,
    pub description: String,
    pub image: String,
    pub supplier: Supplier,
}

/// A construction material sold by the unit (a cube of sand, a thousand bricks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialItem {
    pub id: MaterialId,
    pub name: String,
    pub category: MaterialCategory,
    pub unit_price: u32,
    pub unit: String,
    pub available: bool,
    pub description: String,
    pub image: String,
    pub supplier: Supplier,
}
