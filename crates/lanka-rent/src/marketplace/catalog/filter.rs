//! Listing filters over the in-memory catalog.
//!
//! A filter holds up to two criteria. Each criterion is either a recognized value or the raw
//! label a caller supplied that did not map to anything; an unrecognized criterion matches no
//! listing, so an unsupported category group yields an empty result rather than an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::district::District;
use super::domain::{MaterialCategory, MaterialItem, Vehicle, VehicleCategory};

/// Coarse grouping of vehicle tags shown to renters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryGroup {
    Agricultural,
    Construction,
    WaterSupply,
}

impl CategoryGroup {
    pub const fn ordered() -> [Self; 3] {
        [Self::Agricultural, Self::Construction, Self::WaterSupply]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Agricultural => "agricultural",
            Self::Construction => "construction",
            Self::WaterSupply => "water-supply",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Agricultural => "Agricultural",
            Self::Construction => "Construction",
            Self::WaterSupply => "Water Supply",
        }
    }

    pub const fn tags(self) -> &'static [VehicleCategory] {
        match self {
            Self::Agricultural => &[VehicleCategory::Excavator, VehicleCategory::Jcb],
            Self::Construction => &[
                VehicleCategory::Tipper,
                VehicleCategory::Lorry,
                VehicleCategory::Crane,
                VehicleCategory::ConcreteMixer,
            ],
            Self::WaterSupply => &[VehicleCategory::Bowser],
        }
    }

    pub fn contains(self, category: VehicleCategory) -> bool {
        self.tags().contains(&category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category group '{0}'")]
pub struct UnknownCategoryGroup(pub String);

impl FromStr for CategoryGroup {
    type Err = UnknownCategoryGroup;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "agricultural" | "agri" => Ok(Self::Agricultural),
            "construction" | "constructor" => Ok(Self::Construction),
            "water-supply" | "water_supply" | "water supply" => Ok(Self::WaterSupply),
            _ => Err(UnknownCategoryGroup(raw.to_string())),
        }
    }
}

/// One filter criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion<T> {
    Is(T),
    Unrecognized(String),
}

impl<T> Criterion<T> {
    fn admits(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Criterion::Is(value) => predicate(value),
            Criterion::Unrecognized(_) => false,
        }
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Criterion::Is(value) => Some(value),
            Criterion::Unrecognized(_) => None,
        }
    }
}

impl<T: fmt::Display> Criterion<T> {
    fn describe(&self) -> String {
        match self {
            Criterion::Is(value) => value.to_string(),
            Criterion::Unrecognized(raw) => format!("'{raw}'"),
        }
    }
}

/// Blank labels mean "unset"; anything that does not parse is kept as unrecognized.
fn criterion_from_label<T: FromStr>(raw: Option<&str>, kind: &'static str) -> Option<Criterion<T>> {
    let label = raw.map(str::trim).filter(|label| !label.is_empty())?;
    match label.parse::<T>() {
        Ok(value) => Some(Criterion::Is(value)),
        Err(_) => {
            warn!(kind, label, "unrecognized filter label; no listing will match");
            Some(Criterion::Unrecognized(label.to_string()))
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vehicle filter by category group and supplier district.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub group: Option<Criterion<CategoryGroup>>,
    pub district: Option<Criterion<District>>,
}

impl ListingFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn from_labels(group: Option<&str>, district: Option<&str>) -> Self {
        Self {
            group: criterion_from_label(group, "category_group"),
            district: criterion_from_label(district, "district"),
        }
    }

    pub fn with_group(mut self, group: CategoryGroup) -> Self {
        self.group = Some(Criterion::Is(group));
        self
    }

    pub fn with_district(mut self, district: District) -> Self {
        self.district = Some(Criterion::Is(district));
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.group.is_none() && self.district.is_none()
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let group_ok = self
            .group
            .as_ref()
            .map_or(true, |group| group.admits(|group| group.contains(vehicle.category)));
        let district_ok = self.district.as_ref().map_or(true, |district| {
            district.admits(|district| *district == vehicle.supplier.district)
        });
        group_ok && district_ok
    }

    /// Matching vehicles in catalog order.
    pub fn apply<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        vehicles
            .iter()
            .filter(|vehicle| self.matches(vehicle))
            .collect()
    }

    pub fn apply_cloned(&self, vehicles: &[Vehicle]) -> Vec<Vehicle> {
        self.apply(vehicles).into_iter().cloned().collect()
    }

    /// Results line shown above the listing grid.
    pub fn caption(&self, count: usize) -> String {
        let mut caption = format!("Showing {count} vehicles");
        if let Some(group) = &self.group {
            caption.push_str(&format!(" in {} category", group.describe()));
        }
        if let Some(district) = &self.district {
            caption.push_str(&format!(" in {} district", district.describe()));
        }
        caption
    }
}

/// Material filter by category and supplier district.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialFilter {
    pub category: Option<Criterion<MaterialCategory>>,
    pub district: Option<Criterion<District>>,
}

impl MaterialFilter {
    pub fn from_labels(category: Option<&str>, district: Option<&str>) -> Self {
        Self {
            category: criterion_from_label(category, "material_category"),
            district: criterion_from_label(district, "district"),
        }
    }

    pub fn with_category(mut self, category: MaterialCategory) -> Self {
        self.category = Some(Criterion::Is(category));
        self
    }

    pub fn with_district(mut self, district: District) -> Self {
        self.district = Some(Criterion::Is(district));
        self
    }

    pub fn matches(&self, item: &MaterialItem) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .map_or(true, |category| category.admits(|category| *category == item.category));
        let district_ok = self.district.as_ref().map_or(true, |district| {
            district.admits(|district| *district == item.supplier.district)
        });
        category_ok && district_ok
    }

    pub fn apply<'a>(&self, items: &'a [MaterialItem]) -> Vec<&'a MaterialItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
