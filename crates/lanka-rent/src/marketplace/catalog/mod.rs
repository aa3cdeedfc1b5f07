mod district;
pub mod domain;
mod filter;
mod import;
pub mod seed;

pub use district::{District, UnknownDistrict};
pub use domain::{
    MaterialCategory, MaterialId, MaterialItem, Supplier, Vehicle, VehicleCategory, VehicleId,
};
pub use filter::{CategoryGroup, Criterion, ListingFilter, MaterialFilter, UnknownCategoryGroup};
pub use import::{CatalogImportError, CatalogImporter};

/// Immutable listing store shared by the shell, the request service and the HTTP routes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
    materials: Vec<MaterialItem>,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>, materials: Vec<MaterialItem>) -> Self {
        Self {
            vehicles,
            materials,
        }
    }

    pub fn seed() -> Self {
        Self::new(seed::vehicles(), seed::materials())
    }

    /// Replace the vehicle listings, keeping the materials.
    pub fn with_vehicles(self, vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles, ..self }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn materials(&self) -> &[MaterialItem] {
        &self.materials
    }

    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| &vehicle.id == id)
    }

    pub fn material(&self, id: &MaterialId) -> Option<&MaterialItem> {
        self.materials.iter().find(|item| &item.id == id)
    }

    pub fn filter_vehicles(&self, filter: &ListingFilter) -> Vec<&Vehicle> {
        filter.apply(&self.vehicles)
    }

    pub fn filter_materials(&self, filter: &MaterialFilter) -> Vec<&MaterialItem> {
        filter.apply(&self.materials)
    }
}
