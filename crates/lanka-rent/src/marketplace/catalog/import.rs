use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::info;

use super::district::District;
use super::domain::{Supplier, Vehicle, VehicleCategory, VehicleId};

/// Errors raised while loading a vehicle export. Row numbers count the header as row 1.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown vehicle category '{value}'")]
    UnknownCategory { row: usize, value: String },
    #[error("row {row}: unknown district '{value}'")]
    UnknownDistrict { row: usize, value: String },
    #[error("row {row}: duplicate vehicle id '{id}'")]
    DuplicateId { row: usize, id: String },
}

pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vehicle>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Vehicle>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut seen = HashSet::new();
        let mut vehicles = Vec::new();

        for (index, record) in csv_reader.deserialize::<VehicleRow>().enumerate() {
            let row_number = index + 2;
            let row = record?;
            if !seen.insert(row.id.clone()) {
                return Err(CatalogImportError::DuplicateId {
                    row: row_number,
                    id: row.id,
                });
            }
            vehicles.push(row.into_vehicle(row_number)?);
        }

        info!(count = vehicles.len(), "loaded vehicle catalog export");
        Ok(vehicles)
    }
}

#[derive(Debug, Deserialize)]
struct VehicleRow {
    id: String,
    name: String,
    category: String,
    price_per_hour: u32,
    price_per_day: u32,
    #[serde(deserialize_with = "flexible_bool")]
    available: bool,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    supplier_name: String,
    #[serde(default)]
    supplier_location: String,
    supplier_district: String,
    #[serde(default)]
    supplier_rating: f32,
    #[serde(default)]
    supplier_completed_jobs: u32,
}

impl VehicleRow {
    fn into_vehicle(self, row: usize) -> Result<Vehicle, CatalogImportError> {
        let category = self.category.parse::<VehicleCategory>().map_err(|_| {
            CatalogImportError::UnknownCategory {
                row,
                value: self.category.clone(),
            }
        })?;
        let district = self.supplier_district.parse::<District>().map_err(|_| {
            CatalogImportError::UnknownDistrict {
                row,
                value: self.supplier_district.clone(),
            }
        })?;

        Ok(Vehicle {
            id: VehicleId(self.id),
            name: self.name,
            category,
            price_per_hour: self.price_per_hour,
            price_per_day: self.price_per_day,
            available: self.available,
            description: self.description,
            image: self.image,
            supplier: Supplier {
                name: self.supplier_name,
                location: self.supplier_location,
                district,
                rating: self.supplier_rating,
                completed_jobs: self.supplier_completed_jobs,
            },
        })
    }
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected yes/no availability, found '{other}'"
        ))),
    }
}
