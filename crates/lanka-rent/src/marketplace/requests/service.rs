use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{
    DurationUnit, RequestId, RequestStatus, RequestedItem, ServiceRequest, ServiceRequestDraft,
    SupplierNotification,
};
use crate::marketplace::catalog::{Catalog, MaterialId, VehicleId};
use crate::marketplace::ids::timestamp_id;

/// Trait describing outbound supplier hooks (SMS, e-mail, or an in-memory sink for demos).
pub trait SupplierNotifier: Send + Sync {
    fn notify(&self, notification: SupplierNotification) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("vehicle '{0}' is not listed")]
    UnknownVehicle(VehicleId),
    #[error("material '{0}' is not listed")]
    UnknownMaterial(MaterialId),
    #[error("vehicle '{0}' is currently booked")]
    VehicleUnavailable(VehicleId),
    #[error("material '{0}' is out of stock")]
    MaterialUnavailable(MaterialId),
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    #[error("hire duration must be at least 1")]
    ZeroDuration,
    #[error("contact name and phone are required")]
    MissingContact,
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

struct Priced {
    item_name: String,
    supplier_name: String,
    estimated_cost: u64,
    summary: String,
}

/// Validates contact requests against the catalog and forwards them to the supplier.
pub struct RequestService<N> {
    catalog: Arc<Catalog>,
    notifier: Arc<N>,
}

impl<N> RequestService<N>
where
    N: SupplierNotifier + 'static,
{
    pub fn new(catalog: Arc<Catalog>, notifier: Arc<N>) -> Self {
        Self { catalog, notifier }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn submit(
        &self,
        draft: ServiceRequestDraft,
        now: DateTime<Utc>,
    ) -> Result<ServiceRequest, RequestError> {
        let contact_name = draft.contact_name.trim().to_string();
        let contact_phone = draft.contact_phone.trim().to_string();
        if contact_name.is_empty() || contact_phone.is_empty() {
            return Err(RequestError::MissingContact);
        }

        let priced = self.price(&draft.item)?;
        let mut request = ServiceRequest {
            id: RequestId(timestamp_id("req", now)),
            item: draft.item,
            item_name: priced.item_name,
            supplier_name: priced.supplier_name,
            contact_name,
            contact_phone,
            delivery_location: draft.delivery_location,
            message: draft.message,
            user_id: draft.user_id,
            estimated_cost: priced.estimated_cost,
            status: RequestStatus::Pending,
            request_date: now,
        };

        info!(
            request_id = %request.id.0,
            item = %request.item_name,
            supplier = %request.supplier_name,
            estimated_cost = request.estimated_cost,
            "contact request sent to supplier"
        );

        let mut details = BTreeMap::new();
        details.insert("item".to_string(), request.item_name.clone());
        details.insert("requested".to_string(), priced.summary);
        details.insert("contact_name".to_string(), request.contact_name.clone());
        details.insert("contact_phone".to_string(), request.contact_phone.clone());
        details.insert(
            "estimated_cost".to_string(),
            request.estimated_cost.to_string(),
        );
        if let Some(location) = &request.delivery_location {
            details.insert("delivery_location".to_string(), location.clone());
        }

        self.notifier.notify(SupplierNotification {
            template: "service_request_received".to_string(),
            request_id: request.id.clone(),
            supplier_name: request.supplier_name.clone(),
            details,
        })?;
        request.status = RequestStatus::SupplierNotified;

        Ok(request)
    }

    fn price(&self, item: &RequestedItem) -> Result<Priced, RequestError> {
        match item {
            RequestedItem::Material {
                material_id,
                quantity,
            } => {
                let material = self
                    .catalog
                    .material(material_id)
                    .ok_or_else(|| RequestError::UnknownMaterial(material_id.clone()))?;
                if *quantity == 0 {
                    return Err(RequestError::ZeroQuantity);
                }
                if !material.available {
                    return Err(RequestError::MaterialUnavailable(material_id.clone()));
                }
                Ok(Priced {
                    item_name: material.name.clone(),
                    supplier_name: material.supplier.name.clone(),
                    estimated_cost: u64::from(material.unit_price) * u64::from(*quantity),
                    summary: format!("{quantity} x {}", material.unit),
                })
            }
            RequestedItem::Vehicle {
                vehicle_id,
                duration,
                unit,
            } => {
                let vehicle = self
                    .catalog
                    .vehicle(vehicle_id)
                    .ok_or_else(|| RequestError::UnknownVehicle(vehicle_id.clone()))?;
                if *duration == 0 {
                    return Err(RequestError::ZeroDuration);
                }
                if !vehicle.available {
                    return Err(RequestError::VehicleUnavailable(vehicle_id.clone()));
                }
                let rate = match unit {
                    DurationUnit::Hours => vehicle.price_per_hour,
                    DurationUnit::Days => vehicle.price_per_day,
                };
                Ok(Priced {
                    item_name: vehicle.name.clone(),
                    supplier_name: vehicle.supplier.name.clone(),
                    estimated_cost: u64::from(rate) * u64::from(*duration),
                    summary: format!("{duration} {}", unit.label()),
                })
            }
        }
    }
}
