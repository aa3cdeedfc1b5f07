use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::marketplace::catalog::{Catalog, District, MaterialId, VehicleId};
use crate::marketplace::partners::{
    BusinessKind, Partner, PartnerId, PartnerRegistration, PartnerRepository, PartnerService,
    PartnerStatus, RepositoryError,
};
use crate::marketplace::requests::{
    DurationUnit, NotifyError, RequestService, RequestedItem, ServiceRequestDraft,
    SupplierNotification, SupplierNotifier,
};
use crate::marketplace::router::{marketplace_router, MarketplaceState};

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn registration() -> PartnerRegistration {
    PartnerRegistration {
        business_name: "Perera Heavy Machinery".to_string(),
        contact_person: "Sunil Perera".to_string(),
        email: "sunil@pereramachinery.lk".to_string(),
        phone: "+94 77 123 4567".to_string(),
        district: District::Colombo,
        address: "12 High Level Road, Maharagama".to_string(),
        business_kind: BusinessKind::VehicleOwner,
        services: vec!["JCB hire".to_string(), "Tipper hire".to_string()],
        description: Some("Family run since 1998".to_string()),
    }
}

pub(super) fn vehicle_draft(
    vehicle_id: &str,
    duration: u32,
    unit: DurationUnit,
) -> ServiceRequestDraft {
    ServiceRequestDraft {
        item: RequestedItem::Vehicle {
            vehicle_id: VehicleId(vehicle_id.to_string()),
            duration,
            unit,
        },
        contact_name: "Kamala Silva".to_string(),
        contact_phone: "0712345678".to_string(),
        delivery_location: Some("Kottawa".to_string()),
        message: None,
        user_id: None,
    }
}

pub(super) fn material_draft(material_id: &str, quantity: u32) -> ServiceRequestDraft {
    ServiceRequestDraft {
        item: RequestedItem::Material {
            material_id: MaterialId(material_id.to_string()),
            quantity,
        },
        contact_name: "Kamala Silva".to_string(),
        contact_phone: "0712345678".to_string(),
        delivery_location: None,
        message: Some("Deliver before noon".to_string()),
        user_id: None,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<PartnerId, Partner>>>,
}

impl PartnerRepository for MemoryRepository {
    fn insert(&self, partner: Partner) -> Result<Partner, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&partner.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(partner.id.clone(), partner.clone());
        Ok(partner)
    }

    fn update(&self, partner: Partner) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(partner.id.clone(), partner);
        Ok(())
    }

    fn fetch(&self, id: &PartnerId) -> Result<Option<Partner>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<Partner>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|partner| partner.status == PartnerStatus::Pending)
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct ConflictRepository;

impl PartnerRepository for ConflictRepository {
    fn insert(&self, _partner: Partner) -> Result<Partner, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _partner: Partner) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &PartnerId) -> Result<Option<Partner>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<Partner>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl PartnerRepository for UnavailableRepository {
    fn insert(&self, _partner: Partner) -> Result<Partner, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _partner: Partner) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &PartnerId) -> Result<Option<Partner>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<Partner>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<SupplierNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<SupplierNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl SupplierNotifier for MemoryNotifier {
    fn notify(&self, notification: SupplierNotification) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl SupplierNotifier for OfflineNotifier {
    fn notify(&self, _notification: SupplierNotification) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("sms gateway offline".to_string()))
    }
}

pub(super) fn request_service() -> (RequestService<MemoryNotifier>, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::default());
    let service = RequestService::new(Arc::new(Catalog::seed()), notifier.clone());
    (service, notifier)
}

pub(super) fn build_state<R>(
    repository: R,
) -> (MarketplaceState<R, MemoryNotifier>, Arc<MemoryNotifier>)
where
    R: PartnerRepository + 'static,
{
    let catalog = Arc::new(Catalog::seed());
    let notifier = Arc::new(MemoryNotifier::default());
    let state = MarketplaceState {
        catalog: catalog.clone(),
        partners: Arc::new(PartnerService::new(Arc::new(repository))),
        requests: Arc::new(RequestService::new(catalog, notifier.clone())),
    };
    (state, notifier)
}

pub(super) fn router_with_memory() -> (axum::Router, Arc<MemoryNotifier>) {
    let (state, notifier) = build_state(MemoryRepository::default());
    (marketplace_router(state), notifier)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
