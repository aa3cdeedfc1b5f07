use lanka_rent::config::CatalogConfig;
use lanka_rent::marketplace::catalog::{Catalog, CatalogImportError, CatalogImporter};
use lanka_rent::marketplace::partners::{
    Partner, PartnerId, PartnerRepository, PartnerService, PartnerStatus, RepositoryError,
};
use lanka_rent::marketplace::requests::{
    NotifyError, RequestService, SupplierNotification, SupplierNotifier,
};
use lanka_rent::marketplace::MarketplaceState;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Unavailable("partner store lock poisoned".to_string())
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPartnerRepository {
    records: Arc<Mutex<HashMap<PartnerId, Partner>>>,
}

impl PartnerRepository for InMemoryPartnerRepository {
    fn insert(&self, partner: Partner) -> Result<Partner, RepositoryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        if guard.contains_key(&partner.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(partner.id.clone(), partner.clone());
        Ok(partner)
    }

    fn update(&self, partner: Partner) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        if guard.contains_key(&partner.id) {
            guard.insert(partner.id.clone(), partner);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &PartnerId) -> Result<Option<Partner>, RepositoryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<Partner>, RepositoryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        let mut pending: Vec<Partner> = guard
            .values()
            .filter(|partner| partner.status == PartnerStatus::Pending)
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.registration_date.cmp(&b.registration_date));
        pending.truncate(limit);
        Ok(pending)
    }
}

fn log_notification(notification: &SupplierNotification) {
    info!(
        request_id = %notification.request_id.0,
        supplier = %notification.supplier_name,
        template = %notification.template,
        "supplier notified"
    );
}

/// Logs each supplier notification and keeps nothing. Stands in for the SMS gateway.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LoggingSupplierNotifier;

impl SupplierNotifier for LoggingSupplierNotifier {
    fn notify(&self, notification: SupplierNotification) -> Result<(), NotifyError> {
        log_notification(&notification);
        Ok(())
    }
}

/// Logs and records notifications so the terminal demo can print what went out.
#[derive(Default, Clone)]
pub(crate) struct RecordingSupplierNotifier {
    events: Arc<Mutex<Vec<SupplierNotification>>>,
}

impl SupplierNotifier for RecordingSupplierNotifier {
    fn notify(&self, notification: SupplierNotification) -> Result<(), NotifyError> {
        log_notification(&notification);
        let mut guard = self
            .events
            .lock()
            .map_err(|_| NotifyError::Transport("notification log lock poisoned".to_string()))?;
        guard.push(notification);
        Ok(())
    }
}

impl RecordingSupplierNotifier {
    pub(crate) fn events(&self) -> Vec<SupplierNotification> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

/// Seed catalog, with the vehicles replaced by the configured CSV when one is set.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<Catalog, CatalogImportError> {
    match &config.vehicles_csv {
        Some(path) => {
            let vehicles = CatalogImporter::from_path(path)?;
            Ok(Catalog::seed().with_vehicles(vehicles))
        }
        None => Ok(Catalog::seed()),
    }
}

pub(crate) type ApiState = MarketplaceState<InMemoryPartnerRepository, LoggingSupplierNotifier>;

/// State for the long-running server: notifications are logged, never retained.
pub(crate) fn server_state(catalog: Catalog) -> ApiState {
    marketplace_state(catalog, Arc::new(LoggingSupplierNotifier))
}

pub(crate) fn marketplace_state<N>(
    catalog: Catalog,
    notifier: Arc<N>,
) -> MarketplaceState<InMemoryPartnerRepository, N>
where
    N: SupplierNotifier + 'static,
{
    let catalog = Arc::new(catalog);
    let repository = Arc::new(InMemoryPartnerRepository::default());
    MarketplaceState {
        catalog: catalog.clone(),
        partners: Arc::new(PartnerService::new(repository)),
        requests: Arc::new(RequestService::new(catalog, notifier)),
    }
}
