pub mod domain;
mod service;

pub use domain::{
    DurationUnit, RequestId, RequestStatus, RequestedItem, ServiceRequest, ServiceRequestDraft,
    SupplierNotification,
};
pub use service::{NotifyError, RequestError, RequestService, SupplierNotifier};
