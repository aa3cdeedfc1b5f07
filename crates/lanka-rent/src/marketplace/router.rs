use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::accounts::{self, LoginRequest};
use super::catalog::{
    Catalog, CategoryGroup, District, ListingFilter, MaterialFilter, MaterialItem, Vehicle,
    VehicleCategory, VehicleId,
};
use super::partners::{
    PartnerId, PartnerRegistration, PartnerRepository, PartnerService, PartnerServiceError,
    RepositoryError,
};
use super::requests::{RequestError, RequestService, ServiceRequestDraft, SupplierNotifier};

/// Shared handles behind the marketplace routes.
pub struct MarketplaceState<R, N> {
    pub catalog: Arc<Catalog>,
    pub partners: Arc<PartnerService<R>>,
    pub requests: Arc<RequestService<N>>,
}

impl<R, N> Clone for MarketplaceState<R, N> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            partners: Arc::clone(&self.partners),
            requests: Arc::clone(&self.requests),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VehicleQuery {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MaterialQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VehicleListing {
    pub count: usize,
    pub caption: String,
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug, Serialize)]
pub struct MaterialListing {
    pub count: usize,
    pub materials: Vec<MaterialItem>,
}

#[derive(Debug, Serialize)]
pub struct CategoryGroupView {
    pub key: &'static str,
    pub label: &'static str,
    pub tags: Vec<VehicleCategory>,
}

/// Router builder exposing catalog queries, sign-in, partner registration and requests.
pub fn marketplace_router<R, N>(state: MarketplaceState<R, N>) -> Router
where
    R: PartnerRepository + 'static,
    N: SupplierNotifier + 'static,
{
    Router::new()
        .route("/api/v1/vehicles", get(vehicles_handler::<R, N>))
        .route("/api/v1/vehicles/:vehicle_id", get(vehicle_handler::<R, N>))
        .route("/api/v1/materials", get(materials_handler::<R, N>))
        .route("/api/v1/districts", get(districts_handler))
        .route("/api/v1/category-groups", get(category_groups_handler))
        .route("/api/v1/sessions", post(login_handler))
        .route("/api/v1/partners", post(register_partner_handler::<R, N>))
        .route(
            "/api/v1/partners/:partner_id",
            get(partner_status_handler::<R, N>),
        )
        .route(
            "/api/v1/service-requests",
            post(submit_request_handler::<R, N>),
        )
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl ToString) -> Response {
    let payload = json!({ "error": message.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn vehicles_handler<R, N>(
    State(state): State<MarketplaceState<R, N>>,
    Query(query): Query<VehicleQuery>,
) -> Json<VehicleListing>
where
    R: PartnerRepository + 'static,
    N: SupplierNotifier + 'static,
{
    let filter = ListingFilter::from_labels(query.group.as_deref(), query.district.as_deref());
    let vehicles: Vec<Vehicle> = state
        .catalog
        .filter_vehicles(&filter)
        .into_iter()
        .cloned()
        .collect();

    Json(VehicleListing {
        count: vehicles.len(),
        caption: filter.caption(vehicles.len()),
        vehicles,
    })
}

pub(crate) async fn vehicle_handler<R, N>(
    State(state): State<MarketplaceState<R, N>>,
    Path(vehicle_id): Path<String>,
) -> Response
where
    R: PartnerRepository + 'static,
    N: SupplierNotifier + 'static,
{
    match state.catalog.vehicle(&VehicleId(vehicle_id.clone())) {
        Some(vehicle) => (StatusCode::OK, Json(vehicle.clone())).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("vehicle '{vehicle_id}' is not listed"),
        ),
    }
}

pub(crate) async fn materials_handler<R, N>(
    State(state): State<MarketplaceState<R, N>>,
    Query(query): Query<MaterialQuery>,
) -> Json<MaterialListing>
where
    R: PartnerRepository + 'static,
    N: SupplierNotifier + 'static,
{
    let filter = MaterialFilter::from_labels(query.category.as_deref(), query.district.as_deref());
    let materials: Vec<MaterialItem> = state
        .catalog
        .filter_materials(&filter)
        .into_iter()
        .cloned()
        .collect();

    Json(MaterialListing {
        count: materials.len(),
        materials,
    })
}

pub(crate) async fn districts_handler() -> Json<Vec<&'static str>> {
    Json(District::ALL.iter().map(|district| district.label()).collect())
}

pub(crate) async fn category_groups_handler() -> Json<Vec<CategoryGroupView>> {
    Json(
        CategoryGroup::ordered()
            .into_iter()
            .map(|group| CategoryGroupView {
                key: group.key(),
                label: group.label(),
                tags: group.tags().to_vec(),
            })
            .collect(),
    )
}

pub(crate) async fn login_handler(Json(request): Json<LoginRequest>) -> Response {
    match accounts::login(request, Utc::now()) {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(error) => error_response(StatusCode::UNPROCESSABLE_ENTITY, error),
    }
}

pub(crate) async fn register_partner_handler<R, N>(
    State(state): State<MarketplaceState<R, N>>,
    Json(submission): Json<PartnerRegistration>,
) -> Response
where
    R: PartnerRepository + 'static,
    N: SupplierNotifier + 'static,
{
    match state.partners.register(submission, Utc::now()) {
        Ok(partner) => (StatusCode::ACCEPTED, Json(partner)).into_response(),
        Err(PartnerServiceError::Registration(error)) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, error)
        }
        Err(PartnerServiceError::Repository(RepositoryError::Conflict)) => {
            error_response(StatusCode::CONFLICT, "partner already registered")
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn partner_status_handler<R, N>(
    State(state): State<MarketplaceState<R, N>>,
    Path(partner_id): Path<String>,
) -> Response
where
    R: PartnerRepository + 'static,
    N: SupplierNotifier + 'static,
{
    match state.partners.get(&PartnerId(partner_id)) {
        Ok(partner) => (StatusCode::OK, Json(partner)).into_response(),
        Err(PartnerServiceError::Repository(RepositoryError::NotFound)) => {
            error_response(StatusCode::NOT_FOUND, "partner not found")
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn submit_request_handler<R, N>(
    State(state): State<MarketplaceState<R, N>>,
    Json(draft): Json<ServiceRequestDraft>,
) -> Response
where
    R: PartnerRepository + 'static,
    N: SupplierNotifier + 'static,
{
    match state.requests.submit(draft, Utc::now()) {
        Ok(request) => (StatusCode::ACCEPTED, Json(request)).into_response(),
        Err(error @ (RequestError::UnknownVehicle(_) | RequestError::UnknownMaterial(_))) => {
            error_response(StatusCode::NOT_FOUND, error)
        }
        Err(error @ RequestError::Notify(_)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error)
        }
        Err(error) => error_response(StatusCode::UNPROCESSABLE_ENTITY, error),
    }
}
