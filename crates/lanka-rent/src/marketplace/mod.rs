//! Rental marketplace domain: listings, sign-in, partner registration and contact requests.

pub mod accounts;
pub mod catalog;
mod ids;
pub mod partners;
pub mod requests;
pub mod router;

#[cfg(test)]
mod tests;

pub use accounts::{login, AccountError, LoginRequest, ProfileUpdate, User, UserId, UserRole};
pub use catalog::{
    Catalog, CategoryGroup, District, ListingFilter, MaterialCategory, MaterialFilter,
    MaterialItem, Supplier, Vehicle, VehicleCategory,
};
pub use router::{marketplace_router, MarketplaceState};
