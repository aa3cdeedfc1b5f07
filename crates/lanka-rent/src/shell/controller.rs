use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::state::{Banner, ModalItem, RequestModal, Screen, ServiceKind, View};
use crate::config::BannerConfig;
use crate::marketplace::accounts::{ProfileUpdate, User};
use crate::marketplace::catalog::{MaterialItem, Vehicle};
use crate::marketplace::partners::Partner;
use crate::marketplace::requests::DurationUnit;

pub const REQUEST_BANNER_TEXT: &str =
    "Service request submitted successfully! We'll contact you soon.";
pub const PARTNER_BANNER_TEXT: &str = "Partner registration submitted successfully! \
We'll review your application within 2-3 business days.";

/// Owner of the session's UI state. Every transition is total.
#[derive(Debug, Clone)]
pub struct AppShell {
    view: View,
    menu_open: bool,
    auth_open: bool,
    registration_open: bool,
    user: Option<User>,
    partner: Option<Partner>,
    selected_vehicle: Option<Vehicle>,
    request_modal: Option<RequestModal>,
    banner: Option<Banner>,
    request_banner: Duration,
    partner_banner: Duration,
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new(&BannerConfig::default())
    }
}

impl AppShell {
    pub fn new(banners: &BannerConfig) -> Self {
        Self {
            view: View::Home,
            menu_open: false,
            auth_open: false,
            registration_open: false,
            user: None,
            partner: None,
            selected_vehicle: None,
            request_modal: None,
            banner: None,
            request_banner: banners.request_lifetime(),
            partner_banner: banners.partner_lifetime(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_auth_open(&self) -> bool {
        self.auth_open
    }

    pub fn is_registration_open(&self) -> bool {
        self.registration_open
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn partner(&self) -> Option<&Partner> {
        self.partner.as_ref()
    }

    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.selected_vehicle.as_ref()
    }

    pub fn request_modal(&self) -> Option<&RequestModal> {
        self.request_modal.as_ref()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn navigate(&mut self, view: View) {
        debug!(from = %self.view, to = %view, "navigate");
        self.view = view;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Picking a service leaves the menu as it was.
    pub fn select_service(&mut self, service: ServiceKind) {
        self.view = service.view();
    }

    pub fn open_auth(&mut self) {
        self.auth_open = true;
    }

    pub fn close_auth(&mut self) {
        self.auth_open = false;
    }

    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.auth_open = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.partner = None;
        self.view = View::Home;
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) {
        if let Some(user) = self.user.as_mut() {
            user.apply(update);
        }
    }

    pub fn open_registration(&mut self) {
        self.registration_open = true;
    }

    pub fn close_registration(&mut self) {
        self.registration_open = false;
    }

    pub fn complete_registration(&mut self, partner: Partner, now: DateTime<Utc>) {
        self.partner = Some(partner);
        self.registration_open = false;
        self.view = View::PartnerDashboard;
        self.banner = Some(Banner {
            expires_at: now + self.partner_banner,
        });
    }

    pub fn select_vehicle(&mut self, vehicle: Vehicle) {
        self.selected_vehicle = Some(vehicle);
        self.view = View::VehicleDetail;
    }

    pub fn request_material(&mut self, item: MaterialItem, quantity: u32) {
        self.request_modal = Some(RequestModal {
            item: ModalItem::Material { item, quantity },
        });
    }

    pub fn request_vehicle(&mut self, vehicle: Vehicle, duration: u32, unit: DurationUnit) {
        self.request_modal = Some(RequestModal {
            item: ModalItem::Vehicle {
                vehicle,
                duration,
                unit,
            },
        });
    }

    pub fn close_request(&mut self) {
        self.request_modal = None;
    }

    /// Close the request dialog and raise the request banner. Returns the dialog that was
    /// open, if any.
    pub fn complete_request(&mut self, now: DateTime<Utc>) -> Option<RequestModal> {
        let closed = self.request_modal.take();
        self.banner = Some(Banner {
            expires_at: now + self.request_banner,
        });
        closed
    }

    pub fn expire_banner(&mut self, now: DateTime<Utc>) {
        if self.banner.is_some_and(|banner| banner.is_expired(now)) {
            self.banner = None;
        }
    }

    /// Text for the visible banner, chosen from the current state rather than from whichever
    /// submission raised it.
    pub fn banner_message(&self) -> Option<&'static str> {
        self.banner?;
        if self.partner.is_some() && self.view == View::PartnerDashboard {
            Some(PARTNER_BANNER_TEXT)
        } else {
            Some(REQUEST_BANNER_TEXT)
        }
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.view {
            View::Home => Screen::Home,
            View::Services => Screen::Services,
            View::Materials => Screen::Materials,
            View::Vehicles => Screen::Vehicles,
            View::VehicleDetail => self
                .selected_vehicle
                .as_ref()
                .map_or(Screen::Home, Screen::VehicleDetail),
            View::About => Screen::About,
            View::Contact => Screen::Contact,
            View::PartnerDashboard => self
                .partner
                .as_ref()
                .map_or(Screen::GuestPartnerInvite, Screen::PartnerDashboard),
        }
    }
}
