use crate::infra::{load_catalog, marketplace_state, RecordingSupplierNotifier};
use chrono::{DateTime, Utc};
use clap::Args;
use lanka_rent::config::{BannerConfig, CatalogConfig};
use lanka_rent::error::AppError;
use lanka_rent::marketplace::catalog::{District, ListingFilter, Vehicle};
use lanka_rent::marketplace::partners::{BusinessKind, PartnerRegistration};
use lanka_rent::marketplace::requests::{
    DurationUnit, RequestService, ServiceRequestDraft, SupplierNotifier,
};
use lanka_rent::marketplace::{login, LoginRequest};
use lanka_rent::shell::{AppShell, Dashboard, Screen, ServiceKind, View};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct VehiclesArgs {
    /// Category group: agricultural, construction or water-supply
    #[arg(long)]
    pub(crate) group: Option<String>,
    /// Supplier district, e.g. Colombo or "Nuwara Eliya"
    #[arg(long)]
    pub(crate) district: Option<String>,
    /// Vehicle CSV to list instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Vehicle CSV to use instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Category group the renter filters by
    #[arg(long, default_value = "agricultural")]
    pub(crate) group: String,
    /// District the renter filters by
    #[arg(long, default_value = "Colombo")]
    pub(crate) district: String,
}

pub(crate) fn run_vehicle_listing(args: VehiclesArgs) -> Result<(), AppError> {
    let VehiclesArgs {
        group,
        district,
        catalog_csv,
    } = args;

    let catalog = load_catalog(&CatalogConfig {
        vehicles_csv: catalog_csv,
    })?;
    let filter = ListingFilter::from_labels(group.as_deref(), district.as_deref());
    let vehicles = catalog.filter_vehicles(&filter);

    println!("{}", filter.caption(vehicles.len()));
    for vehicle in vehicles {
        print_vehicle(vehicle);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        catalog_csv,
        group,
        district,
    } = args;

    let catalog = load_catalog(&CatalogConfig {
        vehicles_csv: catalog_csv,
    })?;
    let notifier = Arc::new(RecordingSupplierNotifier::default());
    let state = marketplace_state(catalog, notifier.clone());
    let banners = BannerConfig::default();
    let mut shell = AppShell::new(&banners);
    let now = Utc::now();

    println!("Lanka Rent demo");
    println!("Screen: {}", describe(&shell.screen()));

    shell.open_auth();
    let sign_in = LoginRequest {
        name: Some("Kamala Silva".to_string()),
        email: "kamala@example.lk".to_string(),
        password: "demo-password".to_string(),
        phone: Some("0712345678".to_string()),
    };
    match login(sign_in, now) {
        Ok(user) => {
            println!("Signed in as {} <{}>", user.name, user.email);
            shell.login(user);
        }
        Err(err) => println!("  Sign-in rejected: {}", err),
    }

    shell.select_service(ServiceKind::Vehicles);
    let mut dashboard = Dashboard::default();
    dashboard.choose_service(ServiceKind::Vehicles);
    dashboard.set_category(Some(&group));
    dashboard.set_district(Some(&district));

    let results = dashboard.vehicle_results(&state.catalog);
    println!("\n{}", dashboard.caption(results.len()));
    for vehicle in &results {
        print_vehicle(vehicle);
    }

    let chosen = results.iter().find(|vehicle| vehicle.available).copied().cloned();
    match chosen {
        Some(vehicle) => {
            shell.select_vehicle(vehicle.clone());
            println!("\nScreen: {}", describe(&shell.screen()));
            shell.request_vehicle(vehicle, 2, DurationUnit::Days);
        }
        None => println!("\nNo available vehicle to request"),
    }

    submit_open_request(&mut shell, &state.requests, now);
    shell.expire_banner(now + banners.request_lifetime());

    shell.navigate(View::PartnerDashboard);
    println!("\nScreen: {}", describe(&shell.screen()));
    shell.open_registration();
    match state.partners.register(demo_registration(), now) {
        Ok(partner) => {
            println!(
                "Registered {} ({}), status {}",
                partner.business_name,
                partner.business_kind.label(),
                partner.status.label()
            );
            shell.complete_registration(partner, now);
        }
        Err(err) => {
            println!("  Registration rejected: {}", err);
            shell.close_registration();
        }
    }
    println!("Screen: {}", describe(&shell.screen()));
    print_banner(&shell);

    let events = notifier.events();
    if events.is_empty() {
        println!("\nSupplier notifications: none dispatched");
    } else {
        println!("\nSupplier notifications:");
        for event in events {
            println!(
                "- [{}] {} -> {}",
                event.template, event.request_id.0, event.supplier_name
            );
        }
    }

    shell.logout();
    println!("\nSigned out. Screen: {}", describe(&shell.screen()));
    Ok(())
}

/// Sends the open request dialog to the supplier. The success banner is raised only when the
/// request was accepted; a rejected request just closes the dialog.
fn submit_open_request<N>(shell: &mut AppShell, requests: &RequestService<N>, now: DateTime<Utc>)
where
    N: SupplierNotifier + 'static,
{
    let Some(modal) = shell.request_modal().cloned() else {
        return;
    };
    let user = shell.user();
    let draft = ServiceRequestDraft {
        item: modal.requested_item(),
        contact_name: user
            .map(|user| user.name.clone())
            .unwrap_or_else(|| "Guest".to_string()),
        contact_phone: user.map(|user| user.phone.clone()).unwrap_or_default(),
        delivery_location: Some("Maharagama".to_string()),
        message: Some("Needed for paddy field clearing".to_string()),
        user_id: user.map(|user| user.id.clone()),
    };
    match requests.submit(draft, now) {
        Ok(request) => {
            println!(
                "Request {} for {}: estimated LKR {} ({})",
                request.id.0, request.item_name, request.estimated_cost, request.supplier_name
            );
            shell.complete_request(now);
            print_banner(shell);
        }
        Err(err) => {
            println!("  Request rejected: {}", err);
            shell.close_request();
        }
    }
}

fn demo_registration() -> PartnerRegistration {
    PartnerRegistration {
        business_name: "Kelani Sand Suppliers".to_string(),
        contact_person: "Ruwan Fernando".to_string(),
        email: "ruwan@kelanisand.lk".to_string(),
        phone: "+94 11 291 4455".to_string(),
        district: District::Gampaha,
        address: "45 Kandy Road, Kelaniya".to_string(),
        business_kind: BusinessKind::MaterialSupplier,
        services: vec!["River sand".to_string(), "Filling soil".to_string()],
        description: None,
    }
}

fn print_vehicle(vehicle: &Vehicle) {
    let availability = if vehicle.available { "" } else { " [booked]" };
    println!(
        "- {} {} ({}, {}) LKR {}/hour, LKR {}/day{}",
        vehicle.id,
        vehicle.name,
        vehicle.category.label(),
        vehicle.supplier.district,
        vehicle.price_per_hour,
        vehicle.price_per_day,
        availability
    );
}

fn print_banner(shell: &AppShell) {
    if let (Some(message), Some(banner)) = (shell.banner_message(), shell.banner()) {
        println!("Banner until {}: {}", banner.expires_at.format("%H:%M:%S"), message);
    }
}

fn describe(screen: &Screen<'_>) -> String {
    match screen {
        Screen::Home => "home".to_string(),
        Screen::Services => "services".to_string(),
        Screen::Materials => "materials".to_string(),
        Screen::Vehicles => "vehicles".to_string(),
        Screen::VehicleDetail(vehicle) => format!("vehicle detail for {}", vehicle.name),
        Screen::About => "about".to_string(),
        Screen::Contact => "contact".to_string(),
        Screen::PartnerDashboard(partner) => {
            format!("partner dashboard for {}", partner.business_name)
        }
        Screen::GuestPartnerInvite => "partner invitation (not registered yet)".to_string(),
    }
}
