use serde::{Deserialize, Serialize};

use super::state::ServiceKind;
use crate::marketplace::accounts::User;
use crate::marketplace::catalog::{Catalog, ListingFilter, MaterialFilter, MaterialItem, Vehicle};

/// Signed-in landing page: pick a service, then narrow the listing by category and district.
///
/// Labels are stored as the visitor picked them; parsing happens when a filter is built, so an
/// unrecognized label narrows the listing to nothing instead of being dropped. Vehicles and
/// materials use different category vocabularies, so each service keeps its own selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub service: Option<ServiceKind>,
    pub vehicle_group: Option<String>,
    pub material_category: Option<String>,
    pub district: Option<String>,
}

impl Dashboard {
    pub fn welcome(user: &User) -> String {
        format!("Welcome, {}!", user.name)
    }

    pub fn choose_service(&mut self, service: ServiceKind) {
        self.service = Some(service);
    }

    /// Back to the service picker. Filter choices survive.
    pub fn back(&mut self) {
        self.service = None;
    }

    /// Category selection for the chosen service. Ignored on the service picker.
    pub fn set_category(&mut self, label: Option<&str>) {
        match self.service {
            Some(ServiceKind::Vehicles) => self.set_vehicle_group(label),
            Some(ServiceKind::Materials) => self.set_material_category(label),
            None => {}
        }
    }

    pub fn set_vehicle_group(&mut self, label: Option<&str>) {
        self.vehicle_group = label.map(str::to_string);
    }

    pub fn set_material_category(&mut self, label: Option<&str>) {
        self.material_category = label.map(str::to_string);
    }

    pub fn set_district(&mut self, label: Option<&str>) {
        self.district = label.map(str::to_string);
    }

    pub fn filter(&self) -> ListingFilter {
        ListingFilter::from_labels(self.vehicle_group.as_deref(), self.district.as_deref())
    }

    pub fn material_filter(&self) -> MaterialFilter {
        MaterialFilter::from_labels(self.material_category.as_deref(), self.district.as_deref())
    }

    pub fn vehicle_results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Vehicle> {
        catalog.filter_vehicles(&self.filter())
    }

    pub fn material_results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MaterialItem> {
        catalog.filter_materials(&self.material_filter())
    }

    pub fn caption(&self, count: usize) -> String {
        self.filter().caption(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_keeps_filters() {
        let mut dashboard = Dashboard::default();
        dashboard.choose_service(ServiceKind::Vehicles);
        dashboard.set_category(Some("agri"));
        dashboard.back();
        assert_eq!(dashboard.service, None);
        assert_eq!(dashboard.vehicle_group.as_deref(), Some("agri"));
    }

    #[test]
    fn switching_service_keeps_category_vocabularies_apart() {
        let catalog = Catalog::seed();
        let mut dashboard = Dashboard::default();
        dashboard.choose_service(ServiceKind::Vehicles);
        dashboard.set_category(Some("agri"));
        dashboard.back();
        dashboard.choose_service(ServiceKind::Materials);

        assert_eq!(
            dashboard.material_results(&catalog).len(),
            catalog.materials().len()
        );

        dashboard.set_category(Some("soil"));
        dashboard.back();
        dashboard.choose_service(ServiceKind::Vehicles);
        assert_eq!(dashboard.vehicle_group.as_deref(), Some("agri"));
        assert_eq!(dashboard.material_category.as_deref(), Some("soil"));
        assert_eq!(dashboard.vehicle_results(&catalog).len(), 3);
    }

    #[test]
    fn category_is_ignored_on_service_picker() {
        let mut dashboard = Dashboard::default();
        dashboard.set_category(Some("sand"));
        assert_eq!(dashboard, Dashboard::default());
    }

    #[test]
    fn vehicle_results_follow_labels() {
        let catalog = Catalog::seed();
        let mut dashboard = Dashboard::default();
        dashboard.choose_service(ServiceKind::Vehicles);
        dashboard.set_category(Some("agri"));
        dashboard.set_district(Some("Colombo"));

        let results = dashboard.vehicle_results(&catalog);
        let ids: Vec<&str> = results.iter().map(|vehicle| vehicle.id.0.as_str()).collect();
        assert_eq!(ids, vec!["v-001"]);
        assert_eq!(
            dashboard.caption(results.len()),
            "Showing 1 vehicles in Agricultural category in Colombo district"
        );

        dashboard.set_category(None);
        assert_eq!(dashboard.vehicle_results(&catalog).len(), 2);
    }

    #[test]
    fn material_results_use_material_categories() {
        let catalog = Catalog::seed();
        let mut dashboard = Dashboard::default();
        dashboard.choose_service(ServiceKind::Materials);
        dashboard.set_category(Some("sand"));
        assert_eq!(dashboard.material_results(&catalog).len(), 2);

        dashboard.set_district(Some("Galle"));
        assert_eq!(dashboard.material_results(&catalog).len(), 1);
    }

    #[test]
    fn unset_dashboard_lists_everything() {
        let catalog = Catalog::seed();
        let dashboard = Dashboard::default();
        assert_eq!(dashboard.vehicle_results(&catalog).len(), catalog.vehicles().len());
        assert_eq!(dashboard.caption(8), "Showing 8 vehicles");
    }
}
