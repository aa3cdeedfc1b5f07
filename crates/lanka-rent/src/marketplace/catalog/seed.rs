//! Built-in listings used when no catalog export is configured.

use super::district::District;
use super::domain::{
    MaterialCategory, MaterialId, MaterialItem, Supplier, Vehicle, VehicleCategory, VehicleId,
};

fn supplier(name: &str, location: &str, district: District, rating: f32, jobs: u32) -> Supplier {
    Supplier {
        name: name.to_string(),
        location: location.to_string(),
        district,
        rating,
        completed_jobs: jobs,
    }
}

struct VehicleSeed {
    id: &'static str,
    name: &'static str,
    category: VehicleCategory,
    hourly: u32,
    daily: u32,
    available: bool,
    description: &'static str,
}

pub fn vehicles() -> Vec<Vehicle> {
    let seeds = [
        (
            VehicleSeed {
                id: "v-001",
                name: "JCB 3CX Backhoe Loader",
                category: VehicleCategory::Jcb,
                hourly: 4_500,
                daily: 32_000,
                available: true,
                description: "Backhoe loader for trenching, land clearing and paddy field work.",
            },
            supplier("Perera Heavy Machinery", "Maharagama", District::Colombo, 4.8, 156),
        ),
        (
            VehicleSeed {
                id: "v-002",
                name: "Komatsu PC200 Excavator",
                category: VehicleCategory::Excavator,
                hourly: 6_500,
                daily: 48_000,
                available: true,
                description: "20-tonne crawler excavator with operator.",
            },
            supplier("Hill Country Earthworks", "Peradeniya", District::Kandy, 4.6, 89),
        ),
        (
            VehicleSeed {
                id: "v-003",
                name: "Isuzu Tipper Truck",
                category: VehicleCategory::Tipper,
                hourly: 3_000,
                daily: 20_000,
                available: true,
                description: "10-cube tipper for sand, soil and metal transport.",
            },
            supplier("Silva Transport", "Negombo", District::Gampaha, 4.5, 210),
        ),
        (
            VehicleSeed {
                id: "v-004",
                name: "Tata Lorry 1613",
                category: VehicleCategory::Lorry,
                hourly: 2_500,
                daily: 17_500,
                available: false,
                description: "Flatbed lorry for bricks, blocks and general cargo.",
            },
            supplier("Perera Heavy Machinery", "Maharagama", District::Colombo, 4.8, 156),
        ),
        (
            VehicleSeed {
                id: "v-005",
                name: "XCMG 25 Ton Mobile Crane",
                category: VehicleCategory::Crane,
                hourly: 9_000,
                daily: 65_000,
                available: true,
                description: "Truck-mounted crane for steel and precast lifting.",
            },
            supplier("Southern Lift Services", "Galle Fort", District::Galle, 4.7, 64),
        ),
        (
            VehicleSeed {
                id: "v-006",
                name: "Concrete Mixer Truck",
                category: VehicleCategory::ConcreteMixer,
                hourly: 5_000,
                daily: 36_000,
                available: true,
                description: "6-cube transit mixer for site pours.",
            },
            supplier("Hill Country Earthworks", "Peradeniya", District::Kandy, 4.6, 89),
        ),
        (
            VehicleSeed {
                id: "v-007",
                name: "Water Bowser 4000L",
                category: VehicleCategory::Bowser,
                hourly: 2_000,
                daily: 12_000,
                available: true,
                description: "Drinking water and dust suppression deliveries.",
            },
            supplier("Northern Water Carriers", "Nallur", District::Jaffna, 4.4, 120),
        ),
        (
            VehicleSeed {
                id: "v-008",
                name: "Mini Excavator 3.5T",
                category: VehicleCategory::Excavator,
                hourly: 3_800,
                daily: 27_000,
                available: true,
                description: "Compact excavator for drains and home gardens.",
            },
            supplier("Rajarata Agro Machinery", "Kekirawa", District::Anuradhapura, 4.3, 45),
        ),
    ];

    seeds
        .into_iter()
        .map(|(seed, supplier)| Vehicle {
            id: VehicleId(seed.id.to_string()),
            name: seed.name.to_string(),
            category: seed.category,
            price_per_hour: seed.hourly,
            price_per_day: seed.daily,
            available: seed.available,
            description: seed.description.to_string(),
            image: format!("/images/vehicles/{}.jpg", seed.id),
            supplier,
        })
        .collect()
}

pub fn materials() -> Vec<MaterialItem> {
    let seeds = [
        (
            "m-001",
            "River Sand",
            MaterialCategory::Sand,
            18_500,
            "cube",
            supplier("Kelani Sand Suppliers", "Kelaniya", District::Gampaha, 4.6, 310),
        ),
        (
            "m-002",
            "Sea Sand (washed)",
            MaterialCategory::Sand,
            14_000,
            "cube",
            supplier("Southern Aggregates", "Ambalangoda", District::Galle, 4.2, 95),
        ),
        (
            "m-003",
            "Filling Soil",
            MaterialCategory::Soil,
            9_500,
            "cube",
            supplier("Hill Country Earthworks", "Peradeniya", District::Kandy, 4.6, 89),
        ),
        (
            "m-004",
            "Wire-cut Bricks",
            MaterialCategory::Bricks,
            32_000,
            "1000 bricks",
            supplier("Kurunegala Brick Works", "Wariyapola", District::Kurunegala, 4.5, 178),
        ),
        (
            "m-005",
            "Metal 3/4 Inch",
            MaterialCategory::Gravel,
            16_000,
            "cube",
            supplier("Perera Heavy Machinery", "Maharagama", District::Colombo, 4.8, 156),
        ),
    ];

    seeds
        .into_iter()
        .map(|(id, name, category, unit_price, unit, supplier)| MaterialItem {
            id: MaterialId(id.to_string()),
            name: name.to_string(),
            category,
            unit_price,
            unit: unit.to_string(),
            available: true,
            description: format!("{name} delivered by {}", supplier.name),
            image: format!("/images/materials/{id}.jpg"),
            supplier,
        })
        .collect()
}
