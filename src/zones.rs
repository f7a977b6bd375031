//! Static delivery-zone reference data.
//!
//! A single fixed warehouse (Barrackpore, West Bengal) ships to a closed
//! table of Indian cities, each with a road distance and a transit estimate in
//! days. Lookup is an exact, case-sensitive string match against the city
//! name. Shipping addresses are free text, so most unrecognized input lands
//! on the 5-day fallback zone. That is the intended behavior, not an error:
//! the table is configuration, not geocoding.

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

/// A destination city's distance and transit estimate from the warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub distance_km: u32,
    pub transit_days: u32,
    pub coords: Option<Coords>,
}

impl Zone {
    /// The zone applied when a destination city is not in the table.
    pub fn fallback() -> Self {
        Self {
            distance_km: 0,
            transit_days: DEFAULT_TRANSIT_DAYS,
            coords: None,
        }
    }
}

/// Transit days assumed for cities not present in [`ZONES`].
pub const DEFAULT_TRANSIT_DAYS: u32 = 5;

/// The single warehouse every order ships from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warehouse {
    pub city: &'static str,
    pub state: &'static str,
    pub country: &'static str,
    pub pincode: &'static str,
    pub coords: Coords,
}

pub const WAREHOUSE: Warehouse = Warehouse {
    city: "Barrackpore",
    state: "West Bengal",
    country: "India",
    pincode: "700112",
    coords: Coords { lat: 22.7646, lng: 88.2632 },
};

const fn zone(distance_km: u32, transit_days: u32, lat: f64, lng: f64) -> Zone {
    Zone {
        distance_km,
        transit_days,
        coords: Some(Coords { lat, lng }),
    }
}

/// Destination table, keyed by exact city name.
pub const ZONES: &[(&str, Zone)] = &[
    ("Kolkata", zone(20, 1, 22.5726, 88.3639)),
    ("Howrah", zone(35, 1, 22.5958, 88.2637)),
    ("Hooghly", zone(45, 2, 22.8892, 88.4025)),
    ("Durgapur", zone(180, 3, 23.1815, 87.3089)),
    ("Siliguri", zone(600, 5, 26.7271, 88.3953)),
    ("Darjeeling", zone(700, 6, 27.0410, 88.2663)),
    ("Assam", zone(800, 7, 26.2006, 92.9376)),
    ("Bangalore", zone(1800, 6, 12.9716, 77.5946)),
    ("Mumbai", zone(1950, 5, 19.0760, 72.8777)),
    ("Delhi", zone(1450, 4, 28.7041, 77.1025)),
    ("Chennai", zone(1900, 7, 13.0827, 80.2707)),
    ("Hyderabad", zone(1300, 5, 17.3850, 78.4867)),
];

/// Exact-match lookup against the zone table.
pub fn lookup(city: &str) -> Option<&'static Zone> {
    ZONES.iter().find(|(name, _)| *name == city).map(|(_, z)| z)
}

/// Lookup that falls back to [`Zone::fallback`] for unknown cities.
pub fn resolve(city: &str) -> Zone {
    lookup(city).cloned().unwrap_or_else(Zone::fallback)
}
