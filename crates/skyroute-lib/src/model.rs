use std::cmp::Ordering;
use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

/// Mean Earth radius in kilometres, used by the great-circle approximation.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Great-circle distance to another coordinate in kilometres (Haversine).
    pub fn distance_to(&self, other: &Self) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let lon2 = other.longitude.to_radians();

        let d_lat = lat2 - lat1;
        let d_lon = lon2 - lon1;

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// An airport in the network.
///
/// Identity is the IATA-style code alone; the remaining attributes are
/// descriptive and take no part in equality.
#[derive(Debug, Clone, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub location: Coordinates,
}

impl Airport {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        location: Coordinates,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            city: city.into(),
            country: country.into(),
            location,
        }
    }

    /// Great-circle distance from this airport to a coordinate, in kilometres.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        self.location.distance_to(other)
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Airport {}

/// An airline, identified by its carrier code.
///
/// Ordering and equality consider the code alone so airline sets iterate
/// deterministically by code.
#[derive(Debug, Clone, Serialize)]
pub struct Airline {
    pub code: String,
    pub name: String,
    pub callsign: String,
    pub country: String,
}

impl Airline {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        callsign: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            callsign: callsign.into(),
            country: country.into(),
        }
    }
}

impl PartialEq for Airline {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Airline {}

impl PartialOrd for Airline {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Airline {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

/// Catalog of known airlines, unique by carrier code.
///
/// Iteration order is ascending by code. Lookups normalize the queried code
/// to uppercase, so `tap` and `TAP` resolve to the same carrier.
#[derive(Debug, Clone, Default)]
pub struct AirlineCatalog {
    airlines: BTreeMap<String, Airline>,
}

impl AirlineCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an airline. Returns `false` when the code is already cataloged,
    /// leaving the existing entry untouched.
    pub fn insert(&mut self, airline: Airline) -> bool {
        match self.airlines.entry(airline.code.clone()) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(entry) => {
                entry.insert(airline);
                true
            }
        }
    }

    /// Look up an airline by carrier code, case-insensitively.
    pub fn find(&self, code: &str) -> Option<&Airline> {
        self.airlines.get(&code.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.airlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airlines.is_empty()
    }

    /// Iterate the cataloged airlines in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Airline> {
        self.airlines.values()
    }
}

impl FromIterator<Airline> for AirlineCatalog {
    fn from_iter<I: IntoIterator<Item = Airline>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for airline in iter {
            catalog.insert(airline);
        }
        catalog
    }
}
