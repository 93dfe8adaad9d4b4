// Shared fixture helpers for `skyroute-lib` integration tests.
#![allow(dead_code)]

use skyroute_lib::{Airline, AirlineCatalog, Airport, Coordinates, Network};

pub fn airport(
    code: &str,
    name: &str,
    city: &str,
    country: &str,
    latitude: f64,
    longitude: f64,
) -> Airport {
    Airport::new(
        code,
        name,
        city,
        country,
        Coordinates {
            latitude,
            longitude,
        },
    )
}

pub fn airline(code: &str) -> Airline {
    Airline::new(code, format!("{code} Airways"), "_", "Testland")
}

/// Build a finalized network from a list of airports and flight records
/// (source code, destination code, airline code), plus the catalog of every
/// airline seen in the records.
pub fn build_network(
    airports: Vec<Airport>,
    flights: &[(&str, &str, &str)],
) -> (Network, AirlineCatalog) {
    let mut network = Network::new();
    for entry in airports {
        network.add_airport(entry).expect("fixture airports are unique");
    }

    let mut catalog = AirlineCatalog::new();
    for &(from, to, carrier) in flights {
        catalog.insert(airline(carrier));
        network
            .record_flight(from, to, airline(carrier))
            .expect("fixture flight endpoints exist");
    }

    network.finalize_degrees();
    (network, catalog)
}
