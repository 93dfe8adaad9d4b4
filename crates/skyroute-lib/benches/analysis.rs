use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use skyroute_lib::{
    plan_trips, Airline, AirlineCatalog, Airport, Coordinates, Network, QueryEngine, TripRequest,
};
use std::hint::black_box;

const AIRPORTS: usize = 64;

static FIXTURE: Lazy<(Network, AirlineCatalog)> = Lazy::new(build_ring_network);

/// Ring of airports with chord routes, alternating between two carriers.
fn build_ring_network() -> (Network, AirlineCatalog) {
    let mut network = Network::new();
    for i in 0..AIRPORTS {
        let airport = Airport::new(
            format!("A{i:02}"),
            format!("Airport {i:02}"),
            format!("City {i:02}"),
            "Benchland",
            Coordinates {
                latitude: -30.0 + i as f64 * 0.9,
                longitude: -60.0 + (i as f64 * 3.7) % 120.0,
            },
        );
        network.add_airport(airport).expect("codes are unique");
    }

    let carriers = [
        Airline::new("TP", "TAP Air Portugal", "AIR PORTUGAL", "Portugal"),
        Airline::new("IB", "Iberia", "IBERIA", "Spain"),
    ];
    let mut catalog = AirlineCatalog::new();
    for carrier in &carriers {
        catalog.insert(carrier.clone());
    }

    for i in 0..AIRPORTS {
        let from = format!("A{i:02}");
        let ring = format!("A{:02}", (i + 1) % AIRPORTS);
        let chord = format!("A{:02}", (i + 5) % AIRPORTS);
        network
            .record_flight(&from, &ring, carriers[i % 2].clone())
            .expect("endpoints exist");
        network
            .record_flight(&from, &ring, carriers[(i + 1) % 2].clone())
            .expect("endpoints exist");
        network
            .record_flight(&from, &chord, carriers[i % 2].clone())
            .expect("endpoints exist");
    }
    network.finalize_degrees();

    (network, catalog)
}

fn benchmark_analysis(c: &mut Criterion) {
    let (network, catalog) = &*FIXTURE;
    let queries = QueryEngine::new(network, catalog);
    let start = network.find("A00").expect("fixture airport");
    let goal = network.find("A31").expect("fixture airport");

    c.bench_function("diameter_ring64", |b| {
        b.iter(|| {
            let result = queries.diameter();
            black_box((result.hops, result.paths.len()))
        });
    });

    c.bench_function("essential_airports_ring64", |b| {
        b.iter(|| black_box(queries.essential_airports().len()));
    });

    c.bench_function("shortest_paths_ring64", |b| {
        b.iter(|| black_box(queries.shortest_paths(start, goal).len()));
    });

    c.bench_function("plan_trips_ring64", |b| {
        let request = TripRequest::between(start, goal);
        b.iter(|| black_box(plan_trips(&queries, &request).len()));
    });
}

criterion_group!(benches, benchmark_analysis);
criterion_main!(benches);
