mod common;

use common::{airline, airport, build_network};
use skyroute_lib::{Error, Network};

fn iberia_airports() -> Vec<skyroute_lib::Airport> {
    vec![
        airport("OPO", "Francisco Sa Carneiro", "Porto", "Portugal", 41.2481, -8.6814),
        airport("LIS", "Humberto Delgado", "Lisbon", "Portugal", 38.7813, -9.1359),
        airport("MAD", "Adolfo Suarez Barajas", "Madrid", "Spain", 40.4719, -3.5626),
    ]
}

#[test]
fn duplicate_airport_is_rejected() {
    let mut network = Network::new();
    network
        .add_airport(airport("OPO", "Francisco Sa Carneiro", "Porto", "Portugal", 41.2, -8.7))
        .expect("first insert succeeds");
    let err = network
        .add_airport(airport("OPO", "another", "Porto", "Portugal", 41.2, -8.7))
        .expect_err("duplicate code");
    assert!(matches!(err, Error::DuplicateAirport { code } if code == "OPO"));
}

#[test]
fn routes_require_existing_endpoints() {
    let mut network = Network::new();
    network
        .add_airport(airport("OPO", "Francisco Sa Carneiro", "Porto", "Portugal", 41.2, -8.7))
        .expect("insert succeeds");

    let err = network
        .add_route("OPO", "XXX", 100.0)
        .expect_err("unknown destination");
    assert!(matches!(err, Error::UnknownAirport { code } if code == "XXX"));

    let err = network
        .record_flight("YYY", "OPO", airline("TP"))
        .expect_err("unknown source");
    assert!(matches!(err, Error::UnknownAirport { code } if code == "YYY"));
}

#[test]
fn repeated_flight_records_merge_into_one_route() {
    let (network, _) = build_network(
        iberia_airports(),
        &[("OPO", "LIS", "TP"), ("OPO", "LIS", "IB")],
    );

    let opo = network.find("OPO").expect("airport exists");
    let vertex = network.get(opo).expect("vertex exists");
    assert_eq!(vertex.routes().len(), 1, "one edge per (source, destination)");

    let route = &vertex.routes()[0];
    let codes: Vec<_> = route.airlines.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["IB", "TP"], "airline set merged, ordered by code");
    assert!(route.distance_km > 0.0);

    assert_eq!(vertex.flights_from(), 2, "each record counts as a flight");
    let lis = network.find("LIS").expect("airport exists");
    assert_eq!(network.get(lis).expect("vertex exists").flights_to(), 2);
}

#[test]
fn degree_totals_match_route_count() {
    let (network, _) = build_network(
        iberia_airports(),
        &[
            ("OPO", "LIS", "TP"),
            ("LIS", "MAD", "TP"),
            ("MAD", "OPO", "IB"),
            ("OPO", "MAD", "IB"),
        ],
    );

    let route_count: usize = network
        .vertices()
        .iter()
        .map(|vertex| vertex.routes().len())
        .sum();
    let out_total: u32 = network.vertices().iter().map(|v| v.out_degree()).sum();
    let in_total: u32 = network.vertices().iter().map(|v| v.in_degree()).sum();

    assert_eq!(route_count, 4);
    assert_eq!(out_total as usize, route_count);
    assert_eq!(in_total as usize, route_count);
}

#[test]
fn lookup_is_case_insensitive() {
    let (network, _) = build_network(iberia_airports(), &[]);
    assert_eq!(network.find("opo"), network.find("OPO"));
    assert!(network.find("opo").is_some());
    assert!(network.find("ZZZ").is_none());
}

#[test]
fn removing_an_airport_cascades_to_inbound_routes() {
    let (mut network, _) = build_network(
        iberia_airports(),
        &[
            ("OPO", "LIS", "TP"),
            ("MAD", "LIS", "IB"),
            ("LIS", "OPO", "TP"),
            ("OPO", "MAD", "TP"),
        ],
    );

    network.remove_airport("LIS").expect("airport exists");
    assert!(network.find("LIS").is_none());
    assert_eq!(network.vertex_count(), 2);

    // The only surviving route is OPO -> MAD, with its target re-resolved.
    let opo = network.find("OPO").expect("airport exists");
    let mad = network.find("MAD").expect("airport exists");
    let routes = network.get(opo).expect("vertex exists").routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].target, mad);
    assert!(network.get(mad).expect("vertex exists").routes().is_empty());
}

#[test]
fn removing_routes() {
    let (mut network, _) = build_network(iberia_airports(), &[("OPO", "LIS", "TP")]);

    let err = network
        .remove_route("LIS", "OPO")
        .expect_err("no reverse route");
    assert!(matches!(err, Error::RouteNotFound { .. }));

    network.remove_route("OPO", "LIS").expect("route exists");
    let opo = network.find("OPO").expect("airport exists");
    assert!(network.get(opo).expect("vertex exists").routes().is_empty());
}
