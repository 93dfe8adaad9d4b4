//! SkyRoute library entry points.
//!
//! This crate models a network of airports and flight routes as a directed,
//! airline-labeled graph and answers structural and routing queries over it:
//! traffic statistics, bounded-hop reachability, essential-airport detection,
//! network diameter with witness paths, and multi-leg itinerary composition.
//! Higher-level consumers (interfaces, exporters) should only depend on the
//! types and functions exported here instead of reimplementing behavior.
//!
//! The network and the airline catalog are built once, up front, and then
//! queried through the read-only [`QueryEngine`]; no query performs I/O.

#![deny(warnings)]

pub mod error;
pub mod itinerary;
pub mod model;
pub mod network;
pub mod query;
pub mod traverse;

pub use error::{Error, Result};
pub use itinerary::{plan_trips, AirlineMode, Itinerary, TripRequest};
pub use model::{Airline, AirlineCatalog, Airport, Coordinates};
pub use network::{AirportId, Network, RouteEdge, Vertex};
pub use query::{AirportField, NetworkDiameter, QueryEngine, TrafficEntry};
