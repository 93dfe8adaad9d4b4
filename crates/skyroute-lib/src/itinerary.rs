//! Multi-leg itinerary composition on top of the query layer.
//!
//! A trip runs from any of several candidate source airports to any of
//! several candidate destination airports (a city selection expands to all
//! of the city's airports), optionally passing through an ordered list of
//! mandatory lay-over airports. Candidate paths are minimum-hop shortest
//! paths per segment; across all candidate pairs only the itineraries with
//! the globally fewest lay-overs survive. Callers typically sort the result
//! by ascending total distance.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::Airline;
use crate::network::AirportId;
use crate::query::QueryEngine;

/// Airline-consistency requirement for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AirlineMode {
    /// Mixed carriers are acceptable; itineraries carry an empty airline set.
    #[default]
    Any,
    /// A single airline must operate every leg; itineraries carry the set of
    /// carriers able to fly the whole trip.
    Same,
}

/// Caller-held trip selection handed to [`plan_trips`].
#[derive(Debug, Clone, Default)]
pub struct TripRequest {
    pub sources: Vec<AirportId>,
    pub destinations: Vec<AirportId>,
    /// Mandatory lay-over airports, in visiting order. Empty for a direct
    /// source-to-destination search.
    pub layovers: Vec<AirportId>,
    pub mode: AirlineMode,
}

impl TripRequest {
    /// Convenience constructor for a single-pair, any-airline trip.
    pub fn between(source: AirportId, destination: AirportId) -> Self {
        Self {
            sources: vec![source],
            destinations: vec![destination],
            layovers: Vec::new(),
            mode: AirlineMode::Any,
        }
    }

    pub fn with_mode(mut self, mode: AirlineMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_layovers(mut self, layovers: Vec<AirportId>) -> Self {
        self.layovers = layovers;
        self
    }
}

/// One composed trip: the airports flown through, the carriers able to fly
/// all of it (empty in any-airline mode), and the summed leg distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub airlines: BTreeSet<Airline>,
    pub stops: Vec<AirportId>,
    pub distance_km: f64,
}

impl Itinerary {
    /// Number of intermediate lay-overs (stops minus the two endpoints).
    pub fn layover_count(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }

    /// Number of flights taken.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

/// Compose the best itineraries for a trip request.
///
/// Returns every itinerary with the globally minimum lay-over count across
/// all (source, destination) candidate pairs, or an empty list when no pair
/// is connected (or, in same-airline mode, no single carrier covers a whole
/// path).
pub fn plan_trips(queries: &QueryEngine<'_>, request: &TripRequest) -> Vec<Itinerary> {
    let mut itineraries: Vec<Itinerary> = Vec::new();
    let mut fewest_layovers = usize::MAX;

    for &source in &request.sources {
        for &destination in &request.destinations {
            for stops in candidate_paths(queries, source, destination, &request.layovers) {
                let airlines = match request.mode {
                    AirlineMode::Same => match shared_airlines(queries, &stops) {
                        Some(airlines) => airlines,
                        None => continue,
                    },
                    AirlineMode::Any => BTreeSet::new(),
                };

                let layovers = stops.len().saturating_sub(2);
                if layovers < fewest_layovers {
                    fewest_layovers = layovers;
                    itineraries.clear();
                }
                if layovers == fewest_layovers {
                    let distance_km = total_distance(queries, &stops);
                    itineraries.push(Itinerary {
                        airlines,
                        stops,
                        distance_km,
                    });
                }
            }
        }
    }

    itineraries
}

/// Candidate paths for one (source, destination) pair: plain shortest paths,
/// or per-segment shortest paths stitched through the mandatory lay-overs.
fn candidate_paths(
    queries: &QueryEngine<'_>,
    source: AirportId,
    destination: AirportId,
    layovers: &[AirportId],
) -> Vec<Vec<AirportId>> {
    let Some(&first) = layovers.first() else {
        return queries.shortest_paths(source, destination);
    };

    let mut combined = queries.shortest_paths(source, first);
    for pair in layovers.windows(2) {
        let segment = queries.shortest_paths(pair[0], pair[1]);
        combined = cross_join(&combined, &segment);
    }
    let last = layovers[layovers.len() - 1];
    let closing = queries.shortest_paths(last, destination);
    cross_join(&combined, &closing)
}

/// Every concatenation of a path from `heads` with a path from `tails`.
fn cross_join(heads: &[Vec<AirportId>], tails: &[Vec<AirportId>]) -> Vec<Vec<AirportId>> {
    let mut joined = Vec::new();
    for head in heads {
        for tail in tails {
            if let Some(path) = join_paths(head, tail) {
                joined.push(path);
            }
        }
    }
    joined
}

/// Concatenate two path segments sharing their joining airport.
///
/// Returns `None` when either segment is empty or the endpoints do not
/// coincide; segment lookups keyed on the same lay-over make a mismatch
/// impossible in practice.
fn join_paths(first: &[AirportId], second: &[AirportId]) -> Option<Vec<AirportId>> {
    if first.is_empty() || second.is_empty() {
        return None;
    }
    if first.last() != second.first() {
        return None;
    }
    let mut merged = first.to_vec();
    merged.extend_from_slice(&second[1..]);
    Some(merged)
}

/// Carriers able to operate every leg of a path: the running intersection of
/// per-leg airline sets. `None` as soon as the intersection goes empty.
fn shared_airlines(queries: &QueryEngine<'_>, stops: &[AirportId]) -> Option<BTreeSet<Airline>> {
    let mut shared: BTreeSet<Airline> = BTreeSet::new();
    for (index, leg) in stops.windows(2).enumerate() {
        let operating = queries.airlines_between(leg[0], leg[1]);
        shared = if index == 0 {
            operating
        } else {
            shared.intersection(&operating).cloned().collect()
        };
        if shared.is_empty() {
            return None;
        }
    }
    Some(shared)
}

fn total_distance(queries: &QueryEngine<'_>, stops: &[AirportId]) -> f64 {
    stops
        .windows(2)
        .map(|leg| queries.distance_between(leg[0], leg[1]))
        .sum()
}
