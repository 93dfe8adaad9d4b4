use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::{Airline, Airport};
use crate::network::AirportId;
use crate::traverse;

use super::QueryEngine;

/// One row of a traffic ranking: an airport and its combined inbound plus
/// outbound flight count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficEntry {
    pub airport: Airport,
    pub flights: u32,
}

impl QueryEngine<'_> {
    /// Number of airports in the network.
    pub fn airport_count(&self) -> usize {
        self.network.vertex_count()
    }

    /// Total number of individual flights, summed over inbound counters.
    pub fn total_flights(&self) -> u32 {
        self.network
            .vertices()
            .iter()
            .map(|vertex| vertex.flights_to())
            .sum()
    }

    /// Total number of distinct flight routes, summed over out-degrees.
    pub fn total_routes(&self) -> u32 {
        self.network
            .vertices()
            .iter()
            .map(|vertex| vertex.out_degree())
            .sum()
    }

    /// Individual flights leaving an airport.
    pub fn flights_from(&self, airport: AirportId) -> u32 {
        self.network
            .get(airport)
            .map(|vertex| vertex.flights_from())
            .unwrap_or(0)
    }

    /// Individual flights arriving at an airport.
    pub fn flights_to(&self, airport: AirportId) -> u32 {
        self.network
            .get(airport)
            .map(|vertex| vertex.flights_to())
            .unwrap_or(0)
    }

    /// Number of distinct airlines operating out of an airport.
    pub fn airlines_out_of(&self, airport: AirportId) -> usize {
        let Some(vertex) = self.network.get(airport) else {
            return 0;
        };
        let mut airlines: BTreeSet<&Airline> = BTreeSet::new();
        for edge in vertex.routes() {
            airlines.extend(edge.airlines.iter());
        }
        airlines.len()
    }

    /// Number of distinct countries reachable on a direct flight from an airport.
    pub fn countries_served_from(&self, airport: AirportId) -> usize {
        let Some(vertex) = self.network.get(airport) else {
            return 0;
        };
        let countries: BTreeSet<&str> = vertex
            .routes()
            .iter()
            .map(|edge| self.network.vertex(edge.target).airport().country.as_str())
            .collect();
        countries.len()
    }

    /// Number of distinct countries reachable on a direct flight from any
    /// airport of the given city.
    pub fn countries_served_from_city(&self, city: &str, country: &str) -> usize {
        let mut countries: BTreeSet<&str> = BTreeSet::new();
        for airport in self.airports_in_city(city, country) {
            for edge in self.network.vertex(airport).routes() {
                countries.insert(self.network.vertex(edge.target).airport().country.as_str());
            }
        }
        countries.len()
    }

    /// Outbound flights aggregated per (city, country).
    ///
    /// The country key disambiguates same-named cities.
    pub fn flights_per_city(&self) -> BTreeMap<(String, String), u32> {
        let mut per_city: BTreeMap<(String, String), u32> = BTreeMap::new();
        traverse::dfs_each(self.network, |id| {
            let vertex = self.network.vertex(id);
            let key = (
                vertex.airport().city.clone(),
                vertex.airport().country.clone(),
            );
            *per_city.entry(key).or_insert(0) += vertex.flights_from();
        });
        per_city
    }

    /// Route occurrences aggregated per airline.
    ///
    /// Each outgoing edge contributes one count per airline operating it.
    pub fn flights_per_airline(&self) -> BTreeMap<Airline, u32> {
        let mut per_airline: BTreeMap<Airline, u32> = BTreeMap::new();
        traverse::dfs_each(self.network, |id| {
            for edge in self.network.vertex(id).routes() {
                for airline in &edge.airlines {
                    *per_airline.entry(airline.clone()).or_insert(0) += 1;
                }
            }
        });
        per_airline
    }

    /// All airports ranked by combined inbound plus outbound flights,
    /// descending.
    pub fn traffic_ranking(&self) -> Vec<TrafficEntry> {
        let mut ranking: Vec<TrafficEntry> = self
            .network
            .vertices()
            .iter()
            .map(|vertex| TrafficEntry {
                airport: vertex.airport().clone(),
                flights: vertex.flights_to() + vertex.flights_from(),
            })
            .collect();
        ranking.sort_by(|a, b| b.flights.cmp(&a.flights));
        ranking
    }

    /// The `k` highest-traffic airports, keeping every airport that ties the
    /// value at the cutoff rather than truncating strictly at `k`.
    pub fn top_traffic(&self, k: usize) -> Vec<TrafficEntry> {
        let ranking = self.traffic_ranking();
        let mut top = Vec::new();
        let mut last_flights = 0;
        for (index, entry) in ranking.into_iter().enumerate() {
            if index < k || entry.flights == last_flights {
                last_flights = entry.flights;
                top.push(entry);
            } else {
                break;
            }
        }
        top
    }
}
