use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Airline, Airport};

/// Index of a vertex inside the network arena.
pub type AirportId = usize;

/// Directed route edge from one airport to another.
///
/// At most one edge exists per ordered (source, destination) pair; every
/// flight record on the same pair lands in the edge's airline set instead of
/// creating a parallel edge.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEdge {
    pub target: AirportId,
    pub distance_km: f64,
    pub airlines: BTreeSet<Airline>,
}

/// A vertex of the network: one airport plus its outgoing routes and the
/// persistent traffic counters finalized after the build phase.
#[derive(Debug, Clone)]
pub struct Vertex {
    airport: Airport,
    edges: Vec<RouteEdge>,
    flights_to: u32,
    flights_from: u32,
    in_degree: u32,
    out_degree: u32,
}

impl Vertex {
    fn new(airport: Airport) -> Self {
        Self {
            airport,
            edges: Vec::new(),
            flights_to: 0,
            flights_from: 0,
            in_degree: 0,
            out_degree: 0,
        }
    }

    pub fn airport(&self) -> &Airport {
        &self.airport
    }

    /// Outgoing routes in insertion order.
    pub fn routes(&self) -> &[RouteEdge] {
        &self.edges
    }

    /// Number of individual inbound flights recorded for this airport.
    pub fn flights_to(&self) -> u32 {
        self.flights_to
    }

    /// Number of individual outbound flights recorded for this airport.
    pub fn flights_from(&self) -> u32 {
        self.flights_from
    }

    /// Number of distinct inbound routes, valid after [`Network::finalize_degrees`].
    pub fn in_degree(&self) -> u32 {
        self.in_degree
    }

    /// Number of distinct outbound routes, valid after [`Network::finalize_degrees`].
    pub fn out_degree(&self) -> u32 {
        self.out_degree
    }
}

/// Directed, airline-labeled airport graph.
///
/// Vertices live in a dense arena addressed by [`AirportId`]; edges store the
/// target's index. The network is built once, finalized, and then only read
/// by the query layer.
#[derive(Debug, Clone, Default)]
pub struct Network {
    vertices: Vec<Vertex>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in arena order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex by id, or `None` when the id is out of range.
    pub fn get(&self, id: AirportId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub(crate) fn vertex(&self, id: AirportId) -> &Vertex {
        &self.vertices[id]
    }

    /// Find an airport by code with a linear, case-insensitive scan.
    pub fn find(&self, code: &str) -> Option<AirportId> {
        self.vertices
            .iter()
            .position(|vertex| vertex.airport.code.eq_ignore_ascii_case(code))
    }

    /// Insert a new airport, rejecting duplicate codes.
    pub fn add_airport(&mut self, airport: Airport) -> Result<AirportId> {
        if self.find(&airport.code).is_some() {
            return Err(Error::DuplicateAirport {
                code: airport.code,
            });
        }
        self.vertices.push(Vertex::new(airport));
        Ok(self.vertices.len() - 1)
    }

    /// Insert a directed route between two existing airports.
    pub fn add_route(&mut self, source: &str, destination: &str, distance_km: f64) -> Result<()> {
        let from = self.require(source)?;
        let to = self.require(destination)?;
        self.vertices[from].edges.push(RouteEdge {
            target: to,
            distance_km,
            airlines: BTreeSet::new(),
        });
        Ok(())
    }

    /// Record one flight on a route, creating the route on first sight.
    ///
    /// The edge's distance is computed once from the endpoint coordinates;
    /// repeated records on the same (source, destination) pair merge into the
    /// existing edge's airline set. Flight counters on both endpoints are
    /// incremented per record.
    pub fn record_flight(&mut self, source: &str, destination: &str, airline: Airline) -> Result<()> {
        let from = self.require(source)?;
        let to = self.require(destination)?;

        match self.vertices[from].edges.iter_mut().find(|e| e.target == to) {
            Some(edge) => {
                edge.airlines.insert(airline);
            }
            None => {
                let distance_km = self.vertices[from]
                    .airport
                    .distance_to(&self.vertices[to].airport.location);
                let mut airlines = BTreeSet::new();
                airlines.insert(airline);
                self.vertices[from].edges.push(RouteEdge {
                    target: to,
                    distance_km,
                    airlines,
                });
            }
        }

        self.vertices[from].flights_from += 1;
        self.vertices[to].flights_to += 1;
        Ok(())
    }

    /// Remove an airport and every route pointing at it.
    ///
    /// Arena ids above the removed slot shift down by one so ids stay dense;
    /// callers holding ids across a removal must re-resolve them. Degree
    /// counters are not touched, re-run [`Network::finalize_degrees`] after
    /// the build phase settles.
    pub fn remove_airport(&mut self, code: &str) -> Result<()> {
        let removed = self.require(code)?;
        self.vertices.remove(removed);
        let mut dropped_edges = 0usize;
        for vertex in &mut self.vertices {
            let before = vertex.edges.len();
            vertex.edges.retain(|edge| edge.target != removed);
            dropped_edges += before - vertex.edges.len();
            for edge in &mut vertex.edges {
                if edge.target > removed {
                    edge.target -= 1;
                }
            }
        }
        debug!(code, dropped_edges, "removed airport and inbound routes");
        Ok(())
    }

    /// Remove the direct route between two airports.
    pub fn remove_route(&mut self, source: &str, destination: &str) -> Result<()> {
        let from = self.require(source)?;
        let to = self.require(destination)?;
        let edges = &mut self.vertices[from].edges;
        match edges.iter().position(|edge| edge.target == to) {
            Some(index) => {
                edges.remove(index);
                Ok(())
            }
            None => Err(Error::RouteNotFound {
                from: source.to_string(),
                to: destination.to_string(),
            }),
        }
    }

    /// Bulk pass computing in-degree and out-degree for every vertex from the
    /// current edge lists. Run once after all routes are inserted.
    pub fn finalize_degrees(&mut self) {
        for vertex in &mut self.vertices {
            vertex.in_degree = 0;
            vertex.out_degree = vertex.edges.len() as u32;
        }

        let mut inbound = vec![0u32; self.vertices.len()];
        for vertex in &self.vertices {
            for edge in &vertex.edges {
                inbound[edge.target] += 1;
            }
        }
        for (vertex, count) in self.vertices.iter_mut().zip(inbound) {
            vertex.in_degree = count;
        }
    }

    fn require(&self, code: &str) -> Result<AirportId> {
        self.find(code).ok_or_else(|| Error::UnknownAirport {
            code: code.to_string(),
        })
    }
}
