use serde::Serialize;

use crate::model::{Airport, Coordinates};
use crate::network::AirportId;

use super::{normalize, QueryEngine};

/// Airport attribute an attribute search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AirportField {
    Name,
    City,
    Country,
}

impl AirportField {
    fn of<'a>(&self, airport: &'a Airport) -> &'a str {
        match self {
            AirportField::Name => &airport.name,
            AirportField::City => &airport.city,
            AirportField::Country => &airport.country,
        }
    }
}

impl QueryEngine<'_> {
    /// Airports whose chosen attribute contains the query as a substring,
    /// compared case-insensitively with whitespace stripped on both sides.
    /// Results are sorted by airport name, case-insensitively.
    pub fn search_airports(&self, query: &str, field: AirportField) -> Vec<AirportId> {
        let needle = normalize(query);
        let mut matches: Vec<AirportId> = (0..self.network.vertex_count())
            .filter(|&id| {
                normalize(field.of(self.network.vertex(id).airport())).contains(&needle)
            })
            .collect();
        self.sort_by_name(&mut matches);
        matches
    }

    /// Airports tied at the minimum great-circle distance from a coordinate,
    /// sorted by airport name.
    pub fn nearest_airports(&self, location: Coordinates) -> Vec<AirportId> {
        let mut nearest: Vec<AirportId> = Vec::new();
        let mut minimum = f64::MAX;

        for (id, vertex) in self.network.vertices().iter().enumerate() {
            let distance = vertex.airport().distance_to(&location);
            if distance < minimum {
                minimum = distance;
                nearest.clear();
                nearest.push(id);
            } else if distance == minimum {
                nearest.push(id);
            }
        }

        self.sort_by_name(&mut nearest);
        nearest
    }

    fn sort_by_name(&self, airports: &mut [AirportId]) {
        airports.sort_by_key(|&id| self.network.vertex(id).airport().name.to_lowercase());
    }
}
