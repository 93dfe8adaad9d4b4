use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::model::Airport;
use crate::network::AirportId;
use crate::traverse;

use super::{normalize, QueryEngine};

impl QueryEngine<'_> {
    /// All airports whose normalized (city, country) match the given pair.
    pub fn airports_in_city(&self, city: &str, country: &str) -> Vec<AirportId> {
        let city = normalize(city);
        let country = normalize(country);
        let mut matches = Vec::new();
        traverse::dfs_each(self.network, |id| {
            let airport = self.network.vertex(id).airport();
            if normalize(&airport.city) == city && normalize(&airport.country) == country {
                matches.push(id);
            }
        });
        matches
    }

    /// Number of airports reachable from a source through any number of
    /// flights. The source itself only counts when a cycle through another
    /// airport leads back to it.
    pub fn reachable_airports(&self, source: AirportId) -> usize {
        let mut count = 0usize;
        self.each_destination(source, |_| count += 1);
        count
    }

    /// Number of distinct (city, country) pairs reachable from a source.
    pub fn reachable_cities(&self, source: AirportId) -> usize {
        let mut cities: BTreeSet<(&str, &str)> = BTreeSet::new();
        self.each_destination(source, |airport| {
            cities.insert((airport.city.as_str(), airport.country.as_str()));
        });
        cities.len()
    }

    /// Number of distinct countries reachable from a source.
    pub fn reachable_countries(&self, source: AirportId) -> usize {
        let mut countries: BTreeSet<&str> = BTreeSet::new();
        self.each_destination(source, |airport| {
            countries.insert(airport.country.as_str());
        });
        countries.len()
    }

    /// Depth-first destination walk. The source is deliberately not marked up
    /// front: a cycle through other vertices may re-enter it, and then it
    /// counts as a destination like any other.
    fn each_destination<'a, F: FnMut(&'a Airport)>(&'a self, source: AirportId, mut process: F) {
        if self.network.get(source).is_none() {
            return;
        }
        let mut visited = vec![false; self.network.vertex_count()];
        self.destination_visit(source, &mut visited, &mut process);
    }

    fn destination_visit<'a, F: FnMut(&'a Airport)>(
        &'a self,
        id: AirportId,
        visited: &mut [bool],
        process: &mut F,
    ) {
        for edge in self.network.vertex(id).routes() {
            if !visited[edge.target] {
                visited[edge.target] = true;
                process(self.network.vertex(edge.target).airport());
                self.destination_visit(edge.target, visited, process);
            }
        }
    }

    /// Number of distinct airports reachable within `max_stops` lay-overs.
    pub fn reachable_airports_within(&self, source: AirportId, max_stops: usize) -> usize {
        self.reachable_within(source, max_stops, |airport| airport.code.as_str())
    }

    /// Number of distinct city names reachable within `max_stops` lay-overs.
    pub fn reachable_cities_within(&self, source: AirportId, max_stops: usize) -> usize {
        self.reachable_within(source, max_stops, |airport| airport.city.as_str())
    }

    /// Number of distinct countries reachable within `max_stops` lay-overs.
    pub fn reachable_countries_within(&self, source: AirportId, max_stops: usize) -> usize {
        self.reachable_within(source, max_stops, |airport| airport.country.as_str())
    }

    /// Hop-bounded reachability count under a caller-chosen projection.
    ///
    /// The bound applies to the hop distance of an edge's source: every
    /// destination of an edge leaving a vertex at `max_stops` hops is still
    /// collected, even though the destination itself sits one hop beyond the
    /// limit.
    fn reachable_within<'a, F>(&'a self, source: AirportId, max_stops: usize, project: F) -> usize
    where
        F: Fn(&'a Airport) -> &'a str,
    {
        if self.network.get(source).is_none() {
            return 0;
        }

        let mut visited = vec![false; self.network.vertex_count()];
        let mut frontier: VecDeque<(AirportId, usize)> = VecDeque::new();
        let mut destinations: HashSet<&str> = HashSet::new();

        visited[source] = true;
        frontier.push_back((source, 0));

        while let Some((id, stops)) = frontier.pop_front() {
            let vertex = self.network.vertex(id);

            if stops <= max_stops {
                for edge in vertex.routes() {
                    destinations.insert(project(self.network.vertex(edge.target).airport()));
                }
            }

            for edge in vertex.routes() {
                if !visited[edge.target] {
                    visited[edge.target] = true;
                    frontier.push_back((edge.target, stops + 1));
                }
            }
        }

        destinations.len()
    }
}
