use std::collections::VecDeque;

use serde::Serialize;
use tracing::debug;

use crate::network::AirportId;

use super::QueryEngine;

/// The network diameter in hops, together with every shortest path that
/// realizes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkDiameter {
    pub hops: usize,
    pub paths: Vec<Vec<AirportId>>,
}

impl QueryEngine<'_> {
    /// Every minimum-length path from `source` to `target`, as ordered
    /// airport sequences. Empty when the target is unreachable or either id
    /// is out of range.
    ///
    /// The walk carries its partial path in the queue entry and tests the
    /// target before marking it visited: a plain visited-marking walk would
    /// keep only the first minimum-length arrival, while here every parallel
    /// edge into the target at the minimum depth is captured. Internal
    /// vertices are still entered at most once.
    pub fn shortest_paths(&self, source: AirportId, target: AirportId) -> Vec<Vec<AirportId>> {
        if self.network.get(source).is_none() || self.network.get(target).is_none() {
            return Vec::new();
        }

        let mut visited = vec![false; self.network.vertex_count()];
        let mut frontier: VecDeque<(Vec<AirportId>, AirportId)> = VecDeque::new();
        let mut found: Vec<Vec<AirportId>> = Vec::new();
        let mut minimum: Option<usize> = None;

        visited[source] = true;
        frontier.push_back((vec![source], source));

        while let Some((path, at)) = frontier.pop_front() {
            for edge in self.network.vertex(at).routes() {
                let next = edge.target;
                if next == target {
                    let mut complete = path.clone();
                    complete.push(next);
                    match minimum {
                        Some(len) if complete.len() > len => {}
                        Some(len) if complete.len() == len => found.push(complete),
                        _ => {
                            minimum = Some(complete.len());
                            found.clear();
                            found.push(complete);
                        }
                    }
                } else if !visited[next] {
                    visited[next] = true;
                    let mut extended = path.clone();
                    extended.push(next);
                    frontier.push_back((extended, next));
                }
            }
        }

        found
    }

    /// The longest shortest path in the network, with every witness path.
    ///
    /// Runs a breadth-first scan from every vertex; the running maximum is
    /// cleared and restarted when a strictly longer distance appears and
    /// accumulated on ties, so the returned paths are exactly those realizing
    /// the final diameter. A vertex with no outgoing routes ties a zero
    /// diameter with its trivial one-airport path.
    pub fn diameter(&self) -> NetworkDiameter {
        let count = self.network.vertex_count();
        let mut diameter = 0usize;
        let mut witnesses: Vec<Vec<AirportId>> = Vec::new();

        for source in 0..count {
            let mut distance: Vec<Option<usize>> = vec![None; count];
            let mut path: Vec<Vec<AirportId>> = vec![Vec::new(); count];
            let mut frontier: VecDeque<AirportId> = VecDeque::new();

            distance[source] = Some(0);
            path[source] = vec![source];
            frontier.push_back(source);

            while let Some(at) = frontier.pop_front() {
                for edge in self.network.vertex(at).routes() {
                    let next = edge.target;
                    if distance[next].is_none() {
                        distance[next] = distance[at].map(|d| d + 1);
                        let mut extended = path[at].clone();
                        extended.push(next);
                        path[next] = extended;
                        frontier.push_back(next);
                    }
                }
            }

            let eccentricity = distance.iter().flatten().copied().max().unwrap_or(0);
            if eccentricity > diameter {
                diameter = eccentricity;
                witnesses.clear();
            }
            if eccentricity == diameter {
                for reached in 0..count {
                    if distance[reached] == Some(diameter) {
                        witnesses.push(path[reached].clone());
                    }
                }
            }
        }

        debug!(
            hops = diameter,
            witness_paths = witnesses.len(),
            "network diameter scan complete"
        );
        NetworkDiameter {
            hops: diameter,
            paths: witnesses,
        }
    }
}
