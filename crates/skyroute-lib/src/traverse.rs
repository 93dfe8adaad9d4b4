//! Generic traversal primitives over a [`Network`].
//!
//! Every walk owns its visited markers for the duration of the call, so no
//! traversal observes state left behind by a previous one. Walks take a
//! per-visited-vertex callback; the query layer composes its aggregations on
//! top of these without re-implementing the traversal order.

use std::collections::VecDeque;

use tracing::warn;

use crate::network::{AirportId, Network};

/// Depth-first walk over the whole network.
///
/// Every vertex is used as a potential root in arena order, so disconnected
/// components are covered and each vertex is visited exactly once, in
/// discovery order.
pub fn dfs_each<F: FnMut(AirportId)>(network: &Network, mut visit: F) {
    let mut visited = vec![false; network.vertex_count()];
    for root in 0..network.vertex_count() {
        if !visited[root] {
            dfs_visit(network, root, &mut visited, &mut visit);
        }
    }
}

/// Depth-first walk from a single source. A missing source visits nothing.
pub fn dfs_from_each<F: FnMut(AirportId)>(network: &Network, source: AirportId, mut visit: F) {
    if network.get(source).is_none() {
        return;
    }
    let mut visited = vec![false; network.vertex_count()];
    dfs_visit(network, source, &mut visited, &mut visit);
}

fn dfs_visit<F: FnMut(AirportId)>(
    network: &Network,
    id: AirportId,
    visited: &mut [bool],
    visit: &mut F,
) {
    visited[id] = true;
    visit(id);
    for edge in network.vertex(id).routes() {
        if !visited[edge.target] {
            dfs_visit(network, edge.target, visited, visit);
        }
    }
}

/// Breadth-first walk from a single source. A missing source visits nothing.
pub fn bfs_from_each<F: FnMut(AirportId)>(network: &Network, source: AirportId, mut visit: F) {
    if network.get(source).is_none() {
        return;
    }
    let mut visited = vec![false; network.vertex_count()];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(id) = queue.pop_front() {
        visit(id);
        for edge in network.vertex(id).routes() {
            if !visited[edge.target] {
                visited[edge.target] = true;
                queue.push_back(edge.target);
            }
        }
    }
}

/// Topological order driven by in-degree counts.
///
/// Only meaningful for acyclic graphs: vertices trapped in cycles never reach
/// in-degree zero and are silently left out of the returned order.
pub fn topological_order(network: &Network) -> Vec<AirportId> {
    let mut in_degree = vec![0usize; network.vertex_count()];
    for vertex in network.vertices() {
        for edge in vertex.routes() {
            in_degree[edge.target] += 1;
        }
    }

    let mut queue: VecDeque<AirportId> = (0..network.vertex_count())
        .filter(|&id| in_degree[id] == 0)
        .collect();
    let mut order = Vec::with_capacity(network.vertex_count());

    while let Some(id) = queue.pop_front() {
        order.push(id);
        for edge in network.vertex(id).routes() {
            in_degree[edge.target] -= 1;
            if in_degree[edge.target] == 0 {
                queue.push_back(edge.target);
            }
        }
    }

    if order.len() < network.vertex_count() {
        warn!(
            ordered = order.len(),
            total = network.vertex_count(),
            "topological order omitted vertices trapped in cycles"
        );
    }
    order
}

/// Whole-network depth-first discovery order.
pub fn dfs_order(network: &Network) -> Vec<AirportId> {
    let mut order = Vec::with_capacity(network.vertex_count());
    dfs_each(network, |id| order.push(id));
    order
}

/// Depth-first discovery order from a single source.
pub fn dfs_order_from(network: &Network, source: AirportId) -> Vec<AirportId> {
    let mut order = Vec::new();
    dfs_from_each(network, source, |id| order.push(id));
    order
}

/// Breadth-first visit order from a single source.
pub fn bfs_order_from(network: &Network, source: AirportId) -> Vec<AirportId> {
    let mut order = Vec::new();
    bfs_from_each(network, source, |id| order.push(id));
    order
}
