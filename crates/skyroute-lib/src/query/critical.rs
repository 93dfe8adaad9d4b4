use std::collections::HashSet;

use tracing::debug;

use crate::network::AirportId;

use super::QueryEngine;

/// Low-link bookkeeping for one criticality scan.
struct LowLink {
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    num: Vec<usize>,
    low: Vec<usize>,
    next_index: usize,
}

impl QueryEngine<'_> {
    /// Airports whose removal would break apart their surrounding network,
    /// as airport codes.
    ///
    /// One low-link depth-first pass restarts at every unvisited vertex, so
    /// disconnected components are covered. The test follows the traversal
    /// tree over outgoing edges only, with no exclusion of the edge back to
    /// the immediate parent, and applies the root rule ("more than one tree
    /// child") solely to the vertex with discovery index zero; later roots
    /// fall under the ordinary low-link comparison. That makes the result an
    /// articulation-point approximation on the traversal tree rather than a
    /// rigorous directed-graph cut-vertex analysis.
    pub fn essential_airports(&self) -> HashSet<String> {
        let count = self.network.vertex_count();
        let mut state = LowLink {
            visited: vec![false; count],
            on_stack: vec![false; count],
            num: vec![0; count],
            low: vec![0; count],
            next_index: 0,
        };
        let mut essential = HashSet::new();

        for root in 0..count {
            if !state.visited[root] {
                self.low_link_visit(root, &mut state, &mut essential);
            }
        }

        debug!(count = essential.len(), "essential airport scan complete");
        essential
    }

    fn low_link_visit(&self, id: AirportId, state: &mut LowLink, essential: &mut HashSet<String>) {
        state.visited[id] = true;
        state.on_stack[id] = true;
        state.num[id] = state.next_index;
        state.low[id] = state.next_index;
        state.next_index += 1;

        let mut children = 0usize;
        for edge in self.network.vertex(id).routes() {
            let next = edge.target;
            if !state.visited[next] {
                children += 1;
                self.low_link_visit(next, state, essential);
                state.low[id] = state.low[id].min(state.low[next]);

                if (state.num[id] != 0 && state.low[next] >= state.num[id])
                    || (state.num[id] == 0 && children > 1)
                {
                    essential.insert(self.network.vertex(id).airport().code.clone());
                }
            } else if state.on_stack[next] {
                state.low[id] = state.low[id].min(state.num[next]);
            }
        }

        state.on_stack[id] = false;
    }
}
