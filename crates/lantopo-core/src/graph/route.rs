//! Cheapest-route search over the topology graph.
//!
//! Exhaustive depth-first search with backtracking and branch-and-bound
//! pruning. Worst case exponential in the number of simple paths; acceptable
//! because graphs are capacity-bounded and small. The exploration order is
//! part of the observable behavior (ties keep the first route found under the
//! newest-link-first adjacency order), so this must stay a DFS.

use tracing::debug;

use super::store::NetworkGraph;
use super::types::VertexId;

/// Cost sentinel: larger than any attainable route cost.
const INFINITY: u32 = u32::MAX;

/// A route between two devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Vertex ids from origin to destination, inclusive.
    pub hops: Vec<VertexId>,
    /// Sum of the link costs along the route.
    pub cost: u32,
}

/// Finds the route with the lowest total link cost between two devices.
///
/// Returns `None` when either id is out of range, the ids are equal, or no
/// route exists. When several routes share the minimal cost, the first one
/// found wins; with adjacency lists ordered newest link first, that is the
/// route through the most recently added links.
#[must_use]
pub fn cheapest_route(
    graph: &NetworkGraph,
    origin: VertexId,
    dest: VertexId,
) -> Option<Route> {
    if origin >= graph.len() || dest >= graph.len() || origin == dest {
        return None;
    }

    let mut search = RouteSearch::new(graph, dest);
    search.explore(origin, 0, 0);

    let best_cost = search.best_cost;
    debug!(origin, dest, found = search.best.is_some(), "route search finished");
    search.best.map(|hops| Route {
        hops,
        cost: best_cost,
    })
}

/// State bundle threaded through the recursive search.
struct RouteSearch<'a> {
    graph: &'a NetworkGraph,
    dest: VertexId,
    /// A simple path visits each vertex at most once.
    max_depth: usize,
    /// True while a vertex is on the current path; cleared on backtrack.
    visited: Vec<bool>,
    path: Vec<VertexId>,
    best: Option<Vec<VertexId>>,
    best_cost: u32,
}

impl<'a> RouteSearch<'a> {
    fn new(graph: &'a NetworkGraph, dest: VertexId) -> Self {
        Self {
            graph,
            dest,
            max_depth: graph.len(),
            visited: vec![false; graph.len()],
            path: Vec::with_capacity(graph.len()),
            best: None,
            best_cost: INFINITY,
        }
    }

    fn explore(&mut self, current: VertexId, depth: usize, cost: u32) {
        self.path.push(current);

        if current == self.dest {
            // Strict improvement: ties keep the first route found.
            if cost < self.best_cost {
                self.best = Some(self.path.clone());
                self.best_cost = cost;
            }
            self.path.pop();
            return;
        }

        if depth >= self.max_depth || cost >= self.best_cost {
            self.path.pop();
            return;
        }

        self.visited[current] = true;
        for edge in self.graph.neighbors(current) {
            if !self.visited[edge.to] {
                self.explore(edge.to, depth + 1, cost + edge.link.cost());
            }
        }
        self.visited[current] = false;

        self.path.pop();
    }
}
