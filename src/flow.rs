//! Maximum flow via Edmonds-Karp (BFS-based Ford-Fulkerson), with
//! minimum-cut membership for every vertex.
//!
//! The solver knows nothing about teams. Arcs are explored in insertion
//! order, so for a fixed sequence of `add_edge` calls the flow and the cut
//! are reproducible.

use std::collections::VecDeque;
use std::fmt;

use thiserror::Error;

/// Edge capacity: a non-negative integer or unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capacity {
    Finite(u64),
    Infinite,
}

impl Capacity {
    fn is_positive(self) -> bool {
        match self {
            Capacity::Finite(c) => c > 0,
            Capacity::Infinite => true,
        }
    }

    fn min(self, other: Capacity) -> Capacity {
        match (self, other) {
            (Capacity::Infinite, c) | (c, Capacity::Infinite) => c,
            (Capacity::Finite(a), Capacity::Finite(b)) => Capacity::Finite(a.min(b)),
        }
    }

    fn consume(&mut self, amount: u64) {
        if let Capacity::Finite(c) = self {
            *c -= amount;
        }
    }

    fn restore(&mut self, amount: u64) {
        if let Capacity::Finite(c) = self {
            *c = c.saturating_add(amount);
        }
    }
}

impl From<u64> for Capacity {
    fn from(value: u64) -> Self {
        Capacity::Finite(value)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Finite(c) => write!(f, "{}", c),
            Capacity::Infinite => write!(f, "inf"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("vertex {vertex} out of range for a network of {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("source and sink are the same vertex ({0})")]
    SourceIsSink(usize),

    #[error("flow from {start} to {sink} is unbounded")]
    Unbounded { start: usize, sink: usize },
}

/// Directed edge as inserted by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: usize,
    pub to: usize,
    pub capacity: Capacity,
}

/// Directed capacitated graph over vertices `0..vertex_count`.
#[derive(Clone, Debug)]
pub struct FlowNetwork {
    vertex_count: usize,
    edges: Vec<FlowEdge>,
}

impl FlowNetwork {
    pub fn new(vertex_count: usize) -> Self {
        FlowNetwork {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Append an edge and return its index.
    pub fn add_edge(
        &mut self,
        from: usize,
        to: usize,
        capacity: impl Into<Capacity>,
    ) -> Result<usize, FlowError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.edges.push(FlowEdge {
            from,
            to,
            capacity: capacity.into(),
        });
        Ok(self.edges.len() - 1)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), FlowError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(FlowError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}

/// Residual arc. Arc `2e` is edge `e` forward, arc `2e + 1` its reverse.
#[derive(Clone, Copy, Debug)]
struct ResidualArc {
    to: usize,
    residual: Capacity,
}

/// Result of a maximum-flow computation.
#[derive(Clone, Debug)]
pub struct MaxFlow {
    value: u64,
    in_cut: Vec<bool>,
    edge_flows: Vec<u64>,
}

impl MaxFlow {
    /// Compute a maximum flow from `source` to `sink`.
    ///
    /// Time: O(V * E^2).
    pub fn solve(network: &FlowNetwork, source: usize, sink: usize) -> Result<Self, FlowError> {
        network.check_vertex(source)?;
        network.check_vertex(sink)?;
        if source == sink {
            return Err(FlowError::SourceIsSink(source));
        }

        let n = network.vertex_count;
        let mut arcs = Vec::with_capacity(network.edges.len() * 2);
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
        for edge in &network.edges {
            adjacency[edge.from].push(arcs.len());
            arcs.push(ResidualArc {
                to: edge.to,
                residual: edge.capacity,
            });
            adjacency[edge.to].push(arcs.len());
            arcs.push(ResidualArc {
                to: edge.from,
                residual: Capacity::Finite(0),
            });
        }

        let mut value: u64 = 0;
        loop {
            let parent_arc = residual_bfs(&arcs, &adjacency, source);

            // No augmenting path: the last search is exactly the source side of the cut
            if parent_arc[sink].is_none() {
                let in_cut = (0..n)
                    .map(|v| v == source || parent_arc[v].is_some())
                    .collect();
                let edge_flows = arcs
                    .chunks(2)
                    .map(|pair| match pair[1].residual {
                        Capacity::Finite(f) => f,
                        Capacity::Infinite => 0,
                    })
                    .collect();
                return Ok(MaxFlow {
                    value,
                    in_cut,
                    edge_flows,
                });
            }

            // Bottleneck along the path
            let mut bottleneck = Capacity::Infinite;
            let mut v = sink;
            while v != source {
                let Some(a) = parent_arc[v] else { break };
                bottleneck = bottleneck.min(arcs[a].residual);
                v = arcs[a ^ 1].to;
            }
            let amount = match bottleneck {
                Capacity::Finite(c) => c,
                Capacity::Infinite => {
                    return Err(FlowError::Unbounded {
                        start: source,
                        sink,
                    })
                }
            };

            let mut v = sink;
            while v != source {
                let Some(a) = parent_arc[v] else { break };
                arcs[a].residual.consume(amount);
                arcs[a ^ 1].residual.restore(amount);
                v = arcs[a ^ 1].to;
            }

            value = value.saturating_add(amount);
        }
    }

    /// Value of the maximum flow.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Whether `vertex` is reachable from the source in the final residual
    /// graph, i.e. lies on the source side of the minimum cut.
    pub fn in_cut(&self, vertex: usize) -> bool {
        self.in_cut.get(vertex).copied().unwrap_or(false)
    }

    /// Flow routed through edge `edge` (index returned by `add_edge`).
    pub fn flow(&self, edge: usize) -> u64 {
        self.edge_flows.get(edge).copied().unwrap_or(0)
    }
}

/// BFS over arcs with positive residual capacity. Returns, per vertex, the
/// arc used to reach it (`None` for the source and unreached vertices).
fn residual_bfs(
    arcs: &[ResidualArc],
    adjacency: &[Vec<usize>],
    source: usize,
) -> Vec<Option<usize>> {
    let mut parent_arc = vec![None; adjacency.len()];
    let mut visited = vec![false; adjacency.len()];
    let mut queue = VecDeque::new();
    visited[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &a in &adjacency[u] {
            let arc = arcs[a];
            if !visited[arc.to] && arc.residual.is_positive() {
                visited[arc.to] = true;
                parent_arc[arc.to] = Some(a);
                queue.push_back(arc.to);
            }
        }
    }

    parent_arc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity_across_cut(network: &FlowNetwork, flow: &MaxFlow) -> Capacity {
        let mut total = Capacity::Finite(0);
        for edge in network.edges() {
            if flow.in_cut(edge.from) && !flow.in_cut(edge.to) {
                total = match (total, edge.capacity) {
                    (Capacity::Finite(a), Capacity::Finite(b)) => Capacity::Finite(a + b),
                    _ => Capacity::Infinite,
                };
            }
        }
        total
    }

    /// CLRS figure 26.1: max flow 23.
    fn clrs_network() -> FlowNetwork {
        let mut net = FlowNetwork::new(6);
        for (from, to, cap) in [
            (0, 1, 16),
            (0, 2, 13),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ] {
            net.add_edge(from, to, cap).unwrap();
        }
        net
    }

    #[test]
    fn test_known_max_flow() {
        let net = clrs_network();
        let flow = MaxFlow::solve(&net, 0, 5).unwrap();
        assert_eq!(flow.value(), 23);
        assert_eq!(capacity_across_cut(&net, &flow), Capacity::Finite(23));
        assert!(flow.in_cut(0));
        assert!(!flow.in_cut(5));
    }

    #[test]
    fn test_flow_conservation_and_capacity() {
        let net = clrs_network();
        let flow = MaxFlow::solve(&net, 0, 5).unwrap();
        let mut balance = vec![0i64; net.vertex_count()];
        for (i, edge) in net.edges().iter().enumerate() {
            let f = flow.flow(i);
            if let Capacity::Finite(c) = edge.capacity {
                assert!(f <= c, "edge {} carries {} over capacity {}", i, f, c);
            }
            balance[edge.from] -= f as i64;
            balance[edge.to] += f as i64;
        }
        assert_eq!(balance[0], -23);
        assert_eq!(balance[5], 23);
        assert!(balance[1..5].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_infinite_edges_inside_network() {
        // 0 -> 1 (5), 1 -> 2 (inf), 2 -> 3 (3)
        let mut net = FlowNetwork::new(4);
        net.add_edge(0, 1, 5).unwrap();
        net.add_edge(1, 2, Capacity::Infinite).unwrap();
        net.add_edge(2, 3, 3).unwrap();
        let flow = MaxFlow::solve(&net, 0, 3).unwrap();
        assert_eq!(flow.value(), 3);
        assert!(flow.in_cut(1));
        assert!(flow.in_cut(2));
        assert!(!flow.in_cut(3));
    }

    #[test]
    fn test_unbounded_flow_rejected() {
        let mut net = FlowNetwork::new(3);
        net.add_edge(0, 1, Capacity::Infinite).unwrap();
        net.add_edge(1, 2, Capacity::Infinite).unwrap();
        assert_eq!(
            MaxFlow::solve(&net, 0, 2).unwrap_err(),
            FlowError::Unbounded { start: 0, sink: 2 }
        );
    }

    #[test]
    fn test_disconnected_sink() {
        let mut net = FlowNetwork::new(3);
        net.add_edge(0, 1, 7).unwrap();
        let flow = MaxFlow::solve(&net, 0, 2).unwrap();
        assert_eq!(flow.value(), 0);
        assert!(flow.in_cut(1));
        assert!(!flow.in_cut(2));
    }

    #[test]
    fn test_invalid_input() {
        let mut net = FlowNetwork::new(2);
        assert_eq!(
            net.add_edge(0, 2, 1).unwrap_err(),
            FlowError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            }
        );
        assert_eq!(
            MaxFlow::solve(&net, 1, 1).unwrap_err(),
            FlowError::SourceIsSink(1)
        );
        assert!(matches!(
            MaxFlow::solve(&net, 0, 5),
            Err(FlowError::VertexOutOfRange { vertex: 5, .. })
        ));
    }

    #[test]
    fn test_deterministic_cut() {
        let net = clrs_network();
        let a = MaxFlow::solve(&net, 0, 5).unwrap();
        let b = MaxFlow::solve(&net, 0, 5).unwrap();
        for v in 0..net.vertex_count() {
            assert_eq!(a.in_cut(v), b.in_cut(v));
        }
        for e in 0..net.edges().len() {
            assert_eq!(a.flow(e), b.flow(e));
        }
    }
}
