use std::collections::{HashMap, HashSet, VecDeque};

use thiserror::Error;

/// Vertex the default solvers search for: the top-left "start" cell.
pub const DEFAULT_DESTINATION: usize = 0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("cannot connect {from} and {to}: one of the vertices doesn't exist")]
    InvalidVertex { from: usize, to: usize },
}

/// One direction of an undirected connection between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: usize,
    dest: usize,
}

impl Edge {
    pub const fn new(source: usize, dest: usize) -> Self {
        Edge { source, dest }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn dest(&self) -> usize {
        self.dest
    }

    /// The same connection seen from the other end.
    pub fn reversed(&self) -> Edge {
        Edge::new(self.dest, self.source)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.dest)
    }
}

/// A path found by a traversal, stored as a stack: the destination sits at
/// the bottom and the source on top. Popping (or iterating) yields the
/// vertices from source to destination.
///
/// A `SolutionPath` is never empty; an unreachable destination is reported
/// as `None` by the traversal instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath {
    stack: Vec<usize>,
}

impl SolutionPath {
    /// Number of vertices on the path, both endpoints included.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of edges walked along the path.
    pub fn edge_len(&self) -> usize {
        self.stack.len() - 1
    }

    /// The vertex the traversal started from (top of the stack).
    pub fn source(&self) -> usize {
        self.stack[self.stack.len() - 1]
    }

    /// The vertex the traversal was looking for (bottom of the stack).
    pub fn destination(&self) -> usize {
        self.stack[0]
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.stack.contains(&vertex)
    }

    /// Vertices in source to destination order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.stack.iter().rev().copied()
    }

    /// Raw storage, destination first.
    pub fn as_stack(&self) -> &[usize] {
        &self.stack
    }
}

impl IntoIterator for SolutionPath {
    type Item = usize;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.stack.into_iter().rev()
    }
}

/// Per-call traversal state. Built fresh for every search and dropped with it.
/// Keyed by vertex id, so sparse or very large labels are fine.
struct Traversal {
    /// Vertices discovered so far
    marked: HashSet<usize>,
    /// Vertex each discovered vertex was reached from
    edge_to: HashMap<usize, usize>,
}

impl Traversal {
    fn new(source: usize, vertex_count: usize) -> Self {
        let mut marked = HashSet::with_capacity(vertex_count);
        marked.insert(source);
        Traversal {
            marked,
            edge_to: HashMap::with_capacity(vertex_count),
        }
    }

    /// Marks `vertex` as reached from `from`. Returns `false` if it was
    /// already discovered.
    fn discover(&mut self, vertex: usize, from: usize) -> bool {
        if !self.marked.insert(vertex) {
            return false;
        }
        self.edge_to.insert(vertex, from);
        true
    }

    fn path_to(&self, source: usize, destination: usize) -> Option<SolutionPath> {
        if !self.marked.contains(&destination) {
            return None;
        }
        let mut stack = Vec::new();
        let mut current = destination;
        while current != source {
            stack.push(current);
            current = *self.edge_to.get(&current)?;
        }
        stack.push(source);
        Some(SolutionPath { stack })
    }
}

/// Undirected graph over grid cells, stored as adjacency lists in insertion order.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: HashMap<usize, Vec<Edge>>,
    /// Vertex `run_bfs` and `run_dfs` start from
    source: usize,
}

impl Graph {
    /// Creates an empty graph for a `rows` x `cols` grid. The traversal source
    /// is the last cell, so solving walks from the finish back to the start.
    pub fn new(rows: usize, cols: usize) -> Self {
        Graph::with_source(rows.saturating_mul(cols).saturating_sub(1))
    }

    pub fn with_source(source: usize) -> Self {
        Graph {
            adjacency: HashMap::new(),
            source,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Adds a vertex. Does nothing if it is already present.
    pub fn add_vertex(&mut self, vertex: usize) {
        self.adjacency.entry(vertex).or_default();
    }

    pub fn has_vertex(&self, vertex: usize) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Connects `from` and `to` in both directions.
    ///
    /// Both vertices must have been added first. Connecting an already
    /// connected pair, or a vertex to itself, leaves the graph unchanged.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(GraphError::InvalidVertex { from, to });
        }
        if from == to || self.has_edge(from, to) || self.has_edge(to, from) {
            return Ok(());
        }
        let edge = Edge::new(from, to);
        self.adjacency.entry(from).or_default().push(edge);
        self.adjacency.entry(to).or_default().push(edge.reversed());
        Ok(())
    }

    /// Whether `(from, to)` is in `from`'s adjacency list. `false` if either
    /// vertex is absent.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        if !self.has_vertex(to) {
            return false;
        }
        self.adjacency
            .get(&from)
            .is_some_and(|edges| edges.contains(&Edge::new(from, to)))
    }

    /// Edges leaving `vertex`, in the order they were added.
    pub fn edges(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges(vertex).iter().map(Edge::dest)
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, each connected pair counted once.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Breadth-first search from the configured source to vertex 0.
    pub fn run_bfs(&self) -> Option<SolutionPath> {
        self.bfs_path(self.source, DEFAULT_DESTINATION)
    }

    /// Depth-first search from the configured source to vertex 0.
    pub fn run_dfs(&self) -> Option<SolutionPath> {
        self.dfs_path(self.source, DEFAULT_DESTINATION)
    }

    /// Breadth-first search between explicit endpoints.
    /// Returns `None` if either endpoint is missing or `to` is unreachable.
    pub fn bfs_path(&self, from: usize, to: usize) -> Option<SolutionPath> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        let mut state = Traversal::new(from, self.size());
        self.bfs(from, &mut state);
        state.path_to(from, to)
    }

    /// Depth-first search between explicit endpoints.
    /// Returns `None` if either endpoint is missing or `to` is unreachable.
    pub fn dfs_path(&self, from: usize, to: usize) -> Option<SolutionPath> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        let mut state = Traversal::new(from, self.size());
        self.dfs(from, &mut state);
        state.path_to(from, to)
    }

    fn bfs(&self, source: usize, state: &mut Traversal) {
        let mut queue = VecDeque::from([source]);
        while let Some(vertex) = queue.pop_front() {
            for next in self.neighbors(vertex) {
                if state.discover(next, vertex) {
                    queue.push_back(next);
                }
            }
        }
    }

    /// Visits vertices in the same order as the recursive formulation, but
    /// keeps pending work on an explicit stack of (vertex, next edge index).
    fn dfs(&self, source: usize, state: &mut Traversal) {
        let mut stack = vec![(source, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            frame.1 += 1;
            match self.edges(vertex).get(cursor).map(Edge::dest) {
                Some(next) => {
                    if state.discover(next, vertex) {
                        stack.push((next, 0));
                    }
                }
                None => {
                    // All neighbors explored, backtrack
                    stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 grid with vertices 0..4 and no edges.
    fn empty_square() -> Graph {
        let mut graph = Graph::new(2, 2);
        (0..4).for_each(|v| graph.add_vertex(v));
        graph
    }

    #[test]
    fn test_source_is_last_cell() {
        assert_eq!(Graph::new(3, 3).source(), 8);
        assert_eq!(Graph::new(2, 5).source(), 9);
        assert_eq!(Graph::with_source(4).source(), 4);
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Graph::new(2, 2);
        graph.add_vertex(1);
        graph.add_vertex(1);
        assert_eq!(graph.size(), 1);
        assert!(graph.has_vertex(1));
        assert!(!graph.has_vertex(0));
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = empty_square();
        graph.add_edge(0, 1).unwrap();
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
        assert!(!graph.has_edge(0, 2));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_does_not_duplicate() {
        let mut graph = empty_square();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 0).unwrap();
        assert_eq!(graph.edges(0), &[Edge::new(0, 1)]);
        assert_eq!(graph.edges(1), &[Edge::new(1, 0)]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_to_unknown_vertex() {
        let mut graph = Graph::new(2, 2);
        graph.add_vertex(0);
        assert_eq!(
            graph.add_edge(0, 3),
            Err(GraphError::InvalidVertex { from: 0, to: 3 })
        );
        assert_eq!(
            graph.add_edge(3, 0),
            Err(GraphError::InvalidVertex { from: 3, to: 0 })
        );
        // Graph is left untouched
        assert_eq!(graph.size(), 1);
        assert!(graph.edges(0).is_empty());
        assert!(!graph.has_vertex(3));
    }

    #[test]
    fn test_has_edge_with_absent_vertex() {
        let graph = empty_square();
        assert!(!graph.has_edge(0, 10));
        assert!(!graph.has_edge(10, 0));
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let mut graph = empty_square();
        graph.add_edge(2, 2).unwrap();
        assert!(graph.edges(2).is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edge_value_semantics() {
        let edge = Edge::new(3, 4);
        assert_eq!(edge, Edge::new(3, 4));
        assert_ne!(edge, edge.reversed());
        assert_eq!(edge.reversed().source(), 4);
        assert_eq!(edge.reversed().dest(), 3);
        let set: std::collections::HashSet<Edge> =
            [edge, Edge::new(3, 4), edge.reversed()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new(3, 4).to_string(), "3 -> 4");
        assert_eq!(Edge::new(3, 4).reversed().to_string(), "4 -> 3");
    }

    #[test]
    fn test_large_vertex_labels() {
        let mut graph = Graph::with_source(usize::MAX);
        graph.add_vertex(usize::MAX);
        graph.add_vertex(0);
        graph.add_edge(usize::MAX, 0).unwrap();
        let path = graph.run_bfs().unwrap();
        assert_eq!(path.iter().collect::<Vec<_>>(), vec![usize::MAX, 0]);
        assert_eq!(graph.run_dfs(), Some(path));
    }

    #[test]
    fn test_bfs_on_path_graph() {
        // 3 -- 1 -- 0 -- 2
        let mut graph = empty_square();
        graph.add_edge(3, 1).unwrap();
        graph.add_edge(1, 0).unwrap();
        graph.add_edge(0, 2).unwrap();

        let path = graph.run_bfs().unwrap();
        assert_eq!(path.iter().collect::<Vec<_>>(), vec![3, 1, 0]);
        assert_eq!(path.as_stack(), &[0, 1, 3]);
        assert_eq!(path.source(), 3);
        assert_eq!(path.destination(), 0);
        assert_eq!(path.edge_len(), 2);
        assert_eq!(path.into_iter().collect::<Vec<_>>(), vec![3, 1, 0]);
    }

    #[test]
    fn test_bfs_finds_shortest_in_cycle() {
        // 0 - 1 - 2 - 3 - 4 - 0: shortest from 4 to 0 is direct
        let mut graph = Graph::new(1, 5);
        (0..5).for_each(|v| graph.add_vertex(v));
        for (a, b) in [(4, 3), (3, 2), (2, 1), (1, 0), (4, 0)] {
            graph.add_edge(a, b).unwrap();
        }
        let path = graph.run_bfs().unwrap();
        assert_eq!(path.iter().collect::<Vec<_>>(), vec![4, 0]);
        // DFS follows adjacency order and takes the long way round
        let path = graph.run_dfs().unwrap();
        assert_eq!(path.iter().collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_unreachable_destination() {
        let mut graph = empty_square();
        graph.add_edge(3, 2).unwrap();
        assert_eq!(graph.run_bfs(), None);
        assert_eq!(graph.run_dfs(), None);
    }

    #[test]
    fn test_missing_endpoints() {
        let graph = Graph::new(2, 2);
        assert_eq!(graph.run_bfs(), None);
        assert_eq!(graph.bfs_path(0, 1), None);
        assert_eq!(graph.dfs_path(0, 1), None);
    }

    #[test]
    fn test_source_equals_destination() {
        let mut graph = Graph::new(1, 1);
        graph.add_vertex(0);
        let path = graph.run_dfs().unwrap();
        assert_eq!(path.as_stack(), &[0]);
        assert_eq!(path.edge_len(), 0);
    }

    #[test]
    fn test_explicit_endpoints() {
        let mut graph = empty_square();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(3, 2).unwrap();
        let path = graph.bfs_path(0, 2).unwrap();
        assert_eq!(path.iter().collect::<Vec<_>>(), vec![0, 1, 3, 2]);
        assert_eq!(graph.dfs_path(0, 2), Some(path));
    }

    #[test]
    fn test_traversal_state_is_not_shared() {
        let mut graph = empty_square();
        graph.add_edge(3, 1).unwrap();
        graph.add_edge(1, 0).unwrap();
        let first = graph.run_bfs();
        let second = graph.run_bfs();
        assert_eq!(first, second);
        assert_eq!(graph.run_dfs(), first);
    }

    #[test]
    fn test_deep_dfs_does_not_overflow() {
        // A single long corridor; recursion would need one frame per cell
        let n = 200_000;
        let mut graph = Graph::new(1, n);
        (0..n).for_each(|v| graph.add_vertex(v));
        (1..n).for_each(|v| graph.add_edge(v - 1, v).unwrap());
        let path = graph.run_dfs().unwrap();
        assert_eq!(path.len(), n);
        assert_eq!(path.source(), n - 1);
        assert_eq!(path.destination(), 0);
    }
}
