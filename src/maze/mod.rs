pub mod cell;
pub mod disjoint_set;
pub mod graph;

pub use cell::{Direction, Walls};
pub use disjoint_set::DisjointSet;
pub use graph::{Edge, Graph, GraphError, SolutionPath};

/// A rectangular maze: a grid of cells whose open passages are the edges of `graph`.
///
/// Cells are numbered row-major, `index = row * cols + col`.
#[derive(Debug, Clone)]
pub struct Maze {
    graph: Graph,
    rows: usize,
    cols: usize,
}

impl Maze {
    /// Wraps an existing graph over a `rows` x `cols` grid.
    /// The graph is not checked for being a spanning tree.
    pub fn from_graph(rows: usize, cols: usize, graph: Graph) -> Self {
        Maze { graph, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub(crate) fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Number of open passages.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_in_bounds(&self, cell: usize) -> bool {
        cell < self.cell_count()
    }

    fn ravel_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell index for `(row, col)`, or `None` if outside the grid.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| self.ravel_index(row, col))
    }

    /// `(row, col)` of a cell index.
    pub fn coord(&self, cell: usize) -> (usize, usize) {
        (cell / self.cols, cell % self.cols)
    }

    /// The grid neighbor of `cell` in `direction`, if it lies inside the grid.
    pub fn neighbor(&self, cell: usize, direction: Direction) -> Option<usize> {
        if !self.is_in_bounds(cell) {
            return None;
        }
        let (row, col) = self.coord(cell);
        let (row, col) = match direction {
            Direction::North => (row.checked_sub(1)?, col),
            Direction::East => (row, col + 1),
            Direction::South => (row + 1, col),
            Direction::West => (row, col.checked_sub(1)?),
        };
        self.index(row, col)
    }

    /// In-bounds grid neighbors of `cell`, in north, east, south, west order.
    pub fn neighbors_of(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(cell, direction))
    }

    /// Walls around `cell`. A side is closed when the neighbor that way is
    /// outside the grid or not connected to `cell`.
    ///
    /// # Panics
    /// If `cell` is outside the grid.
    pub fn walls_of(&self, cell: usize) -> Walls {
        if !self.is_in_bounds(cell) {
            panic!("Cell {} is out of bounds for a {}x{} maze", cell, self.rows, self.cols);
        }
        let mut walls = Walls::CLOSED;
        for direction in Direction::ALL {
            // Bounds are checked by `neighbor` before the graph is queried
            let open = self
                .neighbor(cell, direction)
                .is_some_and(|next| self.graph.has_edge(cell, next));
            walls.set(direction, !open);
        }
        walls
    }
}
