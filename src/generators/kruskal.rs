use rand::Rng;

use super::GenerationError;
use crate::maze::{DisjointSet, Graph, Maze};

/// Randomized Kruskal-style construction.
///
/// Repeatedly picks a random cell and one of its in-bounds neighbors. If the
/// two are in different components they are merged and a passage is carved
/// between them. Stops once a single component remains, so the passages form
/// a spanning tree: `rows * cols - 1` edges, no cycles.
///
/// Draws that land in the same component are simply rejected, so the number
/// of iterations is unbounded in the worst case. `max_iterations` caps it.
pub(super) fn randomized_union<R: Rng>(
    rows: usize,
    cols: usize,
    rng: &mut R,
    max_iterations: Option<u64>,
) -> Result<Maze, GenerationError> {
    carve(rows, cols, rng, max_iterations).map(|(maze, _)| maze)
}

/// Runs the union loop, handing back the component sets alongside the maze.
fn carve<R: Rng>(
    rows: usize,
    cols: usize,
    rng: &mut R,
    max_iterations: Option<u64>,
) -> Result<(Maze, DisjointSet), GenerationError> {
    let cell_count = rows * cols;

    let mut graph = Graph::new(rows, cols);
    (0..cell_count).for_each(|cell| graph.add_vertex(cell));
    let mut maze = Maze::from_graph(rows, cols, graph);
    let mut sets = DisjointSet::new(cell_count);

    tracing::debug!("[generate] Building {}x{} maze", rows, cols);

    let mut iterations: u64 = 0;
    let mut rejected: u64 = 0;
    while sets.count() != 1 {
        if max_iterations.is_some_and(|limit| iterations >= limit) {
            tracing::warn!(
                "[generate] Gave up after {} iterations with {} components left",
                iterations,
                sets.count()
            );
            return Err(GenerationError::IterationLimit {
                limit: iterations,
            });
        }
        iterations += 1;

        let cell = rng.random_range(0..cell_count);

        // At least one neighbor exists since the grid has more than one cell
        let mut candidates = [0usize; 4];
        let mut found = 0;
        for next in maze.neighbors_of(cell) {
            candidates[found] = next;
            found += 1;
        }
        let neighbor = candidates[rng.random_range(0..found)];

        if sets.union(cell, neighbor) {
            maze.graph_mut().add_edge(cell, neighbor)?;
        } else {
            rejected += 1;
        }
    }

    tracing::debug!(
        "[generate] Finished in {} iterations ({} rejected), {} passages",
        iterations,
        rejected,
        maze.edge_count()
    );
    debug_assert_eq!(sets.count(), 1);
    Ok((maze, sets))
}
