use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;

mod kruskal;

use kruskal::randomized_union;

use crate::maze::{GraphError, Maze};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid maze size {rows}x{cols}")]
    InvalidSize { rows: usize, cols: usize },
    #[error("maze generation did not finish within {limit} iterations")]
    IterationLimit { limit: u64 },
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Builds perfect mazes by merging random neighboring cells until every cell
/// belongs to a single component.
#[derive(Debug, Clone)]
pub struct MazeBuilder {
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    /// Give up after this many random draws. Unbounded if `None`.
    max_iterations: Option<u64>,
}

impl MazeBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        MazeBuilder {
            rows,
            cols,
            seed: None,
            max_iterations: None,
        }
    }

    /// Use a fixed seed so the same builder always yields the same maze.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_iterations(mut self, limit: u64) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    pub fn generate(&self) -> Result<Maze, GenerationError> {
        let invalid = GenerationError::InvalidSize {
            rows: self.rows,
            cols: self.cols,
        };
        if self.rows == 0 || self.cols == 0 {
            return Err(invalid);
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(invalid);
        }

        let mut rng = get_rng(self.seed);
        randomized_union(self.rows, self.cols, &mut rng, self.max_iterations)
    }
}

/// Generate a `rows` x `cols` maze with no iteration cap.
pub fn generate_maze(rows: usize, cols: usize, seed: Option<u64>) -> Result<Maze, GenerationError> {
    let builder = MazeBuilder::new(rows, cols);
    match seed {
        Some(seed) => builder.seed(seed).generate(),
        None => builder.generate(),
    }
}
