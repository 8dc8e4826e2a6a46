pub mod app;
pub mod config;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use generators::{GenerationError, MazeBuilder, generate_maze};
pub use maze::{DisjointSet, Edge, Graph, GraphError, Maze, SolutionPath, Walls};
pub use solvers::{Solver, solve_maze};
