use crate::maze::{Maze, SolutionPath};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Solver {
    #[default]
    Bfs,
    Dfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Solve the maze from its finish cell (the graph's source) back to cell 0.
/// Returns `None` if cell 0 can't be reached.
pub fn solve_maze(maze: &Maze, solver: Solver) -> Option<SolutionPath> {
    let graph = maze.graph();
    let path = match solver {
        Solver::Bfs => graph.run_bfs(),
        Solver::Dfs => graph.run_dfs(),
    };
    match &path {
        Some(path) => tracing::info!(
            "[solve] {} found a path of {} cells from {} to {}",
            solver,
            path.len(),
            path.source(),
            path.destination()
        ),
        None => tracing::info!("[solve] {} found no path to the goal", solver),
    }
    path
}
