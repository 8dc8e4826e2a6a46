use std::time::Instant;

use spanmaze::{MazeBuilder, Solver, solve_maze};

fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let size = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(u8::MAX as usize);
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);

    for i in 0..num_iters {
        let start = Instant::now();
        let maze = match MazeBuilder::new(size, size).seed(i as u64).generate() {
            Ok(maze) => maze,
            Err(e) => {
                eprintln!("Generation failed: {}", e);
                return;
            }
        };
        let generated = start.elapsed();
        let bfs = solve_maze(&maze, Solver::Bfs).map_or(0, |p| p.len());
        let dfs = solve_maze(&maze, Solver::Dfs).map_or(0, |p| p.len());
        println!(
            "{}x{} #{}: generated in {:?}, solved in {:?} (bfs {} cells, dfs {} cells)",
            size,
            size,
            i,
            generated,
            start.elapsed() - generated,
            bfs,
            dfs
        );
    }
}
