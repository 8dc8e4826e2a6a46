use std::path::PathBuf;

use clap::Parser;

use crate::solvers::Solver;

#[derive(Parser, Debug)]
#[clap(version, about, name = "spanmaze")]
pub struct Args {
    #[clap(short, long, default_value_t = 10, help = "Number of rows in the maze")]
    pub rows: usize,
    #[clap(short, long, default_value_t = 10, help = "Number of columns in the maze")]
    pub cols: usize,
    #[clap(long, value_enum, default_value_t = Solver::Bfs, help = "Algorithm used to solve the maze")]
    pub solver: Solver,
    #[clap(long, help = "Seed for reproducible mazes")]
    pub seed: Option<u64>,
    #[clap(long, help = "Abort generation after this many random draws")]
    pub max_iterations: Option<u64>,
    #[clap(long, action, help = "Print the maze without colors")]
    pub no_color: bool,
    #[clap(long, help = "Write debug logs to this file")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub solver: Solver,
    pub seed: Option<u64>,
    pub max_iterations: Option<u64>,
    pub styled: bool,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rows and columns must be at least 1 (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("a {rows}x{cols} grid has too many cells")]
    TooManyCells { rows: usize, cols: usize },
    #[error("max iterations must be at least 1")]
    InvalidIterationLimit,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.rows == 0 || args.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: args.rows,
                cols: args.cols,
            });
        }
        if args.rows.checked_mul(args.cols).is_none() {
            return Err(ConfigError::TooManyCells {
                rows: args.rows,
                cols: args.cols,
            });
        }
        if args.max_iterations == Some(0) {
            return Err(ConfigError::InvalidIterationLimit);
        }
        Ok(Config {
            rows: args.rows,
            cols: args.cols,
            solver: args.solver,
            seed: args.seed,
            max_iterations: args.max_iterations,
            styled: !args.no_color,
            log_file: args.log_file,
        })
    }
}
