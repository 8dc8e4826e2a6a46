pub mod renderer;

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal,
};
use thiserror::Error;

use crate::{
    config::Config,
    generators::{GenerationError, MazeBuilder},
    maze::{Maze, SolutionPath},
    solvers::solve_maze,
};
use renderer::{Tile, print_maze};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Generation(#[from] GenerationError),
}

/// Outcome of one generate-and-solve run.
#[derive(Debug)]
pub struct RunSummary {
    pub maze: Maze,
    pub path: Option<SolutionPath>,
}

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn builder(&self) -> MazeBuilder {
        let mut builder = MazeBuilder::new(self.config.rows, self.config.cols);
        if let Some(seed) = self.config.seed {
            builder = builder.seed(seed);
        }
        if let Some(limit) = self.config.max_iterations {
            builder = builder.max_iterations(limit);
        }
        builder
    }

    /// Print a note if the terminal is too narrow or short for the maze.
    /// Not being attached to a terminal is fine.
    fn check_terminal_size<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let Ok((term_width, term_height)) = terminal::size() else {
            return Ok(());
        };
        let width = self
            .config
            .cols
            .saturating_mul(2)
            .saturating_add(1)
            .saturating_mul(Tile::WIDTH);
        let height = self.config.rows.saturating_mul(2).saturating_add(1);
        if (term_width as usize) < width || (term_height as usize) < height {
            tracing::warn!(
                "[app] Terminal is {}x{}, maze needs {}x{}",
                term_width,
                term_height,
                width,
                height
            );
            let msg = format!(
                "Terminal size ({}x{}) is smaller than the maze ({}x{}); output may wrap.\n",
                term_width, term_height, width, height
            );
            if self.config.styled {
                queue!(
                    out,
                    style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold))
                )?;
            } else {
                queue!(out, style::Print(msg))?;
            }
        }
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W, msg: &str, color: Color) -> std::io::Result<()> {
        if self.config.styled {
            queue!(
                out,
                style::PrintStyledContent(msg.with(color).attribute(Attribute::Bold)),
                style::Print("\n")
            )?;
        } else {
            queue!(out, style::Print(msg), style::Print("\n"))?;
        }
        Ok(())
    }

    /// Generate a maze, solve it and print both to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary, AppError> {
        tracing::info!(
            "[app] Generating {}x{} maze, solving with {}",
            self.config.rows,
            self.config.cols,
            self.config.solver
        );
        let maze = self.builder().generate()?;
        self.check_terminal_size(out)?;

        let path = solve_maze(&maze, self.config.solver);

        print_maze(out, &maze, path.as_ref(), self.config.styled)?;
        match &path {
            Some(path) => self.print_status(
                out,
                &format!(
                    "Path found with {}! {} cells long.",
                    self.config.solver,
                    path.len()
                ),
                Color::Green,
            )?,
            None => self.print_status(out, "No path found.", Color::Red)?,
        }
        out.flush()?;

        Ok(RunSummary { maze, path })
    }
}
