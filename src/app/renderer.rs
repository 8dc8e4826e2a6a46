use std::io::Write;

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::maze::{Maze, SolutionPath, graph::DEFAULT_DESTINATION};

/// One square of the rendered picture. Cells sit at odd (row, col) positions
/// of a `(2 * rows + 1) x (2 * cols + 1)` tile grid; the tiles between them
/// are wall slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    /// Part of the solution
    Route,
    Start,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: usize = 2;

    fn symbol(self, styled: bool) -> &'static str {
        match (self, styled) {
            (Tile::Wall, false) => "##",
            (Tile::Open, _) => "  ",
            (Tile::Route, false) => "..",
            (Tile::Start, false) => "S ",
            (Tile::Goal, false) => "G ",
            (Tile::Wall, true) | (Tile::Route, true) => "██",
            (Tile::Start, true) => "🟩",
            (Tile::Goal, true) => "🟥",
        }
    }

    fn color(self) -> Color {
        match self {
            Tile::Wall => Color::White,
            Tile::Open => Color::Reset,
            Tile::Route => Color::Yellow,
            Tile::Start => Color::Green,
            Tile::Goal => Color::Red,
        }
    }

    fn render(self, styled: bool) -> String {
        let symbol = self.symbol(styled);

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                symbol.width(),
                Tile::WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        if styled {
            symbol.with(self.color()).to_string()
        } else {
            symbol.to_string()
        }
    }
}

fn tile_coord(maze: &Maze, cell: usize) -> (usize, usize) {
    let (row, col) = maze.coord(cell);
    (row * 2 + 1, col * 2 + 1)
}

/// Lay the maze out as tiles, with the optional solution path marked.
pub fn tiles(maze: &Maze, path: Option<&SolutionPath>) -> Vec<Vec<Tile>> {
    let mut grid = vec![vec![Tile::Wall; maze.cols() * 2 + 1]; maze.rows() * 2 + 1];

    for cell in 0..maze.cell_count() {
        let (y, x) = tile_coord(maze, cell);
        grid[y][x] = Tile::Open;
        let walls = maze.walls_of(cell);
        // East and south slots are enough: the west and north ones belong to
        // the neighbor or to the outer border
        if !walls.east {
            grid[y][x + 1] = Tile::Open;
        }
        if !walls.south {
            grid[y + 1][x] = Tile::Open;
        }
    }

    if let Some(path) = path {
        let cells = path.iter().collect::<Vec<_>>();
        for &cell in &cells {
            let (y, x) = tile_coord(maze, cell);
            grid[y][x] = Tile::Route;
        }
        for pair in cells.windows(2) {
            let (ay, ax) = tile_coord(maze, pair[0]);
            let (by, bx) = tile_coord(maze, pair[1]);
            grid[(ay + by) / 2][(ax + bx) / 2] = Tile::Route;
        }
    }

    if maze.cell_count() > 0 {
        let (y, x) = tile_coord(maze, DEFAULT_DESTINATION);
        grid[y][x] = Tile::Start;
        let (y, x) = tile_coord(maze, maze.graph().source());
        grid[y][x] = Tile::Goal;
    }
    grid
}

/// Render the maze as text, one line per tile row.
pub fn render_maze(maze: &Maze, path: Option<&SolutionPath>, styled: bool) -> String {
    let grid = tiles(maze, path);
    let mut out = String::with_capacity(grid.len() * (grid.first().map_or(0, Vec::len) * 2 + 1));
    for row in &grid {
        for tile in row {
            out.push_str(&tile.render(styled));
        }
        out.push('\n');
    }
    out
}

/// Write the rendered maze to `out`.
pub fn print_maze<W: Write>(
    out: &mut W,
    maze: &Maze,
    path: Option<&SolutionPath>,
    styled: bool,
) -> std::io::Result<()> {
    queue!(out, style::Print(render_maze(maze, path, styled)))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;
    use crate::maze::Graph;

    fn corridor() -> Maze {
        let mut graph = Graph::new(1, 2);
        graph.add_vertex(0);
        graph.add_vertex(1);
        graph.add_edge(0, 1).unwrap();
        Maze::from_graph(1, 2, graph)
    }

    #[test]
    fn test_render_corridor() {
        let maze = corridor();
        assert_eq!(
            render_maze(&maze, None, false),
            "##########\n##S   G ##\n##########\n"
        );
        let path = maze.graph().run_bfs().unwrap();
        assert_eq!(
            render_maze(&maze, Some(&path), false),
            "##########\n##S ..G ##\n##########\n"
        );
    }

    #[test]
    fn test_tiles_shape() {
        let maze = generate_maze(4, 6, Some(9)).unwrap();
        let grid = tiles(&maze, None);
        assert_eq!(grid.len(), 9);
        assert!(grid.iter().all(|row| row.len() == 13));
        // Outer border is closed
        assert!(grid[0].iter().all(|&t| t == Tile::Wall));
        assert!(grid[8].iter().all(|&t| t == Tile::Wall));
        assert!(grid.iter().all(|row| row[0] == Tile::Wall && row[12] == Tile::Wall));
        // A spanning tree opens exactly cells - 1 wall slots
        let open_slots = grid
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &t)| (y, x, t)))
            .filter(|&(y, x, t)| (y + x) % 2 == 1 && t == Tile::Open)
            .count();
        assert_eq!(open_slots, 23);
    }

    #[test]
    fn test_route_is_continuous() {
        let maze = generate_maze(5, 5, Some(12)).unwrap();
        let path = maze.graph().run_dfs().unwrap();
        let grid = tiles(&maze, Some(&path));
        let marked = grid
            .iter()
            .flatten()
            .filter(|&&t| matches!(t, Tile::Route | Tile::Start | Tile::Goal))
            .count();
        // Every cell and every passage between consecutive cells
        assert_eq!(marked, path.len() * 2 - 1);
    }

    #[test]
    fn test_styled_output_has_same_line_count() {
        let maze = generate_maze(3, 3, Some(1)).unwrap();
        let plain = render_maze(&maze, None, false);
        let styled = render_maze(&maze, None, true);
        assert_eq!(plain.lines().count(), 7);
        assert_eq!(styled.lines().count(), 7);
    }
}
