//! Grid world: positions, actions and the transition model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Expansion order
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    /// Entering an open tile costs `cost` (at least 1)
    Open { cost: u32 },
}

impl Tile {
    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Validated maze; only built through [`Grid::new`] or [`Grid::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Vec<Tile>>,
    start: Position,
    end: Position,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid; ragged rows are padded with walls up to the widest row.
    ///
    /// # Errors
    ///
    /// Fails when the grid is empty, a tile has zero cost, or start/end are
    /// off the grid or on a wall.
    pub fn new(mut tiles: Vec<Vec<Tile>>, start: Position, end: Position) -> Result<Self> {
        let height = tiles.len();
        let width = tiles.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(Error::InvalidGrid {
                message: "grid has no cells".to_string(),
            });
        }
        if tiles
            .iter()
            .flatten()
            .any(|tile| matches!(tile, Tile::Open { cost: 0 }))
        {
            return Err(Error::InvalidGrid {
                message: "open tiles must cost at least 1".to_string(),
            });
        }
        for row in &mut tiles {
            row.resize(width, Tile::Wall);
        }

        let grid = Grid {
            tiles,
            start,
            end,
            width,
            height,
        };
        for (name, pos) in [("start", start), ("end", end)] {
            match grid.tile(pos) {
                None => {
                    return Err(Error::InvalidGrid {
                        message: format!("{name} {pos} is outside the grid"),
                    });
                }
                Some(Tile::Wall) => {
                    return Err(Error::InvalidGrid {
                        message: format!("{name} {pos} is a wall"),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(grid)
    }

    /// Parse the text maze format.
    ///
    /// `#` is a wall, `.` or space an open tile of cost 1, `1`-`9` an open tile
    /// of that cost, `A` the start and `B` the end.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tiles = Vec::new();
        let mut start = None;
        let mut end = None;

        for (row, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut tile_row = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                let tile = match c {
                    '#' => Tile::Wall,
                    '.' | ' ' => Tile::Open { cost: 1 },
                    'A' | 'B' => {
                        let slot = if c == 'A' { &mut start } else { &mut end };
                        if slot.replace(Position::new(row, col)).is_some() {
                            return Err(Error::InvalidGrid {
                                message: format!("more than one '{c}' marker"),
                            });
                        }
                        Tile::Open { cost: 1 }
                    }
                    '1'..='9' => Tile::Open {
                        cost: c.to_digit(10).unwrap_or(1),
                    },
                    other => {
                        return Err(Error::InvalidGrid {
                            message: format!("unexpected character '{other}' at ({row}, {col})"),
                        });
                    }
                };
                tile_row.push(tile);
            }
            tiles.push(tile_row);
        }

        // trailing blank lines are not part of the maze
        while tiles.last().is_some_and(Vec::is_empty) {
            tiles.pop();
        }

        let missing = |marker: char| Error::InvalidGrid {
            message: format!("missing '{marker}' marker"),
        };
        let start = start.ok_or_else(|| missing('A'))?;
        let end = end.ok_or_else(|| missing('B'))?;
        Self::new(tiles, start, end)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at a position, `None` when off the grid
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.tiles.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    fn step(&self, pos: Position, action: Action) -> Result<Position> {
        let (dr, dc) = action.delta();
        let row = pos.row as isize + dr;
        let col = pos.col as isize + dc;
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return Err(Error::OutOfGrid {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(Position::new(row as usize, col as usize))
    }

    /// Actions leading to an in-bounds, non-wall tile, in [`Action::ALL`] order
    pub fn actions(&self, pos: Position) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&action| {
                self.step(pos, action)
                    .ok()
                    .and_then(|next| self.tile(next))
                    .is_some_and(|tile| !tile.is_wall())
            })
            .collect()
    }

    /// Position reached by applying `action` at `pos`
    pub fn result(&self, pos: Position, action: Action) -> Result<Position> {
        self.step(pos, action)
    }

    pub fn objective_test(&self, pos: Position) -> bool {
        pos == self.end
    }

    /// Cost of moving into the destination tile
    pub fn individual_cost(&self, pos: Position, action: Action) -> Result<u64> {
        let next = self.result(pos, action)?;
        match self.tile(next) {
            Some(Tile::Open { cost }) => Ok(u64::from(cost)),
            _ => Err(Error::InvalidGrid {
                message: format!("cannot move {action} from {pos} into a wall"),
            }),
        }
    }

    /// Draw the grid, marking the path with `*` and other reached cells with `o`
    pub fn render(&self, solution: Option<&super::Solution>) -> String {
        let path: std::collections::HashSet<Position> = solution
            .and_then(|s| s.path.as_ref())
            .map(|p| p.states.iter().copied().collect())
            .unwrap_or_default();
        let reached = solution.map(|s| &s.reached);

        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (r, row) in self.tiles.iter().enumerate() {
            for (c, tile) in row.iter().enumerate() {
                let pos = Position::new(r, c);
                let symbol = if pos == self.start {
                    'A'
                } else if pos == self.end {
                    'B'
                } else if path.contains(&pos) {
                    '*'
                } else if reached.is_some_and(|set| set.contains(&pos)) {
                    'o'
                } else {
                    match tile {
                        Tile::Wall => '#',
                        Tile::Open { cost: 1 } => '.',
                        Tile::Open { cost } => char::from_digit(*cost % 10, 10).unwrap_or('?'),
                    }
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
A.#
.3#
..B";

    #[test]
    fn test_parse_markers_and_costs() {
        let grid = Grid::parse(MAZE).unwrap();
        assert_eq!(grid.start, Position::new(0, 0));
        assert_eq!(grid.end, Position::new(2, 2));
        assert_eq!((grid.height, grid.width), (3, 3));
        assert_eq!(grid.tile(Position::new(1, 1)), Some(Tile::Open { cost: 3 }));
        assert_eq!(grid.tile(Position::new(0, 2)), Some(Tile::Wall));
    }

    #[test]
    fn test_actions_skip_walls_and_edges() {
        let grid = Grid::parse(MAZE).unwrap();
        assert_eq!(grid.actions(Position::new(0, 0)), vec![Action::Down, Action::Right]);
        assert_eq!(
            grid.actions(Position::new(1, 1)),
            vec![Action::Up, Action::Down, Action::Left]
        );
    }

    #[test]
    fn test_result_and_cost() {
        let grid = Grid::parse(MAZE).unwrap();
        let pos = grid.result(Position::new(0, 1), Action::Down).unwrap();
        assert_eq!(pos, Position::new(1, 1));
        assert_eq!(grid.individual_cost(Position::new(0, 1), Action::Down).unwrap(), 3);
        assert!(grid.result(Position::new(0, 0), Action::Up).is_err());
    }

    #[test]
    fn test_ragged_rows_are_padded_with_walls() {
        let grid = Grid::parse("A...\n.\n..B").unwrap();
        assert_eq!(grid.width, 4);
        assert_eq!(grid.tile(Position::new(1, 3)), Some(Tile::Wall));
        assert_eq!(grid.actions(Position::new(1, 0)), vec![Action::Up, Action::Down]);
    }

    #[test]
    fn test_parse_rejects_bad_mazes() {
        assert!(Grid::parse("A..\n...").is_err());
        assert!(Grid::parse("AB\nA.").is_err());
        assert!(Grid::parse("A?B").is_err());
        assert!(Grid::parse("").is_err());
    }

    #[test]
    fn test_new_rejects_start_on_wall() {
        let tiles = vec![vec![Tile::Wall, Tile::Open { cost: 1 }]];
        let err = Grid::new(tiles, Position::new(0, 0), Position::new(0, 1)).unwrap_err();
        assert!(err.to_string().contains("start"));
    }
}
