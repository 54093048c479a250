//! Grid module - the map as an explicitly owned value.
//!
//! The grid is parsed once from a rectangular character map and never
//! resized. Walls are fixed after load; the only per-frame mutation is the
//! single `Occupant` marker tracking the player's cell.
//! Uses a flat row-major array for cache locality.
//! Coordinates: `(x, y)` with x running left to right along a map row and
//! y running top to bottom across rows.

use std::fmt;

use tui_fps_types::Tile;

/// Map loading failure. Fatal at load time, before any frame is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The map text contained no cells.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Empty => write!(f, "map is empty"),
            MapError::RaggedRow { row, len, expected } => write!(
                f,
                "map row {} has {} cells, expected {} (rows must be equal length)",
                row, len, expected
            ),
        }
    }
}

impl std::error::Error for MapError {}

/// The map grid - width x height tiles in a flat row-major array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Parse a rectangular character map.
    ///
    /// [`tui_fps_types::WALL_CHAR`] marks a wall, every other character is
    /// empty. Trailing newlines are ignored; rows must be equal length.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut width = 0;
        let mut height = 0;
        let mut tiles = Vec::new();

        for (row, line) in text.lines().enumerate() {
            let len = line.chars().count();
            if row == 0 {
                width = len;
            } else if len != width {
                return Err(MapError::RaggedRow {
                    row,
                    len,
                    expected: width,
                });
            }
            tiles.extend(line.chars().map(Tile::from_map_char));
            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Tile at (x, y), or `None` out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Set the tile at (x, y). Returns false out of bounds.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is in bounds and a wall.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Tile::Wall))
    }

    /// Move the occupant marker between cells.
    ///
    /// Clears `from` (only if it actually held the marker) and marks `to`.
    /// Callers must have validated `to` against walls already.
    pub fn move_occupant(&mut self, from: (usize, usize), to: (usize, usize)) {
        if self.get(from.0 as i32, from.1 as i32) == Some(Tile::Occupant) {
            self.set(from.0 as i32, from.1 as i32, Tile::Empty);
        }
        self.set(to.0 as i32, to.1 as i32, Tile::Occupant);
    }

    /// Count of cells currently holding the occupant marker.
    ///
    /// The play invariant keeps this at exactly one; exposed for tests and
    /// debug assertions.
    pub fn occupant_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| matches!(t, Tile::Occupant))
            .count()
    }

    /// True iff at least one interior cell (border ring excluded) is open.
    pub fn has_open_interior(&self) -> bool {
        if self.width < 3 || self.height < 3 {
            return false;
        }
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                if !self.is_wall(x as i32, y as i32) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_calculation() {
        let grid = Grid::parse("###\n#.#\n###").unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(2, 0), Some(2));
        assert_eq!(grid.index(0, 1), Some(3));
        assert_eq!(grid.index(2, 2), Some(8));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(3, 0), None);
        assert_eq!(grid.index(0, 3), None);
    }

    #[test]
    fn test_parse_marks_walls() {
        let grid = Grid::parse("###\n#.#\n###").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_wall(0, 0));
        assert!(!grid.is_wall(1, 1));
        assert_eq!(grid.get(1, 1), Some(Tile::Empty));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert_eq!(
            Grid::parse("###\n##\n###"),
            Err(MapError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Grid::parse(""), Err(MapError::Empty));
    }

    #[test]
    fn test_move_occupant_keeps_single_marker() {
        let mut grid = Grid::parse("####\n#..#\n####").unwrap();
        grid.set(1, 1, Tile::Occupant);
        assert_eq!(grid.occupant_count(), 1);

        grid.move_occupant((1, 1), (2, 1));
        assert_eq!(grid.occupant_count(), 1);
        assert_eq!(grid.get(1, 1), Some(Tile::Empty));
        assert_eq!(grid.get(2, 1), Some(Tile::Occupant));
    }

    #[test]
    fn test_open_interior_detection() {
        assert!(Grid::parse("###\n#.#\n###").unwrap().has_open_interior());
        assert!(!Grid::parse("###\n###\n###").unwrap().has_open_interior());
        // Too small to have an interior at all.
        assert!(!Grid::parse("##\n##").unwrap().has_open_interior());
    }
}
