//! Static obstacle grid
//!
//! Built once at level construction and never mutated. Cell coverage for a
//! query rectangle is over-approximated: the low edge floors and the high
//! edge ceils, so a partially covered cell counts as fully covered. That is
//! the conservative choice for collision safety.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Per-cell terrain classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Wall,
    Lava,
}

/// Fixed-size 2D array of optional terrain tags.
///
/// Rows may be ragged; `width` is the longest row and cells past a short
/// row's end read as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Option<Terrain>>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<Terrain>>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        Self {
            rows,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Terrain covered by the rectangle at `pos` with extent `size`.
    ///
    /// Out of bounds left, right, or above is always a wall; past the last
    /// row is lava (falling off the bottom is lethal, not blocking). Inside
    /// the grid, covered cells are scanned in row-major order and the first
    /// non-empty tag wins; `None` means clear ground.
    pub fn terrain_at(&self, pos: Vec2, size: Vec2) -> Option<Terrain> {
        let left = pos.x.floor() as i64;
        let right = (pos.x + size.x).ceil() as i64;
        let top = pos.y.floor() as i64;
        let bottom = (pos.y + size.y).ceil() as i64;

        if left < 0 || right > self.width as i64 || top < 0 {
            return Some(Terrain::Wall);
        }
        if bottom > self.height as i64 {
            return Some(Terrain::Lava);
        }
        for y in top..bottom {
            for x in left..right {
                let cell = self.rows[y as usize].get(x as usize).copied().flatten();
                if cell.is_some() {
                    return cell;
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 'x' wall, '!' lava, anything else empty
    fn grid_from(rows: &[&str]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|row| {
                    row.chars()
                        .map(|c| match c {
                            'x' => Some(Terrain::Wall),
                            '!' => Some(Terrain::Lava),
                            _ => None,
                        })
                        .collect()
                })
                .collect(),
        )
    }

    #[test]
    fn test_dimensions() {
        let grid = grid_from(&["   ", "x", "  x  "]);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn test_out_of_bounds_left_is_wall() {
        let grid = grid_from(&["   ", "   "]);
        let hit = grid.terrain_at(Vec2::new(-2.0, 0.5), Vec2::ONE);
        assert_eq!(hit, Some(Terrain::Wall));
    }

    #[test]
    fn test_out_of_bounds_right_is_wall() {
        let grid = grid_from(&["   ", "   "]);
        let hit = grid.terrain_at(Vec2::new(2.5, 0.0), Vec2::ONE);
        assert_eq!(hit, Some(Terrain::Wall));
    }

    #[test]
    fn test_out_of_bounds_above_is_wall() {
        let grid = grid_from(&["   ", "   "]);
        let hit = grid.terrain_at(Vec2::new(1.0, -0.5), Vec2::ONE);
        assert_eq!(hit, Some(Terrain::Wall));
    }

    #[test]
    fn test_below_last_row_is_lava() {
        let grid = grid_from(&["   ", "   "]);
        let hit = grid.terrain_at(Vec2::new(1.0, 1.5), Vec2::ONE);
        assert_eq!(hit, Some(Terrain::Lava));
    }

    #[test]
    fn test_wall_cell_wins_over_empty_neighbors() {
        let grid = grid_from(&["   ", " x ", "   "]);
        // Covers all nine cells; only the center is a wall
        let hit = grid.terrain_at(Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0));
        assert_eq!(hit, Some(Terrain::Wall));
    }

    #[test]
    fn test_fractional_rect_covers_partial_cells() {
        let grid = grid_from(&["   ", "  x", "   "]);
        // Rect spans cells (1..3, 0..2) after floor/ceil, touching the wall
        let hit = grid.terrain_at(Vec2::new(1.5, 0.5), Vec2::ONE);
        assert_eq!(hit, Some(Terrain::Wall));
    }

    #[test]
    fn test_empty_interior_is_clear() {
        let grid = grid_from(&["   ", "   ", "xxx"]);
        let hit = grid.terrain_at(Vec2::new(1.0, 0.5), Vec2::new(0.8, 1.5));
        assert_eq!(hit, None);
    }

    #[test]
    fn test_lava_cell() {
        let grid = grid_from(&["   ", "!  "]);
        let hit = grid.terrain_at(Vec2::new(0.0, 1.0), Vec2::ONE);
        assert_eq!(hit, Some(Terrain::Lava));
    }

    #[test]
    fn test_ragged_short_row_reads_empty() {
        let grid = grid_from(&["x", "xxx"]);
        // Cell (2, 0) is past the first row's end
        let hit = grid.terrain_at(Vec2::new(2.0, 0.0), Vec2::ONE);
        assert_eq!(hit, None);
    }

    #[test]
    fn test_zero_area_grid_bounds_policy() {
        let grid = grid_from(&[]);
        // Literal bounds checks: left/above is wall even with no rows,
        // anything else overruns width 0 and is a wall too
        assert_eq!(
            grid.terrain_at(Vec2::new(-1.0, 0.0), Vec2::ONE),
            Some(Terrain::Wall)
        );
        assert_eq!(
            grid.terrain_at(Vec2::new(0.0, 0.0), Vec2::ONE),
            Some(Terrain::Wall)
        );
    }
}
