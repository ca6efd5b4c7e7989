//! Food placement

use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::Grid;
use super::snake::Snake;
use crate::core::types::GridPos;

/// Cells not covered by the snake, enumerated fresh on every call
pub fn free_cells(grid: &Grid, snake: &Snake) -> Vec<GridPos> {
    grid.cells().filter(|cell| !snake.contains(*cell)).collect()
}

/// Pick a food cell uniformly among the free cells.
///
/// Returns `None` when the snake covers the whole board.
pub fn place_food<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<GridPos> {
    free_cells(grid, snake).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_food_never_on_snake() {
        let grid = Grid::new(6, 6);
        let snake = Snake::horizontal(GridPos::new(3, 3), 3);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..200 {
            let food = place_food(&grid, &snake, &mut rng).unwrap();
            assert!(grid.in_bounds(food));
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn test_single_free_cell_is_chosen() {
        let grid = Grid::new(2, 2);
        let snake = Snake::from_cells([
            GridPos::new(0, 0),
            GridPos::new(1, 0),
            GridPos::new(1, 1),
        ])
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(place_food(&grid, &snake, &mut rng), Some(GridPos::new(0, 1)));
    }

    #[test]
    fn test_full_board_has_no_food() {
        let grid = Grid::new(2, 1);
        let snake = Snake::from_cells([GridPos::new(0, 0), GridPos::new(1, 0)]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(place_food(&grid, &snake, &mut rng), None);
    }

    #[test]
    fn test_every_free_cell_reachable() {
        let grid = Grid::new(3, 3);
        let snake = Snake::horizontal(GridPos::new(2, 1), 3);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(place_food(&grid, &snake, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), free_cells(&grid, &snake).len());
    }
}
