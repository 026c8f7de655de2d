use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use crate::SPAWN_ATTEMPTS;
use crate::game::GameRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Grid geometry only; the board owns no game state.
#[derive(Clone, Copy, Debug)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl BoardConfig {
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn center(&self) -> Coord {
        Coord::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Maps an out-of-bounds coordinate to the opposite edge. Identity for
    /// coordinates already in bounds.
    pub fn wrap(&self, coord: Coord) -> Coord {
        Coord {
            x: wrap_axis(coord.x, self.width as i32),
            y: wrap_axis(coord.y, self.height as i32),
        }
    }
}

fn wrap_axis(value: i32, extent: i32) -> i32 {
    let rem = value % extent;
    if rem < 0 { rem + extent } else { rem }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardFullError;

impl fmt::Display for BoardFullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no empty cell left on the board")
    }
}

impl Error for BoardFullError {}

/// Picks a uniformly random unoccupied cell. Random sampling is tried first;
/// once the board is crowded enough for that to miss, a linear scan over all
/// cells guarantees termination.
pub fn random_empty_cell(
    config: &BoardConfig,
    occupied: &HashSet<Coord>,
    rng: &mut GameRng,
) -> Result<Coord, BoardFullError> {
    if occupied.len() >= config.cell_count() {
        return Err(BoardFullError);
    }

    for _ in 0..SPAWN_ATTEMPTS {
        let cell = Coord::new(
            rng.gen_range(0..config.width) as i32,
            rng.gen_range(0..config.height) as i32,
        );
        if !occupied.contains(&cell) {
            return Ok(cell);
        }
    }

    let free: Vec<Coord> = (0..config.height)
        .flat_map(|y| (0..config.width).map(move |x| Coord::new(x as i32, y as i32)))
        .filter(|cell| !occupied.contains(cell))
        .collect();
    match free.len() {
        0 => Err(BoardFullError),
        n => Ok(free[rng.gen_range(0..n)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BoardConfig {
        BoardConfig::new(8, 6)
    }

    #[test]
    fn test_in_bounds_edges() {
        let config = config();
        assert!(config.in_bounds(Coord::new(0, 0)));
        assert!(config.in_bounds(Coord::new(7, 5)));
        assert!(!config.in_bounds(Coord::new(8, 0)));
        assert!(!config.in_bounds(Coord::new(0, 6)));
        assert!(!config.in_bounds(Coord::new(-1, 0)));
        assert!(!config.in_bounds(Coord::new(0, -1)));
    }

    #[test]
    fn test_wrap_is_identity_in_bounds() {
        let config = config();
        for y in 0..6 {
            for x in 0..8 {
                let coord = Coord::new(x, y);
                assert_eq!(config.wrap(coord), coord);
            }
        }
    }

    #[test]
    fn test_wrap_maps_to_opposite_edge() {
        let config = config();
        assert_eq!(config.wrap(Coord::new(-1, 2)), Coord::new(7, 2));
        assert_eq!(config.wrap(Coord::new(8, 2)), Coord::new(0, 2));
        assert_eq!(config.wrap(Coord::new(3, -1)), Coord::new(3, 5));
        assert_eq!(config.wrap(Coord::new(3, 6)), Coord::new(3, 0));
    }

    #[test]
    fn test_random_empty_cell_avoids_occupied() {
        let config = config();
        let mut rng = GameRng::new(7);
        let occupied: HashSet<Coord> =
            (0..6).map(|y| Coord::new(0, y)).collect();
        for _ in 0..200 {
            let cell = random_empty_cell(&config, &occupied, &mut rng).unwrap();
            assert!(config.in_bounds(cell));
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn test_random_empty_cell_finds_last_free_cell() {
        // One free cell left: the sampling phase will almost surely miss it,
        // so this exercises the scan fallback.
        let config = BoardConfig::new(4, 4);
        let mut rng = GameRng::new(7);
        let occupied: HashSet<Coord> = (0..4)
            .flat_map(|y| (0..4).map(move |x| Coord::new(x, y)))
            .filter(|c| *c != Coord::new(2, 3))
            .collect();
        let cell = random_empty_cell(&config, &occupied, &mut rng).unwrap();
        assert_eq!(cell, Coord::new(2, 3));
    }

    #[test]
    fn test_random_empty_cell_full_board() {
        let config = BoardConfig::new(2, 2);
        let mut rng = GameRng::new(7);
        let occupied: HashSet<Coord> = (0..2)
            .flat_map(|y| (0..2).map(move |x| Coord::new(x, y)))
            .collect();
        assert_eq!(
            random_empty_cell(&config, &occupied, &mut rng),
            Err(BoardFullError)
        );
    }
}
