// Shared game UI/constants.
pub const BOARD_W: usize = 24;
pub const BOARD_H: usize = 16;
pub const CELL_W: usize = 2; // render each cell as two characters wide
pub const PLAY_W: usize = BOARD_W * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_H + 2; // inner height plus ceiling/floor
// Minimal pane width to fit the playfield + cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;

pub const INITIAL_SNAKE_LEN: usize = 3;
pub const INITIAL_TICK_MS: u64 = 180;
pub const TICK_STEP_MS: u64 = 8; // interval shrink per food eaten
pub const MIN_TICK_MS: u64 = 60;
pub const FOOD_POINTS: u32 = 1;
// Random placement attempts before food spawning falls back to a full scan.
pub const SPAWN_ATTEMPTS: usize = 50;
