pub mod board;
pub mod rng;
pub mod snake;
pub mod state;

pub use board::{BoardConfig, BoardFullError, Coord};
pub use rng::GameRng;
pub use snake::{Direction, Snake};
pub use state::{Game, GameMode, GameStatus};
