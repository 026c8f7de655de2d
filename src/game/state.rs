use crate::game::{self, BoardConfig, Coord, Direction, GameRng, Snake};
use crate::{FOOD_POINTS, INITIAL_SNAKE_LEN, INITIAL_TICK_MS, MIN_TICK_MS, TICK_STEP_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Walls,
    PassThrough,
}

/// Owns all session state. Commands that are illegal in the current status
/// are silently absorbed; wall and self collisions are ordinary transitions
/// to `GameOver`, not errors.
pub struct Game {
    pub board: BoardConfig,
    pub snake: Snake,
    pub direction: Direction,
    pending: Option<Direction>,
    pub food: Option<Coord>,
    pub status: GameStatus,
    pub mode: GameMode,
    pub score: u32,
    pub high_score: u32,
    pub tick_ms: u64,
    pub won: bool,
    pub sound: bool,
    rng: GameRng,
}

impl Game {
    pub fn new(board: BoardConfig, mode: GameMode, rng: GameRng) -> Self {
        Self {
            snake: initial_snake(&board),
            board,
            direction: Direction::Right,
            pending: None,
            food: None,
            status: GameStatus::Idle,
            mode,
            score: 0,
            high_score: 0,
            tick_ms: INITIAL_TICK_MS,
            won: false,
            sound: true,
            rng,
        }
    }

    pub fn start(&mut self) {
        if self.status != GameStatus::Idle {
            return;
        }
        self.begin_run();
    }

    /// Same reset as `start`, legal from any status except `Idle`.
    pub fn restart(&mut self) {
        if self.status == GameStatus::Idle {
            return;
        }
        self.begin_run();
    }

    pub fn pause(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.status = GameStatus::Paused;
    }

    pub fn resume(&mut self) {
        if self.status != GameStatus::Paused {
            return;
        }
        self.status = GameStatus::Playing;
    }

    /// Buffers `dir` for the next tick. Reversals are dropped here, at
    /// request time, so a rapid burst of keys leaves the last legal request
    /// in the buffer. A one-segment snake has no body to walk into and may
    /// reverse freely.
    pub fn request_direction(&mut self, dir: Direction) {
        if self.status != GameStatus::Playing {
            return;
        }
        if self.snake.len() > 1 && dir.is_opposite(self.direction) {
            return;
        }
        self.pending = Some(dir);
    }

    /// Boundary policy is selectable only outside of play; switching resets
    /// the session to a fresh `Idle` state without auto-starting.
    pub fn change_mode(&mut self, mode: GameMode) {
        if self.status == GameStatus::Playing {
            return;
        }
        self.mode = mode;
        self.snake = initial_snake(&self.board);
        self.direction = Direction::Right;
        self.pending = None;
        self.food = None;
        self.score = 0;
        self.tick_ms = INITIAL_TICK_MS;
        self.won = false;
        self.status = GameStatus::Idle;
        tracing::info!(mode = ?self.mode, "mode changed");
    }

    pub fn toggle_sound(&mut self) {
        self.sound = !self.sound;
    }

    /// One simulation step. No-op unless `Playing`. On a fatal collision the
    /// snake is left exactly as it was; only the status changes.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }

        let (dx, dy) = self.direction.vector();
        let head = self.snake.head();
        let mut new_head = Coord::new(head.x + dx, head.y + dy);

        if !self.board.in_bounds(new_head) {
            match self.mode {
                GameMode::Walls => {
                    self.end_run(false);
                    return;
                }
                GameMode::PassThrough => new_head = self.board.wrap(new_head),
            }
        }

        // Checked against every current segment, tail included.
        if self.snake.occupies(new_head) {
            self.end_run(false);
            return;
        }

        let ate = self.food == Some(new_head);
        self.snake.advance(new_head, ate);

        if ate {
            self.score += FOOD_POINTS;
            self.high_score = self.high_score.max(self.score);
            self.tick_ms = self.tick_ms.saturating_sub(TICK_STEP_MS).max(MIN_TICK_MS);
            tracing::debug!(score = self.score, len = self.snake.len(), "food eaten");
            self.spawn_food();
        }
    }

    fn begin_run(&mut self) {
        self.snake = initial_snake(&self.board);
        self.direction = Direction::Right;
        self.pending = None;
        self.score = 0;
        self.tick_ms = INITIAL_TICK_MS;
        self.won = false;
        self.status = GameStatus::Playing;
        self.spawn_food();
        tracing::info!(mode = ?self.mode, seed = self.rng.seed(), "run started");
    }

    fn spawn_food(&mut self) {
        match game::board::random_empty_cell(&self.board, self.snake.occupied(), &mut self.rng) {
            Ok(cell) => self.food = Some(cell),
            Err(_) => {
                // The snake fills the board: nothing left to eat.
                self.food = None;
                self.end_run(true);
            }
        }
    }

    fn end_run(&mut self, won: bool) {
        self.won = won;
        self.status = GameStatus::GameOver;
        tracing::info!(score = self.score, high_score = self.high_score, won, "run ended");
    }

    #[cfg(test)]
    fn set_snake(&mut self, segments: Vec<Coord>, direction: Direction) {
        self.snake = Snake::new(segments);
        self.direction = direction;
        self.pending = None;
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Option<Coord>) {
        self.food = food;
    }
}

/// Three segments centered on the board, heading right, body trailing left.
fn initial_snake(board: &BoardConfig) -> Snake {
    let center = board.center();
    Snake::new((0..INITIAL_SNAKE_LEN as i32).map(|i| Coord::new(center.x - i, center.y)))
}
