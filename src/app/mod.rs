use std::error::Error;
use std::fs::{self, File};
use std::io::{Stdout, stdout};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use crate::game::{BoardConfig, Direction, GameMode, GameRng, GameStatus};
use crate::io::{Profile, ProfileStore, data_dir, default_profile_path};
use crate::ui::draw_game;
use crate::{Args, BOARD_H, BOARD_W, Game};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
    init_logging();
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), &args)
}

// The terminal belongs to the TUI, so log output goes to a file. Logging is
// optional: if the file cannot be opened the game runs silently.
fn init_logging() {
    let dir = data_dir();
    let _ = fs::create_dir_all(&dir);
    let Ok(file) = File::options()
        .create(true)
        .append(true)
        .open(dir.join("serpent.log"))
    else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run_loop(terminal: &mut Term, args: &Args) -> Result<(), Box<dyn Error>> {
    let store = ProfileStore::new(args.profile.clone().unwrap_or_else(default_profile_path));
    let profile = store.load();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let mut game = Game::new(BoardConfig::new(BOARD_W, BOARD_H), args.mode.into(), rng);
    game.high_score = profile.high_score;
    game.sound = profile.sound;

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, &game))?;

        if event::poll(Duration::from_millis(25))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
                if handle_input(key.code, &mut game, &store) {
                    // (Re)entered play: arm the tick timer from scratch so a
                    // run never inherits cadence from before the command.
                    last_tick = Instant::now();
                }
            }
        }

        if game.status == GameStatus::Playing
            && last_tick.elapsed() >= Duration::from_millis(game.tick_ms)
        {
            game.tick();
            last_tick = Instant::now();
            if game.status == GameStatus::GameOver {
                store.save(&Profile {
                    high_score: game.high_score,
                    sound: game.sound,
                });
            }
        }
    }

    store.save(&Profile {
        high_score: game.high_score,
        sound: game.sound,
    });
    Ok(())
}

/// Returns true when the command started, resumed, or restarted play, so the
/// caller re-arms the tick timer.
fn handle_input(code: KeyCode, game: &mut Game, store: &ProfileStore) -> bool {
    match code {
        KeyCode::Up | KeyCode::Char('w') => game.request_direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => game.request_direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => game.request_direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => game.request_direction(Direction::Right),
        KeyCode::Char(' ') => {
            match game.status {
                GameStatus::Idle => game.start(),
                GameStatus::Playing => game.pause(),
                GameStatus::Paused => game.resume(),
                GameStatus::GameOver => game.restart(),
            }
            return game.status == GameStatus::Playing;
        }
        KeyCode::Char('p') => {
            match game.status {
                GameStatus::Playing => game.pause(),
                GameStatus::Paused => game.resume(),
                _ => {}
            }
            return game.status == GameStatus::Playing;
        }
        KeyCode::Char('r') => {
            game.restart();
            return game.status == GameStatus::Playing;
        }
        KeyCode::Char('b') => {
            let next = match game.mode {
                GameMode::Walls => GameMode::PassThrough,
                GameMode::PassThrough => GameMode::Walls,
            };
            game.change_mode(next);
        }
        KeyCode::Char('m') => {
            game.toggle_sound();
            store.save(&Profile {
                high_score: game.high_score,
                sound: game.sound,
            });
        }
        _ => {}
    }
    false
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
