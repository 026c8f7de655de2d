use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::game::GameStatus;
use crate::{CELL_W, Game, PLAY_H, PLAY_W};

pub(super) fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let mut grid = vec![vec![' '; PLAY_W]; PLAY_H];

    // Border: ceiling, sides, heavy floor.
    grid[0][0] = '┌';
    grid[0][PLAY_W - 1] = '┐';
    for x in 1..PLAY_W - 1 {
        grid[0][x] = '─';
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = '│';
        grid[y][PLAY_W - 1] = '│';
    }
    grid[PLAY_H - 1][0] = '└';
    grid[PLAY_H - 1][PLAY_W - 1] = '┘';
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = '═';
    }

    // Plot one cell in the inner area as a two-character block.
    let plot_block = |grid: &mut [Vec<char>], bx: usize, by: usize, left: char, right: char| {
        let gx = 1 + bx * CELL_W;
        let gy = 1 + by;
        if gy < PLAY_H && gx + 1 < PLAY_W {
            grid[gy][gx] = left;
            grid[gy][gx + 1] = right;
        }
    };

    if let Some(food) = game.food {
        plot_block(&mut grid, food.x as usize, food.y as usize, '●', ' ');
    }

    for seg in game.snake.segments().skip(1) {
        plot_block(&mut grid, seg.x as usize, seg.y as usize, '▓', '▓');
    }
    let head = game.snake.head();
    plot_block(&mut grid, head.x as usize, head.y as usize, '█', '█');

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);

    match game.status {
        GameStatus::Idle => draw_overlay(frame, play_rect, "SERPENT\nspace to start"),
        GameStatus::Paused => draw_overlay(frame, play_rect, "PAUSED\nspace to resume"),
        GameStatus::GameOver if game.won => {
            draw_overlay(frame, play_rect, "YOU WIN\nr to play again")
        }
        GameStatus::GameOver => draw_overlay(frame, play_rect, "GAME OVER\nr to retry"),
        GameStatus::Playing => {}
    }
}

fn draw_overlay(frame: &mut Frame, play_rect: Rect, text: &str) {
    let overlay_w = (PLAY_W as u16).saturating_sub(4).max(8).min(24);
    let overlay_h = 4u16;
    let popup = Rect {
        x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
        y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
        width: overlay_w,
        height: overlay_h,
    };
    let overlay = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(overlay, popup);
}
